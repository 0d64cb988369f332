//! # Bench Matrix Library / Bench Matrix 库
//!
//! This library provides the core functionality for the `bench-matrix` tool,
//! a driver that benchmarks a reference and a candidate ray-tracing renderer
//! across a matrix of scenes, execution variants and ray distributions.
//!
//! 此库为 `bench-matrix` 工具提供核心功能，
//! 这是一个在场景、执行变体和光线分布构成的矩阵上对参考渲染器和候选渲染器进行基准测试的驱动程序。
//!
//! ## Modules / 模块
//!
//! - `core` - Data models, matrix configuration, planning and run execution
//! - `infra` - Infrastructure services like process spawning
//! - `reporting` - Report lines and summaries
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 数据模型、矩阵配置、计划和运行执行
//! - `infra` - 基础设施服务，如进程派生
//! - `reporting` - 报告行和摘要
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::config;
pub use crate::core::execution;
pub use crate::core::models;
pub use crate::core::planner;

/// Initializes the application's internationalization (i18n) based on the system locale.
///
/// It attempts to match the full locale (e.g., "zh-CN"), then just the language
/// code (e.g., "en"), and finally falls back to the default language ("en").
pub fn init() {
    let locale = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    set_language(&locale);
}

/// Sets the console language, falling back to the language code and then to "en".
/// 设置控制台语言，依次回退到语言代码和 "en"。
pub fn set_language(locale: &str) {
    let available_locales = rust_i18n::available_locales!();

    let lang = if available_locales.contains(&locale) {
        locale
    } else {
        locale
            .split('-')
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .unwrap_or("en")
    };

    rust_i18n::set_locale(lang);
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
