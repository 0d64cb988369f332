//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for the benchmark driver:
//! process spawning and i18n support.
//!
//! 此模块为基准驱动程序提供基础设施服务：进程派生和国际化支持。

pub mod command;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
