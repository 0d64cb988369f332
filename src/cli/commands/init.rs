//! # Init Command Module / 初始化命令模块
//!
//! This module implements the `init` command, which writes the compiled-in
//! benchmark matrix to a TOML file as a starting point for customization.
//!
//! 此模块实现 `init` 命令，将内置的基准矩阵写入 TOML 文件，作为自定义的起点。

use anyhow::{Context, Result, bail};
use colored::*;
use std::{fs, path::Path};

use crate::{core::config::BenchMatrix, infra::t};

const HEADER: &str = "# Benchmark Matrix Configuration / 基准矩阵配置
# scenes x variants x distributions; each scene needs an entry under [offsets].
# 场景 x 变体 x 分布；每个场景都需要在 [offsets] 下有对应条目。

";

/// Renders the compiled-in matrix as TOML, with a short header.
/// 将内置矩阵渲染为带简短头部的 TOML。
pub fn render_default_config() -> Result<String> {
    let body = toml::to_string_pretty(&BenchMatrix::default())
        .context("Failed to serialize the default matrix")?;
    Ok(format!("{HEADER}{body}"))
}

/// Writes the default matrix to `output`. Refuses to overwrite an existing
/// file unless `force` is set.
pub fn execute(output: &Path, force: bool) -> Result<()> {
    if output.exists() && !force {
        bail!(t!("init.file_exists", path = output.display()).to_string());
    }

    let content = render_default_config()?;
    fs::write(output, content)
        .with_context(|| t!("init.write_failed", path = output.display()).to_string())?;

    println!(
        "{}",
        t!("init.created", path = output.display()).green().bold()
    );
    Ok(())
}
