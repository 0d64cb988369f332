//! # Run Command Module / 运行命令模块
//!
//! This module implements the `run` command: it resolves the benchmark matrix,
//! walks its cells in generation order and runs the renderers one at a time,
//! printing one report line per cell as soon as it is complete.
//!
//! 此模块实现 `run` 命令：解析基准矩阵，按生成顺序遍历其单元，
//! 逐个运行渲染器，并在每个单元完成后立即打印一行报告。

use anyhow::{Context, Result};
use colored::*;
use std::path::PathBuf;

use crate::{
    core::{
        config::{self, BenchMatrix, MatrixTables},
        execution::run_cell,
        planner,
    },
    infra::t,
    reporting::{
        MatrixSummary,
        console::{print_planned_cell, print_report_line, print_summary},
    },
};

/// Options of the `run` command.
/// `run` 命令的选项。
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Matrix file to load instead of the compiled-in matrix.
    /// 用于替代内置矩阵的矩阵文件。
    pub config: Option<PathBuf>,
    /// Overrides the `-bench` counter / 覆盖 `-bench` 计数
    pub iterations: Option<u32>,
    /// Overrides the `-warmup` counter / 覆盖 `-warmup` 计数
    pub warmup: Option<u32>,
    /// Print the derived command lines without launching anything.
    pub dry_run: bool,
    /// Whether `--lang` was given; otherwise the config file's language applies.
    pub explicit_language: bool,
}

/// Executes the run command with the provided options.
///
/// # Returns
/// An error only for matrix-definition problems; per-run failures are reported
/// as absent values and never abort the matrix.
pub async fn execute(options: RunOptions) -> Result<()> {
    let matrix = load_matrix(&options)?;
    let tables = matrix
        .resolve()
        .with_context(|| t!("config.invalid_matrix").to_string())?;

    eprintln!(
        "{}",
        t!(
            "run.matrix_loaded",
            scenes = tables.scenes.len(),
            variants = tables.variants.len(),
            distributions = tables.distributions.len(),
            cells = planner::cell_count(&tables)
        )
        .cyan()
    );
    eprintln!(
        "{}",
        t!("run.renderers", reference = matrix.reference.name, candidate = matrix.candidate.name)
            .cyan()
    );

    if options.dry_run {
        for plan in planner::plan_matrix(&tables) {
            print_planned_cell(&plan);
        }
        return Ok(());
    }

    let summary = run_matrix(&tables).await;
    print_summary(&summary);
    Ok(())
}

/// Loads the matrix from `--config`, or falls back to the compiled-in one,
/// then applies the counter overrides.
fn load_matrix(options: &RunOptions) -> Result<BenchMatrix> {
    let mut matrix = match &options.config {
        Some(path) => {
            eprintln!(
                "{}",
                t!("run.loading_matrix", path = path.display()).blue()
            );
            let matrix = config::load_bench_matrix(path)?;
            if !options.explicit_language {
                crate::set_language(&matrix.language);
            }
            matrix
        }
        None => {
            eprintln!("{}", t!("run.builtin_matrix").blue());
            BenchMatrix::default()
        }
    };

    if let Some(iterations) = options.iterations {
        matrix.iterations = iterations;
    }
    if let Some(warmup) = options.warmup {
        matrix.warmup = warmup;
    }
    Ok(matrix)
}

/// Runs every cell sequentially, printing each report line as it completes.
/// 顺序运行每个单元，并在每个单元完成时打印其报告行。
pub async fn run_matrix(tables: &MatrixTables) -> MatrixSummary {
    let mut summary = MatrixSummary::default();
    for plan in planner::plan_matrix(tables) {
        eprintln!(
            "{}",
            t!(
                "run.running_cell",
                scene = plan.cell.scene.name,
                distribution = plan.cell.distribution,
                variant = plan.cell.variant
            )
            .dimmed()
        );
        let report = run_cell(&plan).await;
        print_report_line(&report);
        summary.record(&report);
    }
    summary
}
