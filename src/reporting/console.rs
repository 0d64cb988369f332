//! # Console Reporting Module / 控制台报告模块
//!
//! Report lines go to stdout, one per matrix cell, in generation order:
//!
//! ```text
//! sponza : primary : -w 4 : 101.5 : 123.45
//! sponza : ao : -w 4 -p : None : 230.1
//! ```
//!
//! Absent values are printed as `None` so the matrix keeps its columns.
//! The closing summary is human-facing and goes to stderr.
//!
//! 报告行输出到 stdout，每个矩阵单元一行，按生成顺序排列。缺失值打印为 `None`，
//! 以保持矩阵列对齐。最终摘要面向人类阅读，输出到 stderr。

use colored::*;

use crate::core::models::{CellPlan, CellReport, RunResult, format_float};
use crate::infra::t;

/// Marker printed in place of a missing measurement.
/// 代替缺失测量值打印的标记。
pub const ABSENT_MARKER: &str = "None";

pub fn format_result(result: RunResult) -> String {
    result
        .map(format_float)
        .unwrap_or_else(|| ABSENT_MARKER.to_string())
}

/// Formats one report line.
/// 格式化一行报告。
pub fn format_report_line(report: &CellReport) -> String {
    format!(
        "{} : {} : {} : {} : {}",
        report.scene,
        report.distribution,
        report.variant,
        format_result(report.reference),
        format_result(report.candidate)
    )
}

pub fn print_report_line(report: &CellReport) {
    println!("{}", format_report_line(report));
}

/// Prints the command lines of a planned cell without running them.
/// 打印已计划单元的命令行而不运行它们。
pub fn print_planned_cell(plan: &CellPlan<'_>) {
    let header = format!(
        "{} : {} : {}",
        plan.cell.scene.name, plan.cell.distribution, plan.cell.variant
    );
    println!("{}", header.bold());
    match &plan.reference {
        Some(invocation) => println!("  {}", invocation),
        None => println!("  {}", t!("report.reference_skipped").dimmed()),
    }
    println!("  {}", plan.candidate);
}

/// Counters accumulated over a matrix run.
/// 在一次矩阵运行中累计的计数器。
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MatrixSummary {
    pub cells: usize,
    pub measured: usize,
    pub skipped_reference: usize,
    pub missing: usize,
}

impl MatrixSummary {
    /// Records the outcome of one cell.
    pub fn record(&mut self, report: &CellReport) {
        self.cells += 1;
        if report.reference_applicable {
            self.tally(report.reference);
        } else {
            self.skipped_reference += 1;
        }
        self.tally(report.candidate);
    }

    fn tally(&mut self, result: RunResult) {
        if result.is_some() {
            self.measured += 1;
        } else {
            self.missing += 1;
        }
    }
}

/// Prints the closing summary to stderr.
/// 将最终摘要打印到 stderr。
pub fn print_summary(summary: &MatrixSummary) {
    eprintln!("\n{}", t!("report.summary_banner").bold());
    eprintln!("  - {}", t!("report.summary_cells", count = summary.cells));
    eprintln!(
        "  - {}",
        t!("report.summary_measured", count = summary.measured).green()
    );
    eprintln!(
        "  - {}",
        t!("report.summary_skipped", count = summary.skipped_reference).dimmed()
    );
    let missing = t!("report.summary_missing", count = summary.missing);
    if summary.missing > 0 {
        eprintln!("  - {}", missing.yellow());
    } else {
        eprintln!("  - {}", missing);
    }
}
