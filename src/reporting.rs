//! # Reporting Module / 报告模块
//!
//! This module prints the per-cell comparison lines and the closing summary
//! of a benchmark matrix run.
//!
//! 此模块打印每个单元的比较行以及基准矩阵运行的最终摘要。

pub mod console;

// Re-export common reporting functions
pub use console::{MatrixSummary, print_report_line, print_summary};
