//! # Core Module / 核心模块
//!
//! This module contains the core functionality of the benchmark driver:
//! data models, the matrix configuration, matrix planning and run execution.
//!
//! 此模块包含基准驱动程序的核心功能：数据模型、矩阵配置、矩阵计划和运行执行。

pub mod config;
pub mod execution;
pub mod models;
pub mod planner;

// Re-exports
pub use config::{BenchMatrix, MatrixTables};
pub use execution::{bench_throughput, extract_throughput};
pub use models::RunResult;
