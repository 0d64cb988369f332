//! # Run Execution Module / 运行执行模块
//!
//! Launches one renderer process per call and extracts the throughput it
//! reports. A renderer reports its result as a line whose second
//! whitespace-separated token is `Mrays/sec`; the first token of the first such
//! line is the measurement. Reading stops at that line.
//!
//! 每次调用启动一个渲染器进程并提取其报告的吞吐量。渲染器以一行输出报告结果，
//! 该行以空白分隔的第二个标记为 `Mrays/sec`；第一条这样的行的第一个标记即为测量值。
//! 读取在该行处停止。

use colored::*;
use std::fmt;
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::{
    core::models::{CellPlan, CellReport, Invocation, RunResult},
    infra::{command, t},
};

/// The unit token that marks the result line.
/// 标记结果行的单位标记。
pub const THROUGHPUT_MARKER: &str = "Mrays/sec";

/// Why a run produced no measurement.
/// 一次运行未产生测量值的原因。
#[derive(Debug)]
pub enum RunFailure {
    /// The executable could not be started / 无法启动可执行文件
    Launch(io::Error),
    /// Reading the renderer's stdout failed / 读取渲染器的 stdout 失败
    Read(io::Error),
    /// The output ended without a result line / 输出结束时没有结果行
    MissingMarker,
    /// The result line was found but its value is not a number.
    /// 找到了结果行，但其值不是数字。
    MalformedValue(String),
}

impl fmt::Display for RunFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunFailure::Launch(e) => write!(f, "{}: {}", t!("run.failure_launch"), e),
            RunFailure::Read(e) => write!(f, "{}: {}", t!("run.failure_read"), e),
            RunFailure::MissingMarker => {
                write!(f, "{}", t!("run.failure_missing_marker", marker = THROUGHPUT_MARKER))
            }
            RunFailure::MalformedValue(token) => {
                write!(f, "{}", t!("run.failure_malformed_value", value = token))
            }
        }
    }
}

impl std::error::Error for RunFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RunFailure::Launch(e) | RunFailure::Read(e) => Some(e),
            _ => None,
        }
    }
}

/// Inspects a single output line.
///
/// Returns `None` if the line is not a result line, otherwise the parsed value
/// (or a [`RunFailure::MalformedValue`] if the first token is not a number).
///
/// 检查单个输出行。如果不是结果行则返回 `None`，否则返回解析出的值。
pub fn parse_throughput_line(line: &str) -> Option<Result<f64, RunFailure>> {
    let mut tokens = line.split_whitespace();
    let value = tokens.next()?;
    if tokens.next()? != THROUGHPUT_MARKER {
        return None;
    }
    Some(
        value
            .parse::<f64>()
            .map_err(|_| RunFailure::MalformedValue(value.to_string())),
    )
}

/// Extracts the throughput from a sequence of lines, consuming it only up to
/// and including the first result line.
///
/// 从行序列中提取吞吐量，只消费到第一条结果行（含）为止。
pub fn extract_throughput<I, S>(lines: I) -> Result<f64, RunFailure>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .find_map(|line| parse_throughput_line(line.as_ref()))
        .unwrap_or(Err(RunFailure::MissingMarker))
}

/// Asynchronous counterpart of [`extract_throughput`] over a buffered reader.
/// Lines are split on `\n` and decoded lossily, so stray non-UTF-8 output does
/// not end the scan.
///
/// [`extract_throughput`] 的异步版本，作用于缓冲读取器。
pub async fn scan_throughput<R>(reader: R) -> Result<f64, RunFailure>
where
    R: AsyncBufRead + Unpin,
{
    let mut segments = reader.split(b'\n');
    while let Some(segment) = segments.next_segment().await.map_err(RunFailure::Read)? {
        if let Some(result) = parse_throughput_line(&String::from_utf8_lossy(&segment)) {
            return result;
        }
    }
    Err(RunFailure::MissingMarker)
}

/// Runs one renderer invocation and returns its throughput.
///
/// The child process lives only for the duration of this call: it is stopped
/// as soon as the result line has been read, or reaped once its output ends.
///
/// 运行一次渲染器调用并返回其吞吐量。子进程仅在此调用期间存在。
pub async fn measure_throughput(invocation: &Invocation) -> Result<f64, RunFailure> {
    let mut run = command::spawn_streaming(invocation).map_err(RunFailure::Launch)?;
    let result = scan_throughput(&mut run.stdout).await;
    match result {
        Err(RunFailure::MissingMarker) => {
            let _ = run.finish().await;
        }
        _ => run.finish_early().await,
    }
    result
}

/// Runs one renderer invocation and collapses every failure into an absent value.
/// Failures are logged as warnings and never abort the matrix.
///
/// 运行一次渲染器调用，并将所有失败归并为缺失值。失败会以警告记录，绝不会中止矩阵。
pub async fn bench_throughput(invocation: &Invocation) -> RunResult {
    match measure_throughput(invocation).await {
        Ok(value) => Some(value),
        Err(failure) => {
            eprintln!(
                "{}",
                t!(
                    "run.no_measurement",
                    program = invocation.program.display(),
                    reason = failure
                )
                .yellow()
            );
            None
        }
    }
}

/// Executes a planned cell: the reference run (if applicable), then the candidate run.
/// 执行一个已计划的单元：先运行参考渲染器（如适用），再运行候选渲染器。
pub async fn run_cell(plan: &CellPlan<'_>) -> CellReport {
    let reference = match &plan.reference {
        Some(invocation) => bench_throughput(invocation).await,
        None => None,
    };
    let candidate = bench_throughput(&plan.candidate).await;

    CellReport {
        scene: plan.cell.scene.name.clone(),
        distribution: plan.cell.distribution,
        variant: plan.cell.variant.label.clone(),
        reference_applicable: plan.reference.is_some(),
        reference,
        candidate,
    }
}
