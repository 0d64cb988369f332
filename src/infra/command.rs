//! # Command Execution Module / 命令执行模块
//!
//! Process plumbing for renderer runs: spawning a child with a piped stdout
//! and handing back a line reader over it.
//!
//! 渲染器运行的进程管道：以管道方式派生带 stdout 的子进程，并返回其逐行读取器。

use std::io;
use std::process::Stdio;
use tokio::io::BufReader;
use tokio::process::{Child, ChildStdout, Command};

use crate::core::models::Invocation;
use crate::infra::t;

/// A running renderer process together with a buffered reader over its stdout.
/// The child is killed if this value is dropped before it exits.
///
/// 一个正在运行的渲染器进程及其 stdout 的缓冲读取器。
/// 如果在子进程退出前丢弃此值，子进程将被终止。
#[derive(Debug)]
pub struct SpawnedRun {
    pub child: Child,
    pub stdout: BufReader<ChildStdout>,
}

impl SpawnedRun {
    /// Stops the child and reaps it. Used once the wanted output has been read.
    /// 停止并回收子进程。在读取到所需输出后使用。
    pub async fn finish_early(mut self) {
        drop(self.stdout);
        // The child may already have exited on its own.
        let _ = self.child.start_kill();
        let _ = self.child.wait().await;
    }

    /// Waits for a child whose output has been fully consumed.
    /// 等待输出已被完全读取的子进程。
    pub async fn finish(mut self) -> io::Result<std::process::ExitStatus> {
        drop(self.stdout);
        self.child.wait().await
    }
}

/// Builds the `tokio` command for an invocation: stdout piped, stdin closed,
/// stderr left attached to the console.
///
/// 为调用构建 `tokio` 命令：stdout 使用管道，stdin 关闭，stderr 保持连接到控制台。
pub fn build_command(invocation: &Invocation) -> Command {
    let mut cmd = Command::new(&invocation.program);
    cmd.args(&invocation.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .kill_on_drop(true);
    cmd
}

/// Spawns a renderer and takes ownership of its stdout.
///
/// # Errors
/// Returns the spawn error if the executable is missing or cannot be run.
///
/// 派生渲染器并获取其 stdout 的所有权。
pub fn spawn_streaming(invocation: &Invocation) -> io::Result<SpawnedRun> {
    let mut child = build_command(invocation).spawn()?;
    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| io::Error::other(t!("command.capture_stdout_failed").to_string()))?;
    Ok(SpawnedRun {
        child,
        stdout: BufReader::new(stdout),
    })
}
