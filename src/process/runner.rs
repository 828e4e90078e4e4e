// 编译运行
//
// 职责：通过 `sh -c` 运行命令并等待结束，结束后等待用户按回车

use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::{Command, ExitStatus};

use thiserror::Error;
use tracing::info;

/// 命令模板中的文件占位符
pub const FILE_PLACEHOLDER: &str = "{file}";

/// 子进程启动失败
#[derive(Debug, Error)]
pub enum RunError {
    #[error("无法启动命令 `{command}`: {source}")]
    Spawn { command: String, source: io::Error },
}

/// 子进程结束状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Exited(i32),
    /// 被信号终止
    Terminated,
}

impl RunOutcome {
    pub fn success(&self) -> bool {
        matches!(self, RunOutcome::Exited(0))
    }
}

impl From<ExitStatus> for RunOutcome {
    fn from(status: ExitStatus) -> Self {
        status.code().map_or(RunOutcome::Terminated, RunOutcome::Exited)
    }
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunOutcome::Exited(code) => write!(f, "exit status {code}"),
            RunOutcome::Terminated => f.write_str("terminated by signal"),
        }
    }
}

/// 进程执行协作者
pub trait ProcessRunner {
    /// 阻塞运行命令直到结束
    fn run(&mut self, command: &str) -> Result<RunOutcome, RunError>;

    /// 运行结束后等待用户确认
    fn wait_for_ack(&mut self, outcome: &RunOutcome) -> io::Result<()>;
}

/// 使用 `/bin/sh -c` 的实现，子进程继承终端
#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: String,
}

impl ShellRunner {
    pub fn new() -> Self {
        Self {
            shell: "/bin/sh".to_string(),
        }
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessRunner for ShellRunner {
    fn run(&mut self, command: &str) -> Result<RunOutcome, RunError> {
        info!(command, "running");

        let status = Command::new(&self.shell)
            .arg("-c")
            .arg(command)
            .status()
            .map_err(|source| RunError::Spawn {
                command: command.to_string(),
                source,
            })?;

        let outcome = RunOutcome::from(status);
        info!(%outcome, "command finished");
        Ok(outcome)
    }

    fn wait_for_ack(&mut self, outcome: &RunOutcome) -> io::Result<()> {
        let mut stdout = io::stdout();
        write!(stdout, "\n[{outcome}] Press Enter to return to editor...")?;
        stdout.flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(())
    }
}

/// 用文件路径填充命令模板
pub fn build_command(template: &str, path: &Path) -> String {
    template.replace(FILE_PLACEHOLDER, &shell_quote(&path.to_string_lossy()))
}

/// POSIX shell 单引号转义；只含安全字符时原样返回
pub fn shell_quote(text: &str) -> String {
    let safe = !text.is_empty()
        && text
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'.' | b'/' | b'+'));

    if safe {
        text.to_string()
    } else {
        format!("'{}'", text.replace('\'', r"'\''"))
    }
}
