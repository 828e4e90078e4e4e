// Process System - 进程系统
//
// 职责：同步执行编译运行命令，阻塞直到子进程结束，
//       不支持取消与超时

pub mod runner;

pub use runner::{build_command, shell_quote, ProcessRunner, RunError, RunOutcome, ShellRunner};
