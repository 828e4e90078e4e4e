// 配置数据
//
// 职责：定义可配置项及其默认值

use std::path::PathBuf;

use serde::Deserialize;

/// 默认编译运行命令，`{file}` 替换为当前文件路径
pub const DEFAULT_BUILD_COMMAND: &str = "g++ {file} -o a.out && ./a.out";

/// 默认日志文件名（位于系统临时目录）
pub const DEFAULT_LOG_FILE: &str = "aoi.log";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// 编译运行命令模板
    pub build_command: String,
    /// 日志文件路径
    pub log_file: Option<PathBuf>,
    /// 未设置 `RUST_LOG` 时的日志级别
    pub log_level: String,
}

impl Config {
    /// 实际使用的日志路径
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_FILE))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            build_command: DEFAULT_BUILD_COMMAND.to_string(),
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}
