// 配置加载
//
// 职责：按 命令行指定 > 工作目录 aoi.toml > 默认值 的顺序加载配置

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::config::Config;

/// 工作目录下自动发现的配置文件名
pub const DEFAULT_CONFIG_FILE: &str = "aoi.toml";

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("读取配置失败 {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("配置格式错误 {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl Config {
    /// 解析 TOML 文本，缺省字段取默认值
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// 从指定文件加载（文件必须存在）
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// 发现并加载配置
    ///
    /// 显式路径优先；否则使用 `search_dir` 下的 `aoi.toml`（若存在）；都没有则取默认值。
    pub fn discover(explicit: Option<&Path>, search_dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading config");
            return Self::load_from(path);
        }

        let candidate = search_dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            debug!(path = %candidate.display(), "loading config");
            return Self::load_from(&candidate);
        }

        Ok(Self::default())
    }
}
