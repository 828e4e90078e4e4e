// aoi - A terminal editor for competitive programming
//
// Copyright (c) 2025 aoi team
//
// Licensed under MIT License

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use aoi::app::Session;
use aoi::config::Config;
use aoi::core::EditorState;
use aoi::io::FileIO;
use aoi::process::ShellRunner;
use aoi::render::{Renderer, TerminalRenderer};
use aoi::theme::Theme;
use aoi::viewport::Viewport;

/// 命令行参数
#[derive(Debug, Parser)]
#[command(name = "aoi", version, about = "Competitive programming editor with C++ syntax highlighting")]
struct Cli {
    /// 要编辑的文件（不存在时创建新文件）
    path: PathBuf,

    /// 配置文件路径（默认使用当前目录下的 aoi.toml）
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("无法获取当前目录")?;
    let config = Config::discover(cli.config.as_deref(), &cwd)?;

    // 初始化日志（写入文件，避免破坏终端画面）
    init_logging(&config);

    info!("aoi v{} starting...", env!("CARGO_PKG_VERSION"));

    let document = FileIO::load_document(&cli.path);

    let renderer = TerminalRenderer::stdout(Theme::classic()).context("无法初始化终端")?;
    let size = renderer.text_area()?;
    let state = EditorState::new(document, cli.path, Viewport::new(size.rows, size.cols));

    let mut session = Session::new(state, &config, renderer, ShellRunner::new());
    session.run()
}

fn init_logging(config: &Config) {
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.log_path())
    else {
        return;
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    // 已有全局 subscriber 时忽略
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}
