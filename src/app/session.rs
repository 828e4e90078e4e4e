// 编辑会话
//
// 职责：独占编辑状态与各协作者，串行处理输入事件；
//       保存和编译运行在此同步完成

use std::io;
use std::ops::ControlFlow;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tracing::{info, warn};

use crate::action::{ActionDispatcher, EditorAction, Effect};
use crate::config::Config;
use crate::core::EditorState;
use crate::input::map_key;
use crate::io::FileIO;
use crate::process::{build_command, ProcessRunner};
use crate::render::Renderer;
use crate::syntax::{KeywordSet, Lexer};
use crate::viewmodel::ViewModel;

/// 保存成功提示
pub const SAVED_MESSAGE: &str = "File saved successfully!";

/// 编辑会话（由主循环持有）
pub struct Session<R: Renderer, P: ProcessRunner> {
    state: EditorState,
    renderer: R,
    runner: P,
    keywords: KeywordSet,
    dispatcher: ActionDispatcher,
    build_command: String,
}

impl<R: Renderer, P: ProcessRunner> Session<R, P> {
    pub fn new(state: EditorState, config: &Config, renderer: R, runner: P) -> Self {
        Self {
            state,
            renderer,
            runner,
            keywords: KeywordSet::cpp(),
            dispatcher: ActionDispatcher::new(),
            build_command: config.build_command.clone(),
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn runner(&self) -> &P {
        &self.runner
    }

    /// 从终端读取事件直到退出
    pub fn run(&mut self) -> Result<()> {
        self.run_with(event::read)
    }

    /// 用给定的事件源驱动主循环
    pub fn run_with<F>(&mut self, mut next_event: F) -> Result<()>
    where
        F: FnMut() -> io::Result<Event>,
    {
        self.render()?;

        loop {
            let event = next_event().context("读取输入事件失败")?;
            if self.handle_event(event)?.is_break() {
                info!("session ended");
                return Ok(());
            }
            self.render()?;
        }
    }

    /// 处理一个输入事件
    pub fn handle_event(&mut self, event: Event) -> Result<ControlFlow<()>> {
        match event {
            Event::Key(key) => match map_key(key) {
                Some(action) => self.handle_action(action),
                None => Ok(ControlFlow::Continue(())),
            },
            // 尺寸在下一次渲染时重新读取
            _ => Ok(ControlFlow::Continue(())),
        }
    }

    /// 执行一个动作
    pub fn handle_action(&mut self, action: EditorAction) -> Result<ControlFlow<()>> {
        match self.dispatcher.dispatch(&mut self.state, action) {
            Effect::None => {}
            Effect::Save => {
                self.save();
            }
            Effect::BuildAndRun => self.build_and_run()?,
            Effect::Quit => {
                if self.state.is_dirty() {
                    warn!(path = %self.state.path().display(), "quitting with unsaved changes");
                }
                return Ok(ControlFlow::Break(()));
            }
        }

        Ok(ControlFlow::Continue(()))
    }

    /// 重新读取尺寸并绘制一帧
    pub fn render(&mut self) -> Result<()> {
        let size = self.renderer.text_area().context("读取终端尺寸失败")?;
        self.state.resize(size.rows, size.cols);

        let lexer = Lexer::new(&self.keywords);
        let view = ViewModel::build(&self.state, &lexer);
        self.renderer.draw(&view).context("绘制失败")
    }

    /// 保存；失败时保留修改标记并显示原因
    fn save(&mut self) -> bool {
        match FileIO::write_document(self.state.path(), self.state.document()) {
            Ok(()) => {
                self.state.mark_saved();
                self.state.set_message(SAVED_MESSAGE);
                true
            }
            Err(err) => {
                warn!(%err, "save failed");
                self.state.set_message(format!("Save failed: {err}"));
                false
            }
        }
    }

    /// 先保存，再交出终端运行编译命令，结束后恢复
    fn build_and_run(&mut self) -> Result<()> {
        if !self.save() {
            return Ok(());
        }

        let command = build_command(&self.build_command, self.state.path());
        self.renderer.suspend().context("释放终端失败")?;

        let message = match self.runner.run(&command) {
            Ok(outcome) => {
                if let Err(err) = self.runner.wait_for_ack(&outcome) {
                    warn!(%err, "failed to wait for acknowledgement");
                }
                if outcome.success() {
                    format!("Run finished ({outcome})")
                } else {
                    format!("Run failed ({outcome})")
                }
            }
            Err(err) => {
                warn!(%err, "run failed");
                format!("Run failed: {err}")
            }
        };

        self.renderer.resume().context("恢复终端失败")?;
        self.state.set_message(message);
        Ok(())
    }
}
