// crossterm 终端渲染
//
// 职责：原始模式 + 备用屏幕下逐帧绘制；
//       挂起时恢复普通终端，Drop 时尽力还原

use std::io::{self, Stdout, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{Attribute, Colors, Print, ResetColor, SetAttribute, SetColors};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use tracing::warn;

use crate::render::renderer::{Renderer, ScreenSize};
use crate::theme::Theme;
use crate::viewmodel::ViewModel;

/// 基于 crossterm 的渲染器
#[derive(Debug)]
pub struct TerminalRenderer<W: Write> {
    out: W,
    theme: Theme,
    active: bool,       // 是否处于原始模式 + 备用屏幕
}

impl TerminalRenderer<Stdout> {
    /// 在标准输出上进入编辑界面
    pub fn stdout(theme: Theme) -> io::Result<Self> {
        let mut renderer = Self {
            out: io::stdout(),
            theme,
            active: false,
        };
        renderer.resume()?;
        Ok(renderer)
    }
}

impl<W: Write> TerminalRenderer<W> {
    /// 绘制文本区域；只画落在 `size.rows` 之内的行，避免覆盖状态栏
    fn draw_text(&mut self, view: &ViewModel, size: ScreenSize) -> io::Result<()> {
        for line in view.lines.iter().filter(|line| line.screen_row < size.rows) {
            for span in &line.spans {
                let style = self.theme.style_for(span.kind);
                queue!(
                    self.out,
                    MoveTo(to_u16(span.columns.start), to_u16(line.screen_row)),
                    SetColors(Colors::new(style.foreground, style.background)),
                    Print(&span.text),
                )?;
            }
        }
        queue!(self.out, ResetColor)
    }

    fn draw_status(&mut self, view: &ViewModel, size: ScreenSize) -> io::Result<()> {
        let width = size.cols;
        let status_row = to_u16(size.rows);

        let status = fit(&view.status.status_text(), width);
        queue!(
            self.out,
            MoveTo(0, status_row),
            SetAttribute(Attribute::Reverse),
            Print(format!("{status:<width$}")),
            SetAttribute(Attribute::Reset),
            MoveTo(0, status_row.saturating_add(1)),
            Print(fit(view.status.message_text(), width)),
        )
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn text_area(&self) -> io::Result<ScreenSize> {
        let (cols, rows) = terminal::size()?;
        Ok(ScreenSize::from_terminal(cols, rows))
    }

    fn draw(&mut self, view: &ViewModel) -> io::Result<()> {
        let size = self.text_area()?;

        queue!(self.out, Hide, ResetColor, Clear(ClearType::All))?;

        self.draw_text(view, size)?;
        self.draw_status(view, size)?;

        let (row, col) = view.cursor;
        queue!(self.out, MoveTo(to_u16(col), to_u16(row)), Show)?;
        self.out.flush()
    }

    fn suspend(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        execute!(self.out, ResetColor, Show, LeaveAlternateScreen)?;
        disable_raw_mode()?;
        self.active = false;
        Ok(())
    }

    fn resume(&mut self) -> io::Result<()> {
        if self.active {
            return Ok(());
        }
        enable_raw_mode()?;
        execute!(self.out, EnterAlternateScreen, Clear(ClearType::All))?;
        self.active = true;
        Ok(())
    }
}

impl<W: Write> Drop for TerminalRenderer<W> {
    fn drop(&mut self) {
        if let Err(err) = self.suspend() {
            warn!(%err, "failed to restore terminal");
        }
    }
}

/// 按字符截断到屏幕宽度
fn fit(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
