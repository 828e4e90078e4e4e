// 渲染器接口
//
// 职责：编辑会话只通过该接口与屏幕交互

use std::io;

use crate::viewmodel::ViewModel;

/// 屏幕底部保留给状态栏和消息行的行数
pub const RESERVED_ROWS: usize = 2;

/// 文本区域大小
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    pub rows: usize,
    pub cols: usize,
}

impl ScreenSize {
    /// 由终端尺寸换算文本区域（扣除保留行）
    pub fn from_terminal(cols: u16, rows: u16) -> Self {
        Self {
            rows: usize::from(rows).saturating_sub(RESERVED_ROWS),
            cols: usize::from(cols),
        }
    }
}

/// 渲染协作者
pub trait Renderer {
    /// 当前可用于文本的行列数（每帧重新读取）
    fn text_area(&self) -> io::Result<ScreenSize>;

    /// 绘制完整一帧
    fn draw(&mut self, view: &ViewModel) -> io::Result<()>;

    /// 交出终端控制权（运行外部命令前）
    fn suspend(&mut self) -> io::Result<()>;

    /// 重新接管终端
    fn resume(&mut self) -> io::Result<()>;
}
