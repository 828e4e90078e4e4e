// Render System (终端适配层) - 渲染系统
//
// 职责：将 ViewModel 转换为终端绘制命令，
//       报告可用于文本的行列数，并负责终端的挂起与恢复

pub mod renderer;
pub mod terminal;

pub use renderer::{Renderer, ScreenSize, RESERVED_ROWS};
pub use terminal::TerminalRenderer;
