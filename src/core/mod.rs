// Editor Core - 编辑器核心
//
// 职责：管理行缓冲区、光标、视口状态，
//       接收 EditorAction 的编辑与移动请求并保持坐标始终合法

pub mod buffer;
pub mod editor;
mod error;
mod position;

pub use buffer::{Document, Line};
pub use editor::EditorState;
pub use error::BufferError;
pub use position::Position;
