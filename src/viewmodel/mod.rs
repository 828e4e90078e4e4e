// ViewModel Pipeline - 视图模型管道
//
// 职责：将编辑状态与语法高亮融合，
//       生成渲染友好的 ViewModel（纯投影，不修改任何状态）

pub mod status;
pub mod viewmodel;

pub use status::StatusLine;
pub use viewmodel::{ScreenSpan, ViewLine, ViewModel};
