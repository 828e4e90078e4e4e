// 行缓冲区 - 文本缓冲区核心实现
//
// 职责：使用有序行序列管理文本内容，
//       保证文档至少包含一行，并追踪未保存的修改

mod document;
mod lines;

// 重新导出
pub use self::document::Document;
pub use self::lines::{join_lines, split_lines, Line, LINE_TERMINATOR};
