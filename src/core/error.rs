// 编辑核心错误
//
// 职责：定义缓冲区操作的错误类型

use thiserror::Error;

use crate::core::Position;

/// 缓冲区操作错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BufferError {
    /// 坐标超出文档范围
    #[error("位置超出范围: 行 {row} 列 {col}（共 {line_count} 行）")]
    OutOfRange {
        row: usize,
        col: usize,
        line_count: usize,
    },
}

impl BufferError {
    pub(crate) fn out_of_range(position: Position, line_count: usize) -> Self {
        BufferError::OutOfRange {
            row: position.row,
            col: position.col,
            line_count,
        }
    }
}
