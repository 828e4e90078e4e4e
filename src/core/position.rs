// 光标位置
//
// 职责：描述文档中的逻辑坐标（行、列），并负责把坐标收敛到文档合法范围内

use crate::core::buffer::Document;

/// 文档坐标（从 0 开始）
///
/// `col` 可以等于行长度，表示行尾插入点。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// 收敛到合法范围：`row < line_count`，`col <= 行长度`
    pub fn clamp_to(self, document: &Document) -> Self {
        let row = self.row.min(document.line_count() - 1);
        let col = self.col.min(document.line_len(row));
        Self { row, col }
    }

    /// 是否满足光标不变量
    pub fn is_valid_in(self, document: &Document) -> bool {
        self.row < document.line_count() && self.col <= document.line_len(self.row)
    }
}
