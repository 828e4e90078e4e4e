// Token 定义
//
// 职责：定义高亮分类与行内区间

use std::ops::Range;

/// 高亮分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Whitespace,
    Preprocessor,
    LineComment,
    StringLiteral,
    NumericLiteral,
    Keyword,
    Identifier,
    Other,
}

/// 行内带分类的连续区间 `[start, end)`（字节偏移）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Span {
    pub kind: TokenKind,
    pub range: Range<usize>,
}

impl Span {
    pub fn new(kind: TokenKind, range: Range<usize>) -> Self {
        debug_assert!(range.start < range.end, "span 不能为空");
        Self { kind, range }
    }

    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// 取出该区间在行中的文本
    pub fn slice<'a>(&self, line: &'a [u8]) -> &'a [u8] {
        &line[self.range.clone()]
    }
}
