// 主题
//
// 职责：把高亮分类映射为终端前景/背景色

use crossterm::style::Color;

use crate::syntax::TokenKind;

/// 单个分类的样式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenStyle {
    pub foreground: Color,
    pub background: Color,
}

impl TokenStyle {
    pub const fn new(foreground: Color, background: Color) -> Self {
        Self {
            foreground,
            background,
        }
    }
}

/// 终端配色主题
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub comment: TokenStyle,
    pub keyword: TokenStyle,
    pub string: TokenStyle,
    pub number: TokenStyle,
    pub preprocessor: TokenStyle,
    pub text: TokenStyle,
}

impl Theme {
    /// 黑底经典配色
    pub const fn classic() -> Self {
        Self {
            comment: TokenStyle::new(Color::Green, Color::Black),
            keyword: TokenStyle::new(Color::Cyan, Color::Black),
            string: TokenStyle::new(Color::Magenta, Color::Black),
            number: TokenStyle::new(Color::Yellow, Color::Black),
            preprocessor: TokenStyle::new(Color::Blue, Color::Black),
            text: TokenStyle::new(Color::White, Color::Black),
        }
    }

    pub fn style_for(&self, kind: TokenKind) -> TokenStyle {
        match kind {
            TokenKind::LineComment => self.comment,
            TokenKind::Keyword => self.keyword,
            TokenKind::StringLiteral => self.string,
            TokenKind::NumericLiteral => self.number,
            TokenKind::Preprocessor => self.preprocessor,
            TokenKind::Whitespace | TokenKind::Identifier | TokenKind::Other => self.text,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}
