// Syntax Highlight System - 语法高亮系统
//
// 职责：提供语法高亮分析能力，
//       采用单遍扫描的行内 lexer，不跨行保留任何状态

pub mod keywords;
pub mod lexer;
pub mod token;

pub use keywords::KeywordSet;
pub use lexer::{tokenize, Lexer};
pub use token::{Span, TokenKind};
