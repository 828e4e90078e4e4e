// 行内 Lexer
//
// 职责：对单行文本做一次从左到右的扫描，输出首尾相接、完整覆盖整行的分类区间。
//       每次调用互相独立，不跨行保留状态（多行字符串/块注释不支持）

use crate::syntax::keywords::KeywordSet;
use crate::syntax::token::{Span, TokenKind};

/// 绑定关键字表的 lexer
#[derive(Debug, Clone, Copy)]
pub struct Lexer<'k> {
    keywords: &'k KeywordSet,
}

impl<'k> Lexer<'k> {
    pub fn new(keywords: &'k KeywordSet) -> Self {
        Self { keywords }
    }

    pub fn tokenize(&self, line: &[u8]) -> Vec<Span> {
        tokenize(line, self.keywords)
    }
}

/// 扫描一行，返回按位置排序的区间
///
/// 每个位置按固定优先级匹配：预处理 > 行注释 > 字符串 > 数字 > 标识符 > 单字符。
pub fn tokenize(line: &[u8], keywords: &KeywordSet) -> Vec<Span> {
    let len = line.len();
    let mut spans = Vec::new();
    let mut i = 0;

    while i < len {
        let start = i;
        let byte = line[i];

        let kind = if i == 0 && byte == b'#' {
            // 预处理指令：整行
            i = len;
            TokenKind::Preprocessor
        } else if byte == b'/' && line.get(i + 1) == Some(&b'/') {
            i = len;
            TokenKind::LineComment
        } else if byte == b'"' || byte == b'\'' {
            i = scan_quoted(line, i);
            TokenKind::StringLiteral
        } else if byte.is_ascii_digit() {
            i = scan_while(line, i, is_number_byte);
            TokenKind::NumericLiteral
        } else if byte.is_ascii_alphabetic() || byte == b'_' {
            i = scan_while(line, i, is_word_byte);
            if keywords.contains(&line[start..i]) {
                TokenKind::Keyword
            } else {
                TokenKind::Identifier
            }
        } else {
            i += 1;
            if is_space_byte(byte) {
                TokenKind::Whitespace
            } else {
                TokenKind::Other
            }
        };

        spans.push(Span::new(kind, start..i));
    }

    spans
}

/// 扫描以 `line[start]` 为引号的字面量，返回结束位置（不含）
///
/// 反斜杠无条件吞掉下一个字节；未闭合时在行尾结束。
fn scan_quoted(line: &[u8], start: usize) -> usize {
    let quote = line[start];
    let mut i = start + 1;

    while i < line.len() {
        match line[i] {
            b'\\' => i += 2,
            byte if byte == quote => return i + 1,
            _ => i += 1,
        }
    }

    line.len()
}

fn scan_while(line: &[u8], start: usize, accept: fn(u8) -> bool) -> usize {
    line[start..]
        .iter()
        .position(|&byte| !accept(byte))
        .map_or(line.len(), |offset| start + offset)
}

/// 宽松的数字形状匹配（不校验数字语法）
fn is_number_byte(byte: u8) -> bool {
    byte.is_ascii_digit() || matches!(byte, b'.' | b'e' | b'E' | b'+' | b'-' | b'x' | b'X')
}

fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// C 的空白字符集（含垂直制表符）
fn is_space_byte(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\x0B' | b'\x0C' | b'\r')
}
