// 行数据与行切分
//
// 职责：定义单行文本的存储类型，负责源文本与行序列之间的互相转换

use std::fmt;

/// 行结束符（只识别 `\n`，其余字节都属于行内容）
pub const LINE_TERMINATOR: u8 = b'\n';

/// 单行文本（按字节存储，列号即字节偏移）
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Line {
    bytes: Vec<u8>,
}

impl Line {
    pub fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// 行长度（字节），也是该行最大合法列号
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// 损失转换为字符串（用于显示和测试）
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }

    pub(crate) fn insert(&mut self, col: usize, byte: u8) {
        self.bytes.insert(col, byte);
    }

    pub(crate) fn remove(&mut self, col: usize) -> u8 {
        self.bytes.remove(col)
    }

    /// 在 `col` 处切开，返回右半部分
    pub(crate) fn split_off(&mut self, col: usize) -> Line {
        Line {
            bytes: self.bytes.split_off(col),
        }
    }

    /// 把另一行追加到本行末尾
    pub(crate) fn append(&mut self, mut other: Line) {
        self.bytes.append(&mut other.bytes);
    }

    /// 按内嵌的行结束符拆开；不含结束符时原样返回一行
    ///
    /// 与 `split_lines` 不同，末尾的结束符会留下一个空行。
    pub(crate) fn split_terminators(self) -> Vec<Line> {
        if !self.bytes.contains(&LINE_TERMINATOR) {
            return vec![self];
        }

        self.bytes
            .split(|&byte| byte == LINE_TERMINATOR)
            .map(Line::from)
            .collect()
    }
}

impl From<&str> for Line {
    fn from(text: &str) -> Self {
        Self::from(text.as_bytes())
    }
}

impl From<String> for Line {
    fn from(text: String) -> Self {
        Self::from(text.into_bytes())
    }
}

impl From<&[u8]> for Line {
    fn from(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }
}

impl From<Vec<u8>> for Line {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.bytes))
    }
}

/// 按行结束符切分源文本
///
/// 行结束符本身被丢弃；末尾的结束符不会产生额外的空行；
/// 空输入得到一个空行，因此结果永远不为空。
pub fn split_lines(source: &[u8]) -> Vec<Line> {
    let mut lines: Vec<Line> = Vec::new();
    let mut line_start = 0;

    for (i, &byte) in source.iter().enumerate() {
        if byte == LINE_TERMINATOR {
            lines.push(Line::from(&source[line_start..i]));
            line_start = i + 1;
        }
    }

    // 最后一行（如果没有以换行符结束）
    if line_start < source.len() {
        lines.push(Line::from(&source[line_start..]));
    }

    if lines.is_empty() {
        lines.push(Line::new());
    }

    lines
}

/// 用行结束符拼接各行，最后一行之后也追加结束符
pub fn join_lines(lines: &[Line]) -> Vec<u8> {
    let capacity = lines.iter().map(|line| line.len() + 1).sum();
    let mut out = Vec::with_capacity(capacity);

    for line in lines {
        out.extend_from_slice(line.as_bytes());
        out.push(LINE_TERMINATOR);
    }

    out
}
