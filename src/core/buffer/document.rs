// 行缓冲区文档
//
// 职责：以有序行序列保存文档内容，提供插入、删除、分行、合并等编辑操作，
//       并维护"已修改"标记

use crate::core::buffer::lines::{join_lines, split_lines, Line, LINE_TERMINATOR};
use crate::core::{BufferError, Position};

/// 文档：至少包含一行的有序行序列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<Line>,       // 永不为空
    dirty: bool,            // 自上次保存后是否有修改
}

// ========== 构造方法 ==========

impl Document {
    /// 创建只含一个空行的新文档
    pub fn new() -> Self {
        Self {
            lines: vec![Line::new()],
            dirty: false,
        }
    }

    /// 从源文本加载（按 `\n` 切分，丢弃结束符）
    pub fn load(source: &[u8]) -> Self {
        Self {
            lines: split_lines(source),
            dirty: false,
        }
    }

    /// 从已切分好的行构建；空序列得到一个空行
    ///
    /// 行内出现的 `\n` 会被拆成多行，保证序列化后可以原样加载回来。
    pub fn from_lines<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Line>,
    {
        let mut lines: Vec<Line> = lines
            .into_iter()
            .flat_map(|line| Into::<Line>::into(line).split_terminators())
            .collect();
        if lines.is_empty() {
            lines.push(Line::new());
        }

        Self {
            lines,
            dirty: false,
        }
    }

    /// 序列化为源文本（每行后追加 `\n`）
    pub fn serialize(&self) -> Vec<u8> {
        join_lines(&self.lines)
    }
}

// ========== 基本查询 ==========

impl Document {
    /// 行数（至少为 1）
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, row: usize) -> Option<&Line> {
        self.lines.get(row)
    }

    /// 行长度；越界的行视为长度 0
    pub fn line_len(&self, row: usize) -> usize {
        self.lines.get(row).map_or(0, Line::len)
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// 保存成功后清除修改标记
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

// ========== 编辑操作 ==========
//
// 每个操作返回编辑之后的插入点，调用方据此更新光标。

impl Document {
    /// 在 `at` 处插入一个字节；插入行结束符等同于分行
    pub fn insert_char(&mut self, at: Position, byte: u8) -> Result<Position, BufferError> {
        if byte == LINE_TERMINATOR {
            return self.split_line(at);
        }
        self.check(at)?;

        self.lines[at.row].insert(at.col, byte);
        self.dirty = true;

        Ok(Position::new(at.row, at.col + 1))
    }

    /// 删除 `at` 之前的字符（退格）
    ///
    /// 在行首时把本行合并到上一行末尾；在 (0, 0) 时什么也不做。
    pub fn delete_char_before(&mut self, at: Position) -> Result<Position, BufferError> {
        self.check(at)?;

        if at.col > 0 {
            self.lines[at.row].remove(at.col - 1);
            self.dirty = true;
            return Ok(Position::new(at.row, at.col - 1));
        }

        if at.row == 0 {
            return Ok(at);
        }

        let current = self.lines.remove(at.row);
        let previous = &mut self.lines[at.row - 1];
        let join_col = previous.len();
        previous.append(current);
        self.dirty = true;

        Ok(Position::new(at.row - 1, join_col))
    }

    /// 删除 `at` 处的字符（Delete 键）
    ///
    /// 在行尾时把下一行合并进本行；在最后一行行尾时什么也不做。
    pub fn delete_char_after(&mut self, at: Position) -> Result<Position, BufferError> {
        self.check(at)?;

        if at.col < self.lines[at.row].len() {
            self.lines[at.row].remove(at.col);
            self.dirty = true;
            return Ok(at);
        }

        if at.row + 1 >= self.lines.len() {
            return Ok(at);
        }

        let next = self.lines.remove(at.row + 1);
        self.lines[at.row].append(next);
        self.dirty = true;

        Ok(at)
    }

    /// 在 `at` 处分行：左半部分留在原行，右半部分成为下一行
    pub fn split_line(&mut self, at: Position) -> Result<Position, BufferError> {
        self.check(at)?;

        let right = self.lines[at.row].split_off(at.col);
        self.lines.insert(at.row + 1, right);
        self.dirty = true;

        Ok(Position::new(at.row + 1, 0))
    }

    fn check(&self, at: Position) -> Result<(), BufferError> {
        if at.is_valid_in(self) {
            Ok(())
        } else {
            Err(BufferError::out_of_range(at, self.lines.len()))
        }
    }
}

// ========== 默认实现 ==========

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

// ========== 测试 ==========
