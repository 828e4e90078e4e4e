// 状态栏数据
//
// 职责：汇总文件名、光标位置、修改标记和最近一条消息

use crate::core::EditorState;

/// 快捷键提示
pub const KEY_HINTS: &str = "F2:Save F5:Run F10/Ctrl+X:Exit";

/// 没有消息时显示的横幅
pub const BANNER: &str = "AOI Editor - Competitive Programming Editor | C++ Syntax Highlighting";

/// 状态栏（倒数第二行）与消息行（最后一行）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub file_name: String,
    pub row: usize,         // 从 1 开始
    pub col: usize,         // 从 1 开始
    pub modified: bool,
    pub message: Option<String>,
}

impl StatusLine {
    pub fn from_state(state: &EditorState) -> Self {
        let cursor = state.cursor();
        Self {
            file_name: state.file_name(),
            row: cursor.row + 1,
            col: cursor.col + 1,
            modified: state.is_dirty(),
            message: state.message().map(str::to_owned),
        }
    }

    /// 状态栏文本
    pub fn status_text(&self) -> String {
        let mut text = format!("{KEY_HINTS} {} - {},{}", self.file_name, self.row, self.col);
        if self.modified {
            text.push_str(" [Modified]");
        }
        text
    }

    /// 消息行文本
    pub fn message_text(&self) -> &str {
        self.message.as_deref().unwrap_or(BANNER)
    }
}
