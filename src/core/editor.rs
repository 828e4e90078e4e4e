// 编辑会话状态
//
// 职责：持有文档、光标、视口和状态消息，
//       所有编辑与移动都先收敛光标再执行，执行后收敛视口

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::core::{BufferError, Document, Position};
use crate::viewport::{move_cursor, Motion, Viewport};

/// 单个文件的编辑状态（由主循环独占）
#[derive(Debug, Clone)]
pub struct EditorState {
    document: Document,
    cursor: Position,
    viewport: Viewport,
    path: PathBuf,
    message: Option<String>,
}

// ========== 构造与查询 ==========

impl EditorState {
    pub fn new(document: Document, path: impl Into<PathBuf>, viewport: Viewport) -> Self {
        Self {
            document,
            cursor: Position::default(),
            viewport,
            path: path.into(),
            message: None,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 状态栏显示的文件名
    pub fn file_name(&self) -> String {
        self.path.display().to_string()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.document.is_dirty()
    }
}

// ========== 移动与视口 ==========

impl EditorState {
    pub fn move_cursor(&mut self, motion: Motion) {
        let (cursor, viewport) = move_cursor(&self.document, self.cursor, self.viewport, motion);
        self.cursor = cursor;
        self.viewport = viewport;
    }

    /// 终端尺寸变化后更新可见范围
    pub fn resize(&mut self, visible_rows: usize, visible_cols: usize) {
        self.viewport.resize(visible_rows, visible_cols);
        self.viewport.reconcile(self.cursor);
    }
}

// ========== 编辑 ==========

impl EditorState {
    pub fn insert_char(&mut self, byte: u8) {
        self.edit(|doc, at| doc.insert_char(at, byte));
    }

    pub fn delete_backward(&mut self) {
        self.edit(Document::delete_char_before);
    }

    pub fn delete_forward(&mut self) {
        self.edit(Document::delete_char_after);
    }

    pub fn split_line(&mut self) {
        self.edit(Document::split_line);
    }

    fn edit<F>(&mut self, op: F)
    where
        F: FnOnce(&mut Document, Position) -> Result<Position, BufferError>,
    {
        let at = self.cursor.clamp_to(&self.document);

        self.cursor = match op(&mut self.document, at) {
            Ok(next) => next,
            Err(err) => {
                // 光标已收敛，理论上不会发生
                warn!(%err, "edit rejected");
                at
            }
        };
        self.cursor = self.cursor.clamp_to(&self.document);
        self.viewport.reconcile(self.cursor);
    }
}

// ========== 保存与消息 ==========

impl EditorState {
    /// 保存成功后调用
    pub fn mark_saved(&mut self) {
        self.document.mark_clean();
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }
}
