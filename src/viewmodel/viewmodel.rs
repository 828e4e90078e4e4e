// 视图模型
//
// 职责：对可见区域内的每一行调用 lexer，
//       把区间换算成屏幕列并裁剪到可见宽度，同时给出光标的屏幕坐标

use std::ops::Range;

use crate::core::{Document, EditorState, Position};
use crate::syntax::{Lexer, TokenKind};
use crate::viewmodel::status::StatusLine;
use crate::viewport::Viewport;

/// 屏幕上的一个着色片段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenSpan {
    pub kind: TokenKind,
    pub columns: Range<usize>,  // 屏幕列
    pub text: String,
}

/// 屏幕上的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewLine {
    pub screen_row: usize,
    pub doc_row: usize,
    pub spans: Vec<ScreenSpan>,
}

/// 一帧的全部渲染数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub lines: Vec<ViewLine>,
    pub cursor: (usize, usize),  // (屏幕行, 屏幕列)
    pub status: StatusLine,
}

impl ViewModel {
    pub fn build(state: &EditorState, lexer: &Lexer<'_>) -> Self {
        let viewport = state.viewport();
        Self {
            lines: project_lines(state.document(), viewport, lexer),
            cursor: cursor_on_screen(state.cursor(), viewport),
            status: StatusLine::from_state(state),
        }
    }
}

/// 把可见的文档行投影为屏幕行；文档末尾之后的屏幕行不输出
pub fn project_lines(document: &Document, viewport: Viewport, lexer: &Lexer<'_>) -> Vec<ViewLine> {
    let left = viewport.left_col();
    let right = left + viewport.visible_cols();

    (0..viewport.visible_rows())
        .map_while(|screen_row| {
            let doc_row = viewport.top_row() + screen_row;
            let line = document.line(doc_row)?.as_bytes();

            let spans = lexer
                .tokenize(line)
                .into_iter()
                .filter_map(|span| {
                    let start = span.range.start.max(left);
                    let end = span.range.end.min(right);
                    (start < end).then(|| ScreenSpan {
                        kind: span.kind,
                        columns: start - left..end - left,
                        text: String::from_utf8_lossy(&line[start..end]).into_owned(),
                    })
                })
                .collect();

            Some(ViewLine {
                screen_row,
                doc_row,
                spans,
            })
        })
        .collect()
}

/// 光标的屏幕坐标
pub fn cursor_on_screen(cursor: Position, viewport: Viewport) -> (usize, usize) {
    (
        cursor.row.saturating_sub(viewport.top_row()),
        cursor.col.saturating_sub(viewport.left_col()),
    )
}
