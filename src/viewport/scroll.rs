// 光标移动与滚动
//
// 职责：把导航命令作用于光标，随后执行视口收敛；
//       所有输入都被收敛而不是拒绝，因此不会产生非法状态

use crate::core::{Document, Position};
use crate::viewport::Viewport;

/// 导航命令
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Motion {
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
}

/// 移动光标并收敛视口（纯函数）
///
/// 垂直移动后列号收敛到目标行长度，不记忆"期望列"。
pub fn move_cursor(
    document: &Document,
    cursor: Position,
    viewport: Viewport,
    motion: Motion,
) -> (Position, Viewport) {
    let cursor = cursor.clamp_to(document);
    let last_row = document.line_count() - 1;

    let moved = match motion {
        Motion::Up => Position::new(cursor.row.saturating_sub(1), cursor.col),
        Motion::Down => Position::new((cursor.row + 1).min(last_row), cursor.col),
        Motion::Left => {
            if cursor.col > 0 {
                Position::new(cursor.row, cursor.col - 1)
            } else if cursor.row > 0 {
                // 行首左移：到上一行行尾
                Position::new(cursor.row - 1, document.line_len(cursor.row - 1))
            } else {
                cursor
            }
        }
        Motion::Right => {
            if cursor.col < document.line_len(cursor.row) {
                Position::new(cursor.row, cursor.col + 1)
            } else if cursor.row < last_row {
                // 行尾右移：到下一行行首
                Position::new(cursor.row + 1, 0)
            } else {
                cursor
            }
        }
        Motion::Home => Position::new(cursor.row, 0),
        Motion::End => Position::new(cursor.row, document.line_len(cursor.row)),
    };

    let moved = moved.clamp_to(document);
    let mut viewport = viewport;
    viewport.reconcile(moved);

    (moved, viewport)
}
