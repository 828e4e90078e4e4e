// 按键映射
//
// 职责：固定的按键表，F2 保存，F5 编译运行，F10 / Ctrl+X 退出

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::action::EditorAction;
use crate::viewport::Motion;

/// 把按键映射为动作；未绑定的按键返回 None
///
/// 只接受可打印 ASCII 作为文本输入（列号与字节一一对应）。
pub fn map_key(event: KeyEvent) -> Option<EditorAction> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let alt = event.modifiers.contains(KeyModifiers::ALT);

    let action = match event.code {
        KeyCode::Up => EditorAction::Move(Motion::Up),
        KeyCode::Down => EditorAction::Move(Motion::Down),
        KeyCode::Left => EditorAction::Move(Motion::Left),
        KeyCode::Right => EditorAction::Move(Motion::Right),
        KeyCode::Home => EditorAction::Move(Motion::Home),
        KeyCode::End => EditorAction::Move(Motion::End),
        KeyCode::Backspace => EditorAction::DeleteBackward,
        KeyCode::Delete => EditorAction::DeleteForward,
        KeyCode::Enter => EditorAction::SplitLine,
        KeyCode::F(2) => EditorAction::Save,
        KeyCode::F(5) => EditorAction::BuildAndRun,
        KeyCode::F(10) => EditorAction::Quit,
        KeyCode::Char('x' | 'X') if ctrl => EditorAction::Quit,
        KeyCode::Char(c) if !ctrl && !alt && is_printable_ascii(c) => {
            EditorAction::InsertChar(c as u8)
        }
        _ => return None,
    };

    Some(action)
}

fn is_printable_ascii(c: char) -> bool {
    (' '..='~').contains(&c)
}
