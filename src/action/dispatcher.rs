// 动作分发
//
// 职责：把导航和编辑动作直接作用于 EditorState；
//       需要外部协作者的动作（保存、编译运行、退出）作为 Effect 交还主循环

use tracing::debug;

use crate::action::EditorAction;
use crate::core::EditorState;

/// 分发后需要主循环处理的副作用
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// 状态已更新，重新渲染即可
    None,
    Save,
    BuildAndRun,
    Quit,
}

/// 动作分发器
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionDispatcher;

impl ActionDispatcher {
    pub fn new() -> Self {
        Self
    }

    pub fn dispatch(&self, state: &mut EditorState, action: EditorAction) -> Effect {
        debug!(?action, "dispatch");

        // 消息只保留到下一次按键
        state.clear_message();

        match action {
            EditorAction::Move(motion) => state.move_cursor(motion),
            EditorAction::InsertChar(byte) => state.insert_char(byte),
            EditorAction::DeleteBackward => state.delete_backward(),
            EditorAction::DeleteForward => state.delete_forward(),
            EditorAction::SplitLine => state.split_line(),
            EditorAction::Save => return Effect::Save,
            EditorAction::BuildAndRun => return Effect::BuildAndRun,
            EditorAction::Quit => return Effect::Quit,
        }

        Effect::None
    }
}
