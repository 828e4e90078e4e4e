// 编辑器动作
//
// 职责：输入层与编辑核心之间的统一命令

use crate::viewport::Motion;

/// 编辑器动作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorAction {
    /// 光标导航
    Move(Motion),
    /// 插入一个可打印字节
    InsertChar(u8),
    /// 退格
    DeleteBackward,
    /// Delete 键
    DeleteForward,
    /// 回车分行
    SplitLine,
    Save,
    BuildAndRun,
    Quit,
}
