// Input System - 输入系统
//
// 职责：将终端按键事件归一化并映射到 EditorAction

pub mod keymap;

pub use keymap::map_key;
