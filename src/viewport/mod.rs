// Viewport System - 视口系统
//
// 职责：维护可见区域，处理光标移动，
//       保证光标始终位于可见区域之内

pub mod scroll;
pub mod viewport;

pub use scroll::{move_cursor, Motion};
pub use viewport::Viewport;
