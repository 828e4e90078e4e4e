// Application - 应用层
//
// 职责：单线程事件循环：等待输入 -> 执行一个动作 -> 渲染一帧

pub mod session;

pub use session::{Session, SAVED_MESSAGE};
