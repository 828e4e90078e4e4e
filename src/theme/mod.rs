// Theme System - 主题系统
//
// 职责：管理外观主题数据，
//       不参与编辑逻辑，通过 Render System 影响终端配色

pub mod theme;

pub use theme::{Theme, TokenStyle};
