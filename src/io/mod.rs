// IO System - IO系统
//
// 职责：提供统一的文件访问接口，
//       小文件整体读入，大文件通过内存映射读取

pub mod file;
pub mod mmap;

pub use file::{FileError, FileIO, MMAP_THRESHOLD};
pub use mmap::MmapBuffer;
