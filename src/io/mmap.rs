// 内存映射缓冲区
//
// 职责：为大文件提供只读内存映射，避免加载时额外复制一份内容

use std::fs::File;
use std::io;
use std::path::Path;

use memmap2::Mmap;

/// 只读内存映射（大文件支持）
#[derive(Debug)]
pub struct MmapBuffer {
    mmap: Option<Mmap>,     // 空文件不映射
}

impl MmapBuffer {
    pub fn from_file(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        let length = file.metadata()?.len();

        if length == 0 {
            return Ok(Self::empty());
        }

        // SAFETY: 映射只在加载期间短暂存在，期间不会写入该文件
        let mmap = unsafe { Mmap::map(&file)? };

        Ok(Self { mmap: Some(mmap) })
    }

    pub fn empty() -> Self {
        Self { mmap: None }
    }

    /// 获取缓冲区长度（字节）
    pub fn len(&self) -> usize {
        self.mmap.as_ref().map_or(0, |mmap| mmap.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.mmap.as_deref().unwrap_or(&[])
    }
}
