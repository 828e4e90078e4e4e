// 文件读写
//
// 职责：把文件读成行序列、把文档写回文件；
//       加载失败一律当作新文件，保存失败交给调用方提示

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::core::buffer::{split_lines, Line};
use crate::core::Document;
use crate::io::mmap::MmapBuffer;

/// 达到该大小的文件使用内存映射读取
pub const MMAP_THRESHOLD: u64 = 10 * 1024 * 1024; // 10MB

/// 文件读写错误
#[derive(Debug, Error)]
pub enum FileError {
    #[error("文件不存在: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("读取文件失败 {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("写入文件失败 {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

impl FileError {
    fn read(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            FileError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            FileError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// 文件访问入口
#[derive(Debug, Clone, Copy, Default)]
pub struct FileIO;

impl FileIO {
    /// 读取文件为行序列
    pub fn read_lines(path: &Path) -> Result<Vec<Line>, FileError> {
        let size = fs::metadata(path)
            .map_err(|e| FileError::read(path, e))?
            .len();

        let lines = if size >= MMAP_THRESHOLD {
            debug!(path = %path.display(), size, "reading through mmap");
            let buffer = MmapBuffer::from_file(path).map_err(|e| FileError::read(path, e))?;
            split_lines(buffer.as_bytes())
        } else {
            let bytes = fs::read(path).map_err(|e| FileError::read(path, e))?;
            split_lines(&bytes)
        };

        Ok(lines)
    }

    /// 加载文档；读取失败时得到只含一个空行的新文档
    pub fn load_document(path: &Path) -> Document {
        match Self::read_lines(path) {
            Ok(lines) => {
                info!(path = %path.display(), lines = lines.len(), "file loaded");
                Document::from_lines(lines)
            }
            Err(FileError::NotFound { .. }) => {
                info!(path = %path.display(), "new file");
                Document::new()
            }
            Err(err) => {
                warn!(%err, "load failed, starting with an empty document");
                Document::new()
            }
        }
    }

    /// 写回文档（每行后追加换行）
    pub fn write_document(path: &Path, document: &Document) -> Result<(), FileError> {
        fs::write(path, document.serialize()).map_err(|source| FileError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), lines = document.line_count(), "file saved");
        Ok(())
    }
}
