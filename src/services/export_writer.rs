//! 清单导出 - 业务能力层
//!
//! 只负责把导出文本写到 `travel-checklist.txt`

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{AppError, Result};

/// 导出文件名
pub const EXPORT_FILE_NAME: &str = "travel-checklist.txt";

/// 清单导出服务
pub struct ExportWriter {
    export_dir: PathBuf,
}

impl ExportWriter {
    /// 导出到当前目录
    pub fn new() -> Self {
        Self::with_dir(".")
    }

    /// 导出到指定目录
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            export_dir: dir.into(),
        }
    }

    pub fn export_path(&self) -> PathBuf {
        self.export_dir.join(EXPORT_FILE_NAME)
    }

    /// 写入导出文本，已存在的文件会被覆盖
    ///
    /// # 返回
    /// 写入的文件路径
    pub async fn download(&self, text: &str) -> Result<PathBuf> {
        let path = self.export_path();
        ensure_dir(&self.export_dir).await?;

        tokio::fs::write(&path, text.as_bytes())
            .await
            .map_err(|e| AppError::file(&path, e))?;

        info!("💾 清单已导出: {} ({} 字节)", path.display(), text.len());
        Ok(path)
    }
}

impl Default for ExportWriter {
    fn default() -> Self {
        Self::new()
    }
}

async fn ensure_dir(dir: &Path) -> Result<()> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| AppError::file(dir, e))
}
