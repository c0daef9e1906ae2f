//! 待上传文件
//!
//! 用户选择（或拖入）的文件，上传前只存在于内存中

use std::fmt;
use std::path::Path;

/// 会话内唯一的文件标识
///
/// 同名文件各自拥有独立的 `FileId`，删除按标识进行
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub(crate) u64);

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file-{}", self.0)
    }
}

/// 预览类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// 根据 MIME 类型判断预览类型，非图片/视频返回 `None`
    pub fn from_mime(mime_type: &str) -> Option<Self> {
        let normalized = normalize_mime_type(mime_type);
        let (top, sub) = normalized.split_once('/')?;
        if sub.is_empty() {
            return None;
        }
        match top {
            "image" => Some(MediaKind::Image),
            "video" => Some(MediaKind::Video),
            _ => None,
        }
    }
}

/// 去掉 MIME 参数并转为小写（"image/JPEG; q=1" -> "image/jpeg"）
fn normalize_mime_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .map(|s| s.trim())
        .unwrap_or(content_type)
        .to_lowercase()
}

/// 候选文件：用户选择但尚未经过过滤的文件
#[derive(Debug, Clone)]
pub struct CandidateFile {
    pub name: String,
    /// 声明的 MIME 类型，未知时为 `None`
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl CandidateFile {
    pub fn new(name: impl Into<String>, mime_type: Option<&str>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.map(str::to_string),
            bytes,
        }
    }

    /// 从磁盘读取文件，MIME 类型由扩展名推断
    pub async fn from_path(path: &Path) -> crate::Result<Self> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| crate::AppError::file(path, e))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Ok(Self::new(name, mime_from_extension(path), bytes))
    }
}

/// 已接纳进会话的文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFile {
    pub id: FileId,
    pub name: String,
    pub mime_type: String,
    pub kind: MediaKind,
    pub bytes: Vec<u8>,
}

impl PendingFile {
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// 根据扩展名推断 MIME 类型
///
/// 常见的非媒体类型也会被识别，由上传管理器负责拒绝
pub fn mime_from_extension(path: &Path) -> Option<&'static str> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())?;

    let mime = match extension.as_str() {
        // 图片
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "avif" => "image/avif",
        "heic" => "image/heic",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        // 视频
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        "avi" => "video/x-msvideo",
        "mkv" => "video/x-matroska",
        "m4v" => "video/x-m4v",
        // 其他
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        "csv" => "text/csv",
        "json" => "application/json",
        "zip" => "application/zip",
        _ => return None,
    };
    Some(mime)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_kind_from_mime() {
        assert_eq!(MediaKind::from_mime("image/png"), Some(MediaKind::Image));
        assert_eq!(MediaKind::from_mime("video/mp4"), Some(MediaKind::Video));
        assert_eq!(MediaKind::from_mime("Image/JPEG; q=1"), Some(MediaKind::Image));
        assert_eq!(MediaKind::from_mime("application/pdf"), None);
        assert_eq!(MediaKind::from_mime("audio/mpeg"), None);
    }

    #[test]
    fn test_ambiguous_mime_is_rejected() {
        assert_eq!(MediaKind::from_mime(""), None);
        assert_eq!(MediaKind::from_mime("image"), None);
        assert_eq!(MediaKind::from_mime("image/"), None);
        assert_eq!(MediaKind::from_mime("imagery/png"), None);
    }

    #[test]
    fn test_mime_from_extension() {
        assert_eq!(mime_from_extension(Path::new("a/b/shrine.JPG")), Some("image/jpeg"));
        assert_eq!(mime_from_extension(Path::new("street.mov")), Some("video/quicktime"));
        assert_eq!(mime_from_extension(Path::new("notes.txt")), Some("text/plain"));
        assert_eq!(mime_from_extension(Path::new("README")), None);
        assert_eq!(mime_from_extension(Path::new("blob.xyz")), None);
    }

    #[test]
    fn test_file_id_display() {
        assert_eq!(FileId(7).to_string(), "file-7");
    }
}
