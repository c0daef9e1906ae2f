use serde::{Deserialize, Serialize};

use super::pending_file::PendingFile;

/// 行程表单字段
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripFields {
    pub destination: String,
    /// 表单中的原始日期字符串（通常为 `YYYY-MM-DD`）
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub notes: String,
}

impl TripFields {
    pub fn new(
        destination: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            destination: destination.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
            notes: notes.into(),
        }
    }
}

/// 一次提交的完整内容：表单字段 + 会话中的全部文件
///
/// 结束日期早于开始日期不做校验，按原样发送
#[derive(Debug, Clone, Copy)]
pub struct TripRequest<'a> {
    pub fields: &'a TripFields,
    pub files: &'a [PendingFile],
}

impl<'a> TripRequest<'a> {
    pub fn new(fields: &'a TripFields, files: &'a [PendingFile]) -> Self {
        Self { fields, files }
    }

    pub fn total_bytes(&self) -> usize {
        self.files.iter().map(PendingFile::size).sum()
    }
}
