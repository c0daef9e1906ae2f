//! 上传管理 - 业务能力层
//!
//! 持有上传会话，负责文件的接纳、预览与删除

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::infrastructure::{DisplayHandle, View};
use crate::models::{CandidateFile, FileId, MediaKind, PendingFile};

/// 上传会话
///
/// 按插入顺序保存已接纳的文件，插入顺序即显示顺序
#[derive(Debug, Default)]
pub struct UploadSession {
    files: Vec<PendingFile>,
    next_id: u64,
}

impl UploadSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// 只接纳图片和视频，其余返回 `None`
    fn admit(&mut self, candidate: CandidateFile) -> Option<&PendingFile> {
        let mime_type = candidate.mime_type?;
        let kind = MediaKind::from_mime(&mime_type)?;

        self.next_id += 1;
        self.files.push(PendingFile {
            id: FileId(self.next_id),
            name: candidate.name,
            mime_type,
            kind,
            bytes: candidate.bytes,
        });
        self.files.last()
    }

    fn remove(&mut self, id: FileId) -> Option<PendingFile> {
        let index = self.files.iter().position(|f| f.id == id)?;
        Some(self.files.remove(index))
    }

    pub fn files(&self) -> &[PendingFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn contains(&self, id: FileId) -> bool {
        self.files.iter().any(|f| f.id == id)
    }
}

/// 上传管理器
///
/// 每个文件对应一个预览句柄；删除或重置时必须释放
#[derive(Debug, Default)]
pub struct UploadManager {
    session: UploadSession,
    handles: HashMap<FileId, DisplayHandle>,
}

impl UploadManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &UploadSession {
        &self.session
    }

    /// 添加文件
    ///
    /// 过滤掉非图片/视频文件，按给定顺序追加并渲染预览
    ///
    /// # 返回
    /// 新接纳文件的标识，按接纳顺序
    pub fn add_files<V, I>(&mut self, view: &mut V, candidates: I) -> Vec<FileId>
    where
        V: View + ?Sized,
        I: IntoIterator<Item = CandidateFile>,
    {
        let mut accepted = Vec::new();

        for candidate in candidates {
            let name = candidate.name.clone();
            let declared = candidate.mime_type.clone();

            let Some(file) = self.session.admit(candidate) else {
                warn!("忽略非图片/视频文件: {} ({:?})", name, declared);
                continue;
            };

            let handle = view.create_display_handle(file);
            view.render_preview(file, &handle);
            debug!("已添加文件 {} -> {}", file.id, file.name);

            accepted.push(file.id);
            self.handles.insert(file.id, handle);
        }

        accepted
    }

    /// 删除单个文件
    ///
    /// # 返回
    /// 文件不在会话中时返回 `false`，不做任何改动
    pub fn remove_file<V: View + ?Sized>(&mut self, view: &mut V, id: FileId) -> bool {
        let Some(file) = self.session.remove(id) else {
            return false;
        };

        view.remove_preview(file.id);
        if let Some(handle) = self.handles.remove(&file.id) {
            view.revoke_display_handle(&handle);
        }
        debug!("已删除文件 {} -> {}", file.id, file.name);
        true
    }

    /// 清空会话、全部预览并释放全部句柄
    pub fn reset<V: View + ?Sized>(&mut self, view: &mut V) {
        for file in self.session.files.drain(..) {
            if let Some(handle) = self.handles.remove(&file.id) {
                view.revoke_display_handle(&handle);
            }
        }
        self.handles.clear();
        view.clear_previews();
    }
}
