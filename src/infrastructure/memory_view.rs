//! 内存渲染面
//!
//! 不输出任何内容，只记录状态，供测试和无界面运行使用

use std::collections::HashMap;

use super::view::{ChecklistDocument, DisplayHandle, View};
use crate::models::{FileId, MediaKind, PendingFile};
use crate::workflow::PageState;

/// 一条预览记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub file_id: FileId,
    pub name: String,
    pub kind: MediaKind,
    pub handle: DisplayHandle,
}

#[derive(Debug, Default)]
pub struct MemoryView {
    active_page: Option<PageState>,
    page_history: Vec<PageState>,
    next_handle: u64,
    live_handles: HashMap<DisplayHandle, FileId>,
    revoked: Vec<DisplayHandle>,
    previews: Vec<Preview>,
    notifications: Vec<String>,
    checklist: Option<ChecklistDocument>,
    date_bounds: Option<(String, String)>,
    form_resets: usize,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_page(&self) -> Option<PageState> {
        self.active_page
    }

    /// 依次激活过的页面
    pub fn page_history(&self) -> &[PageState] {
        &self.page_history
    }

    pub fn previews(&self) -> &[Preview] {
        &self.previews
    }

    pub fn live_handle_count(&self) -> usize {
        self.live_handles.len()
    }

    pub fn is_live(&self, handle: &DisplayHandle) -> bool {
        self.live_handles.contains_key(handle)
    }

    pub fn revoked_handles(&self) -> &[DisplayHandle] {
        &self.revoked
    }

    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }

    pub fn date_bounds(&self) -> Option<(&str, &str)> {
        self.date_bounds
            .as_ref()
            .map(|(start, end)| (start.as_str(), end.as_str()))
    }

    pub fn form_resets(&self) -> usize {
        self.form_resets
    }
}

impl View for MemoryView {
    fn show_page(&mut self, page: PageState) {
        self.active_page = Some(page);
        self.page_history.push(page);
    }

    fn create_display_handle(&mut self, file: &PendingFile) -> DisplayHandle {
        self.next_handle += 1;
        let handle = DisplayHandle(format!("blob:memory/{}", self.next_handle));
        self.live_handles.insert(handle.clone(), file.id);
        handle
    }

    fn revoke_display_handle(&mut self, handle: &DisplayHandle) {
        if self.live_handles.remove(handle).is_some() {
            self.revoked.push(handle.clone());
        }
    }

    fn render_preview(&mut self, file: &PendingFile, handle: &DisplayHandle) {
        self.previews.push(Preview {
            file_id: file.id,
            name: file.name.clone(),
            kind: file.kind,
            handle: handle.clone(),
        });
    }

    fn remove_preview(&mut self, id: FileId) {
        self.previews.retain(|p| p.file_id != id);
    }

    fn clear_previews(&mut self) {
        self.previews.clear();
    }

    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }

    fn render_checklist(&mut self, document: ChecklistDocument) {
        self.checklist = Some(document);
    }

    fn checklist(&self) -> Option<&ChecklistDocument> {
        self.checklist.as_ref()
    }

    fn checklist_mut(&mut self) -> Option<&mut ChecklistDocument> {
        self.checklist.as_mut()
    }

    fn set_date_bounds(&mut self, min_start: &str, min_end: &str) {
        self.date_bounds = Some((min_start.to_string(), min_end.to_string()));
    }

    fn reset_form(&mut self) {
        self.form_resets += 1;
    }
}
