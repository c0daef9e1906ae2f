//! 终端渲染面
//!
//! 把页面与清单输出到标准输出，预览句柄只在内存中登记

use std::collections::HashSet;
use std::io::{self, Write};

use tracing::{debug, warn};

use super::view::{ChecklistDocument, DisplayHandle, View};
use crate::models::{FileId, MediaKind, PendingFile};
use crate::workflow::PageState;

pub struct TerminalView<W: Write = io::Stdout> {
    out: W,
    next_handle: u64,
    live_handles: HashSet<DisplayHandle>,
    previews: Vec<(FileId, DisplayHandle)>,
    checklist: Option<ChecklistDocument>,
}

impl TerminalView<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            next_handle: 0,
            live_handles: HashSet::new(),
            previews: Vec::new(),
            checklist: None,
        }
    }

    pub fn live_handle_count(&self) -> usize {
        self.live_handles.len()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            warn!("终端输出失败: {}", e);
        }
    }

    fn print_checklist(&mut self) {
        let Some(doc) = self.checklist.clone() else {
            return;
        };
        self.line(&doc.destination_line);
        self.line(&doc.dates_line);
        for group in &doc.groups {
            self.line("");
            self.line(&format!("## {}", group.title));
            for item in &group.items {
                let mark = if item.checked { "x" } else { " " };
                self.line(&format!("  [{}] {}", mark, item.label));
            }
        }
    }
}

impl<W: Write> View for TerminalView<W> {
    fn show_page(&mut self, page: PageState) {
        self.line(&format!("\n{}", "─".repeat(60)));
        self.line(&format!("▶ {}", page.title()));
        self.line(&"─".repeat(60));
        if page == PageState::Checklist {
            self.print_checklist();
        }
    }

    fn create_display_handle(&mut self, file: &PendingFile) -> DisplayHandle {
        self.next_handle += 1;
        let handle = DisplayHandle(format!("blob:terminal/{}", self.next_handle));
        debug!("分配预览句柄 {} -> {}", handle, file.name);
        self.live_handles.insert(handle.clone());
        handle
    }

    fn revoke_display_handle(&mut self, handle: &DisplayHandle) {
        if self.live_handles.remove(handle) {
            debug!("释放预览句柄 {}", handle);
        }
    }

    fn render_preview(&mut self, file: &PendingFile, handle: &DisplayHandle) {
        let icon = match file.kind {
            MediaKind::Image => "🖼",
            MediaKind::Video => "🎞 (muted)",
        };
        self.line(&format!("  {} {} [{} bytes]", icon, file.name, file.size()));
        self.previews.push((file.id, handle.clone()));
    }

    fn remove_preview(&mut self, id: FileId) {
        self.previews.retain(|(file_id, _)| *file_id != id);
    }

    fn clear_previews(&mut self) {
        self.previews.clear();
    }

    fn notify(&mut self, message: &str) {
        self.line(&format!("⚠️ {}", message));
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
        debug!("日期下限: start >= {}, end >= {}", min_start, min_end);
    }

    fn reset_form(&mut self) {
        debug!("表单已重置");
    }
}
