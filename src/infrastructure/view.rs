//! 渲染面 - 基础设施层
//!
//! 页面、预览、提示框与清单展示都通过 `View` 完成。
//! 上层只描述"要显示什么"，不关心显示在终端还是内存里。

use std::fmt;

use crate::models::{FileId, PendingFile};
use crate::workflow::PageState;

/// 本地文件的临时预览句柄
///
/// 由 `View` 分配，必须通过 `revoke_display_handle` 显式释放
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayHandle(pub(crate) String);

impl fmt::Display for DisplayHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 已渲染的清单
///
/// 导出文本以这里的内容为准，而不是原始响应
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChecklistDocument {
    /// `Destination: <destination>`
    pub destination_line: String,
    /// `Travel Dates: <start> - <end>`
    pub dates_line: String,
    pub groups: Vec<CategoryGroup>,
}

/// 一个分类分组
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub title: String,
    pub items: Vec<CheckboxItem>,
}

/// 带标签的复选框
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxItem {
    /// `item-<category>-<index>`，同名分类会产生重复 id
    pub id: String,
    pub label: String,
    pub checked: bool,
}

impl ChecklistDocument {
    /// 查找第一个 id 匹配的复选框
    pub fn item(&self, id: &str) -> Option<&CheckboxItem> {
        self.groups
            .iter()
            .flat_map(|g| g.items.iter())
            .find(|item| item.id == id)
    }

    /// 切换复选框状态，返回切换后的值
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        let item = self
            .groups
            .iter_mut()
            .flat_map(|g| g.items.iter_mut())
            .find(|item| item.id == id)?;
        item.checked = !item.checked;
        Some(item.checked)
    }

    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }
}

/// 渲染面
pub trait View {
    /// 激活指定页面，其余页面全部隐藏
    fn show_page(&mut self, page: PageState);

    /// 为文件分配预览句柄
    fn create_display_handle(&mut self, file: &PendingFile) -> DisplayHandle;

    /// 释放预览句柄
    fn revoke_display_handle(&mut self, handle: &DisplayHandle);

    /// 显示文件预览（图片或静音视频）
    fn render_preview(&mut self, file: &PendingFile, handle: &DisplayHandle);

    /// 移除单个文件的预览
    fn remove_preview(&mut self, id: FileId);

    /// 清空全部预览
    fn clear_previews(&mut self);

    /// 阻塞式提示框
    fn notify(&mut self, message: &str);

    /// 替换当前显示的清单
    fn render_checklist(&mut self, document: ChecklistDocument);

    /// 当前显示的清单
    fn checklist(&self) -> Option<&ChecklistDocument>;

    fn checklist_mut(&mut self) -> Option<&mut ChecklistDocument>;

    /// 更新日期控件的最小可选日期
    fn set_date_bounds(&mut self, min_start: &str, min_end: &str);

    /// 清空表单输入
    fn reset_form(&mut self);
}
