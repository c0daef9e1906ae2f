//! 清单流程 - 流程层
//!
//! 核心职责：把上传管理、提交、渲染串成一个完整流程
//!
//! 流程顺序：
//! 1. 选择文件、填写表单（Upload）
//! 2. 提交并等待服务返回（Loading）
//! 3. 显示清单、导出或返回（Checklist）

use chrono::{NaiveDate, Utc};
use tracing::{error, info, warn};

use crate::clients::ChecklistApi;
use crate::error::{AppError, Result, EMPTY_SUBMISSION_MESSAGE, SUBMISSION_FAILED_MESSAGE};
use crate::infrastructure::View;
use crate::models::{CandidateFile, FileId, TripFields, TripRequest};
use crate::services::checklist_renderer;
use crate::services::{UploadManager, UploadSession};
use crate::workflow::page_state::{PageNavigator, PageState};
use crate::workflow::trip_form::TripForm;

/// 清单流程控制器
///
/// - 独占上传会话、表单、页面状态
/// - 提交期间持有 `&mut self`，不会出现并发提交或会话被修改
/// - 所有显示都通过 `View` 完成
pub struct ChecklistController<V: View, A: ChecklistApi> {
    view: V,
    api: A,
    uploads: UploadManager,
    form: TripForm,
    navigator: PageNavigator,
}

impl<V: View, A: ChecklistApi> ChecklistController<V, A> {
    /// 创建控制器，日期下限取当天（UTC）
    pub fn new(view: V, api: A) -> Self {
        Self::with_today(view, api, Utc::now().date_naive())
    }

    pub fn with_today(mut view: V, api: A, today: NaiveDate) -> Self {
        let navigator = PageNavigator::new();
        let form = TripForm::new(today);
        navigator.show(&mut view);
        form.sync_bounds(&mut view);

        Self {
            view,
            api,
            uploads: UploadManager::new(),
            form,
            navigator,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn page(&self) -> PageState {
        self.navigator.current()
    }

    pub fn session(&self) -> &UploadSession {
        self.uploads.session()
    }

    pub fn form(&self) -> &TripForm {
        &self.form
    }

    /// 上传控件只在 Upload 页面可用
    fn upload_controls_available(&self, action: &str) -> bool {
        if self.page() == PageState::Upload {
            true
        } else {
            warn!("当前页面 {} 不可{}", self.page(), action);
            false
        }
    }

    /// 添加文件（选择或拖入）
    pub fn add_files<I>(&mut self, candidates: I) -> Vec<FileId>
    where
        I: IntoIterator<Item = CandidateFile>,
    {
        if !self.upload_controls_available("添加文件") {
            return Vec::new();
        }
        self.uploads.add_files(&mut self.view, candidates)
    }

    /// 删除文件
    pub fn remove_file(&mut self, id: FileId) -> bool {
        if !self.upload_controls_available("删除文件") {
            return false;
        }
        self.uploads.remove_file(&mut self.view, id)
    }

    pub fn set_destination(&mut self, destination: impl Into<String>) {
        self.form.set_destination(destination);
    }

    pub fn set_start_date(&mut self, start_date: impl Into<String>) {
        self.form.set_start_date(&mut self.view, start_date);
    }

    pub fn set_end_date(&mut self, end_date: impl Into<String>) {
        self.form.set_end_date(end_date);
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.form.set_notes(notes);
    }

    pub fn fill_form(&mut self, fields: TripFields) {
        self.form.fill(&mut self.view, fields);
    }

    /// 提交行程
    ///
    /// - 会话为空：提示用户，不发请求，停留在 Upload
    /// - 成功：渲染清单并进入 Checklist
    /// - 失败：提示用户并回到 Upload，会话保留
    pub async fn submit(&mut self) -> Result<()> {
        if !self.page().can_transition_to(PageState::Loading) {
            return Err(AppError::InvalidTransition {
                from: self.page(),
                to: PageState::Loading,
            });
        }

        if self.uploads.session().is_empty() {
            warn!("未选择任何文件，取消提交");
            self.view.notify(EMPTY_SUBMISSION_MESSAGE);
            return Err(AppError::EmptySubmission);
        }

        self.navigator.go(&mut self.view, PageState::Loading)?;

        let request = TripRequest::new(self.form.fields(), self.uploads.session().files());
        info!(
            "📋 提交行程: {} ({} - {}), {} 个文件",
            request.fields.destination,
            request.fields.start_date,
            request.fields.end_date,
            request.files.len()
        );

        match self.api.generate_checklist(request).await {
            Ok(response) => {
                info!(
                    "✓ 清单生成成功: {} 个分类, {} 个条目",
                    response.categories().len(),
                    response.item_count()
                );
                checklist_renderer::render(&mut self.view, &response);
                self.navigator.go(&mut self.view, PageState::Checklist)?;
                Ok(())
            }
            Err(e) => {
                error!("❌ 清单生成失败: {}", e);
                self.view.notify(SUBMISSION_FAILED_MESSAGE);
                self.navigator.go(&mut self.view, PageState::Upload)?;
                Err(e)
            }
        }
    }

    /// 勾选或取消勾选条目
    pub fn toggle_item(&mut self, id: &str) -> Option<bool> {
        if self.page() != PageState::Checklist {
            return None;
        }
        self.view.checklist_mut()?.toggle(id)
    }

    /// 导出当前清单的纯文本
    pub fn export_text(&self) -> Option<String> {
        if self.page() != PageState::Checklist {
            return None;
        }
        checklist_renderer::export_as_text(&self.view)
    }

    /// 从清单返回上传页面，清空会话、预览和表单
    pub fn back(&mut self) -> Result<()> {
        self.navigator.go(&mut self.view, PageState::Upload)?;
        self.uploads.reset(&mut self.view);
        self.form.reset(&mut self.view);
        info!("↩ 已返回上传页面");
        Ok(())
    }
}
