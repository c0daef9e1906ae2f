//! # Trip Checklist
//!
//! 上传旅行照片/视频，提交到清单服务，展示并导出旅行清单
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 渲染面，只暴露"显示"能力
//! - `View` - 页面、预览句柄、提示框、清单展示
//! - `TerminalView` / `MemoryView` - 终端输出 / 内存记录
//!
//! ### ② 客户端（Clients）
//! - `ChecklistApi` - 清单生成能力
//! - `ChecklistClient` - multipart 提交到 `/api/generate-checklist`
//!
//! ### ③ 业务能力层（Services）
//! - `UploadManager` - 上传会话：接纳、预览、删除、重置
//! - `checklist_renderer` - 清单渲染与纯文本导出
//! - `ExportWriter` - 写 `travel-checklist.txt`
//!
//! ### ④ 流程层（Workflow）
//! - `PageNavigator` - Upload / Loading / Checklist 三页状态机
//! - `TripForm` - 表单字段与日期下限
//! - `ChecklistController` - 完整流程（选择 → 提交 → 清单 → 返回）
//!
//! ## 模块结构

pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use clients::{ChecklistApi, ChecklistClient};
pub use config::Config;
pub use error::{AppError, Result};
pub use infrastructure::{MemoryView, TerminalView, View};
pub use models::{CandidateFile, ChecklistResponse, FileId, PendingFile, TripFields};
pub use workflow::{ChecklistController, PageState};
