/// 清单服务客户端
///
/// 封装对 `POST /api/generate-checklist` 的调用
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{ChecklistResponse, TripRequest};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use std::time::Duration;
use tracing::{debug, info};

/// 清单生成接口路径
pub const GENERATE_CHECKLIST_PATH: &str = "/api/generate-checklist";

/// 清单生成服务
///
/// 提交控制器只依赖这个能力，测试时可替换为假实现
#[async_trait]
pub trait ChecklistApi: Send + Sync {
    async fn generate_checklist(&self, request: TripRequest<'_>) -> Result<ChecklistResponse>;
}

/// 基于 reqwest 的清单服务客户端
pub struct ChecklistClient {
    client: reqwest::Client,
    endpoint: String,
}

impl ChecklistClient {
    /// 创建新的清单客户端
    pub fn new(config: &Config) -> Result<Self> {
        let base_url = &config.api_base_url;
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(AppError::Config(format!(
                "清单服务地址必须以 http:// 或 https:// 开头: {}",
                base_url
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint_url(&config.api_base_url),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// 构建 multipart 请求体
    ///
    /// 每个文件都作为一个 `files` 分段，随后是四个表单字段
    fn build_form(request: &TripRequest<'_>) -> Result<Form> {
        let mut form = Form::new();

        for file in request.files {
            let part = Part::bytes(file.bytes.clone())
                .file_name(file.name.clone())
                .mime_str(&file.mime_type)?;
            form = form.part("files", part);
        }

        Ok(form
            .text("destination", request.fields.destination.clone())
            .text("start_date", request.fields.start_date.clone())
            .text("end_date", request.fields.end_date.clone())
            .text("notes", request.fields.notes.clone()))
    }
}

#[async_trait]
impl ChecklistApi for ChecklistClient {
    async fn generate_checklist(&self, request: TripRequest<'_>) -> Result<ChecklistResponse> {
        let form = Self::build_form(&request)?;

        info!(
            "📤 提交 {} 个文件 ({} 字节) 到 {}",
            request.files.len(),
            request.total_bytes(),
            self.endpoint
        );

        let response = self.client.post(&self.endpoint).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::BadStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        debug!("清单服务响应: {}", crate::utils::truncate_text(&body, 500));

        let checklist: ChecklistResponse = serde_json::from_str(&body)?;
        Ok(checklist)
    }
}

/// 拼接接口地址，容忍末尾多余的 `/`
fn endpoint_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), GENERATE_CHECKLIST_PATH)
}
