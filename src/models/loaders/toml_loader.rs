use crate::error::{AppError, Result};
use crate::models::pending_file::CandidateFile;
use crate::models::trip::TripFields;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs;

/// 行程文件：表单字段 + 待上传文件列表
#[derive(Debug, Clone, Deserialize)]
pub struct TripPlan {
    #[serde(flatten)]
    pub fields: TripFields,
    #[serde(default)]
    pub files: Vec<PathBuf>,
    /// 行程文件所在目录，相对路径以此为基准
    #[serde(skip)]
    pub base_dir: PathBuf,
}

/// 从 TOML 文件加载行程
pub async fn load_trip_plan(toml_file_path: &Path) -> Result<TripPlan> {
    let content = fs::read_to_string(toml_file_path)
        .await
        .map_err(|e| AppError::file(toml_file_path, e))?;

    let mut plan: TripPlan = toml::from_str(&content).map_err(|e| AppError::TomlParse {
        path: toml_file_path.to_path_buf(),
        source: e,
    })?;

    plan.base_dir = toml_file_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();

    tracing::info!(
        "成功加载行程: {} ({} 个文件)",
        plan.fields.destination,
        plan.files.len()
    );

    Ok(plan)
}

impl TripPlan {
    /// 文件的实际路径
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    /// 读取行程中列出的全部文件
    ///
    /// 读取失败的文件跳过并记录警告，不影响其他文件
    pub async fn load_candidates(&self) -> Vec<CandidateFile> {
        let mut candidates = Vec::with_capacity(self.files.len());

        for path in &self.files {
            let full_path = self.resolve(path);
            match CandidateFile::from_path(&full_path).await {
                Ok(candidate) => candidates.push(candidate),
                Err(e) => tracing::warn!("读取文件失败 {}: {}", full_path.display(), e),
            }
        }

        candidates
    }
}
