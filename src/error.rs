use std::path::PathBuf;

use thiserror::Error;

use crate::workflow::PageState;

/// 提交失败时展示给用户的通用提示
pub const SUBMISSION_FAILED_MESSAGE: &str = "Failed to generate checklist. Please try again.";

/// 没有选择文件时展示给用户的提示
pub const EMPTY_SUBMISSION_MESSAGE: &str = "Please upload at least one image or video";

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 会话中没有任何文件，不发起网络请求
    #[error("没有可提交的文件")]
    EmptySubmission,

    /// 网络请求失败（连接、超时、构造请求体）
    #[error("请求清单服务失败: {0}")]
    Request(#[from] reqwest::Error),

    /// 服务返回非成功状态码
    #[error("清单服务返回错误状态: {status}")]
    BadStatus { status: u16 },

    /// 响应体不是合法的清单 JSON
    #[error("无法解析清单响应: {0}")]
    Decode(#[from] serde_json::Error),

    /// 非法的页面切换
    #[error("非法的页面切换: {from} -> {to}")]
    InvalidTransition { from: PageState, to: PageState },

    /// 文件读写失败
    #[error("文件操作失败 ({}): {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML 解析失败
    #[error("TOML解析失败 ({}): {source}", .path.display())]
    TomlParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(String),
}

impl AppError {
    /// 是否属于"网络或服务端失败"一类
    ///
    /// 这三类错误对用户展示同一条提示，不区分具体原因
    pub fn is_submission_failure(&self) -> bool {
        matches!(
            self,
            AppError::Request(_) | AppError::BadStatus { .. } | AppError::Decode(_)
        )
    }

    /// 展示给用户的提示文本
    pub fn user_message(&self) -> String {
        match self {
            AppError::EmptySubmission => EMPTY_SUBMISSION_MESSAGE.to_string(),
            e if e.is_submission_failure() => SUBMISSION_FAILED_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }

    pub(crate) fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::File {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_failures_share_one_message() {
        let status = AppError::BadStatus { status: 500 };
        let decode = AppError::Decode(serde_json::from_str::<u8>("nope").unwrap_err());

        assert!(status.is_submission_failure());
        assert!(decode.is_submission_failure());
        assert_eq!(status.user_message(), SUBMISSION_FAILED_MESSAGE);
        assert_eq!(decode.user_message(), SUBMISSION_FAILED_MESSAGE);
    }

    #[test]
    fn test_empty_submission_message() {
        let err = AppError::EmptySubmission;
        assert!(!err.is_submission_failure());
        assert_eq!(err.user_message(), EMPTY_SUBMISSION_MESSAGE);
    }
}
