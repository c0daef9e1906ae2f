/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 清单服务地址（不含路径）
    pub api_base_url: String,
    /// 请求超时（秒）
    pub request_timeout_secs: u64,
    /// 行程 TOML 文件路径
    pub trip_file: String,
    /// 导出清单的目录
    pub export_dir: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            request_timeout_secs: 120,
            trip_file: "trip.toml".to_string(),
            export_dir: ".".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            api_base_url: std::env::var("CHECKLIST_API_BASE_URL").unwrap_or(default.api_base_url),
            request_timeout_secs: std::env::var("CHECKLIST_REQUEST_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.request_timeout_secs),
            trip_file: std::env::var("TRIP_FILE").unwrap_or(default.trip_file),
            export_dir: std::env::var("EXPORT_DIR").unwrap_or(default.export_dir),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }

    /// 用命令行参数覆盖行程文件路径
    pub fn with_trip_file(mut self, trip_file: Option<String>) -> Self {
        if let Some(path) = trip_file {
            self.trip_file = path;
        }
        self
    }
}
