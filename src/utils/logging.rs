/// 日志工具模块
///
/// 提供日志初始化和输出的辅助函数
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化 tracing 日志
///
/// `RUST_LOG` 优先；否则按 `verbose` 选择 `debug` 或 `info`
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `api_base_url`: 清单服务地址
/// - `trip_file`: 行程文件路径
pub fn log_startup(api_base_url: &str, trip_file: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 旅行清单生成");
    info!("🌐 清单服务: {}", api_base_url);
    info!("📄 行程文件: {}", trip_file);
    info!("{}", "=".repeat(60));
}

/// 打印最终结果
///
/// # 参数
/// - `destination`: 目的地
/// - `categories`: 分类数量
/// - `items`: 条目数量
/// - `export_path`: 导出文件路径
pub fn print_final_stats(destination: &str, categories: usize, items: usize, export_path: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 清单生成完成");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("📍 目的地: {}", destination);
    info!("🗂 分类: {} | 条目: {}", categories, items);
    info!("{}", "=".repeat(60));
    info!("\n清单已保存至: {}", export_path);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
