use anyhow::Result;
use trip_checklist::{utils, App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置，第一个参数可覆盖行程文件路径
    let config = Config::from_env().with_trip_file(std::env::args().nth(1));

    // 初始化日志
    utils::logging::init(config.verbose_logging);

    // 初始化并运行应用
    App::initialize(config).await?.run().await?;

    Ok(())
}
