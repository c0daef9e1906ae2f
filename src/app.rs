use crate::clients::ChecklistClient;
use crate::config::Config;
use crate::infrastructure::{TerminalView, View};
use crate::models::load_trip_plan;
use crate::services::ExportWriter;
use crate::utils::logging::{log_startup, print_final_stats};
use crate::workflow::ChecklistController;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    client: ChecklistClient,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config.api_base_url, &config.trip_file);

        let client = ChecklistClient::new(&config).context("无法创建清单服务客户端")?;

        Ok(Self { config, client })
    }

    /// 运行应用主逻辑
    ///
    /// 读取行程文件 → 添加文件 → 提交 → 导出清单
    pub async fn run(self) -> Result<()> {
        let trip_path = Path::new(&self.config.trip_file);
        info!("\n📁 正在读取行程文件...");
        let plan = load_trip_plan(trip_path)
            .await
            .with_context(|| format!("无法加载行程文件: {}", trip_path.display()))?;

        let candidates = plan.load_candidates().await;

        let mut controller = ChecklistController::new(TerminalView::stdout(), self.client);
        controller.fill_form(plan.fields.clone());

        let accepted = controller.add_files(candidates);
        if accepted.len() < plan.files.len() {
            warn!(
                "⚠️ {} 个文件未被接纳（读取失败或不是图片/视频）",
                plan.files.len() - accepted.len()
            );
        }

        controller
            .submit()
            .await
            .with_context(|| format!("为 {} 生成清单失败", plan.fields.destination))?;

        let text = controller
            .export_text()
            .context("清单页面没有可导出的内容")?;

        let writer = ExportWriter::with_dir(&self.config.export_dir);
        let export_path = writer.download(&text).await?;

        if let Some(doc) = controller.view().checklist() {
            print_final_stats(
                &plan.fields.destination,
                doc.groups.len(),
                doc.item_count(),
                &export_path.display().to_string(),
            );
        }

        Ok(())
    }
}
