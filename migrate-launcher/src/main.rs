//! 数据库迁移启动器
//!
//! 从环境变量读取数据库连接参数，拼接连接 URL，
//! 并调用外部迁移工具（sea-orm-cli）执行迁移：
//! - 支持从 .env 文件加载缺省配置（不覆盖已有变量）
//! - 透传全部命令行参数
//! - 透传迁移工具的退出码

mod command;
mod service;

use std::path::Path;

use common::models::ConnectionConfig;
use common::utils::load_env_file;
use service::{MigrateService, MigrateServiceTrait};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const ENV_FILE: &str = ".env";

#[tokio::main]
async fn main() {
    // Load .env file (if present) before anything else
    load_env_file(Path::new(ENV_FILE));

    // 初始化日志追踪
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // 加载配置（缺失时不启动外部工具）
    let config = match ConnectionConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "缺少必需的数据库配置");
            std::process::exit(1);
        }
    };

    // 透传本程序收到的全部参数（不含程序名）
    let args: Vec<String> = std::env::args().skip(1).collect();

    let service = MigrateService::new();
    match service.run(&config, &args).await {
        // 透传迁移工具的退出码（被信号终止时按失败处理）
        Ok(status) => std::process::exit(status.code().unwrap_or(1)),
        Err(e) => {
            tracing::error!(error = %e, "迁移工具执行失败");
            std::process::exit(1);
        }
    }
}
