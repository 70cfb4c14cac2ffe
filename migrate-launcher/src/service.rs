//! 迁移服务模块

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::process::ExitStatus;

use crate::command::{MigrateCommand, MIGRATION_TOOL};
use common::models::ConnectionConfig;

/// 迁移服务 Trait
#[async_trait]
pub trait MigrateServiceTrait: Send + Sync {
    /// 调用外部迁移工具并等待其结束
    async fn run(&self, config: &ConnectionConfig, args: &[String]) -> Result<ExitStatus>;
}

/// 数据库迁移服务
pub struct MigrateService;

impl MigrateService {
    /// 创建新的迁移服务实例
    pub fn new() -> Self {
        Self
    }
}

impl Default for MigrateService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MigrateServiceTrait for MigrateService {
    async fn run(&self, config: &ConnectionConfig, args: &[String]) -> Result<ExitStatus> {
        let url = config.database_url();
        let command = MigrateCommand::new(args, &url);

        // 执行前完整打印命令行
        println!("Running command: {}", command);
        tracing::info!(tool = MIGRATION_TOOL, "launching migration tool");

        let status = command
            .status()
            .await
            .context("Failed to execute migration tool")?;

        tracing::info!(code = ?status.code(), "migration tool finished");
        Ok(status)
    }
}
