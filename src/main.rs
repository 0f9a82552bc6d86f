mod classifier;
mod common;
mod model;
mod pages;
mod prediction;
mod server;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use classifier::{ArtifactClassifier, Classifier};
use model::arg::Args;
use model::config::Config;
use server::{AppState, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 解析命令行参数
    let args = Args::parse();

    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 加载配置
    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| Config::default_config_path().to_string());
    let mut config = Config::load(&config_path)?;
    args.apply_overrides(&mut config);
    tracing::info!(
        "已加载配置: {}",
        config
            .config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    );

    // 加载模型（进程生命周期内只加载一次）
    let classifier = ArtifactClassifier::load(&config.model_path)?;
    let info = classifier.info();
    tracing::info!(
        path = %info.path,
        kind = info.kind,
        classes = ?info.classes,
        sha256 = %info.sha256,
        "模型已加载"
    );

    let state = AppState::new(Arc::new(classifier), config.page_title.as_str());
    let app = create_router(state);

    // 启动服务器
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("监听地址失败: {}", addr))?;
    tracing::info!("启动 HTTP 服务器: http://{}", addr);
    tracing::info!("可用页面:");
    tracing::info!("  GET  /?section=home|types|factors|predictor");
    tracing::info!("  POST /predict");
    tracing::info!("  POST /api/predict");
    tracing::info!("  GET  /api/model");

    axum::serve(listener, app).await?;
    Ok(())
}
