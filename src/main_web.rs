//! Web 服务器入口点

use anyhow::Result;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gdrive_folder_link::{config::Config, web, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gdrive_folder_link=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("🚀 Drive 链接解析服务启动中...");

    // 加载配置（支持环境变量 CONFIG_PATH 或命令行参数）
    let config_path = std::env::var("CONFIG_PATH")
        .ok()
        .or_else(|| std::env::args().nth(1))
        .unwrap_or_else(|| "config.toml".to_string());
    let config = Config::load(&config_path)?;

    let state = Arc::new(AppState::new(config)?);
    let addr = state.config.bind_addr();
    let port = state.config.web.port;

    let app = web::create_router(state);

    tracing::info!("🌐 Web 服务器启动在: http://{}", addr);
    tracing::info!("💚 健康检查: http://localhost:{}/health", port);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
