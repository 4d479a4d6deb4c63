use anyhow::{anyhow, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gdrive_folder_link::{config::Config, gdrive, status, AppState};

const USAGE: &str = "用法: gdrive-folder-link extract <share_url> [config_path]\n      gdrive-folder-link status <code>";

fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gdrive_folder_link=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().collect();
    let (Some(command), Some(arg)) = (args.get(1), args.get(2)) else {
        return Err(anyhow!(USAGE));
    };

    match command.as_str() {
        "extract" => {
            let config_path = std::env::var("CONFIG_PATH")
                .ok()
                .or_else(|| args.get(3).cloned())
                .unwrap_or_else(|| "config.toml".to_string());
            let state = AppState::new(Config::load(&config_path)?)?;

            let id = gdrive::extract_folder_id(arg)
                .into_option()
                .ok_or_else(|| anyhow!("无法从链接中提取文件夹 ID: {}", arg))?;

            println!("folder_id: {}", id);
            println!(
                "files_query: {}",
                gdrive::files_query(&state.config.drive.files_endpoint, &id)
            );
        }
        "status" => {
            let presentation = status::classify(arg);
            if !status::is_known(arg) {
                tracing::warn!("⚠️ 未知状态码: {}", arg);
            }
            println!("label: {}", presentation.label);
            println!("color_class: {}", presentation.color_class);
        }
        _ => return Err(anyhow!(USAGE)),
    }

    Ok(())
}
