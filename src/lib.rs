//! Google Drive 文件夹链接解析 + 内容状态徽章

pub mod config;
pub mod gdrive;
pub mod state;
pub mod status;
pub mod web;

pub use config::Config;
pub use state::AppState;

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
