//! 配置文件加载

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub drive: DriveConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WebConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DriveConfig {
    /// 前端查询文件列表的接口路径，生成 `<files_endpoint>?folderId=<id>`
    #[serde(default = "default_files_endpoint")]
    pub files_endpoint: String,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            files_endpoint: default_files_endpoint(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5200
}

fn default_files_endpoint() -> String {
    "/drive/files".to_string()
}

impl Config {
    /// 读取 TOML 配置；文件不存在时使用默认值。环境变量优先于文件
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            info!("✅ 未找到 {}，使用默认配置", path);
            let mut config = Self::default();
            config.apply_env_overrides(|key| std::env::var(key).ok());
            return Ok(config);
        }

        let content =
            fs::read_to_string(path).with_context(|| format!("读取配置文件失败: {}", path))?;
        let config =
            Self::from_toml(&content).with_context(|| format!("解析配置文件失败: {}", path))?;
        info!("✅ 配置加载完成: {}", path);
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(content)?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// 用环境变量覆盖配置：`PORT`、`DRIVE_FILES_ENDPOINT`
    ///
    /// 无法解析的 `PORT` 和空的 `DRIVE_FILES_ENDPOINT` 会被忽略。
    pub fn apply_env_overrides<F>(&mut self, env: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = env("PORT").and_then(|s| s.parse::<u16>().ok()) {
            self.web.port = port;
        }
        if let Some(endpoint) = env("DRIVE_FILES_ENDPOINT").filter(|s| !s.is_empty()) {
            self.drive.files_endpoint = endpoint;
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.web.host, self.web.port)
    }
}
