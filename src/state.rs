//! 应用状态

use anyhow::{anyhow, Result};

use crate::config::Config;

pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let endpoint = &config.drive.files_endpoint;
        if endpoint.is_empty() || !endpoint.starts_with('/') {
            return Err(anyhow!(
                "files_endpoint 必须是以 / 开头的路径，当前值: {:?}",
                endpoint
            ));
        }

        Ok(Self { config })
    }
}
