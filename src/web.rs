//! Web 服务器模块

use anyhow::{anyhow, Result};
use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

use crate::{gdrive, status, AppState};

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    #[serde(default)]
    pub share_url: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<gdrive::FolderId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files_query: Option<String>,
}

impl ExtractResponse {
    fn failure(message: String) -> Self {
        Self {
            success: false,
            message,
            folder_id: None,
            files_query: None,
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct StatusResponse {
    pub code: String,
    pub label: &'static str,
    pub color_class: &'static str,
    pub known: bool,
}

impl StatusResponse {
    fn new(code: &str) -> Self {
        let presentation = status::classify(code);
        Self {
            code: code.to_string(),
            label: presentation.label,
            color_class: presentation.color_class,
            known: status::is_known(code),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: &'static str,
}

/// 健康检查端点
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION,
    })
}

/// 解析分享链接
pub async fn extract_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ExtractRequest>,
) -> Json<ExtractResponse> {
    info!("📥 收到解析请求: {}", req.share_url);

    if let Err(e) = validate_share_url(&req.share_url) {
        warn!("❌ 分享链接验证失败: {}", e);
        return Json(ExtractResponse::failure(format!("分享链接验证失败: {}", e)));
    }

    match gdrive::extract_folder_id(&req.share_url) {
        gdrive::ExtractionResult::Found(id) => {
            let query = gdrive::files_query(&state.config.drive.files_endpoint, &id);
            info!("✅ 文件夹 ID: {}", id);
            Json(ExtractResponse {
                success: true,
                message: format!("解析成功: {}", id),
                folder_id: Some(id),
                files_query: Some(query),
            })
        }
        gdrive::ExtractionResult::NotFound => {
            warn!("❌ 无法从链接中提取文件夹 ID: {}", req.share_url);
            Json(ExtractResponse::failure(format!(
                "链接中没有 /folders/<id>，无法提取文件夹 ID: {}",
                req.share_url
            )))
        }
    }
}

/// 单个状态码的徽章
pub async fn status_handler(Path(code): Path<String>) -> Json<StatusResponse> {
    Json(StatusResponse::new(&code))
}

/// 所有已知状态（前端图例用）
pub async fn status_list_handler() -> Json<Vec<StatusResponse>> {
    Json(
        status::known_statuses()
            .iter()
            .map(|(code, _)| StatusResponse::new(code))
            .collect(),
    )
}

/// 验证分享链接：只拒绝空输入，其余交给解析器
pub fn validate_share_url(url: &str) -> Result<()> {
    if url.trim().is_empty() {
        return Err(anyhow!("分享链接不能为空"));
    }
    Ok(())
}

/// 创建 Web 路由
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/folders/extract", post(extract_handler))
        .route("/api/status", get(status_list_handler))
        .route("/api/status/:code", get(status_handler))
        .with_state(state)
}
