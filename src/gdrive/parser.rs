//! 链接解析
//!
//! 只认 `/folders/<id>` 这一种形式，链接按纯文本处理，不做完整 URL 解析。

use tracing::debug;

use super::types::{is_id_char, ExtractionResult, FolderId};

/// 文件夹路径前缀
pub const FOLDERS_MARKER: &str = "/folders/";

/// 从分享链接中提取文件夹 ID
///
/// 支持：
/// - https://drive.google.com/drive/folders/xxxx
/// - https://drive.google.com/drive/folders/xxxx?usp=sharing
/// - https://drive.google.com/drive/u/0/folders/xxxx
///
/// 取第一个后面紧跟至少一个合法字符的 `/folders/`，ID 为其后最长的
/// `[a-zA-Z0-9_-]` 连续片段。`?`、`&`、`/` 等字符自然终止匹配。
pub fn extract_folder_id(share_url: &str) -> ExtractionResult {
    for (pos, _) in share_url.match_indices(FOLDERS_MARKER) {
        let rest = &share_url[pos + FOLDERS_MARKER.len()..];
        let end = rest.find(|c: char| !is_id_char(c)).unwrap_or(rest.len());

        if end > 0 {
            let id = FolderId::new(&rest[..end]);
            debug!("🔍 解析到文件夹 ID: {}", id);
            return ExtractionResult::Found(id);
        }
    }

    debug!("🔍 链接中没有文件夹 ID: {}", share_url);
    ExtractionResult::NotFound
}
