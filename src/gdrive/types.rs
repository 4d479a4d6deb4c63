//! 数据类型

use serde::Serialize;
use std::fmt;

/// Google Drive 文件夹 ID
///
/// 只可能由解析器产生，内容保证是一个或多个 `[a-zA-Z0-9_-]` 字符。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FolderId(String);

impl FolderId {
    pub(crate) fn new(id: &str) -> Self {
        debug_assert!(!id.is_empty() && id.chars().all(is_id_char));
        Self(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for FolderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 解析结果：要么找到 ID，要么没有匹配（不是错误）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionResult {
    Found(FolderId),
    NotFound,
}

impl ExtractionResult {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn folder_id(&self) -> Option<&FolderId> {
        match self {
            Self::Found(id) => Some(id),
            Self::NotFound => None,
        }
    }

    pub fn into_option(self) -> Option<FolderId> {
        match self {
            Self::Found(id) => Some(id),
            Self::NotFound => None,
        }
    }
}

/// ID 允许的字符：仅 ASCII 字母、数字、`-`、`_`
pub(crate) fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}
