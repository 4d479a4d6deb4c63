//! 内容状态徽章
//!
//! 状态码 -> (显示文字, 样式类)。表是固定配置，查不到就用默认灰色徽章。

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusPresentation {
    pub label: &'static str,
    pub color_class: &'static str,
}

impl StatusPresentation {
    const fn new(label: &'static str, color_class: &'static str) -> Self {
        Self { label, color_class }
    }
}

/// 未知状态码的默认徽章
pub const DEFAULT_PRESENTATION: StatusPresentation =
    StatusPresentation::new("Unknown", "bg-gray-100 text-gray-500");

/// 已知状态码（大小写敏感）
pub const KNOWN_STATUSES: &[(&str, StatusPresentation)] = &[
    ("draft", StatusPresentation::new("Draft", "bg-gray-100 text-gray-700")),
    ("pending", StatusPresentation::new("Pending", "bg-yellow-100 text-yellow-800")),
    ("processing", StatusPresentation::new("Processing", "bg-blue-100 text-blue-800")),
    ("scheduled", StatusPresentation::new("Scheduled", "bg-indigo-100 text-indigo-800")),
    ("published", StatusPresentation::new("Published", "bg-green-100 text-green-800")),
    ("failed", StatusPresentation::new("Failed", "bg-red-100 text-red-800")),
    ("archived", StatusPresentation::new("Archived", "bg-slate-100 text-slate-600")),
];

fn lookup(code: &str) -> Option<StatusPresentation> {
    KNOWN_STATUSES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, presentation)| *presentation)
}

/// 状态码分类，未知状态码返回 [`DEFAULT_PRESENTATION`]
pub fn classify(code: &str) -> StatusPresentation {
    lookup(code).unwrap_or(DEFAULT_PRESENTATION)
}

pub fn is_known(code: &str) -> bool {
    lookup(code).is_some()
}

pub fn known_statuses() -> &'static [(&'static str, StatusPresentation)] {
    KNOWN_STATUSES
}
