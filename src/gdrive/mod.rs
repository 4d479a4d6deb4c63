//! Google Drive 分享链接模块

pub mod parser;
pub mod query;
pub mod types;

// 导出常用函数
pub use parser::extract_folder_id;
pub use query::files_query;
pub use types::{ExtractionResult, FolderId};
