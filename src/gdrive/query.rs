//! 构造前端查询文件列表的请求路径

use super::types::FolderId;

/// 生成 `<endpoint>?folderId=<id>`
///
/// ID 字符集本身不需要编码，这里仍然走一遍 `urlencoding`，调用方不用关心。
pub fn files_query(endpoint: &str, id: &FolderId) -> String {
    let endpoint = endpoint.trim_end_matches('/');
    format!("{}?folderId={}", endpoint, urlencoding::encode(id.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_query() {
        let id = FolderId::new("1i5LQZZCseI58XIGAtl3BSsCzC-0hIJ47");
        assert_eq!(
            files_query("/drive/files", &id),
            "/drive/files?folderId=1i5LQZZCseI58XIGAtl3BSsCzC-0hIJ47"
        );
    }

    #[test]
    fn test_trailing_slash_dropped() {
        let id = FolderId::new("abc_1");
        assert_eq!(files_query("/drive/files/", &id), "/drive/files?folderId=abc_1");
    }
}
