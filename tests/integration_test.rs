//! 集成测试

use gdrive_folder_link::{gdrive, status};

#[test]
fn test_extract_folder_id_valid() {
    let test_cases = vec![
        (
            "https://drive.google.com/drive/folders/1i5LQZZCseI58XIGAtl3BSsCzC-0hIJ47?usp=sharing",
            "1i5LQZZCseI58XIGAtl3BSsCzC-0hIJ47",
        ),
        (
            "https://drive.google.com/drive/folders/1i5LQZZCseI58XIGAtl3BSsCzC-0hIJ47",
            "1i5LQZZCseI58XIGAtl3BSsCzC-0hIJ47",
        ),
        (
            "https://drive.google.com/drive/u/0/folders/0B_abc-DEF?resourcekey=0-xyz&usp=drive_link",
            "0B_abc-DEF",
        ),
        ("http://drive.google.com/drive/folders/x", "x"),
        ("/folders/__--__", "__--__"),
    ];

    for (url, expected) in test_cases {
        let result = gdrive::extract_folder_id(url);
        assert_eq!(
            result.folder_id().map(|id| id.as_str()),
            Some(expected),
            "Failed for URL: {}",
            url
        );
    }
}

#[test]
fn test_extract_folder_id_invalid() {
    let invalid_urls = vec![
        "",
        "not-a-url",
        "https://drive.google.com/drive/1i5LQZZCseI58XIGAtl3BSsCzC-0hIJ47",
        "https://drive.google.com/file/d/1i5LQZZCseI58XIGAtl3BSsCzC/view",
        "https://drive.google.com/drive/folders/",
        "https://drive.google.com/drive/folders/?usp=sharing",
        // 裸 ID 不会被当作结果
        "1i5LQZZCseI58XIGAtl3BSsCzC-0hIJ47",
    ];

    for url in invalid_urls {
        assert_eq!(
            gdrive::extract_folder_id(url),
            gdrive::ExtractionResult::NotFound,
            "Should return NotFound for URL: {}",
            url
        );
    }
}

#[test]
fn test_any_prefix_and_terminator() {
    let prefixes = ["", "x", "https://drive.google.com/drive", "?folders=1", "文件夹 "];
    let ids = ["a", "A-b_C", "1i5LQZZCseI58XIGAtl3BSsCzC-0hIJ47", "-", "_"];
    let suffixes = ["", "?usp=sharing", "&a=b", "/", "#x", " tail"];

    for prefix in prefixes {
        for id in ids {
            for suffix in suffixes {
                let url = format!("{}/folders/{}{}", prefix, id, suffix);
                let result = gdrive::extract_folder_id(&url);
                assert_eq!(
                    result.folder_id().map(|f| f.as_str()),
                    Some(id),
                    "Failed for URL: {}",
                    url
                );
            }
        }
    }
}

#[test]
fn test_extract_is_deterministic() {
    let url = "https://drive.google.com/drive/folders/abc-123?usp=sharing";
    assert_eq!(gdrive::extract_folder_id(url), gdrive::extract_folder_id(url));
}

#[test]
fn test_files_query_from_link() {
    let id = gdrive::extract_folder_id("https://drive.google.com/drive/folders/abc-123")
        .into_option()
        .unwrap();
    assert_eq!(gdrive::files_query("/drive/files", &id), "/drive/files?folderId=abc-123");
}

#[test]
fn test_classify_status() {
    assert_eq!(status::classify("pending").label, "Pending");
    assert_eq!(status::classify("unknown-code"), status::DEFAULT_PRESENTATION);

    // 重复调用结果一致
    for _ in 0..3 {
        assert_eq!(status::classify("published"), status::classify("published"));
        assert_eq!(status::classify("nope"), status::DEFAULT_PRESENTATION);
    }
}
