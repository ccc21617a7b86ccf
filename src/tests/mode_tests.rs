use crate::error::GridError;
use crate::proxy::{normalize_cursor, parse_page_size, Mode, ReadParams, ReadRequest};

fn params(count: Option<&str>, parent_id: Option<&str>) -> ReadParams {
    ReadParams {
        count: count.map(str::to_string),
        parent_id: parent_id.map(str::to_string),
        ..ReadParams::default()
    }
}

#[test]
fn test_missing_or_falsy_count_is_rejected() {
    for count in [None, Some(""), Some("0"), Some("-3")] {
        let result = ReadRequest::from_params(&params(count, Some("root")));
        assert!(matches!(result, Err(GridError::MissingCount)), "count: {:?}", count);
    }
}

#[test]
fn test_non_numeric_count_falls_back_to_default_chunk() {
    assert_eq!(parse_page_size(Some("lots")).unwrap(), 100);
    assert_eq!(parse_page_size(Some("25")).unwrap(), 25);
}

#[test]
fn test_cursor_normalization() {
    assert_eq!(normalize_cursor(None), None);
    assert_eq!(normalize_cursor(Some("")), None);
    assert_eq!(normalize_cursor(Some("null")), None);
    assert_eq!(normalize_cursor(Some("undefined")), None);
    assert_eq!(normalize_cursor(Some("Y3Vyc29yOjI=")), Some("Y3Vyc29yOjI=".to_string()));
}

#[test]
fn test_root_without_filters_selects_unfiltered_list() {
    let mut p = params(Some("100"), Some("root"));
    p.end_cursor = Some("undefined".to_string());

    let request = ReadRequest::from_params(&p).unwrap();
    assert_eq!(request.first, 100);
    assert_eq!(request.mode, Mode::UnfilteredList { after: None });
}

#[test]
fn test_root_with_filters_selects_filtered_search() {
    let mut p = params(Some("50"), Some("root"));
    p.filters = Some(r#"[{"field":"title","operator":"includes","value":"git"}]"#.to_string());
    p.end_cursor = Some("abc".to_string());
    p.comment_end_cursor = Some("ignored".to_string());

    let request = ReadRequest::from_params(&p).unwrap();
    assert_eq!(
        request.mode,
        Mode::FilteredSearch {
            query_string: "repo:microsoft/vscode is:issue git in:title".to_string(),
            after: Some("abc".to_string()),
        }
    );
}

#[test]
fn test_empty_filters_string_counts_as_absent() {
    let mut p = params(Some("10"), Some("root"));
    p.filters = Some(String::new());

    let request = ReadRequest::from_params(&p).unwrap();
    assert!(matches!(request.mode, Mode::UnfilteredList { .. }));
}

#[test]
fn test_non_root_parent_selects_comments_regardless_of_filter() {
    let mut p = params(Some("50"), Some("42"));
    p.filters = Some("this is not json".to_string());
    p.end_cursor = Some("issue-cursor".to_string());
    p.comment_end_cursor = Some("null".to_string());

    let request = ReadRequest::from_params(&p).unwrap();
    assert_eq!(
        request.mode,
        Mode::Comments {
            issue_id: "42".to_string(),
            after: None,
        }
    );
    assert!(request.mode.is_comments());
}

#[test]
fn test_missing_parent_id_falls_into_comment_mode() {
    let request = ReadRequest::from_params(&params(Some("5"), None)).unwrap();
    assert_eq!(request.mode.name(), "comments");
}

#[test]
fn test_malformed_filters_on_root_are_rejected() {
    let mut p = params(Some("5"), Some("root"));
    p.filters = Some("[{".to_string());
    assert!(matches!(ReadRequest::from_params(&p), Err(GridError::InvalidFilters(_))));
}
