use crate::error::{ErrorContext, GridError};
use crate::grid_error;

#[test]
fn test_error_context_on_result() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::AddrInUse,
        "address in use"
    ));

    let grid_result = result.context("Failed to bind proxy");
    match grid_result {
        Err(GridError::Unknown(msg)) => {
            assert!(msg.contains("Failed to bind proxy"));
            assert!(msg.contains("address in use"));
        }
        _ => panic!("Expected GridError::Unknown"),
    }
}

#[test]
fn test_error_context_on_option_reports_missing_field() {
    let option: Option<u64> = None;
    let result = option.context("totalCount missing");

    match result {
        Err(GridError::ParseError(msg)) => assert_eq!(msg, "totalCount missing"),
        _ => panic!("Expected GridError::ParseError"),
    }
}

#[test]
fn test_error_context_with_closure() {
    let option: Option<String> = None;
    let result = option.with_context(|| format!("node '{}' not found", "I_kw42"));

    match result {
        Err(GridError::ParseError(msg)) => assert_eq!(msg, "node 'I_kw42' not found"),
        _ => panic!("Expected GridError::ParseError"),
    }
}

#[test]
fn test_grid_error_macro() {
    let error = grid_error!(ApiError, "Request failed");
    match error {
        GridError::ApiError(msg) => assert_eq!(msg, "Request failed"),
        _ => panic!("Expected GridError::ApiError"),
    }

    let error = grid_error!(InvalidFilters, "unexpected entry: {}", "{}");
    match error {
        GridError::InvalidFilters(msg) => assert_eq!(msg, "unexpected entry: {}"),
        _ => panic!("Expected GridError::InvalidFilters"),
    }
}

#[test]
fn test_missing_count_message() {
    assert_eq!(GridError::MissingCount.to_string(), "Missing count parameter");
}
