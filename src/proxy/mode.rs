use serde::Deserialize;

use crate::constants::{DEFAULT_CHUNK_SIZE, ROOT_PARENT_ID};
use crate::error::{GridError, GridResult};
use crate::filtering::{build_search_query, parse_filters};

/// Raw query parameters of `GET /api/read`, exactly as the grid sends them.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReadParams {
    pub count: Option<String>,
    pub filters: Option<String>,
    pub end_cursor: Option<String>,
    pub comment_end_cursor: Option<String>,
    pub parent_id: Option<String>,
}

/// Which upstream query shape serves a request.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// Root level with a filter: full-text issue search.
    FilteredSearch {
        query_string: String,
        after: Option<String>,
    },
    /// Root level without a filter: repository issue listing.
    UnfilteredList { after: Option<String> },
    /// Any non-root parent: comments of that issue node.
    Comments {
        issue_id: String,
        after: Option<String>,
    },
}

impl Mode {
    pub fn after(&self) -> Option<&str> {
        match self {
            Mode::FilteredSearch { after, .. }
            | Mode::UnfilteredList { after }
            | Mode::Comments { after, .. } => after.as_deref(),
        }
    }

    pub fn is_comments(&self) -> bool {
        matches!(self, Mode::Comments { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mode::FilteredSearch { .. } => "filtered-search",
            Mode::UnfilteredList { .. } => "unfiltered-list",
            Mode::Comments { .. } => "comments",
        }
    }
}

/// A validated read request: page size plus the selected mode.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadRequest {
    pub first: u32,
    pub mode: Mode,
}

impl ReadRequest {
    pub fn from_params(params: &ReadParams) -> GridResult<Self> {
        let first = parse_page_size(params.count.as_deref())?;

        let filters = present(params.filters.as_deref());
        let is_root = params.parent_id.as_deref() == Some(ROOT_PARENT_ID);

        let mode = match (is_root, filters) {
            (true, Some(raw_filters)) => {
                let descriptors = parse_filters(raw_filters)?;
                Mode::FilteredSearch {
                    query_string: build_search_query(&descriptors),
                    after: normalize_cursor(params.end_cursor.as_deref()),
                }
            }
            (true, None) => Mode::UnfilteredList {
                after: normalize_cursor(params.end_cursor.as_deref()),
            },
            (false, _) => Mode::Comments {
                issue_id: params.parent_id.clone().unwrap_or_default(),
                after: normalize_cursor(params.comment_end_cursor.as_deref()),
            },
        };

        Ok(Self { first, mode })
    }
}

/// Missing, empty or non-positive counts are rejected. A count that is
/// present but not numeric falls back to the default chunk size.
pub fn parse_page_size(raw: Option<&str>) -> GridResult<u32> {
    let Some(raw) = present(raw) else {
        return Err(GridError::MissingCount);
    };

    match raw.trim().parse::<i64>() {
        Ok(n) if n > 0 => Ok(u32::try_from(n).unwrap_or(u32::MAX)),
        Ok(_) => Err(GridError::MissingCount),
        Err(_) => Ok(DEFAULT_CHUNK_SIZE),
    }
}

/// Clients echo unset cursors back as the literal text `null` or
/// `undefined`; both mean "start from the first page".
pub fn normalize_cursor(raw: Option<&str>) -> Option<String> {
    match present(raw)? {
        "null" | "undefined" => None,
        cursor => Some(cursor.to_string()),
    }
}

fn present(raw: Option<&str>) -> Option<&str> {
    raw.filter(|value| !value.is_empty())
}
