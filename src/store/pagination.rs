use serde_json::Value;

use crate::constants::ROOT_PARENT_ID;

/// Which cursor slot a response updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorSlot {
    Issues,
    Comments,
}

/// The two independent pagination sequences the store threads through
/// every request: root issues and comments of the expanded issue.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaginationState {
    pub end_cursor: Option<String>,
    pub comment_end_cursor: Option<String>,
}

impl PaginationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write both slots into outgoing query parameters. Empty slots go out
    /// as the literal `null`, which the proxy reads as "first page".
    pub fn inject(&self, params: &mut Vec<(String, String)>) {
        params.retain(|(name, _)| name != "endCursor" && name != "commentEndCursor");
        params.push(("endCursor".to_string(), cursor_param(&self.end_cursor)));
        params.push((
            "commentEndCursor".to_string(),
            cursor_param(&self.comment_end_cursor),
        ));
    }

    /// Update exactly one slot from a response body. A body carrying a
    /// `commentEndCursor` key is a comment page; anything else is treated
    /// as an issue page.
    pub fn apply(&mut self, body: &Value) -> CursorSlot {
        match body.get("commentEndCursor") {
            Some(cursor) => {
                self.comment_end_cursor = cursor.as_str().map(str::to_string);
                CursorSlot::Comments
            }
            None => {
                self.end_cursor = body
                    .get("endCursor")
                    .and_then(Value::as_str)
                    .map(str::to_string);
                CursorSlot::Issues
            }
        }
    }

    pub fn reset_comments(&mut self) {
        self.comment_end_cursor = None;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn cursor_param(cursor: &Option<String>) -> String {
    cursor.clone().unwrap_or_else(|| "null".to_string())
}

/// Base query for a store request: page size plus the tree parent.
pub fn base_params(count: u32, parent_id: Option<&str>) -> Vec<(String, String)> {
    vec![
        ("count".to_string(), count.to_string()),
        (
            "parentId".to_string(),
            parent_id.unwrap_or(ROOT_PARENT_ID).to_string(),
        ),
    ]
}
