use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{REPO_NAME, REPO_OWNER};
use crate::error::{GridError, GridResult};

/// One `{field, operator, value}` entry of the grid's `filters` parameter.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct FilterDescriptor {
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub operator: String,
    #[serde(default)]
    pub value: Value,
}

impl FilterDescriptor {
    pub fn title_includes(value: &str) -> Self {
        Self {
            field: "title".to_string(),
            operator: "includes".to_string(),
            value: Value::String(value.to_string()),
        }
    }

    fn is_title_includes(&self) -> bool {
        self.field == "title" && self.operator == "includes"
    }

    /// Non-string values go out as JSON text, so a missing value reads `null`.
    fn value_text(&self) -> String {
        match &self.value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// `repo:<owner>/<name> is:issue`
pub fn base_search_scope() -> String {
    format!("repo:{}/{} is:issue", REPO_OWNER, REPO_NAME)
}

/// Decode the JSON-encoded `filters` query parameter.
pub fn parse_filters(raw: &str) -> GridResult<Vec<FilterDescriptor>> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| GridError::InvalidFilters(format!("not valid JSON: {}", e)))?;

    let Value::Array(entries) = value else {
        return Err(crate::grid_error!(InvalidFilters, "expected a JSON array"));
    };

    // Entries that are not objects are kept as empty descriptors so the
    // array position of the first entry is preserved.
    Ok(entries
        .into_iter()
        .map(|entry| {
            serde_json::from_value(entry).unwrap_or(FilterDescriptor {
                field: String::new(),
                operator: String::new(),
                value: Value::Null,
            })
        })
        .collect())
}

/// Build the upstream search string for filtered root requests.
///
/// Only the first descriptor is looked at, and only a title/includes pair
/// changes anything. Every other shape leaves the bare repository scope in
/// place. That fallback drops unsupported filters without telling the
/// caller; it is kept as observed behaviour rather than rejected.
pub fn build_search_query(filters: &[FilterDescriptor]) -> String {
    let mut query = base_search_scope();

    if let Some(first) = filters.first() {
        if first.is_title_includes() {
            query.push_str(&format!(" {} in:{}", first.value_text(), first.field));
        }
    }

    query
}

/// Encode descriptors back into the wire form of the `filters` parameter.
pub fn encode_filters(filters: &[FilterDescriptor]) -> GridResult<String> {
    Ok(serde_json::to_string(filters)?)
}
