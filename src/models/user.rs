use serde::{Deserialize, Serialize};

use crate::constants::UNKNOWN_AUTHOR;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Author {
    pub login: String,
}

/// Login of an optional author, or the `"Unknown"` sentinel.
pub fn author_login(author: Option<&Author>) -> String {
    author
        .map(|a| a.login.clone())
        .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string())
}
