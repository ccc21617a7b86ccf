use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GitHubIssue {
    pub id: String,
    pub number: u64,
    pub title: String,
    pub author: Option<super::Author>,
    pub comments: CommentCount,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommentCount {
    pub total_count: u64,
}
