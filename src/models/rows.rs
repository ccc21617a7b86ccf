use serde::{Deserialize, Serialize};

use super::user::author_login;
use super::{GitHubComment, GitHubIssue};

/// A root-level tree node in the grid.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IssueRow {
    pub id: String,
    pub number: u64,
    pub author: String,
    pub title: String,
    /// Tells the store the node is expandable without probing for comments.
    pub children: bool,
    pub remote_child_count: u64,
}

impl From<GitHubIssue> for IssueRow {
    fn from(issue: GitHubIssue) -> Self {
        let total_count = issue.comments.total_count;
        Self {
            author: author_login(issue.author.as_ref()),
            id: issue.id,
            number: issue.number,
            title: issue.title,
            children: total_count > 0,
            remote_child_count: total_count,
        }
    }
}

/// A comment leaf. The body goes into `title` so issues and comments
/// share the tree column.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct CommentRow {
    pub id: String,
    pub author: String,
    pub title: String,
}

impl From<GitHubComment> for CommentRow {
    fn from(comment: GitHubComment) -> Self {
        Self {
            author: author_login(comment.author.as_ref()),
            id: comment.id,
            title: comment.body,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IssuePage {
    pub data: Vec<IssueRow>,
    pub total: u64,
    pub end_cursor: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommentPage {
    pub data: Vec<CommentRow>,
    pub comment_end_cursor: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct FailureBody {
    pub success: bool,
    pub message: String,
}

impl FailureBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
