pub mod comment;
pub mod graphql;
pub mod issue;
pub mod rows;
pub mod user;

// Re-export commonly used types
pub use comment::GitHubComment;
pub use graphql::{GraphQLError, GraphQLResponse, NodeData, RepositoryData, SearchData};
pub use issue::{CommentCount, GitHubIssue};
pub use rows::{CommentPage, CommentRow, FailureBody, IssuePage, IssueRow};
pub use user::Author;

// Connection type used by GraphQL cursor pagination
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    pub edges: Vec<Edge<T>>,
    pub page_info: PageInfo,
    #[serde(default)]
    pub total_count: Option<u64>,
}

impl<T> Connection<T> {
    /// The cursor to hand back to the caller: upstream's `endCursor` only
    /// while another page exists, `None` once the sequence is exhausted.
    pub fn next_cursor(&self) -> Option<String> {
        self.page_info.next_cursor()
    }

    pub fn into_nodes(self) -> impl Iterator<Item = T> {
        self.edges.into_iter().map(|edge| edge.node)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Edge<T> {
    pub node: T,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub end_cursor: Option<String>,
    pub has_next_page: bool,
}

impl PageInfo {
    pub fn next_cursor(&self) -> Option<String> {
        if self.has_next_page {
            self.end_cursor.clone()
        } else {
            None
        }
    }
}
