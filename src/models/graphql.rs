use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQLError>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQLError {
    pub message: String,
    #[serde(default)]
    pub path: Option<Vec<Value>>,
}

// Search data structures
#[derive(Debug, Deserialize)]
pub struct SearchData {
    pub search: SearchConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchConnection {
    pub issue_count: u64,
    #[serde(flatten)]
    pub connection: super::Connection<super::GitHubIssue>,
}

// Repository data structures
#[derive(Debug, Deserialize)]
pub struct RepositoryData {
    pub repository: RepositoryIssues,
}

#[derive(Debug, Deserialize)]
pub struct RepositoryIssues {
    pub issues: super::Connection<super::GitHubIssue>,
}

// Node data structures
#[derive(Debug, Deserialize)]
pub struct NodeData {
    pub node: Option<IssueComments>,
}

#[derive(Debug, Deserialize)]
pub struct IssueComments {
    pub comments: super::Connection<super::GitHubComment>,
}
