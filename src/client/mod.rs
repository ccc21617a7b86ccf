pub mod github_client;

pub use github_client::{page_variables, GitHubClient, IssueConnection};
