pub const GITHUB_API_URL: &str = "https://api.github.com/graphql";
pub const CONFIG_FILE: &str = ".github-issue-grid.json";
pub const TOKEN_ENV_VAR: &str = "GITHUB_PERSONAL_ACCESS_TOKEN";
pub const USER_AGENT: &str = "github-issue-grid/1.0";

// The repository scope is fixed; the grid only ever shows this repo.
pub const REPO_OWNER: &str = "microsoft";
pub const REPO_NAME: &str = "vscode";

pub const READ_ENDPOINT: &str = "/api/read";
pub const HEALTH_ENDPOINT: &str = "/api/health";
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
pub const MIN_TIMEOUT_MS: u64 = 1_000;

pub const ROOT_PARENT_ID: &str = "root";
pub const UNKNOWN_AUTHOR: &str = "Unknown";
pub const DEFAULT_CHUNK_SIZE: u32 = 100;

pub const MISSING_COUNT_MESSAGE: &str = "Missing count parameter";
pub const INVALID_FILTERS_MESSAGE: &str = "Invalid filters parameter";
pub const ISSUES_FAILED_MESSAGE: &str = "Failed to fetch issues";
pub const COMMENTS_FAILED_MESSAGE: &str = "Failed to fetch comments";

// Common GraphQL field selections
pub const ISSUE_FIELDS: &str = r#"
    id
    number
    title
    author {
        login
    }
    comments {
        totalCount
    }
"#;

pub const COMMENT_FIELDS: &str = r#"
    id
    body
    createdAt
    author {
        login
    }
"#;

pub const PAGE_INFO_FIELDS: &str = r#"
    pageInfo {
        endCursor
        hasNextPage
    }
"#;
