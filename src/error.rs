use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("GitHub token not found. Set GITHUB_PERSONAL_ACCESS_TOKEN or run 'issue-grid auth'.")]
    TokenNotFound,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Missing count parameter")]
    MissingCount,

    #[error("Invalid filters: {0}")]
    InvalidFilters(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("GraphQL error: {0}")]
    GraphQLError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type GridResult<T> = Result<T, GridError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> GridResult<T>;
    fn with_context<F>(self, f: F) -> GridResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> GridResult<T> {
        self.map_err(|e| GridError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> GridResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| GridError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> GridResult<T> {
        self.ok_or_else(|| GridError::ParseError(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> GridResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| GridError::ParseError(f()))
    }
}

#[macro_export]
macro_rules! grid_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::GridError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::GridError::$error_type(format!($fmt, $($arg)*))
    };
}
