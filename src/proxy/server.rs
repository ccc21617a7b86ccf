use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::json;
use tokio::net::TcpListener;

use crate::client::GitHubClient;
use crate::constants::{
    COMMENTS_FAILED_MESSAGE, DEFAULT_BIND, DEFAULT_TIMEOUT_MS, GITHUB_API_URL, HEALTH_ENDPOINT,
    INVALID_FILTERS_MESSAGE, ISSUES_FAILED_MESSAGE, MIN_TIMEOUT_MS, MISSING_COUNT_MESSAGE, READ_ENDPOINT,
    REPO_NAME, REPO_OWNER,
};
use crate::error::{ErrorContext, GridError, GridResult};
use crate::logging::{log_error, log_info};
use crate::models::{CommentPage, CommentRow, FailureBody, IssuePage, IssueRow};

use super::mode::{Mode, ReadParams, ReadRequest};

#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub bind: String,
    pub api_url: String,
    pub github_token: String,
    pub request_timeout_ms: u64,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            api_url: GITHUB_API_URL.to_string(),
            github_token: String::new(),
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

pub struct ProxyState {
    client: GitHubClient,
}

impl ProxyState {
    pub fn from_config(config: &ProxyConfig) -> GridResult<Self> {
        if config.github_token.trim().is_empty() {
            return Err(GridError::TokenNotFound);
        }

        if config.request_timeout_ms < MIN_TIMEOUT_MS {
            return Err(crate::grid_error!(
                ConfigError,
                "request timeout must be at least {} ms, got {}",
                MIN_TIMEOUT_MS,
                config.request_timeout_ms
            ));
        }

        let timeout = Duration::from_millis(config.request_timeout_ms);
        let client = GitHubClient::new(config.github_token.trim(), config.api_url.trim(), timeout)?;

        Ok(Self { client })
    }
}

/// Body of a successful read, one variant per envelope shape.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum ReadResponse {
    Issues(IssuePage),
    Comments(CommentPage),
}

/// Run the upstream query for an already validated request and reshape it.
pub async fn execute_read(client: &GitHubClient, request: &ReadRequest) -> GridResult<ReadResponse> {
    let first = request.first;

    match &request.mode {
        Mode::FilteredSearch { query_string, after } => {
            let page = client.search_issues(query_string, first, after.as_deref()).await?;
            Ok(ReadResponse::Issues(IssuePage {
                end_cursor: page.connection.next_cursor(),
                total: page.total,
                data: page.connection.into_nodes().map(IssueRow::from).collect(),
            }))
        }
        Mode::UnfilteredList { after } => {
            let page = client.list_issues(first, after.as_deref()).await?;
            Ok(ReadResponse::Issues(IssuePage {
                end_cursor: page.connection.next_cursor(),
                total: page.total,
                data: page.connection.into_nodes().map(IssueRow::from).collect(),
            }))
        }
        Mode::Comments { issue_id, after } => {
            let comments = client.list_comments(issue_id, first, after.as_deref()).await?;
            Ok(ReadResponse::Comments(CommentPage {
                comment_end_cursor: comments.next_cursor(),
                data: comments.into_nodes().map(CommentRow::from).collect(),
            }))
        }
    }
}

/// Run the issue grid proxy server until Ctrl-C.
pub async fn run_proxy(config: ProxyConfig) -> GridResult<()> {
    let bind_addr: SocketAddr = config.bind.parse().map_err(|_| {
        GridError::ConfigError(format!("invalid bind address '{}': expected host:port", config.bind))
    })?;
    let state = Arc::new(ProxyState::from_config(&config)?);

    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind issue grid proxy on {}", bind_addr))?;
    let local_addr = listener
        .local_addr()
        .context("failed to resolve proxy listen address")?;

    log_info(&format!(
        "issue grid proxy listening: addr={} route={} upstream={} repository={}/{}",
        local_addr,
        READ_ENDPOINT,
        state.client.api_url(),
        REPO_OWNER,
        REPO_NAME
    ));

    let app = build_proxy_router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .context("issue grid proxy exited unexpectedly")?;

    log_info("issue grid proxy stopped");
    Ok(())
}

pub fn build_proxy_router(state: Arc<ProxyState>) -> Router {
    Router::new()
        .route(HEALTH_ENDPOINT, get(handle_health))
        .route(READ_ENDPOINT, get(handle_read))
        .with_state(state)
}

async fn handle_health(State(state): State<Arc<ProxyState>>) -> Response {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "repository": format!("{}/{}", REPO_OWNER, REPO_NAME),
            "upstream": state.client.api_url(),
        })),
    )
        .into_response()
}

async fn handle_read(
    State(state): State<Arc<ProxyState>>,
    Query(params): Query<ReadParams>,
) -> Response {
    let request = match ReadRequest::from_params(&params) {
        Ok(request) => request,
        Err(error) => {
            log_info(&format!("rejected read request: {}", error));
            return failure_response(validation_message(&error));
        }
    };

    match execute_read(&state.client, &request).await {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(error) => {
            log_error(&format!(
                "upstream {} request failed (first={} after={:?}): {}",
                request.mode.name(),
                request.first,
                request.mode.after(),
                error
            ));
            let message = if request.mode.is_comments() {
                COMMENTS_FAILED_MESSAGE
            } else {
                ISSUES_FAILED_MESSAGE
            };
            failure_response(message)
        }
    }
}

fn validation_message(error: &GridError) -> &'static str {
    match error {
        GridError::InvalidFilters(_) => INVALID_FILTERS_MESSAGE,
        _ => MISSING_COUNT_MESSAGE,
    }
}

fn failure_response(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(FailureBody::new(message))).into_response()
}
