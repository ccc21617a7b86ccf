#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use github_issue_grid::logging::set_stderr_echo;
use github_issue_grid::proxy::{build_proxy_router, ProxyConfig, ProxyState};
use httpmock::MockServer;
use serde_json::{json, Value};

pub const TEST_TOKEN: &str = "test-token";

pub fn proxy_router(upstream: &MockServer) -> Router {
    set_stderr_echo(false);
    let state = ProxyState::from_config(&ProxyConfig {
        bind: "127.0.0.1:0".to_string(),
        api_url: upstream.url("/graphql"),
        github_token: TEST_TOKEN.to_string(),
        request_timeout_ms: 10_000,
    })
    .expect("build proxy state");
    build_proxy_router(Arc::new(state))
}

/// Path and query for `GET /api/read` with properly encoded parameters.
pub fn read_uri(params: &[(&str, &str)]) -> String {
    let mut url = reqwest::Url::parse("http://localhost/api/read").expect("base url");
    {
        let mut pairs = url.query_pairs_mut();
        for (name, value) in params {
            pairs.append_pair(name, value);
        }
    }
    match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    }
}

pub fn issue_node(id: &str, number: u64, login: Option<&str>, comments: u64) -> Value {
    json!({
        "id": id,
        "number": number,
        "title": format!("Issue {}", number),
        "author": login.map(|l| json!({"login": l})),
        "comments": {"totalCount": comments}
    })
}

pub fn comment_node(id: &str, login: Option<&str>, body: &str) -> Value {
    json!({
        "id": id,
        "body": body,
        "createdAt": "2024-05-01T10:00:00Z",
        "author": login.map(|l| json!({"login": l}))
    })
}

fn page_info(end_cursor: &str, has_next_page: bool) -> Value {
    json!({"endCursor": end_cursor, "hasNextPage": has_next_page})
}

fn edges(nodes: Vec<Value>) -> Vec<Value> {
    nodes.into_iter().map(|node| json!({"node": node})).collect()
}

pub fn repository_issues_body(nodes: Vec<Value>, total: u64, end_cursor: &str, has_next_page: bool) -> Value {
    json!({
        "data": {
            "repository": {
                "issues": {
                    "totalCount": total,
                    "edges": edges(nodes),
                    "pageInfo": page_info(end_cursor, has_next_page)
                }
            }
        }
    })
}

pub fn search_body(nodes: Vec<Value>, issue_count: u64, end_cursor: &str, has_next_page: bool) -> Value {
    json!({
        "data": {
            "search": {
                "issueCount": issue_count,
                "edges": edges(nodes),
                "pageInfo": page_info(end_cursor, has_next_page)
            }
        }
    })
}

pub fn comments_body(nodes: Vec<Value>, end_cursor: &str, has_next_page: bool) -> Value {
    let total = nodes.len();
    json!({
        "data": {
            "node": {
                "comments": {
                    "totalCount": total,
                    "edges": edges(nodes),
                    "pageInfo": page_info(end_cursor, has_next_page)
                }
            }
        }
    })
}
