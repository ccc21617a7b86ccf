use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::constants::{
    COMMENT_FIELDS, ISSUE_FIELDS, PAGE_INFO_FIELDS, REPO_NAME, REPO_OWNER,
    USER_AGENT as USER_AGENT_VALUE,
};
use crate::error::{ErrorContext, GridError, GridResult};
use crate::logging::{log_debug, log_error};
use crate::models::*;

/// Issues page returned by either root query shape.
#[derive(Debug)]
pub struct IssueConnection {
    pub total: u64,
    pub connection: Connection<GitHubIssue>,
}

pub struct GitHubClient {
    client: reqwest::Client,
    api_url: String,
}

impl GitHubClient {
    pub fn new(token: &str, api_url: &str, timeout: Duration) -> GridResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("bearer {}", token))
                .map_err(|_| GridError::ConfigError("Invalid GitHub token format".to_string()))?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.to_string(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    async fn execute_query<T: for<'de> Deserialize<'de>>(
        &self,
        query: &str,
        variables: Value,
    ) -> GridResult<T> {
        let body = json!({ "query": query, "variables": variables });

        let response = self
            .client
            .post(&self.api_url)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GridError::ApiError(format!(
                "API request failed with status {}: {}",
                status, error_text
            )));
        }

        let graphql_response: GraphQLResponse<T> = response.json().await?;

        let error_messages: Vec<String> = graphql_response
            .errors
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(describe_graphql_error)
            .collect();

        match graphql_response.data {
            // Field-level errors next to usable data keep the page.
            Some(data) => {
                if !error_messages.is_empty() {
                    log_error(&format!(
                        "GraphQL returned partial data with errors: {}",
                        error_messages.join(", ")
                    ));
                }
                Ok(data)
            }
            None if !error_messages.is_empty() => {
                Err(GridError::GraphQLError(error_messages.join(", ")))
            }
            None => Err(GridError::GraphQLError(
                "No data returned from GraphQL query".to_string(),
            )),
        }
    }

    /// Full-text issue search scoped by `query_string`.
    pub async fn search_issues(
        &self,
        query_string: &str,
        first: u32,
        after: Option<&str>,
    ) -> GridResult<IssueConnection> {
        let query = format!(r#"
            query ($queryString: String!, $first: Int!, $after: String) {{
                search(query: $queryString, type: ISSUE, first: $first, after: $after) {{
                    issueCount
                    edges {{
                        node {{
                            ... on Issue {{{}}}
                        }}
                    }}
                    {}
                }}
            }}
        "#, ISSUE_FIELDS, PAGE_INFO_FIELDS);

        let variables = page_variables(&[("queryString", json!(query_string))], first, after);

        log_debug(&format!("search issues: query={:?} first={} after={:?}", query_string, first, after));

        let data: SearchData = self.execute_query(&query, variables).await?;
        Ok(IssueConnection {
            total: data.search.issue_count,
            connection: data.search.connection,
        })
    }

    /// Plain repository issue listing.
    pub async fn list_issues(&self, first: u32, after: Option<&str>) -> GridResult<IssueConnection> {
        let query = format!(r#"
            query ($owner: String!, $name: String!, $first: Int!, $after: String) {{
                repository(owner: $owner, name: $name) {{
                    issues(first: $first, after: $after) {{
                        totalCount
                        edges {{
                            node {{{}}}
                        }}
                        {}
                    }}
                }}
            }}
        "#, ISSUE_FIELDS, PAGE_INFO_FIELDS);

        let variables = page_variables(
            &[("owner", json!(REPO_OWNER)), ("name", json!(REPO_NAME))],
            first,
            after,
        );

        log_debug(&format!("list issues: first={} after={:?}", first, after));

        let data: RepositoryData = self.execute_query(&query, variables).await?;
        let connection = data.repository.issues;
        let total = connection
            .total_count
            .context("repository.issues.totalCount missing from response")?;

        Ok(IssueConnection { total, connection })
    }

    /// One page of comments under the issue node `issue_id`.
    pub async fn list_comments(
        &self,
        issue_id: &str,
        first: u32,
        after: Option<&str>,
    ) -> GridResult<Connection<GitHubComment>> {
        let query = format!(r#"
            query ($issueId: ID!, $first: Int!, $after: String) {{
                node(id: $issueId) {{
                    ... on Issue {{
                        comments(first: $first, after: $after) {{
                            totalCount
                            edges {{
                                node {{{}}}
                            }}
                            {}
                        }}
                    }}
                }}
            }}
        "#, COMMENT_FIELDS, PAGE_INFO_FIELDS);

        let variables = page_variables(&[("issueId", json!(issue_id))], first, after);

        log_debug(&format!("list comments: issue={} first={} after={:?}", issue_id, first, after));

        let data: NodeData = self.execute_query(&query, variables).await?;
        let node = data
            .node
            .with_context(|| format!("node '{}' not found", issue_id))?;

        Ok(node.comments)
    }
}

fn describe_graphql_error(error: &GraphQLError) -> String {
    match &error.path {
        Some(path) if !path.is_empty() => {
            let segments: Vec<String> = path
                .iter()
                .map(|segment| match segment {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect();
            format!("{} (at {})", error.message, segments.join("."))
        }
        _ => error.message.clone(),
    }
}

/// GraphQL variables for one page. `after` is only sent when a cursor exists.
pub fn page_variables(base: &[(&str, Value)], first: u32, after: Option<&str>) -> Value {
    let mut variables = Map::new();
    for (name, value) in base {
        variables.insert(name.to_string(), value.clone());
    }
    variables.insert("first".to_string(), json!(first));
    if let Some(cursor) = after {
        variables.insert("after".to_string(), json!(cursor));
    }
    Value::Object(variables)
}
