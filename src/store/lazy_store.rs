use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::constants::{DEFAULT_CHUNK_SIZE, READ_ENDPOINT};
use crate::error::{GridError, GridResult};
use crate::filtering::{encode_filters, FilterDescriptor};
use crate::logging::log_debug;
use crate::models::{CommentPage, CommentRow, FailureBody, IssuePage, IssueRow};

use super::network::NetworkStatus;
use super::pagination::{base_params, CursorSlot, PaginationState};

type StatusListener = Box<dyn FnMut(NetworkStatus) + Send>;

/// An issue in the tree together with whatever comments have been loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct IssueNode {
    pub row: IssueRow,
    pub comments: Vec<CommentRow>,
    pub comments_exhausted: bool,
}

impl IssueNode {
    fn new(row: IssueRow) -> Self {
        // Nodes without comments are leaves from the start.
        let comments_exhausted = !row.children;
        Self {
            row,
            comments: Vec::new(),
            comments_exhausted,
        }
    }

    pub fn is_leaf(&self) -> bool {
        !self.row.children
    }
}

/// Client-side store that pages through the proxy, threading both cursor
/// slots through every request.
pub struct LazyLoadStore {
    http: reqwest::Client,
    read_url: String,
    chunk_size: u32,
    pagination: PaginationState,
    status: NetworkStatus,
    status_listener: Option<StatusListener>,
    total_label: Option<String>,
    issues: Vec<IssueNode>,
    root_exhausted: bool,
    comment_parent: Option<String>,
}

impl LazyLoadStore {
    /// `proxy_url` is the proxy's base URL, e.g. `http://127.0.0.1:3000`.
    pub fn new(proxy_url: &str) -> GridResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()?;

        Ok(Self {
            http,
            read_url: format!("{}{}", proxy_url.trim_end_matches('/'), READ_ENDPOINT),
            chunk_size: DEFAULT_CHUNK_SIZE,
            pagination: PaginationState::new(),
            status: NetworkStatus::Idle,
            status_listener: None,
            total_label: None,
            issues: Vec::new(),
            root_exhausted: false,
            comment_parent: None,
        })
    }

    pub fn with_chunk_size(mut self, chunk_size: u32) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub fn with_status_listener<F>(mut self, listener: F) -> Self
    where
        F: FnMut(NetworkStatus) + Send + 'static,
    {
        self.status_listener = Some(Box::new(listener));
        self
    }

    pub fn status(&self) -> NetworkStatus {
        self.status
    }

    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    pub fn total_label(&self) -> Option<&str> {
        self.total_label.as_deref()
    }

    pub fn issues(&self) -> &[IssueNode] {
        &self.issues
    }

    /// Number of issue rows loaded so far (the grid's "Total loaded").
    pub fn total_loaded(&self) -> usize {
        self.issues.len()
    }

    /// True once an issue page has come back without a next cursor.
    /// Failure bodies clear the issue slot but never end the sequence.
    pub fn is_exhausted(&self) -> bool {
        self.root_exhausted
    }

    /// Forget everything loaded so far, e.g. when the filter changes.
    pub fn reset(&mut self) {
        self.pagination.reset();
        self.issues.clear();
        self.total_label = None;
        self.root_exhausted = false;
        self.comment_parent = None;
    }

    /// Load the next chunk of root issues and append it to the tree.
    pub async fn load_root_chunk(&mut self, filters: &[FilterDescriptor]) -> GridResult<Vec<IssueRow>> {
        if self.is_exhausted() {
            return Ok(Vec::new());
        }

        let mut params = base_params(self.chunk_size, None);
        if !filters.is_empty() {
            params.push(("filters".to_string(), encode_filters(filters)?));
        }

        let page: IssuePage = self.request(params).await?;
        self.root_exhausted = page.end_cursor.is_none();
        self.issues
            .extend(page.data.iter().cloned().map(IssueNode::new));

        Ok(page.data)
    }

    /// Load the next chunk of comments under `issue_id`.
    pub async fn load_children(&mut self, issue_id: &str) -> GridResult<Vec<CommentRow>> {
        let index = self
            .issues
            .iter()
            .position(|node| node.row.id == issue_id)
            .ok_or_else(|| crate::grid_error!(InvalidInput, "issue '{}' is not loaded", issue_id))?;

        if self.issues[index].comments_exhausted {
            return Ok(Vec::new());
        }

        // The comment slot belongs to one parent at a time.
        if self.comment_parent.as_deref() != Some(issue_id) {
            self.pagination.reset_comments();
            self.comment_parent = Some(issue_id.to_string());
        }

        let params = base_params(self.chunk_size, Some(issue_id));
        let page: CommentPage = self.request(params).await?;

        let node = &mut self.issues[index];
        node.comments.extend(page.data.iter().cloned());
        node.comments_exhausted = page.comment_end_cursor.is_none();

        Ok(page.data)
    }

    async fn request<T: DeserializeOwned>(&mut self, mut params: Vec<(String, String)>) -> GridResult<T> {
        self.pagination.inject(&mut params);

        self.set_status(NetworkStatus::Loading);
        let result = self.send(&params).await;
        self.set_status(NetworkStatus::Idle);

        let body = result?;
        // A failure body is not a page: both cursor slots keep their position.
        if let Ok(failure) = serde_json::from_value::<FailureBody>(body.clone()) {
            if !failure.success {
                log_debug(&format!("store request failed: {}", failure.message));
                return Err(GridError::ApiError(failure.message));
            }
        }

        self.after_request(&body);
        Ok(serde_json::from_value(body)?)
    }

    async fn send(&self, params: &[(String, String)]) -> GridResult<Value> {
        log_debug(&format!("store request: {} {:?}", self.read_url, params));

        let response = self.http.get(&self.read_url).query(params).send().await?;
        Ok(response.json::<Value>().await?)
    }

    fn after_request(&mut self, body: &Value) {
        let slot = self.pagination.apply(body);
        log_debug(&format!("store updated {:?} cursor: {:?}", slot, match slot {
            CursorSlot::Issues => &self.pagination.end_cursor,
            CursorSlot::Comments => &self.pagination.comment_end_cursor,
        }));

        if let Some(total) = body.get("total").and_then(Value::as_u64) {
            if total > 0 {
                self.total_label = Some(format!("Total issues: {}", total));
            }
        }
    }

    fn set_status(&mut self, status: NetworkStatus) {
        self.status = status;
        if let Some(listener) = self.status_listener.as_mut() {
            listener(status);
        }
    }
}
