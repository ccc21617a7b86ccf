// Module declarations
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod filtering;
pub mod formatting;
pub mod logging;
pub mod models;
pub mod proxy;
pub mod store;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use client::GitHubClient;
pub use config::{Config, get_github_token, load_config, save_config};
pub use error::{GridError, GridResult};
pub use models::*;
pub use proxy::{build_proxy_router, run_proxy, Mode, ProxyConfig, ProxyState, ReadParams, ReadRequest};
pub use store::{LazyLoadStore, NetworkStatus, PaginationState};
