pub mod mode;
pub mod server;

pub use mode::{normalize_cursor, parse_page_size, Mode, ReadParams, ReadRequest};
pub use server::{build_proxy_router, execute_read, run_proxy, ProxyConfig, ProxyState, ReadResponse};
