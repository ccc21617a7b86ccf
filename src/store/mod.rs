pub mod lazy_store;
pub mod network;
pub mod pagination;

pub use lazy_store::{IssueNode, LazyLoadStore};
pub use network::NetworkStatus;
pub use pagination::{CursorSlot, PaginationState};
