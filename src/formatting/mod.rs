pub mod tree;
pub mod utils;

pub use tree::{format_comment_line, format_issue_line, format_network_status, print_tree};
pub use utils::{single_line, truncate};
