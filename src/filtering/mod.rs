pub mod grid_filter;

pub use grid_filter::{
    base_search_scope, build_search_query, encode_filters, parse_filters, FilterDescriptor,
};
