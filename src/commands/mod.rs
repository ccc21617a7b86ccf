pub mod auth;
pub mod browse;
pub mod serve;

pub use auth::handle_auth;
pub use browse::handle_browse;
pub use serve::handle_serve;
