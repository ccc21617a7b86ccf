#[allow(clippy::module_inception)]
mod config;

pub use config::{
    config_path, get_github_token, load_config, load_config_from, save_config, save_config_to,
    Config,
};
