use clap::ArgMatches;

use crate::config::{get_github_token, load_config};
use crate::error::GridResult;
use crate::proxy::{run_proxy, ProxyConfig};

pub async fn handle_serve(matches: &ArgMatches) -> GridResult<()> {
    let config = load_config();
    let github_token = get_github_token()?;

    let proxy_config = ProxyConfig {
        bind: matches
            .get_one::<String>("bind")
            .cloned()
            .unwrap_or(config.bind),
        api_url: matches
            .get_one::<String>("api-url")
            .cloned()
            .unwrap_or(config.api_url),
        github_token,
        request_timeout_ms: matches
            .get_one::<u64>("timeout-ms")
            .copied()
            .unwrap_or(config.request_timeout_ms),
    };

    run_proxy(proxy_config).await
}
