use clap::ArgMatches;

use crate::config::{config_path, load_config, save_config};
use crate::error::GridResult;

pub async fn handle_auth(matches: &ArgMatches) -> GridResult<()> {
    if let Some(token) = matches.get_one::<String>("token") {
        let mut config = load_config();
        config.github_token = Some(token.clone());
        save_config(&config)?;
        println!("✅ GitHub token saved successfully!");
        if let Some(path) = config_path() {
            println!("Config: {}", path.display());
        }
    } else if matches.get_flag("show") {
        match load_config().github_token {
            Some(token) => println!("GitHub token: {}", mask_token(&token)),
            None => println!("No GitHub token configured"),
        }
    } else {
        println!("Usage: issue-grid auth --token <TOKEN> or issue-grid auth --show");
    }
    Ok(())
}

/// Show only the ends of a token.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 12 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}
