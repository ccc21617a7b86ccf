use std::process;

use clap::{value_parser, Arg, Command};

use github_issue_grid::commands::{handle_auth, handle_browse, handle_serve};
use github_issue_grid::constants::MIN_TIMEOUT_MS;
use github_issue_grid::logging::{init_logging, install_panic_hook};

#[tokio::main]
async fn main() {
    let app = Command::new("issue-grid")
        .about("GitHub issue grid - cursor-paginating GraphQL proxy for a lazy-loading tree grid")
        .version("1.0.0")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("serve")
                .about("Run the read proxy in front of GitHub's GraphQL API")
                .arg(
                    Arg::new("bind")
                        .long("bind")
                        .short('b')
                        .value_name("ADDR")
                        .help("Listen address (host:port)")
                )
                .arg(
                    Arg::new("api-url")
                        .long("api-url")
                        .value_name("URL")
                        .help("Upstream GraphQL endpoint")
                )
                .arg(
                    Arg::new("timeout-ms")
                        .long("timeout-ms")
                        .value_name("MILLIS")
                        .help("Upstream request timeout in milliseconds (at least 1000)")
                        .value_parser(value_parser!(u64).range(MIN_TIMEOUT_MS..))
                )
        )
        .subcommand(
            Command::new("browse")
                .about("Page through a running proxy the way the grid does")
                .arg(
                    Arg::new("proxy")
                        .long("proxy")
                        .short('p')
                        .value_name("URL")
                        .help("Proxy base URL")
                        .default_value("http://127.0.0.1:3000")
                )
                .arg(
                    Arg::new("count")
                        .long("count")
                        .short('c')
                        .value_name("NUMBER")
                        .help("Chunk size per request")
                        .default_value("100")
                        .value_parser(value_parser!(u32))
                )
                .arg(
                    Arg::new("pages")
                        .long("pages")
                        .value_name("NUMBER")
                        .help("Number of issue chunks to load")
                        .default_value("1")
                        .value_parser(value_parser!(u32))
                )
                .arg(
                    Arg::new("expand")
                        .long("expand")
                        .short('e')
                        .value_name("NUMBER")
                        .help("Expand the first N issues that have comments")
                        .default_value("0")
                        .value_parser(value_parser!(usize))
                )
                .arg(
                    Arg::new("filter")
                        .long("filter")
                        .short('f')
                        .value_name("TEXT")
                        .help("Only issues whose title includes TEXT")
                )
        )
        .subcommand(
            Command::new("auth")
                .about("Store the GitHub personal access token")
                .arg(
                    Arg::new("token")
                        .long("token")
                        .value_name("TOKEN")
                        .help("Set your GitHub personal access token")
                )
                .arg(
                    Arg::new("show")
                        .long("show")
                        .help("Show current token")
                        .action(clap::ArgAction::SetTrue)
                )
        );

    let matches = app.get_matches();

    if let Err(e) = init_logging() {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }
    install_panic_hook();

    let result = match matches.subcommand() {
        Some(("serve", sub_matches)) => handle_serve(sub_matches).await,
        Some(("browse", sub_matches)) => handle_browse(sub_matches).await,
        Some(("auth", sub_matches)) => handle_auth(sub_matches).await,
        _ => {
            eprintln!("Unknown command. Use 'issue-grid --help' for available commands.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
