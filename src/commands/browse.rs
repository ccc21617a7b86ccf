use clap::ArgMatches;
use colored::*;

use crate::constants::DEFAULT_CHUNK_SIZE;
use crate::error::GridResult;
use crate::filtering::FilterDescriptor;
use crate::formatting::print_tree;
use crate::logging::log_info;
use crate::store::LazyLoadStore;

pub async fn handle_browse(matches: &ArgMatches) -> GridResult<()> {
    let proxy_url = matches
        .get_one::<String>("proxy")
        .map(|s| s.as_str())
        .unwrap_or("http://127.0.0.1:3000");
    let count = matches
        .get_one::<u32>("count")
        .copied()
        .unwrap_or(DEFAULT_CHUNK_SIZE);
    let pages = matches.get_one::<u32>("pages").copied().unwrap_or(1);
    let expand = matches.get_one::<usize>("expand").copied().unwrap_or(0);

    let filters: Vec<FilterDescriptor> = matches
        .get_one::<String>("filter")
        .map(|text| vec![FilterDescriptor::title_includes(text)])
        .unwrap_or_default();

    let mut store = LazyLoadStore::new(proxy_url)?
        .with_chunk_size(count)
        .with_status_listener(|status| log_info(&status.label()));

    for _ in 0..pages {
        if store.is_exhausted() {
            break;
        }
        store.load_root_chunk(&filters).await?;
    }

    let expandable: Vec<String> = store
        .issues()
        .iter()
        .filter(|node| !node.is_leaf())
        .take(expand)
        .map(|node| node.row.id.clone())
        .collect();

    for issue_id in expandable {
        if let Err(e) = store.load_children(&issue_id).await {
            eprintln!("{} {}", "Failed to load comments:".red(), e);
        }
    }

    print_tree(&store);
    Ok(())
}
