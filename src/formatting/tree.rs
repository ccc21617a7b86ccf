use colored::*;

use crate::models::{CommentRow, IssueRow};
use crate::store::{LazyLoadStore, NetworkStatus};
use super::utils::{single_line, truncate};

const TITLE_WIDTH: usize = 70;
const BODY_WIDTH: usize = 90;

pub fn format_issue_line(row: &IssueRow) -> String {
    let marker = if row.children { "▸" } else { "•" };
    let comments = match row.remote_child_count {
        0 => String::new(),
        1 => " [1 comment]".to_string(),
        n => format!(" [{} comments]", n),
    };

    format!(
        "{} {} {} ({}){}",
        marker,
        format!("#{}", row.number).blue(),
        truncate(&row.title, TITLE_WIDTH),
        row.author.cyan(),
        comments.dimmed()
    )
}

pub fn format_comment_line(row: &CommentRow) -> String {
    format!(
        "    {} {}: {}",
        "└".dimmed(),
        row.author.cyan(),
        truncate(&single_line(&row.title), BODY_WIDTH)
    )
}

pub fn format_network_status(status: NetworkStatus) -> ColoredString {
    let label = status.label();
    match status {
        NetworkStatus::Idle => label.green(),
        NetworkStatus::Loading => label.blue(),
        NetworkStatus::Committing => label.red(),
    }
}

pub fn print_tree(store: &LazyLoadStore) {
    println!("{}", "GitHub Issues and comments for the VS Code repository".bold());
    println!("{}", format_network_status(store.status()));
    println!("{}", store.total_label().unwrap_or("Issues and comments").bold());
    println!("{}", "─".repeat(80).dimmed());

    if store.issues().is_empty() {
        println!("{}", "No issues found.".dimmed());
    }

    for node in store.issues() {
        println!("{}", format_issue_line(&node.row));
        for comment in &node.comments {
            println!("{}", format_comment_line(comment));
        }
        if !node.is_leaf() && !node.comments.is_empty() && !node.comments_exhausted {
            println!("    {}", "… more comments".dimmed());
        }
    }

    println!("{}", "─".repeat(80).dimmed());
    println!("Total loaded: {}", store.total_loaded());
    if !store.is_exhausted() {
        println!("{}", "More issues available".dimmed());
    }
}
