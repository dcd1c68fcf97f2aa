use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::models::{Conversation, SearchResult};
use crate::parsers::{LoadPolicy, load_archive};
use crate::search::SearchEngine;
use crate::server::{self, AppState};
use crate::store::{ConversationStore, get_conversation};
use crate::utils::{expand_tilde, format_path_with_tilde};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Parser)]
#[command(name = "conversation-search")]
#[command(version = "0.1.0")]
#[command(about = "Search an exported archive of chat conversations", long_about = None)]
pub struct Cli {
    /// Path to the conversations.json export
    #[arg(long, global = true, env = "CONVERSATIONS_FILE", default_value = "conversations.json")]
    pub archive: PathBuf,

    /// Fail on the first malformed or duplicate record instead of skipping it
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search conversations by keyword
    Search {
        /// Case-insensitive keyword
        query: String,

        /// Scan every message and nested content block
        #[arg(long)]
        deep: bool,

        /// Print results as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Show a single conversation
    Show {
        uuid: String,

        /// Print the raw conversation record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show statistics about the archive
    Stats {
        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },
    /// Serve the JSON search API over HTTP
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        #[arg(short, long, default_value_t = 5000)]
        port: u16,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = &cli.command else {
        println!("Use --help for usage information");
        return Ok(());
    };

    let policy = if cli.strict { LoadPolicy::Strict } else { LoadPolicy::Lenient };
    let archive = expand_tilde(&cli.archive);
    let store = load_archive(&archive, policy)?;

    match command {
        Commands::Search { query, deep, json } => search(&store, query, *deep, *json),
        Commands::Show { uuid, json } => show(&store, uuid, *json),
        Commands::Stats { json } => show_stats(&store, &archive, *json),
        Commands::Serve { host, port } => {
            let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
            runtime.block_on(server::serve(AppState::new(store), host, *port))
        }
    }
}

fn search(store: &ConversationStore, query: &str, deep: bool, json: bool) -> Result<()> {
    let results = SearchEngine::new(store).search(query, deep);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    let mode = if deep { "deep" } else { "shallow" };
    println!("Found {} conversations matching \"{}\" ({})", results.len(), query.trim(), mode);
    for result in &results {
        println!();
        print_result(result);
    }

    Ok(())
}

fn print_result(result: &SearchResult) {
    let locations: Vec<&str> = result.match_locations.iter().map(|l| l.as_str()).collect();

    println!("{}", result.name);
    println!(
        "  {} | {} messages | updated {} | matched: {}",
        result.uuid,
        result.message_count,
        result.updated_at.display(TIMESTAMP_FORMAT),
        locations.join(", ")
    );
    if !result.summary.is_empty() {
        println!("  {}", result.summary);
    }
}

fn show(store: &ConversationStore, uuid: &str, json: bool) -> Result<()> {
    let conv = get_conversation(store, uuid)?;

    if json {
        println!("{}", serde_json::to_string_pretty(conv)?);
    } else {
        print_transcript(conv);
    }

    Ok(())
}

fn print_transcript(conv: &Conversation) {
    println!("{}", conv.name);
    println!("================================");
    println!("UUID: {}", conv.uuid);
    println!("Created: {}", conv.created_at.display(TIMESTAMP_FORMAT));
    println!("Updated: {}", conv.updated_at.display(TIMESTAMP_FORMAT));
    if !conv.summary.is_empty() {
        println!();
        println!("{}", conv.summary);
    }

    for message in &conv.chat_messages {
        println!();
        println!("[{}]", message.sender.as_deref().unwrap_or("unknown"));
        println!("{}", message.text);
    }
}

fn show_stats(store: &ConversationStore, archive: &Path, json: bool) -> Result<()> {
    let stats = store.stats();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Conversation Archive Statistics");
    println!("================================");
    println!("Conversations: {}", stats.conversations);
    println!("  Messages: {}", stats.messages);
    println!("  Content blocks: {}", stats.content_blocks);
    println!();
    println!("Archive: {}", format_path_with_tilde(archive));

    if let Some(oldest) = stats.oldest_created_at {
        println!("Oldest conversation: {}", oldest.format(TIMESTAMP_FORMAT));
    }
    if let Some(newest) = stats.newest_updated_at {
        println!("Last updated: {}", newest.format(TIMESTAMP_FORMAT));
    }
    if stats.unparsed_timestamps > 0 {
        println!("Unparsed timestamps: {}", stats.unparsed_timestamps);
    }

    Ok(())
}
