use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use crate::collector::ConversationCollector;
use crate::models::Conversation;
use crate::report::{format_for_summary, statistics, truncate_chars};
use crate::utils::{ClaudePaths, format_path_with_tilde};

#[derive(Parser)]
#[command(name = "claude-daylog")]
#[command(version = "0.1.0")]
#[command(about = "Collect a day's Claude Code conversations", long_about = None)]
pub struct Cli {
    /// Claude data directory (defaults to $CLAUDE_CONFIG_DIR, then ~/.claude)
    #[arg(long, global = true, value_name = "DIR")]
    pub claude_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show statistics for a day's conversations
    Stats {
        /// Day to collect (YYYY-MM-DD, local time); defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the conversation feed used as a summarization prompt
    Summary {
        /// Day to collect (YYYY-MM-DD, local time); defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Only print the first N characters
        #[arg(long, value_name = "N")]
        max_chars: Option<usize>,
    },
}

pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Some(Commands::Stats { date, json }) => {
            show_stats(cli.claude_dir.as_deref(), date.unwrap_or_else(today), *json)?;
        }
        Some(Commands::Summary { date, max_chars }) => {
            show_summary(cli.claude_dir.as_deref(), date.unwrap_or_else(today), *max_chars)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn collect(
    claude_dir: Option<&Path>,
    date: NaiveDate,
) -> Result<(ConversationCollector, Vec<Conversation>)> {
    let paths = ClaudePaths::resolve(claude_dir).context("Failed to locate Claude directory")?;
    let collector = ConversationCollector::new(paths);
    let conversations = collector.collect_all(date);
    Ok((collector, conversations))
}

fn show_stats(claude_dir: Option<&Path>, date: NaiveDate, json: bool) -> Result<()> {
    let (collector, conversations) = collect(claude_dir, date)?;
    let stats = statistics(&conversations);

    if json {
        let output =
            serde_json::to_string_pretty(&stats).context("Failed to serialize statistics")?;
        println!("{output}");
        return Ok(());
    }

    println!("Claude Code Conversations for {}", date.format("%Y-%m-%d"));
    println!("================================");

    if conversations.is_empty() {
        println!("No conversations recorded on this day.");
    } else {
        println!("Total conversations: {}", stats.total_conversations);
        println!("Total messages: {}", stats.total_messages);
        println!("  User: {}", stats.user_messages);
        println!("  Claude: {}", stats.assistant_messages);
        println!("Projects: {}", stats.project_count);
        for project in &stats.projects {
            println!("  - {}", format_path_with_tilde(Path::new(project)));
        }
    }
    println!();
    println!("Claude directory: {}", format_path_with_tilde(&collector.paths().claude_dir));

    Ok(())
}

fn show_summary(claude_dir: Option<&Path>, date: NaiveDate, max_chars: Option<usize>) -> Result<()> {
    let (_collector, conversations) = collect(claude_dir, date)?;

    if conversations.is_empty() {
        println!("No conversations recorded on {}.", date.format("%Y-%m-%d"));
        return Ok(());
    }

    let formatted = format_for_summary(&conversations);
    match max_chars {
        Some(limit) => println!("{}", truncate_chars(&formatted, limit)),
        None => println!("{formatted}"),
    }

    Ok(())
}
