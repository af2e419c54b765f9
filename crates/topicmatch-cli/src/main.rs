//! topicmatch CLI - topic charts and supervisor recommendations.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser)]
#[command(name = "topicmatch")]
#[command(author, version, about = "topicmatch - Topic charts and supervisor recommendations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default topicmatch.toml
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Show a document's leading topics
    Topics {
        /// Model snapshot (JSON)
        snapshot: String,

        /// Document id (default: first document in the snapshot)
        #[arg(short, long)]
        document: Option<String>,

        /// Number of topics to show (default: from config)
        #[arg(short, long)]
        top: Option<usize>,
    },

    /// Show the most probable words of a topic
    Words {
        /// Model snapshot (JSON)
        snapshot: String,

        /// Topic id
        #[arg(short, long)]
        topic: usize,

        /// Number of words (default: from config)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Rank supervisors for each of the document's leading topics
    Recommend {
        /// Model snapshot (JSON)
        snapshot: String,

        /// Document id (default: first document in the snapshot)
        #[arg(short, long)]
        document: Option<String>,
    },

    /// Render charts, word clouds and the dashboard
    Render {
        /// Model snapshot (JSON)
        snapshot: String,

        /// Document id (default: first document in the snapshot)
        #[arg(short, long)]
        document: Option<String>,

        /// Output directory (default: from config)
        #[arg(short, long)]
        output: Option<String>,

        /// Comma-separated formats: html, json, svg (default: from config)
        #[arg(short, long)]
        format: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Init { path } => commands::init::run(path),
        Commands::Topics { snapshot, document, top } => {
            commands::topics::run(&snapshot, document, top)
        }
        Commands::Words { snapshot, topic, limit } => {
            commands::words::run(&snapshot, topic, limit)
        }
        Commands::Recommend { snapshot, document } => {
            commands::recommend::run(&snapshot, document)
        }
        Commands::Render { snapshot, document, output, format } => {
            commands::render::run(&snapshot, document, output, format)
        }
    }
}
