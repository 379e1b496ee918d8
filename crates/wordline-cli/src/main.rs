//! Wordline CLI - split a line of text into words.

use clap::{Args, Parser, Subcommand};

mod commands;

/// Wordline - tokenize a line of text into owned words
#[derive(Parser)]
#[command(name = "wordline")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tokenize text and print the words separated by single spaces
    Render {
        /// Text to tokenize
        text: String,
        /// Output the sentence as JSON
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        growth: GrowthArgs,
    },

    /// Show every word with its byte span
    Lex {
        /// Text to tokenize
        text: String,
    },

    /// Show information about wordline
    Info,
}

/// Overrides for the sentence growth policy.
#[derive(Args, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GrowthArgs {
    /// Initial slot count (0 selects the default)
    #[arg(long)]
    capacity: Option<usize>,
    /// Capacity multiplier when the sentence is full
    #[arg(long)]
    growth: Option<usize>,
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "warn" };
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();

    match cli.command {
        Commands::Render { text, json, growth } => commands::render::run(&text, json, growth),
        Commands::Lex { text } => commands::lex::run(&text),
        Commands::Info => commands::info::run(),
    }
}
