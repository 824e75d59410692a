use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "nerdglyph", bin_name = "nerdglyph", version)]
#[command(about = "Search Nerd Fonts glyphs by keyword and keep the glyph list current", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Use this glyphnames.json instead of the one in the data directory
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search glyphs by keyword or concept
    #[command(alias = "s")]
    Search {
        /// Search term (multiple words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        term: Vec<String>,

        /// Maximum number of results
        #[arg(short = 'n', long, value_parser = parse_limit)]
        limit: Option<usize>,
    },

    /// Download the latest glyphnames.json, backing up the current one
    Update {
        /// Reinstall even if the local version matches the remote one
        #[arg(long)]
        force: bool,
    },

    /// Show the local dataset's version, release date and glyph count
    Info,
}

/// A positive `usize`; parsing at the target's width avoids narrowing later.
fn parse_limit(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("{} is not a valid limit: {}", value, e)),
    }
}
