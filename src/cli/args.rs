//! CLI argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "typeahead")]
#[command(about = "Interactive fuzzy word matching by edit distance")]
#[command(version)]
pub struct Cli {
    /// Custom configuration file path
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Re-rank the dictionary live as you type (Esc to quit)
    Live {
        /// Word list file (one word per line)
        #[arg(short, long)]
        dict: Option<PathBuf>,

        /// Maximum number of results to display
        #[arg(short = 'k', long)]
        top_k: Option<usize>,

        /// Maximum edit distance; omit for unbounded
        #[arg(short = 'm', long)]
        max_distance: Option<usize>,

        /// Match case-sensitively (no folding at load or query time)
        #[arg(short = 's', long)]
        case_sensitive: bool,

        /// Disable ANSI color in the result list
        #[arg(long)]
        no_color: bool,
    },

    /// Rank the dictionary against a single query and print the results
    Query {
        /// Query term
        term: String,

        /// Word list file (one word per line)
        #[arg(short, long)]
        dict: Option<PathBuf>,

        /// Maximum number of results
        #[arg(short = 'k', long)]
        top_k: Option<usize>,

        /// Maximum edit distance; omit for unbounded
        #[arg(short = 'm', long)]
        max_distance: Option<usize>,

        /// Match case-sensitively
        #[arg(short = 's', long)]
        case_sensitive: bool,

        /// Disable ANSI color
        #[arg(long)]
        no_color: bool,
    },

    /// Display word list information
    Info {
        /// Word list file
        dict: Option<PathBuf>,
    },
}
