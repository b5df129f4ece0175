//! typeahead - interactive fuzzy word matching by edit distance
//!
//! Re-ranks a word list against the query on every keystroke and renders the
//! top matches live.

use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process;

use typeahead::cli::commands::{self, load_word_list, resolve_config, resolve_dict_path};
use typeahead::cli::paths::PersistentConfig;
use typeahead::cli::{Cli, Commands};
use typeahead::live;
use typeahead::render::RenderOptions;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Live {
            dict,
            top_k,
            max_distance,
            case_sensitive,
            no_color,
        } => run_live(
            cli.config,
            dict,
            top_k,
            max_distance,
            case_sensitive,
            no_color,
        ),
        other => commands::execute(other, cli.config),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        process::exit(1);
    }
}

fn run_live(
    config_path: Option<PathBuf>,
    dict: Option<PathBuf>,
    top_k: Option<usize>,
    max_distance: Option<usize>,
    case_sensitive: bool,
    no_color: bool,
) -> anyhow::Result<()> {
    let overrides = PersistentConfig {
        dict_path: dict,
        top_k,
        max_distance,
        case_sensitive: case_sensitive.then_some(true),
        color: no_color.then_some(false),
    };
    let config = resolve_config(config_path.as_deref(), &overrides)?;
    if !config.use_color() {
        colored::control::set_override(false);
    }

    let dict_path = resolve_dict_path(&config)?;
    let rank_options = config.rank_options();
    let words = load_word_list(&dict_path, rank_options.case_sensitive)?;

    println!(
        "{} v{}",
        "typeahead".bright_cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(
        "  Loaded {} term(s) from {}",
        words.len().to_string().green().bold(),
        dict_path.display().to_string().cyan()
    );
    if words.is_empty() {
        eprintln!(
            "  {}: word list is empty; nothing will match",
            "Warning".yellow()
        );
    }

    let render_options = RenderOptions {
        color: config.use_color(),
    };
    live::run(&words, &rank_options, &render_options)
}
