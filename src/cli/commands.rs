//! CLI command implementations

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::dictionary::WordList;
use crate::rank::rank;
use crate::render::{render, RenderOptions};

use super::args::Commands;
use super::paths::PersistentConfig;

/// Execute a CLI command
pub fn execute(command: Commands, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Live { .. } => {
            // Handled in main.rs
            unreachable!("live command should be handled in main");
        }
        Commands::Query {
            term,
            dict,
            top_k,
            max_distance,
            case_sensitive,
            no_color,
        } => {
            let overrides = PersistentConfig {
                dict_path: dict,
                top_k,
                max_distance,
                case_sensitive: case_sensitive.then_some(true),
                color: no_color.then_some(false),
            };
            let config = resolve_config(config_path.as_deref(), &overrides)?;
            cmd_query(&term, &config)
        }
        Commands::Info { dict } => cmd_info(dict.as_deref()),
    }
}

/// Load the stored config and merge CLI overrides over it.
pub fn resolve_config(
    config_path: Option<&Path>,
    overrides: &PersistentConfig,
) -> Result<PersistentConfig> {
    let stored = PersistentConfig::load(config_path)?;
    Ok(stored.merge_with_cli(overrides))
}

/// Load a word list with CLI-friendly error context.
pub fn load_word_list(path: &Path, case_sensitive: bool) -> Result<WordList> {
    WordList::load(path, case_sensitive)
        .with_context(|| format!("Failed to load word list: {}", path.display()))
}

/// Resolve the dictionary path from merged config, or fail with guidance.
pub fn resolve_dict_path(config: &PersistentConfig) -> Result<PathBuf> {
    match &config.dict_path {
        Some(path) => Ok(path.clone()),
        None => bail!("No word list specified; pass --dict or set dict_path in the config file"),
    }
}

fn cmd_query(term: &str, config: &PersistentConfig) -> Result<()> {
    if !config.use_color() {
        colored::control::set_override(false);
    }

    let dict_path = resolve_dict_path(config)?;
    let options = config.rank_options();
    let words = load_word_list(&dict_path, options.case_sensitive)?;

    let ranked = rank(term, words.terms(), &options)?;
    let lines = render(
        &ranked,
        term,
        &RenderOptions {
            color: config.use_color(),
        },
    )?;

    if lines.is_empty() {
        println!("{}", "No matches found".dimmed());
        return Ok(());
    }

    for line in lines {
        println!("{}", line);
    }
    Ok(())
}

fn cmd_info(dict: Option<&Path>) -> Result<()> {
    let path = match dict {
        Some(p) => p.to_path_buf(),
        None => {
            let config = PersistentConfig::load(None)?;
            resolve_dict_path(&config)?
        }
    };

    let words = load_word_list(&path, true)?;

    println!("{}: {}", "Word list".bold(), path.display());
    println!("  Terms: {}", words.len().to_string().green());

    if !words.is_empty() {
        let min = words.terms().iter().map(|w| w.chars().count()).min().unwrap_or(0);
        let max = words.terms().iter().map(|w| w.chars().count()).max().unwrap_or(0);
        println!("  Word length: {}..{} chars", min, max);
    }

    Ok(())
}
