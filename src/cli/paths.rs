//! Default paths and persistent configuration

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::rank::RankOptions;

/// Get the configuration directory for typeahead
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::data_local_dir().context("Could not determine local data directory")?;
    Ok(base.join("typeahead"))
}

/// Get the config file path, creating the directory if needed
pub fn config_file_path() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    Ok(dir.join("config.json"))
}

/// User configuration stored in the config file.
///
/// Every field is optional: an unset field falls through to the CLI flag and
/// then to the built-in default. CLI flags always win over stored values.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PersistentConfig {
    /// Default word list path
    pub dict_path: Option<PathBuf>,
    /// Default result cap
    pub top_k: Option<usize>,
    /// Default maximum edit distance
    pub max_distance: Option<usize>,
    /// Default case sensitivity
    pub case_sensitive: Option<bool>,
    /// Default color setting
    pub color: Option<bool>,
}

impl PersistentConfig {
    /// Load configuration from the given path, or the default location.
    ///
    /// A missing file yields the empty (all-unset) configuration.
    pub fn load(custom_path: Option<&Path>) -> Result<Self> {
        let path = match custom_path {
            Some(p) => p.to_path_buf(),
            None => config_file_path()?,
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Save configuration to the given path, or the default location.
    pub fn save(&self, custom_path: Option<&Path>) -> Result<()> {
        let path = match custom_path {
            Some(p) => p.to_path_buf(),
            None => config_file_path()?,
        };

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write config: {}", path.display()))
    }

    /// Merge CLI overrides over this configuration. Set CLI fields win.
    pub fn merge_with_cli(&self, cli: &PersistentConfig) -> Self {
        Self {
            dict_path: cli.dict_path.clone().or_else(|| self.dict_path.clone()),
            top_k: cli.top_k.or(self.top_k),
            max_distance: cli.max_distance.or(self.max_distance),
            case_sensitive: cli.case_sensitive.or(self.case_sensitive),
            color: cli.color.or(self.color),
        }
    }

    /// Resolve ranking options, falling back to the built-in defaults for
    /// unset fields.
    pub fn rank_options(&self) -> RankOptions {
        let defaults = RankOptions::default();
        RankOptions {
            top_k: self.top_k.unwrap_or(defaults.top_k),
            max_distance: match self.max_distance {
                Some(m) => Some(m),
                None => defaults.max_distance,
            },
            case_sensitive: self.case_sensitive.unwrap_or(defaults.case_sensitive),
        }
    }

    /// Resolve the color setting (defaults to on).
    pub fn use_color(&self) -> bool {
        self.color.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_cli_wins() {
        let stored = PersistentConfig {
            dict_path: Some(PathBuf::from("/stored/words.txt")),
            top_k: Some(5),
            max_distance: Some(2),
            case_sensitive: Some(false),
            color: Some(true),
        };
        let cli = PersistentConfig {
            top_k: Some(20),
            color: Some(false),
            ..PersistentConfig::default()
        };

        let merged = stored.merge_with_cli(&cli);
        assert_eq!(merged.top_k, Some(20));
        assert_eq!(merged.color, Some(false));
        assert_eq!(merged.dict_path, Some(PathBuf::from("/stored/words.txt")));
        assert_eq!(merged.max_distance, Some(2));
    }

    #[test]
    fn test_rank_options_defaults_for_unset() {
        let config = PersistentConfig::default();
        let options = config.rank_options();
        assert_eq!(options.top_k, 10);
        assert_eq!(options.max_distance, Some(4));
        assert!(!options.case_sensitive);
    }

    #[test]
    fn test_rank_options_from_config() {
        let config = PersistentConfig {
            top_k: Some(3),
            max_distance: Some(1),
            case_sensitive: Some(true),
            ..PersistentConfig::default()
        };
        let options = config.rank_options();
        assert_eq!(options.top_k, 3);
        assert_eq!(options.max_distance, Some(1));
        assert!(options.case_sensitive);
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = PersistentConfig {
            dict_path: Some(PathBuf::from("words.txt")),
            top_k: Some(7),
            max_distance: None,
            case_sensitive: Some(false),
            color: Some(true),
        };

        let json = serde_json::to_string(&config).unwrap();
        let back: PersistentConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
