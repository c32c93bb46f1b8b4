/// Config file loading and creation for the lewisclass CLI.
///
/// Config lives at ~/.config/lewisclass/config.toml.
/// All fields are optional — CLI args override config values.
use lewisclass_core::ScoringFields;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::bail;

#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LewisClassConfig {
    pub num_classes: Option<usize>,
    pub num_winners: Option<usize>,
    pub scoring_fields: Option<ScoringFieldsSetting>,
    pub print_all: Option<bool>,
}

/// `scoring_fields` as written in the config: a count, or a keyword such as "all".
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum ScoringFieldsSetting {
    Count(usize),
    Named(String),
}

impl ScoringFieldsSetting {
    pub fn resolve(&self) -> Result<ScoringFields, String> {
        match self {
            ScoringFieldsSetting::Count(n) => parse_scoring_fields(&n.to_string()),
            ScoringFieldsSetting::Named(s) => parse_scoring_fields(s),
        }
    }
}

/// Parse a scoring-field count: a positive integer, or "all" for whole-line comparison.
pub fn parse_scoring_fields(value: &str) -> Result<ScoringFields, String> {
    if value.eq_ignore_ascii_case("all") {
        return Ok(ScoringFields::All);
    }
    match value.parse::<usize>() {
        Ok(0) => Err("scoring fields must be at least 1 (or \"all\")".to_string()),
        Ok(n) => Ok(ScoringFields::Count(n)),
        Err(_) => Err(format!("expected a positive number or \"all\", got \"{value}\"")),
    }
}

const DEFAULT_CONFIG_TEMPLATE: &str = "\
# lewisclass configuration
# All values here can be overridden by CLI flags.

# Number of classes to divide the field into
# num_classes = 3

# Number of winners to print in each class
# num_winners = 3

# Leading space-separated fields that make up the score, most important first.
# Use \"all\" to compare whole lines (only exact duplicates tie).
# scoring_fields = 2

# Print every member of each class, not just the winners
# print_all = false
";

/// Returns the default config path: ~/.config/lewisclass/config.toml
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| bail("HOME environment variable not set"));
    PathBuf::from(home).join(".config").join("lewisclass").join("config.toml")
}

/// Parse config text.
pub fn parse_config(content: &str) -> Result<LewisClassConfig, toml::de::Error> {
    toml::from_str(content)
}

/// Load config from a file path. Returns default (all None) if file doesn't exist.
pub fn load_config(path: &Path) -> LewisClassConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_config(&content)
            .unwrap_or_else(|e| bail(format!("Failed to parse config at {}: {e}", path.display()))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("no config at {}, using defaults", path.display());
            LewisClassConfig::default()
        }
        Err(e) => bail(format!("Failed to read config at {}: {e}", path.display())),
    }
}

/// Create the default config file. Errors if it already exists.
pub fn create_default_config() -> PathBuf {
    let path = config_path();

    if path.exists() {
        bail(format!("Config file already exists at {}", path.display()));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| bail(format!("Failed to create directory {}: {e}", parent.display())));
    }

    std::fs::write(&path, DEFAULT_CONFIG_TEMPLATE)
        .unwrap_or_else(|e| bail(format!("Failed to write config to {}: {e}", path.display())));

    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_parses_to_defaults() {
        let cfg = parse_config(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert_eq!(cfg, LewisClassConfig::default());
    }

    #[test]
    fn test_parse_config_values() {
        let cfg = parse_config("num_classes = 5\nscoring_fields = \"all\"\nprint_all = true\n").unwrap();
        assert_eq!(cfg.num_classes, Some(5));
        assert_eq!(cfg.num_winners, None);
        assert_eq!(cfg.scoring_fields.unwrap().resolve(), Ok(ScoringFields::All));
        assert_eq!(cfg.print_all, Some(true));

        let cfg = parse_config("scoring_fields = 2\n").unwrap();
        assert_eq!(cfg.scoring_fields, Some(ScoringFieldsSetting::Count(2)));
    }

    #[test]
    fn test_parse_scoring_fields() {
        assert_eq!(parse_scoring_fields("2"), Ok(ScoringFields::Count(2)));
        assert_eq!(parse_scoring_fields("ALL"), Ok(ScoringFields::All));
        assert!(parse_scoring_fields("0").is_err());
        assert!(parse_scoring_fields("two").is_err());
        assert!(ScoringFieldsSetting::Count(0).resolve().is_err());
    }

    #[test]
    fn test_parse_config_rejects_unknown_key() {
        assert!(parse_config("classes = 5\n").is_err());
    }

    #[test]
    fn test_load_missing_config_is_default() {
        let path = std::env::temp_dir().join("lewisclass-test-missing").join("config.toml");
        assert_eq!(load_config(&path), LewisClassConfig::default());
    }
}
