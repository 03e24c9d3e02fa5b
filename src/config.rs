use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Options passed to the speller, fixed for the whole run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckOptions {
    pub language: String,
    pub ignore_acronyms: bool,
    pub ignore_numbers: bool,
    pub include_suggestions: bool,
    pub ignore_patterns: Vec<String>,
    pub dictionary: Option<PathBuf>,
    pub max_suggestions: usize,
}

fn default_max_suggestions() -> usize {
    5
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            language: "en-US".to_string(),
            ignore_acronyms: true,
            ignore_numbers: true,
            include_suggestions: true,
            ignore_patterns: vec![
                r"https?://\S+".to_string(),         // URLs
                r"\b[a-fA-F0-9]{32,}\b".to_string(), // Hashes
                r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}".to_string(), // Emails
            ],
            dictionary: None,
            max_suggestions: default_max_suggestions(),
        }
    }
}

impl CheckOptions {
    /// Load options with priority: CLI args > local config > global config > defaults
    pub fn load(
        language: String,
        dictionary: Option<PathBuf>,
        no_suggestions: bool,
    ) -> Result<Self> {
        let mut options = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::from_file(&global_path)?;
                options = options.merge(global);
            }
        }

        let local_path = PathBuf::from(".docspell.toml");
        if local_path.exists() {
            let local = Self::from_file(&local_path)?;
            options = options.merge(local);
        }

        options.language = language;
        if let Some(dict) = dictionary {
            options.dictionary = Some(dict);
        }
        if no_suggestions {
            options.include_suggestions = false;
        }

        Ok(options)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: Self) -> Self {
        if other.language != "en-US" {
            self.language = other.language;
        }
        if other.dictionary.is_some() {
            self.dictionary = other.dictionary;
        }
        if !other.ignore_patterns.is_empty() {
            self.ignore_patterns = other.ignore_patterns;
        }
        if other.max_suggestions != default_max_suggestions() {
            self.max_suggestions = other.max_suggestions;
        }
        self.ignore_acronyms = other.ignore_acronyms;
        self.ignore_numbers = other.ignore_numbers;
        self.include_suggestions = other.include_suggestions;
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "docspell").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn data_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "docspell").map(|dirs| dirs.data_dir().to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = CheckOptions::default();
        assert_eq!(options.language, "en-US");
        assert!(options.ignore_acronyms);
        assert!(options.ignore_numbers);
        assert!(options.include_suggestions);
        assert!(options.dictionary.is_none());
    }

    #[test]
    fn test_merge_options() {
        let base = CheckOptions::default();
        let override_options = CheckOptions {
            language: "en-GB".to_string(),
            include_suggestions: false,
            ..Default::default()
        };

        let merged = base.merge(override_options);
        assert_eq!(merged.language, "en-GB");
        assert!(!merged.include_suggestions);
    }

    #[test]
    fn test_partial_toml() {
        let options: CheckOptions = toml::from_str("language = \"en-GB\"").unwrap();
        assert_eq!(options.language, "en-GB");
        assert!(options.ignore_acronyms);
    }
}
