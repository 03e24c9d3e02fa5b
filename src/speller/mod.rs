pub mod dictionary;
pub mod suggestions;
pub mod tokenizer;

use crate::config::CheckOptions;
use anyhow::Result;
use dictionary::Dictionary;
use log::warn;
use regex::Regex;

/// One flagged word as reported by the spell-check collaborator.
#[derive(Debug, Clone)]
pub struct Finding {
    pub word: String,
    pub context: String,
    pub suggestions: Vec<String>,
}

/// The spell-check collaborator. The scanner only depends on this seam;
/// it never looks inside the engine.
pub trait Speller {
    fn spell(&self, text: &str, options: &CheckOptions) -> Result<Vec<Finding>>;
}

/// Dictionary-backed speller over an FST word set.
pub struct DictionarySpeller {
    dictionary: Dictionary,
    ignore_patterns: Vec<Regex>,
}

impl DictionarySpeller {
    pub fn new(options: &CheckOptions) -> Result<Self> {
        let dictionary = match &options.dictionary {
            Some(path) => Dictionary::load_from_path(path)?,
            None => Dictionary::load(&options.language)?,
        };

        let mut ignore_patterns = Vec::new();
        for pattern in &options.ignore_patterns {
            match Regex::new(pattern) {
                Ok(re) => ignore_patterns.push(re),
                Err(e) => warn!("invalid ignore pattern '{}': {}", pattern, e),
            }
        }

        Ok(Self {
            dictionary,
            ignore_patterns,
        })
    }

    fn should_skip(&self, word: &str, options: &CheckOptions) -> bool {
        if word.chars().count() <= 1 {
            return true;
        }

        if options.ignore_numbers && word.chars().any(|c| c.is_ascii_digit()) {
            return true;
        }

        if options.ignore_acronyms && is_acronym(word) {
            return true;
        }

        self.ignore_patterns.iter().any(|re| re.is_match(word))
    }
}

impl Speller for DictionarySpeller {
    fn spell(&self, text: &str, options: &CheckOptions) -> Result<Vec<Finding>> {
        let mut findings = Vec::new();

        for token in tokenizer::tokenize(text) {
            if self.should_skip(&token.word, options) {
                continue;
            }

            let lower = token.word.to_lowercase();
            if self.dictionary.contains(&lower) {
                continue;
            }

            let suggestions = if options.include_suggestions {
                suggestions::generate(&lower, &self.dictionary, options.max_suggestions)
            } else {
                Vec::new()
            };

            findings.push(Finding {
                word: token.word,
                context: token.context,
                suggestions,
            });
        }

        Ok(findings)
    }
}

fn is_acronym(word: &str) -> bool {
    word.chars().any(|c| c.is_uppercase())
        && word
            .chars()
            .all(|c| c.is_uppercase() || c.is_ascii_digit())
}
