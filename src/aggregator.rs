use crate::config::CheckOptions;
use crate::error::ScanError;
use crate::output;
use crate::speller::Speller;
use log::{debug, info};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Deduplicated accumulation of flagged words, in first-seen order.
#[derive(Debug, Default)]
pub struct FlaggedWords {
    seen: HashSet<String>,
    order: Vec<String>,
}

impl FlaggedWords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the word was not present before.
    pub fn insert(&mut self, word: &str) -> bool {
        if self.seen.contains(word) {
            return false;
        }
        self.seen.insert(word.to_string());
        self.order.push(word.to_string());
        true
    }

    pub fn contains(&self, word: &str) -> bool {
        self.seen.contains(word)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}

/// Read every collected document, spell-check it, print a bounded preview
/// per file, and merge all flagged words into one set.
///
/// Reads are attempted directly rather than guarded by an existence check;
/// a file that vanished since collection shows up as `NotFound` and is
/// skipped. Any other read failure aborts the run.
pub fn aggregate<S: Speller>(
    paths: &[PathBuf],
    speller: &S,
    options: &CheckOptions,
    colored: bool,
) -> Result<FlaggedWords, ScanError> {
    let mut flagged = FlaggedWords::new();

    for path in paths {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(
                    "{} vanished between listing and read, skipping",
                    path.display()
                );
                continue;
            }
            Err(e) => {
                return Err(ScanError::Read {
                    path: path.clone(),
                    source: e,
                })
            }
        };

        let findings = speller
            .spell(&text, options)
            .map_err(|e| ScanError::SpellCheck {
                path: path.clone(),
                source: e.into(),
            })?;

        output::print_preview(path, &findings, colored);

        for finding in &findings {
            flagged.insert(&finding.word);
        }
    }

    info!(
        "{} unique flagged words across {} documents",
        flagged.len(),
        paths.len()
    );

    Ok(flagged)
}
