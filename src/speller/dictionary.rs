use anyhow::{Context, Result};
use fst::{Automaton, IntoStreamer, Set, SetBuilder, Streamer};
use std::fs::File;
use std::io::{BufWriter, Read};
use std::path::{Path, PathBuf};

/// Word set backed by an FST, loaded fully into memory.
pub struct Dictionary {
    set: Set<Vec<u8>>,
}

impl Dictionary {
    /// Load the installed dictionary for a language, building a small
    /// bootstrap dictionary on first use if none is installed.
    pub fn load(language: &str) -> Result<Self> {
        let dict_path = Self::installed_path(language)?;

        if !dict_path.exists() {
            let words: Vec<String> = BOOTSTRAP_WORDS.iter().map(|s| s.to_string()).collect();
            Self::build_from_words(&words, &dict_path)?;
        }

        Self::load_from_path(&dict_path)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let mut file = File::open(path)
            .with_context(|| format!("Failed to open dictionary: {}", path.display()))?;

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .with_context(|| format!("Failed to read dictionary: {}", path.display()))?;

        let set = Set::new(bytes).context("Failed to parse dictionary")?;
        Ok(Self { set })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.set.contains(word.as_bytes())
    }

    /// All dictionary words starting with `prefix`.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut results = Vec::new();
        let mut stream = self
            .set
            .search(fst::automaton::Str::new(prefix).starts_with())
            .into_stream();

        while let Some(key) = stream.next() {
            if let Ok(word) = String::from_utf8(key.to_vec()) {
                results.push(word);
            }
        }

        results
    }

    /// Build an FST dictionary file from a word list.
    pub fn build_from_words(words: &[String], output_path: &Path) -> Result<()> {
        let mut sorted = words.to_vec();
        sorted.sort();
        sorted.dedup();

        let file = File::create(output_path).with_context(|| {
            format!("Failed to create dictionary: {}", output_path.display())
        })?;

        let mut builder =
            SetBuilder::new(BufWriter::new(file)).context("Failed to create FST builder")?;
        for word in sorted {
            builder
                .insert(word.as_bytes())
                .context("Failed to insert word into dictionary")?;
        }
        builder.finish().context("Failed to finalize dictionary")?;

        Ok(())
    }

    pub fn installed_path(language: &str) -> Result<PathBuf> {
        let data_dir =
            crate::config::CheckOptions::data_dir().context("Failed to get data directory")?;
        std::fs::create_dir_all(&data_dir).context("Failed to create data directory")?;
        Ok(data_dir.join(format!("{}.dict", language)))
    }
}

/// Minimal wordlist so the binary works before any dictionary download.
const BOOTSTRAP_WORDS: &[&str] = &[
    "a", "about", "after", "all", "also", "an", "and", "any", "are", "as", "at", "back", "be",
    "because", "been", "before", "but", "by", "can", "come", "could", "day", "do", "each", "even",
    "first", "for", "from", "get", "give", "go", "good", "has", "have", "he", "her", "here",
    "him", "his", "how", "if", "in", "into", "is", "it", "its", "just", "know", "like", "look",
    "make", "many", "may", "me", "more", "most", "my", "new", "no", "not", "now", "of", "on",
    "one", "only", "or", "other", "our", "out", "over", "page", "people", "read", "see", "she",
    "so", "some", "take", "than", "that", "the", "their", "them", "then", "there", "these",
    "they", "this", "time", "to", "two", "up", "us", "use", "want", "way", "we", "well", "what",
    "when", "which", "who", "will", "with", "work", "would", "year", "you", "your",
];
