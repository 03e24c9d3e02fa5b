pub mod aggregator;
pub mod collector;
pub mod config;
pub mod dict;
pub mod error;
pub mod output;
pub mod speller;

pub use aggregator::FlaggedWords;
pub use config::CheckOptions;
pub use error::ScanError;
pub use speller::{DictionarySpeller, Finding, Speller};

/// How many findings are printed per file before the preview is truncated.
pub const PREVIEW_LIMIT: usize = 8;
