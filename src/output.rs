use crate::aggregator::FlaggedWords;
use crate::speller::Finding;
use crate::PREVIEW_LIMIT;
use colored::*;
use std::path::Path;

/// Print the first few findings for one file. Truncation is a verbosity
/// cap; the aggregator still records every finding.
pub fn print_preview(path: &Path, findings: &[Finding], colored: bool) {
    if findings.is_empty() {
        return;
    }

    let file_name = path.display().to_string();
    if colored {
        println!("\n{}", file_name.bold().underline());
    } else {
        println!("\n{}", file_name);
    }

    for finding in findings.iter().take(PREVIEW_LIMIT) {
        if colored {
            println!(
                "  {} {}",
                finding.word.red().bold(),
                finding.context.dimmed()
            );
        } else {
            println!("  {} {}", finding.word, finding.context);
        }

        if !finding.suggestions.is_empty() {
            let joined = finding.suggestions.join(", ");
            if colored {
                println!("    {} {}", "→".dimmed(), joined.green());
            } else {
                println!("    → {}", joined);
            }
        }
    }

    if findings.len() > PREVIEW_LIMIT {
        let rest = findings.len() - PREVIEW_LIMIT;
        if colored {
            println!("  {}", format!("... and {} more", rest).dimmed());
        } else {
            println!("  ... and {} more", rest);
        }
    }
}

/// Emit the final deduplicated word set.
pub fn print_flagged_words(flagged: &FlaggedWords, colored: bool) {
    println!();
    if flagged.is_empty() {
        if colored {
            println!("{}", "✓ No misspelled words found!".green().bold());
        } else {
            println!("✓ No misspelled words found!");
        }
        return;
    }

    let word_label = if flagged.len() == 1 { "word" } else { "words" };
    if colored {
        println!(
            "{} {} unique misspelled {}:",
            "✗".red().bold(),
            flagged.len().to_string().red().bold(),
            word_label
        );
    } else {
        println!("✗ {} unique misspelled {}:", flagged.len(), word_label);
    }

    for word in flagged.iter() {
        println!("  {}", word);
    }
}
