use pulldown_cmark::{Event, Parser, Tag, TagEnd};
use unicode_segmentation::UnicodeSegmentation;

/// One checkable word plus the prose surrounding it.
#[derive(Debug, Clone)]
pub struct Token {
    pub word: String,
    pub context: String,
}

/// Extract checkable words from markdown prose.
///
/// Fenced code blocks and inline code are never tokenized; link
/// destinations and raw HTML never reach us as text events.
pub fn tokenize(content: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut in_code_block = false;

    for event in Parser::new(content) {
        match event {
            Event::Start(Tag::CodeBlock(_)) => in_code_block = true,
            Event::End(TagEnd::CodeBlock) => in_code_block = false,
            Event::Text(text) if !in_code_block => {
                for (offset, word) in text.unicode_word_indices() {
                    tokens.push(Token {
                        word: word.to_string(),
                        context: surrounding(&text, offset, word.len()),
                    });
                }
            }
            _ => {}
        }
    }

    tokens
}

/// Up to 20 bytes of context either side, clamped to char boundaries.
fn surrounding(text: &str, offset: usize, len: usize) -> String {
    let mut start = offset.saturating_sub(20);
    while !text.is_char_boundary(start) {
        start -= 1;
    }
    let mut end = (offset + len + 20).min(text.len());
    while !text.is_char_boundary(end) {
        end += 1;
    }

    let context = &text[start..end];
    match (start > 0, end < text.len()) {
        (true, true) => format!("...{}...", context),
        (true, false) => format!("...{}", context),
        (false, true) => format!("{}...", context),
        (false, false) => context.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_prose_words() {
        let tokens = tokenize("The quick brown fox.");
        let words: Vec<&str> = tokens.iter().map(|t| t.word.as_str()).collect();
        assert_eq!(words, vec!["The", "quick", "brown", "fox"]);
    }

    #[test]
    fn test_skips_code_blocks() {
        let content = r#"
# Title

Prose before.

```rust
fn main() {
    println!("unreachable");
}
```

Prose after with `inline_code` here.
"#;
        let tokens = tokenize(content);
        assert!(tokens.iter().all(|t| t.word != "println"));
        assert!(tokens.iter().all(|t| t.word != "inline_code"));
        assert!(tokens.iter().any(|t| t.word == "Prose"));
    }

    #[test]
    fn test_keeps_contractions() {
        let tokens = tokenize("Don't panic.");
        let words: Vec<&str> = tokens.iter().map(|t| t.word.as_str()).collect();
        assert_eq!(words, vec!["Don't", "panic"]);
    }

    #[test]
    fn test_context_is_bounded() {
        let long = format!("{} mispeled {}", "x".repeat(100), "y".repeat(100));
        let tokens = tokenize(&long);
        let token = tokens.iter().find(|t| t.word == "mispeled").unwrap();
        assert!(token.context.starts_with("..."));
        assert!(token.context.ends_with("..."));
        assert!(token.context.len() < long.len());
    }
}
