use crate::speller::dictionary::Dictionary;

/// Generate suggestions for a misspelled word, cheapest strategy first.
pub fn generate(word: &str, dictionary: &Dictionary, max_suggestions: usize) -> Vec<String> {
    let mut suggestions = Vec::new();

    // Single-edit variants that are real words catch most typos.
    for candidate in edit_variants(word) {
        if dictionary.contains(&candidate) && !suggestions.contains(&candidate) {
            suggestions.push(candidate);
            if suggestions.len() >= max_suggestions {
                return suggestions;
            }
        }
    }

    // Fall back to prefix neighbors ranked by edit distance.
    if word.chars().count() >= 3 {
        let prefix: String = word.chars().take(3).collect();
        let mut neighbors = dictionary.words_with_prefix(&prefix);
        neighbors.sort_by_key(|w| edit_distance(word, w));

        for neighbor in neighbors {
            if edit_distance(word, &neighbor) <= 2 && !suggestions.contains(&neighbor) {
                suggestions.push(neighbor);
                if suggestions.len() >= max_suggestions {
                    break;
                }
            }
        }
    }

    suggestions
}

/// Deletions, adjacent transpositions, insertions, and one-letter
/// substitutions.
fn edit_variants(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut variants = Vec::new();

    for i in 0..chars.len() {
        let mut v = chars.clone();
        v.remove(i);
        variants.push(v.iter().collect());
    }

    for i in 0..=chars.len() {
        for c in 'a'..='z' {
            let mut v = chars.clone();
            v.insert(i, c);
            variants.push(v.iter().collect());
        }
    }

    for i in 0..chars.len().saturating_sub(1) {
        let mut v = chars.clone();
        v.swap(i, i + 1);
        variants.push(v.iter().collect());
    }

    for i in 0..chars.len() {
        for c in 'a'..='z' {
            if chars[i] != c {
                let mut v = chars.clone();
                v[i] = c;
                variants.push(v.iter().collect());
            }
        }
    }

    variants
}

/// Levenshtein distance, two-row formulation.
fn edit_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a.chars().count();
    }

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != *cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn fixture_dictionary() -> Dictionary {
        let dir = tempdir().unwrap();
        let dict_path = dir.path().join("test.dict");
        let words = vec![
            "quick".to_string(),
            "quiet".to_string(),
            "the".to_string(),
            "fox".to_string(),
        ];
        Dictionary::build_from_words(&words, &dict_path).unwrap();
        Dictionary::load_from_path(&dict_path).unwrap()
    }

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("hello", "hello"), 0);
        assert_eq!(edit_distance("hello", "hallo"), 1);
        assert_eq!(edit_distance("teh", "the"), 2);
        assert_eq!(edit_distance("", "abc"), 3);
    }

    #[test]
    fn test_variants_cover_common_typos() {
        let variants = edit_variants("teh");
        assert!(variants.contains(&"the".to_string())); // transposition
        assert!(variants.contains(&"eh".to_string())); // deletion
    }

    #[test]
    fn test_suggests_for_missing_letter() {
        let dict = fixture_dictionary();
        let suggestions = generate("quik", &dict, 5);
        assert!(suggestions.contains(&"quick".to_string()));
    }

    #[test]
    fn test_suggests_for_transposition() {
        let dict = fixture_dictionary();
        let suggestions = generate("teh", &dict, 5);
        assert!(suggestions.contains(&"the".to_string()));
    }

    #[test]
    fn test_respects_limit() {
        let dict = fixture_dictionary();
        let suggestions = generate("quik", &dict, 1);
        assert!(suggestions.len() <= 1);
    }
}
