//! Vocabulary completion for front ends.

use colossal_core::vocab::all_words;
use strsim::jaro_winkler;

/// Minimum similarity for a fuzzy suggestion (0.0-1.0).
pub const FUZZY_THRESHOLD: f64 = 0.8;

/// Vocabulary words starting with `partial`, in lookup order.
///
/// When nothing starts with it, falls back to the closest words by
/// Jaro-Winkler similarity above [`FUZZY_THRESHOLD`].
pub fn complete(partial: &str) -> Vec<String> {
    let partial = partial.trim().to_lowercase();
    if partial.is_empty() {
        return Vec::new();
    }
    let mut words: Vec<String> = Vec::new();
    for (word, _) in all_words() {
        if word.starts_with(&partial) && !words.iter().any(|w| w == word) {
            words.push(word.to_string());
        }
    }
    if words.is_empty() {
        words = suggest(&partial, FUZZY_THRESHOLD, usize::MAX);
    }
    words
}

/// Up to `limit` vocabulary words scoring at least `threshold` against
/// `input`, best first.
pub fn suggest(input: &str, threshold: f64, limit: usize) -> Vec<String> {
    let input = input.to_lowercase();
    let mut scored: Vec<(&str, f64)> = Vec::new();
    for (word, _) in all_words() {
        if scored.iter().any(|(w, _)| *w == word) {
            continue;
        }
        let score = jaro_winkler(&input, word);
        if score >= threshold {
            scored.push((word, score));
        }
    }

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored
        .into_iter()
        .take(limit)
        .map(|(word, _)| word.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_complete() {
        let words = complete("pl");
        assert!(words.contains(&"plugh".to_string()));
        assert!(words.contains(&"plant".to_string()));
        assert!(words.contains(&"plove".to_string()));
        assert!(words.iter().all(|w| w.starts_with("pl")));
    }

    #[test]
    fn duplicates_are_dropped() {
        let words = complete("rod");
        assert_eq!(words, vec!["rod".to_string()]);
    }

    #[test]
    fn typos_fall_back_to_similarity() {
        let words = complete("lamq");
        assert_eq!(words.first().map(String::as_str), Some("lamp"));
    }

    #[test]
    fn blank_input_completes_nothing() {
        assert!(complete("  ").is_empty());
    }
}
