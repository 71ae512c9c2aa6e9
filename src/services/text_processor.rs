// Text Processing Service
// Lexical sentence/word splitting and the syllable-based readability estimators.

use crate::models::TextStatistics;
use regex::Regex;
use std::sync::OnceLock;

/// Syllable count above which a word is considered "complex".
const COMPLEX_WORD_SYLLABLES: usize = 3;

fn sentence_break_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.!?]+\s+").expect("sentence break regex"))
}

/// Split raw text into trimmed, non-empty sentences.
///
/// A break is one or more of `.`, `!`, `?` followed by whitespace; the
/// break itself is consumed. A trailing fragment without terminal
/// punctuation is kept as the last sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return vec![];
    }

    sentence_break_re()
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Whitespace-delimited words.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Coarse syllable estimate for a single token. Always at least 1.
///
/// Counts vowel runs (`a e i o u y`) on the lowercased ASCII letters of the
/// word, drops one for a trailing `e` and adds one back for a trailing `le`.
pub fn count_syllables(word: &str) -> usize {
    let cleaned: String = word
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect();

    if cleaned.len() <= 3 {
        return 1;
    }

    let mut count = 0usize;
    let mut in_vowel = false;
    for ch in cleaned.chars() {
        let is_vowel = matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if is_vowel && !in_vowel {
            count += 1;
        }
        in_vowel = is_vowel;
    }

    if count == 0 {
        return 1;
    }

    if cleaned.ends_with('e') {
        count -= 1;
    }
    if cleaned.ends_with("le") && cleaned.len() > 2 {
        count += 1;
    }

    count.max(1)
}

fn is_complex_word(word: &str) -> bool {
    count_syllables(word) > COMPLEX_WORD_SYLLABLES
}

/// Share of words in `sentence` with more than three estimated syllables.
pub fn complexity_ratio(sentence: &str) -> f64 {
    let words = split_words(sentence);
    if words.is_empty() {
        return 0.0;
    }
    let complex = words.iter().filter(|w| is_complex_word(w)).count();
    complex as f64 / words.len() as f64
}

/// Readability figures over the whole text, using the same splitters as scoring.
pub fn compute_statistics(text: &str) -> TextStatistics {
    let sentences = split_sentences(text);
    let words = split_words(text);
    if sentences.is_empty() || words.is_empty() {
        return TextStatistics {
            sentence_count: sentences.len(),
            ..TextStatistics::default()
        };
    }

    let word_count = words.len();
    let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();
    let complex = words.iter().filter(|w| is_complex_word(w)).count();

    let words_per_sentence = word_count as f64 / sentences.len() as f64;
    let syllables_per_word = syllables as f64 / word_count as f64;
    let flesch = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;

    TextStatistics {
        word_count,
        sentence_count: sentences.len(),
        avg_words_per_sentence: words_per_sentence,
        avg_syllables_per_word: syllables_per_word,
        complex_word_ratio: complex as f64 / word_count as f64,
        flesch_reading_ease: flesch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_sentences_basic() {
        let sentences = split_sentences("First one. Second one!  Third one?? Fourth");
        assert_eq!(sentences, vec!["First one", "Second one", "Third one", "Fourth"]);
    }

    #[test]
    fn test_split_sentences_keeps_trailing_punctuation_without_whitespace() {
        let sentences = split_sentences("It ends here. Done.");
        assert_eq!(sentences, vec!["It ends here", "Done."]);
    }

    #[test]
    fn test_split_sentences_requires_whitespace_after_break() {
        // No whitespace after the period, so the decimal stays intact.
        let sentences = split_sentences("Pi is 3.14 roughly. Yes");
        assert_eq!(sentences, vec!["Pi is 3.14 roughly", "Yes"]);
    }

    #[test]
    fn test_split_sentences_drops_empty_segments() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n\t ").is_empty());
        // Leading "... " and trailing ".  " are both breaks.
        assert_eq!(split_sentences("  ... Hello.  "), vec!["Hello"]);
    }

    #[test]
    fn test_count_syllables_examples() {
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables("the"), 1);
        assert!(count_syllables("beautiful") >= 3);
        assert_eq!(count_syllables("rhythm"), 1);
        assert_eq!(count_syllables("Table,"), 2);
        assert_eq!(count_syllables("make"), 1);
        assert_eq!(count_syllables("additionally"), 5);
    }

    #[test]
    fn test_count_syllables_never_zero() {
        for w in ["", "!!", "a", "xyz", "bcdfg", "ee", "eye", "1234", "élan"] {
            assert!(count_syllables(w) >= 1, "word {:?}", w);
        }
    }

    #[test]
    fn test_complexity_ratio() {
        assert_eq!(complexity_ratio(""), 0.0);
        assert_eq!(complexity_ratio("the cat sat"), 0.0);
        // "additionally" = 5 syllables, "it" = 1
        assert!((complexity_ratio("additionally it") - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_compute_statistics() {
        let stats = compute_statistics("The cat sat. The dog ran.");
        assert_eq!(stats.sentence_count, 2);
        assert_eq!(stats.word_count, 6);
        assert!((stats.avg_words_per_sentence - 3.0).abs() < 1e-9);
        assert!((stats.avg_syllables_per_word - 1.0).abs() < 1e-9);
        assert!(stats.flesch_reading_ease > 100.0);

        let empty = compute_statistics("   ");
        assert_eq!(empty, TextStatistics::default());
    }
}
