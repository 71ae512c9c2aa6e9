// Detection Module
// Rule-based provenance detection organized into specialized submodules:
// - patterns: weighted matcher tables for the AI / human / plagiarism families
// - sentence_scorer: per-sentence AI probability and suspicion reason
// - aggregation: document AI score with consistency boost, plagiarism proxy
// - verdict: first-match verdict chain
// - batch: bounded-parallel detection over many texts

pub mod patterns;
pub mod sentence_scorer;
pub mod aggregation;
pub mod verdict;
pub mod batch;

use thiserror::Error;
use tracing::{debug, warn};

use crate::models::DetectionResult;
use crate::services::config_store::DetectionConfig;
use crate::services::text_processor::{compute_statistics, split_sentences, split_words};

pub use aggregation::{aggregate_ai_score, human_written_score, pattern_consistency, plagiarism_score};
pub use batch::detect_batch;
pub use patterns::{ai_patterns, human_patterns, plagiarism_patterns, PatternRule, PatternSignal, SignalFamily};
pub use sentence_scorer::{collect_signals, score_sentence, SentenceSignals};
pub use verdict::classify_verdict;

/// Below this many words the consistency boost rarely engages and results are noisy.
pub const RECOMMENDED_MIN_WORDS: usize = 100;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DetectError {
    #[error("text too short: {words} words (minimum {min})")]
    TooShort { words: usize, min: usize },
    #[error("text too long: {chars} characters (maximum {max})")]
    TooLong { chars: usize, max: usize },
    #[error("detection worker failed: {0}")]
    Worker(String),
}

/// Classify `text`. Pure and deterministic; every input yields a result.
pub fn classify(text: &str) -> DetectionResult {
    let sentences: Vec<_> = split_sentences(text)
        .iter()
        .map(|s| score_sentence(s))
        .collect();

    let ai_score = aggregate_ai_score(&sentences);
    let plagiarism_score = plagiarism_score(text);
    let human_written_score = human_written_score(ai_score, plagiarism_score);
    let overview = classify_verdict(ai_score, plagiarism_score);

    debug!(
        sentences = sentences.len(),
        suspicious = sentences.iter().filter(|s| s.suspicious).count(),
        ai_score,
        plagiarism_score,
        verdict = %overview.verdict,
        "detection.classified"
    );

    DetectionResult {
        ai_score,
        plagiarism_score,
        human_written_score,
        sentences,
        overview,
        statistics: compute_statistics(text),
    }
}

/// Apply the caller-side length policy, then classify.
pub fn detect_text(text: &str, config: &DetectionConfig) -> Result<DetectionResult, DetectError> {
    let chars = text.chars().count();
    if config.max_chars > 0 && chars > config.max_chars {
        return Err(DetectError::TooLong {
            chars,
            max: config.max_chars,
        });
    }

    let words = split_words(text).len();
    if config.min_words > 0 && words < config.min_words {
        return Err(DetectError::TooShort {
            words,
            min: config.min_words,
        });
    }
    if words < RECOMMENDED_MIN_WORDS {
        warn!(
            words,
            recommended = RECOMMENDED_MIN_WORDS,
            "detection.short_input"
        );
    }

    Ok(classify(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Verdict;

    #[test]
    fn test_classify_empty() {
        let result = classify("");
        assert!(result.sentences.is_empty());
        assert_eq!(result.ai_score, 0.0);
        assert_eq!(result.plagiarism_score, 0.0);
        assert_eq!(result.human_written_score, 100.0);
        assert_eq!(result.overview.verdict, Verdict::LikelyHuman);
    }

    #[test]
    fn test_classify_plagiarism_branch() {
        let text = r#"According to the study, "results were significant across all cohorts," as cited and referenced by many, and quoted widely"#;
        let result = classify(text);
        // 4 citation phrases (0.8) + 1 long quote (0.4) = 1.2 * 20
        assert!((result.plagiarism_score - 24.0).abs() < 1e-9);

        let heavy = format!("{} {}", text, r#"According to them, "this is another lengthy quoted passage here.""#);
        let result = classify(&heavy);
        assert!(result.plagiarism_score > 30.0);
        assert!(result.ai_score <= 50.0);
        assert_eq!(result.overview.verdict, Verdict::PossiblePlagiarism);
        assert_eq!(
            result.human_written_score,
            (100.0 - result.ai_score - result.plagiarism_score).max(0.0)
        );
    }

    #[test]
    fn test_classify_rounds_document_score() {
        let result = classify(
            "Moreover, in conclusion, the data supports this. \
             Furthermore, it is important to note that the results are consistent.",
        );
        let probs: Vec<f64> = result.sentences.iter().map(|s| s.ai_probability).collect();
        assert_eq!(probs, vec![62.5, 70.0]);
        // mean 66.25
        assert_eq!(result.ai_score, 66.0);
    }

    #[test]
    fn test_plagiarism_scans_whole_text() {
        // The quotation straddles a sentence break, so no single sentence contains it.
        let result = classify(r#"He said "this is. A long quote spanning" ok."#);
        assert_eq!(result.sentences.len(), 2);
        assert!((result.plagiarism_score - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_detect_text_policy() {
        let config = DetectionConfig {
            min_words: 3,
            max_chars: 20,
            batch_parallel: 1,
        };
        assert_eq!(
            detect_text("one two", &config),
            Err(DetectError::TooShort { words: 2, min: 3 })
        );
        assert_eq!(
            detect_text("this text is far too long for the limit", &config),
            Err(DetectError::TooLong { chars: 39, max: 20 })
        );
        let ok = detect_text("one two three", &config).unwrap();
        assert_eq!(ok.sentences.len(), 1);
    }

    #[test]
    fn test_detect_text_zero_limits_disable_checks() {
        let config = DetectionConfig {
            min_words: 0,
            max_chars: 0,
            batch_parallel: 1,
        };
        let result = detect_text("", &config).unwrap();
        assert_eq!(result.human_written_score, 100.0);
    }
}
