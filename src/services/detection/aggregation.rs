// Aggregation Logic
// Combines per-sentence AI probabilities into document-level scores.

use crate::models::SentenceAnalysis;
use super::patterns::plagiarism_patterns;

/// Std-dev that maps to zero consistency on the 0-100 probability scale.
const CONSISTENCY_STD_SCALE: f64 = 50.0;
/// Maximum multiplicative lift from a perfectly uniform document.
const CONSISTENCY_BOOST: f64 = 0.2;
/// The boost only applies to documents with more sentences than this.
const CONSISTENCY_MIN_SENTENCES: usize = 5;
const PLAGIARISM_SCALE: f64 = 20.0;

/// Uniformity of sentence scores: 1 for identical values, falling to 0 as the
/// population std-dev reaches 50. Fewer than two values yields 0.
pub fn pattern_consistency(probabilities: &[f64]) -> f64 {
    if probabilities.len() < 2 {
        return 0.0;
    }
    1.0 - (std_dev(probabilities) / CONSISTENCY_STD_SCALE).min(1.0)
}

/// Document AI score: mean sentence probability, lifted for long uniform
/// documents, then rounded and clamped to [0, 100].
pub fn aggregate_ai_score(sentences: &[SentenceAnalysis]) -> f64 {
    if sentences.is_empty() {
        return 0.0;
    }

    let probs: Vec<f64> = sentences.iter().map(|s| s.ai_probability).collect();
    let mut overall = mean(&probs);

    if probs.len() > CONSISTENCY_MIN_SENTENCES {
        let consistency = pattern_consistency(&probs);
        overall *= 1.0 + consistency * CONSISTENCY_BOOST;
    }

    overall.round().clamp(0.0, 100.0)
}

/// Plagiarism proxy over the whole original text (not per sentence).
pub fn plagiarism_score(text: &str) -> f64 {
    (plagiarism_patterns().weighted_score(text) * PLAGIARISM_SCALE).clamp(0.0, 100.0)
}

pub fn human_written_score(ai_score: f64, plagiarism_score: f64) -> f64 {
    (100.0 - ai_score - plagiarism_score).max(0.0)
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = mean(values);
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}
