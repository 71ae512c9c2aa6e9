// Sentence Scorer
// Per-sentence AI probability from the pattern signal families plus
// length and lexical-complexity heuristics.

use crate::models::SentenceAnalysis;
use crate::services::text_processor::{complexity_ratio, split_words};
use super::patterns::{ai_patterns, human_patterns};

/// Added to the denominator of the probability ratio. Calibration value:
/// it also damps sentences whose signal is weak in both directions.
const SCORE_DAMPING: f64 = 0.3;
const SUSPICIOUS_THRESHOLD: f64 = 70.0;

const LONG_SENTENCE_WORDS: usize = 30;
const LONG_SENTENCE_WEIGHT: f64 = 0.2;
const SHORT_SENTENCE_WORDS: usize = 5;
const SHORT_SENTENCE_WEIGHT: f64 = 0.1;
const HIGH_COMPLEXITY_RATIO: f64 = 0.6;
const HIGH_COMPLEXITY_WEIGHT: f64 = 0.2;

/// Raw signal totals for one sentence, before conversion to a probability.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SentenceSignals {
    pub ai_score: f64,
    pub human_score: f64,
    pub reasons: Vec<String>,
}

impl SentenceSignals {
    /// `ai / (ai + human + 0.3) * 100`, clamped to [0, 100].
    pub fn ai_probability(&self) -> f64 {
        let denom = self.ai_score + self.human_score + SCORE_DAMPING;
        (self.ai_score / denom * 100.0).clamp(0.0, 100.0)
    }
}

/// Accumulate every signal for `sentence`. Reasons keep trigger order.
pub fn collect_signals(sentence: &str) -> SentenceSignals {
    let mut signals = SentenceSignals::default();

    for (rule, matches) in ai_patterns().hits(sentence) {
        signals.ai_score += rule.weight * matches as f64;
        if matches > 1 {
            signals
                .reasons
                .push(format!("Contains formal transition phrases ({} instances)", matches));
        }
    }

    signals.human_score += human_patterns().weighted_score(sentence);

    let word_count = split_words(sentence).len();
    if word_count > LONG_SENTENCE_WORDS {
        signals.ai_score += LONG_SENTENCE_WEIGHT;
        signals.reasons.push("Unusually long sentence structure".to_string());
    }
    if word_count < SHORT_SENTENCE_WORDS {
        signals.human_score += SHORT_SENTENCE_WEIGHT;
    }

    if complexity_ratio(sentence) > HIGH_COMPLEXITY_RATIO {
        signals.ai_score += HIGH_COMPLEXITY_WEIGHT;
        signals.reasons.push("High linguistic complexity".to_string());
    }

    signals
}

/// Score a single trimmed, non-empty sentence.
pub fn score_sentence(sentence: &str) -> SentenceAnalysis {
    let signals = collect_signals(sentence);
    let ai_probability = signals.ai_probability();

    SentenceAnalysis {
        text: sentence.to_string(),
        ai_probability,
        suspicious: ai_probability > SUSPICIOUS_THRESHOLD,
        reason: signals.reasons.into_iter().next(),
    }
}
