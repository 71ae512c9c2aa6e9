// Provenance Detection Data Models

use serde::{Deserialize, Serialize};

// ============ Verdict ============

/// Final categorical label for a classified document.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "Highly Likely AI-Generated")]
    HighlyLikelyAi,
    #[serde(rename = "Possibly AI-Generated")]
    PossiblyAi,
    #[serde(rename = "Possible Plagiarism Detected")]
    PossiblePlagiarism,
    #[serde(rename = "Likely Human-Written")]
    LikelyHuman,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HighlyLikelyAi => "Highly Likely AI-Generated",
            Self::PossiblyAi => "Possibly AI-Generated",
            Self::PossiblePlagiarism => "Possible Plagiarism Detected",
            Self::LikelyHuman => "Likely Human-Written",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============ Per-sentence Analysis ============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceAnalysis {
    pub text: String,
    /// Clamped to [0, 100].
    pub ai_probability: f64,
    /// True iff `ai_probability > 70`.
    pub suspicious: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

// ============ Document Overview ============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionOverview {
    pub verdict: Verdict,
    pub explanation: String,
    pub indicators: Vec<String>,
}

/// Informational readability figures. Never feeds back into scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TextStatistics {
    pub word_count: usize,
    pub sentence_count: usize,
    pub avg_words_per_sentence: f64,
    pub avg_syllables_per_word: f64,
    pub complex_word_ratio: f64,
    pub flesch_reading_ease: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    pub ai_score: f64,
    pub plagiarism_score: f64,
    /// `max(100 - ai_score - plagiarism_score, 0)`
    pub human_written_score: f64,
    pub sentences: Vec<SentenceAnalysis>,
    pub overview: DetectionOverview,
    #[serde(default)]
    pub statistics: TextStatistics,
}

// ============ Batch Detection ============

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchItemRequest {
    #[serde(default)]
    pub id: Option<String>,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchItemResponse {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<DetectionResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub count: usize,
    pub fail_count: usize,
    pub avg_ai_score: f64,
    pub p95_ai_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchDetectRequest {
    pub items: Vec<BatchItemRequest>,
    #[serde(default)]
    pub parallel: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchDetectResponse {
    pub items: Vec<BatchItemResponse>,
    pub summary: BatchSummary,
}
