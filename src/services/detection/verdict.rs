// Verdict Classifier
// Maps document scores onto a fixed set of verdicts. Rules are evaluated in
// order and the first match wins.

use crate::models::{DetectionOverview, Verdict};

struct VerdictRule {
    verdict: Verdict,
    applies: fn(ai_score: f64, plagiarism_score: f64) -> bool,
    explanation: &'static str,
    indicators: &'static [&'static str],
}

const VERDICT_RULES: &[VerdictRule] = &[
    VerdictRule {
        verdict: Verdict::HighlyLikelyAi,
        applies: |ai, _| ai > 75.0,
        explanation: "The text shows strong characteristics of AI-generated content: \
                      uniform structure, formal transitions and very little stylistic variation.",
        indicators: &[
            "Formal and systematic structure",
            "Consistent tone throughout",
            "Limited stylistic variation",
            "Presence of common AI transitional phrases",
        ],
    },
    VerdictRule {
        verdict: Verdict::PossiblyAi,
        applies: |ai, _| ai > 50.0,
        explanation: "Parts of the text show patterns common in AI-generated content, \
                      mixed with passages that read as human-written.",
        indicators: &[
            "Some sections appear formulaic",
            "Mixed writing styles detected",
            "Occasional unnatural phrasing",
        ],
    },
    VerdictRule {
        verdict: Verdict::PossiblePlagiarism,
        applies: |_, plagiarism| plagiarism > 30.0,
        explanation: "The text contains citation-like phrasing and long quotations \
                      that may have been copied from other sources.",
        indicators: &[
            "Quotes without clear attribution",
            "Sections with distinctly different writing styles",
            "Formal citations detected",
        ],
    },
];

static HUMAN_RULE: VerdictRule = VerdictRule {
    verdict: Verdict::LikelyHuman,
    applies: |_, _| true,
    explanation: "The text shows natural variation in tone and structure \
                  typical of human writing.",
    indicators: &[
        "Natural language patterns",
        "Inconsistent style typical of human writing",
        "Personal voice and opinions present",
    ],
};

/// Classify aggregated scores into a verdict with its fixed explanation and indicators.
pub fn classify_verdict(ai_score: f64, plagiarism_score: f64) -> DetectionOverview {
    let rule = VERDICT_RULES
        .iter()
        .find(|rule| (rule.applies)(ai_score, plagiarism_score))
        .unwrap_or(&HUMAN_RULE);

    DetectionOverview {
        verdict: rule.verdict,
        explanation: rule.explanation.to_string(),
        indicators: rule.indicators.iter().map(|s| s.to_string()).collect(),
    }
}
