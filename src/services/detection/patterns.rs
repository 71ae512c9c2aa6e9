// Pattern Signals
// Weighted lexical matchers for the AI, human and plagiarism signal families.
//
// The tables are plain data; every matcher is compiled once, case-insensitive,
// and consumed through `PatternSignal::hits` / `PatternSignal::weighted_score`.

use regex::{Regex, RegexBuilder};
use std::sync::OnceLock;
use tracing::trace;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SignalFamily {
    Ai,
    Human,
    Plagiarism,
}

impl SignalFamily {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ai => "ai_patterns",
            Self::Human => "human_patterns",
            Self::Plagiarism => "plagiarism_patterns",
        }
    }
}

/// (label, pattern, weight)
type PatternSpec = (&'static str, &'static str, f64);

const AI_PATTERNS: &[PatternSpec] = &[
    ("formal_connective", r"\b(furthermore|moreover|additionally|consequently)\b", 0.3),
    ("summary_phrase", r"\b(in conclusion|to summarize|in summary)\b", 0.2),
    ("hedged_emphasis", r"\b(it is important to note that|it should be noted that)\b", 0.4),
    ("enumeration_opener", r"\b(there are several|there are various|there are many)\b", 0.2),
    ("contrast_phrase", r"\b(on the other hand|conversely|in contrast)\b", 0.2),
    ("comma_connective", r",\s*(however|therefore|thus|hence)\b", 0.3),
    ("ordinal_adverb", r"\b(first|second|third|final)ly\b", 0.2),
];

const HUMAN_PATTERNS: &[PatternSpec] = &[
    ("filler", r"\b(like|literally|basically|actually|stuff|things|kinda|sorta)\b", 0.3),
    (
        "first_person_opinion",
        r"\b(i think|i feel|i believe|in my opinion|as far as i'm concerned)\b",
        0.3,
    ),
    ("casual_exclamation", r"\b(amazing|awesome|cool|great|nice|wow|wtf|lol)\b", 0.2),
    ("doubled_intensifier", r"\b(so|very|really|pretty|quite)\s+(so|very|really)\b", 0.3),
    ("repeated_punctuation", r"[!?]{2,}", 0.2),
    ("disfluency", r"\b(um|uh|er|ah|hmm)\b", 0.4),
];

const PLAGIARISM_PATTERNS: &[PatternSpec] = &[
    ("citation_phrase", r"\b(according to|cited|referenced|quoted)\b", 0.2),
    ("long_quotation", r#""[^"]{20,}""#, 0.4),
];

#[derive(Debug)]
pub struct PatternRule {
    pub label: &'static str,
    pub regex: Regex,
    pub weight: f64,
}

impl PatternRule {
    /// Number of non-overlapping matches in `text`.
    pub fn count(&self, text: &str) -> usize {
        self.regex.find_iter(text).count()
    }
}

/// An ordered family of weighted matchers.
#[derive(Debug)]
pub struct PatternSignal {
    pub family: SignalFamily,
    pub rules: Vec<PatternRule>,
}

impl PatternSignal {
    fn compile(family: SignalFamily, specs: &[PatternSpec]) -> Self {
        let rules = specs
            .iter()
            .map(|&(label, pattern, weight)| PatternRule {
                label,
                regex: RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .expect("pattern table regex"),
                weight,
            })
            .collect();
        Self { family, rules }
    }

    /// Rules with at least one match, in table order, with their match counts.
    pub fn hits<'a>(&'a self, text: &'a str) -> impl Iterator<Item = (&'a PatternRule, usize)> + 'a {
        self.rules
            .iter()
            .map(move |rule| (rule, rule.count(text)))
            .filter(|(_, n)| *n > 0)
            .inspect(move |(rule, n)| {
                trace!(family = self.family.name(), rule = rule.label, matches = *n, "pattern.hit");
            })
    }

    /// Sum of `weight * matches` over every rule.
    pub fn weighted_score(&self, text: &str) -> f64 {
        self.hits(text).map(|(rule, n)| rule.weight * n as f64).sum()
    }
}

pub fn ai_patterns() -> &'static PatternSignal {
    static SIGNAL: OnceLock<PatternSignal> = OnceLock::new();
    SIGNAL.get_or_init(|| PatternSignal::compile(SignalFamily::Ai, AI_PATTERNS))
}

pub fn human_patterns() -> &'static PatternSignal {
    static SIGNAL: OnceLock<PatternSignal> = OnceLock::new();
    SIGNAL.get_or_init(|| PatternSignal::compile(SignalFamily::Human, HUMAN_PATTERNS))
}

pub fn plagiarism_patterns() -> &'static PatternSignal {
    static SIGNAL: OnceLock<PatternSignal> = OnceLock::new();
    SIGNAL.get_or_init(|| PatternSignal::compile(SignalFamily::Plagiarism, PLAGIARISM_PATTERNS))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule<'a>(signal: &'a PatternSignal, label: &str) -> &'a PatternRule {
        signal.rules.iter().find(|r| r.label == label).unwrap()
    }

    #[test]
    fn test_tables_compile_in_order() {
        assert_eq!(ai_patterns().rules.len(), 7);
        assert_eq!(human_patterns().rules.len(), 6);
        assert_eq!(plagiarism_patterns().rules.len(), 2);
        assert_eq!(ai_patterns().rules[0].label, "formal_connective");
        assert_eq!(plagiarism_patterns().family.name(), "plagiarism_patterns");
    }

    #[test]
    fn test_families_are_tagged() {
        assert_eq!(ai_patterns().family, SignalFamily::Ai);
        assert_eq!(human_patterns().family.name(), "human_patterns");
        assert_eq!(ai_patterns().family.name(), "ai_patterns");
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let r = rule(ai_patterns(), "formal_connective");
        assert_eq!(r.count("FURTHERMORE, and Moreover, additionally"), 3);
    }

    #[test]
    fn test_word_boundaries() {
        let filler = rule(human_patterns(), "filler");
        assert_eq!(filler.count("likely unlike"), 0);
        assert_eq!(filler.count("it was like, stuff"), 2);

        let dis = rule(human_patterns(), "disfluency");
        assert_eq!(dis.count("there were errors"), 0);
        assert_eq!(dis.count("um, er, well"), 2);
    }

    #[test]
    fn test_comma_connective_requires_comma() {
        let r = rule(ai_patterns(), "comma_connective");
        assert_eq!(r.count("thus we see"), 0);
        assert_eq!(r.count("It failed, however it recovered,thus"), 2);
    }

    #[test]
    fn test_ordinal_adverbs() {
        let r = rule(ai_patterns(), "ordinal_adverb");
        assert_eq!(r.count("Firstly, secondly, thirdly and finally"), 4);
        assert_eq!(r.count("first and second"), 0);
    }

    #[test]
    fn test_doubled_intensifier_and_punctuation() {
        let r = rule(human_patterns(), "doubled_intensifier");
        assert_eq!(r.count("it was pretty really good, so so fun"), 2);
        let p = rule(human_patterns(), "repeated_punctuation");
        assert_eq!(p.count("what?! no!!! ok!"), 2);
    }

    #[test]
    fn test_plagiarism_weighted_score() {
        let text = r#"According to the report, "this sentence is long enough to count" and was cited."#;
        // two citation phrases (0.2 each) + one long quotation (0.4)
        assert!((plagiarism_patterns().weighted_score(text) - 0.8).abs() < 1e-9);
        assert_eq!(plagiarism_patterns().weighted_score(r#"a "short" quote"#), 0.0);
    }

    #[test]
    fn test_hits_skip_zero_counts() {
        let hits: Vec<_> = ai_patterns()
            .hits("In summary, there are many options.")
            .map(|(r, n)| (r.label, n))
            .collect();
        assert_eq!(hits, vec![("summary_phrase", 1), ("enumeration_opener", 1)]);
    }
}
