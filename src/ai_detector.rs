use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

/// Default cut-off above which a text is reported as machine-generated.
pub const DEFAULT_AI_THRESHOLD: f64 = 70.0;

const SENTENCE_VARIATION_BONUS: u32 = 10;
const CLEAN_GRAMMAR_BONUS: u32 = 5;
const CLEAN_GRAMMAR_MIN_CHARS: usize = 100;
const MIN_SENTENCES_FOR_VARIATION: usize = 4;
const LOW_VARIATION_SPREAD: usize = 3;

/// How a single table entry matches text.
enum MatchKind {
    /// Plain substring match against the normalized text.
    Literal(&'static str),
    /// Compiled pattern, counted per occurrence.
    Pattern(Regex),
}

enum Scoring {
    /// Contributes the weight once if at least one match exists.
    Presence,
    /// Contributes weight × number of occurrences.
    PerOccurrence,
}

struct WeightedPattern {
    kind: MatchKind,
    weight: u32,
    scoring: Scoring,
}

impl WeightedPattern {
    fn literal(phrase: &'static str, weight: u32, scoring: Scoring) -> Self {
        Self {
            kind: MatchKind::Literal(phrase),
            weight,
            scoring,
        }
    }

    fn pattern(pattern: &str, weight: u32) -> Self {
        Self {
            kind: MatchKind::Pattern(Regex::new(pattern).unwrap()),
            weight,
            scoring: Scoring::PerOccurrence,
        }
    }
}

lazy_static! {
    // Signals that push toward machine authorship. Assistant-style phrases are
    // presence-only; discourse markers and formality vocabulary scale with
    // repetition.
    static ref AI_PATTERNS: Vec<WeightedPattern> = {
        let mut table = Vec::new();
        for phrase in [
            "as an ai language model",
            "i am an ai",
            "as an artificial intelligence",
            "i don't have personal",
            "i cannot provide",
            "my knowledge cutoff",
            "based on my training data",
            "as a language model",
            "i'm designed to",
            "i don't have feelings",
        ] {
            table.push(WeightedPattern::literal(phrase, 15, Scoring::Presence));
        }
        for pattern in [
            r"however\s*,",
            r"additionally\s*,",
            r"furthermore\s*,",
            r"in conclusion\s*,",
            r"it is important to note",
            r"this suggests that",
        ] {
            table.push(WeightedPattern::pattern(pattern, 5));
        }
        for phrase in [
            "endeavor to",
            "utilize",
            "ascertain",
            "elucidate",
            "consequently",
            "thus",
            "hence",
        ] {
            table.push(WeightedPattern::literal(phrase, 3, Scoring::PerOccurrence));
        }
        table
    };

    // Signals that push toward human authorship: chat abbreviations,
    // contractions, emotional interjections.
    static ref HUMAN_PATTERNS: Vec<WeightedPattern> = {
        let mut table = Vec::new();
        for phrase in ["lol", "omg", "btw", "imo", "tbh", "idk", "afaik"] {
            table.push(WeightedPattern::literal(phrase, 10, Scoring::PerOccurrence));
        }
        for phrase in [
            "i'm", "you're", "they're", "don't", "can't", "won't", "isn't", "aren't",
        ] {
            table.push(WeightedPattern::literal(phrase, 5, Scoring::PerOccurrence));
        }
        for phrase in ["haha", "hehe", "wow", "awesome", "crazy", "unbelievable"] {
            table.push(WeightedPattern::literal(phrase, 8, Scoring::PerOccurrence));
        }
        table
    };

    // Homophone misuse ("their" where "there" belongs, etc.). Presence of any
    // of these reads as a human slip.
    static ref GRAMMAR_CONFUSIONS: Vec<Regex> = [
        r"(?i)their\s+for\s+there",
        r"(?i)your\s+for\s+you're",
        r"(?i)its\s+for\s+it's",
        r"(?i)then\s+for\s+than",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect();
}

/// One uniform interpreter walk over a pattern table.
fn evaluate_patterns(table: &[WeightedPattern], text: &str) -> u32 {
    table
        .iter()
        .map(|entry| {
            let hits = match &entry.kind {
                MatchKind::Literal(phrase) => text.matches(phrase).count(),
                MatchKind::Pattern(regex) => regex.find_iter(text).count(),
            } as u32;
            match entry.scoring {
                Scoring::Presence => {
                    if hits > 0 {
                        entry.weight
                    } else {
                        0
                    }
                }
                Scoring::PerOccurrence => entry.weight * hits,
            }
        })
        .sum()
}

/// Uniformly short sentences read as machine cadence: with more than three
/// sentences and a longest-to-shortest spread under three words, add a fixed
/// bonus.
fn sentence_variation_score(text: &str) -> u32 {
    let sentences: Vec<&str> = text
        .split(['.', '!', '?'])
        .filter(|fragment| !fragment.trim().is_empty())
        .collect();
    if sentences.len() < MIN_SENTENCES_FOR_VARIATION {
        return 0;
    }
    let lengths: Vec<usize> = sentences
        .iter()
        .map(|sentence| sentence.split_whitespace().count())
        .collect();
    let longest = lengths.iter().max().copied().unwrap_or(0);
    let shortest = lengths.iter().min().copied().unwrap_or(0);
    if longest - shortest < LOW_VARIATION_SPREAD {
        SENTENCE_VARIATION_BONUS
    } else {
        0
    }
}

fn has_grammar_confusion(text: &str) -> bool {
    GRAMMAR_CONFUSIONS.iter().any(|regex| regex.is_match(text))
}

/// Result of [`AiDetector::detect_ai`]: the raw probability, the thresholded
/// verdict, and a confidence that is 0 at the neutral midpoint and 100 at
/// either extreme.
#[derive(Debug, Clone, Serialize)]
pub struct AiDetection {
    pub probability: f64,
    pub is_ai_generated: bool,
    pub confidence: f64,
}

/// Heuristic estimator of machine-generated authorship.
///
/// Stateless: the weighted pattern tables are process-lifetime constants, and
/// every call walks them the same way. Weights are additive across categories,
/// and text without any signal lands on the neutral 50.
pub struct AiDetector;

impl AiDetector {
    pub fn new() -> Self {
        Self
    }

    /// Score `text` in [0, 100]; higher means more machine-like.
    pub fn analyze(&self, text: &str) -> f64 {
        let processed = text.to_lowercase();
        let processed = processed.trim();

        let mut ai_score = evaluate_patterns(&AI_PATTERNS, processed);
        let human_score = evaluate_patterns(&HUMAN_PATTERNS, processed);

        ai_score += sentence_variation_score(processed);

        // Longer text with none of the common homophone slips is "too clean"
        // — a weak machine signal.
        if text.chars().count() > CLEAN_GRAMMAR_MIN_CHARS && !has_grammar_confusion(text) {
            ai_score += CLEAN_GRAMMAR_BONUS;
        }

        let total = ai_score + human_score;
        if total == 0 {
            return 50.0;
        }
        (ai_score as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
    }

    /// [`analyze`](Self::analyze) plus the thresholded verdict.
    pub fn detect_ai(&self, text: &str, threshold: f64) -> AiDetection {
        let probability = self.analyze(text);
        AiDetection {
            probability,
            is_ai_generated: probability >= threshold,
            confidence: (probability - 50.0).abs() * 2.0,
        }
    }
}

impl Default for AiDetector {
    fn default() -> Self {
        Self::new()
    }
}
