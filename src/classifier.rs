use serde::Serialize;
use std::collections::{HashMap, HashSet};

use crate::error::{AnalysisError, Result};
use crate::tokenizer;

/// Score returned when a message yields no recognizable tokens: no evidence
/// either way.
pub const NEUTRAL_SCORE: f64 = 50.0;

const TOP_WORDS_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageClass {
    Spam,
    Ham,
}

/// Per-class slice of the vocabulary model: token occurrence counts, the
/// cached total, and how many training messages contributed.
#[derive(Debug, Default, Clone)]
struct ClassCounts {
    word_counts: HashMap<String, u32>,
    // First-seen order of words, used as the tie-break when ranking top words
    word_order: Vec<String>,
    total_words: u64,
    messages: u32,
}

impl ClassCounts {
    fn add_message(&mut self, tokens: &[String], vocabulary: &mut HashSet<String>) {
        self.messages += 1;
        for word in tokens {
            match self.word_counts.get_mut(word) {
                Some(count) => *count += 1,
                None => {
                    self.word_counts.insert(word.clone(), 1);
                    self.word_order.push(word.clone());
                }
            }
            self.total_words += 1;
            vocabulary.insert(word.clone());
        }
    }

    fn top_words(&self, limit: usize) -> Vec<(String, u32)> {
        let mut ranked: Vec<(String, u32)> = self
            .word_order
            .iter()
            .map(|word| (word.clone(), self.word_counts[word]))
            .collect();
        // Stable sort: equal counts keep their first-seen training order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(limit);
        ranked
    }
}

/// Word-frequency state owned by the classifier. Built by [`NaiveBayesClassifier::train`]
/// and read-only during scoring; the invariant `vocabulary = spam words ∪ ham words`
/// holds after every training pass.
#[derive(Debug, Default, Clone)]
struct VocabularyModel {
    spam: ClassCounts,
    ham: ClassCounts,
    vocabulary: HashSet<String>,
    trained: bool,
}

impl VocabularyModel {
    fn class(&self, class: MessageClass) -> &ClassCounts {
        match class {
            MessageClass::Spam => &self.spam,
            MessageClass::Ham => &self.ham,
        }
    }
}

/// Aggregate counters plus the ten most frequent words per class.
#[derive(Debug, Clone, Serialize)]
pub struct ModelStats {
    pub spam_messages: u32,
    pub ham_messages: u32,
    pub vocabulary_size: usize,
    pub top_spam_words: Vec<(String, u32)>,
    pub top_ham_words: Vec<(String, u32)>,
}

/// Supervised naive Bayes text classifier with add-one (Laplace) smoothing.
///
/// Training happens once up front via `&mut self`; every scoring method takes
/// `&self`, so a trained classifier can be shared freely across readers.
#[derive(Debug, Default, Clone)]
pub struct NaiveBayesClassifier {
    model: VocabularyModel,
}

impl NaiveBayesClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize every message and fold it into the per-class frequency tables.
    ///
    /// Repeated calls accumulate on top of earlier training (additive
    /// retraining); to start over, construct a fresh classifier. An empty
    /// corpus for one class is accepted here — scoring will refuse to run
    /// until both classes have at least one example.
    pub fn train(&mut self, spam_messages: &[String], ham_messages: &[String]) {
        for message in spam_messages {
            let tokens = tokenizer::tokenize(message);
            self.model.spam.add_message(&tokens, &mut self.model.vocabulary);
        }
        for message in ham_messages {
            let tokens = tokenizer::tokenize(message);
            self.model.ham.add_message(&tokens, &mut self.model.vocabulary);
        }
        self.model.trained = true;
        log::info!(
            "classifier trained: {} spam, {} ham, vocabulary of {} words",
            self.model.spam.messages,
            self.model.ham.messages,
            self.model.vocabulary.len()
        );
    }

    pub fn is_trained(&self) -> bool {
        self.model.trained
    }

    /// Smoothed likelihood of `word` under `class`:
    /// `(count + 1) / (class word total + vocabulary size)`.
    ///
    /// Strictly positive for every word, including ones never seen in
    /// training, as long as at least one message has been trained.
    pub fn word_likelihood(&self, word: &str, class: MessageClass) -> f64 {
        let counts = self.model.class(class);
        let count = counts.word_counts.get(word).copied().unwrap_or(0) as f64;
        (count + 1.0) / (counts.total_words as f64 + self.model.vocabulary.len() as f64)
    }

    /// Probability in [0, 100] that `message` belongs to the spam class.
    ///
    /// Returns [`AnalysisError::UntrainedModel`] before any training and
    /// [`AnalysisError::DegenerateTraining`] when one class has no examples
    /// (its prior would be zero and the log-probability walk would emit
    /// `-inf`). A message with no recognizable tokens scores a neutral 50.
    pub fn score_spam_probability(&self, message: &str) -> Result<f64> {
        if !self.model.trained {
            return Err(AnalysisError::UntrainedModel);
        }
        if self.model.spam.messages == 0 {
            return Err(AnalysisError::DegenerateTraining { class: "spam" });
        }
        if self.model.ham.messages == 0 {
            return Err(AnalysisError::DegenerateTraining { class: "ham" });
        }

        let words = tokenizer::tokenize(message);
        if words.is_empty() {
            return Ok(NEUTRAL_SCORE);
        }

        let total_messages = (self.model.spam.messages + self.model.ham.messages) as f64;
        let mut log_p_spam = (self.model.spam.messages as f64 / total_messages).ln();
        let mut log_p_ham = (self.model.ham.messages as f64 / total_messages).ln();

        // Conditional independence of tokens given the class: sum per-word
        // log-likelihoods. Staying in log space keeps long unseen-heavy
        // messages from underflowing.
        for word in &words {
            log_p_spam += self.word_likelihood(word, MessageClass::Spam).ln();
            log_p_ham += self.word_likelihood(word, MessageClass::Ham).ln();
        }

        // Log-odds normalization: shift both by the larger before
        // exponentiating so the dominant term becomes exp(0).
        let max_log = log_p_spam.max(log_p_ham);
        let exp_spam = (log_p_spam - max_log).exp();
        let exp_ham = (log_p_ham - max_log).exp();
        let probability = exp_spam / (exp_spam + exp_ham);

        if !probability.is_finite() {
            // Hard decision instead of propagating NaN/Inf to the caller
            return Ok(if log_p_spam > log_p_ham { 100.0 } else { 0.0 });
        }

        Ok(probability.clamp(0.0, 1.0) * 100.0)
    }

    /// Read-only snapshot of the trained model: message counts, vocabulary
    /// size, and the top-10 words per class (descending frequency, ties kept
    /// in training order).
    pub fn statistics(&self) -> ModelStats {
        ModelStats {
            spam_messages: self.model.spam.messages,
            ham_messages: self.model.ham.messages,
            vocabulary_size: self.model.vocabulary.len(),
            top_spam_words: self.model.spam.top_words(TOP_WORDS_LIMIT),
            top_ham_words: self.model.ham.top_words(TOP_WORDS_LIMIT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn trained_classifier() -> NaiveBayesClassifier {
        let mut classifier = NaiveBayesClassifier::new();
        classifier.train(
            &strings(&["free money now", "win cash prize"]),
            &strings(&["meeting at noon", "project update"]),
        );
        classifier
    }

    #[test]
    fn test_untrained_model_rejected() {
        let classifier = NaiveBayesClassifier::new();
        assert_eq!(
            classifier.score_spam_probability("anything"),
            Err(AnalysisError::UntrainedModel)
        );
    }

    #[test]
    fn test_one_sided_training_is_degenerate() {
        let mut classifier = NaiveBayesClassifier::new();
        // Training with an empty ham corpus must not crash...
        classifier.train(&strings(&["free money"]), &[]);
        assert!(classifier.is_trained());
        // ...but scoring must refuse instead of producing ln(0)
        assert_eq!(
            classifier.score_spam_probability("free money"),
            Err(AnalysisError::DegenerateTraining { class: "ham" })
        );
    }

    #[test]
    fn test_empty_message_scores_neutral() {
        let classifier = trained_classifier();
        assert_eq!(classifier.score_spam_probability("").unwrap(), 50.0);
        assert_eq!(classifier.score_spam_probability("!!! ???").unwrap(), 50.0);
    }

    #[test]
    fn test_spam_vocabulary_overlap_favors_spam() {
        let classifier = trained_classifier();
        let score = classifier.score_spam_probability("free cash now").unwrap();
        assert!(score > 50.0, "expected spam-leaning score, got {score}");
    }

    #[test]
    fn test_ham_vocabulary_overlap_favors_ham() {
        let classifier = trained_classifier();
        let score = classifier
            .score_spam_probability("project meeting update")
            .unwrap();
        assert!(score < 50.0, "expected ham-leaning score, got {score}");
    }

    #[test]
    fn test_smoothing_keeps_unseen_words_positive() {
        let classifier = trained_classifier();
        assert!(classifier.word_likelihood("zebra", MessageClass::Spam) > 0.0);
        assert!(classifier.word_likelihood("zebra", MessageClass::Ham) > 0.0);
        assert!(classifier.word_likelihood("free", MessageClass::Spam) > 0.0);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let classifier = trained_classifier();
        let first = classifier.score_spam_probability("free cash now").unwrap();
        let second = classifier.score_spam_probability("free cash now").unwrap();
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn test_scores_stay_in_range() {
        let classifier = trained_classifier();
        let long_unseen = "completely unrelated vocabulary ".repeat(500);
        for message in ["", "free money free money", long_unseen.as_str(), "12345"] {
            let score = classifier.score_spam_probability(message).unwrap();
            assert!((0.0..=100.0).contains(&score), "out of range: {score}");
        }
    }

    #[test]
    fn test_additive_retraining_accumulates() {
        let mut classifier = NaiveBayesClassifier::new();
        classifier.train(&strings(&["free money"]), &strings(&["team meeting"]));
        classifier.train(&strings(&["free prize"]), &strings(&["status report"]));

        let stats = classifier.statistics();
        assert_eq!(stats.spam_messages, 2);
        assert_eq!(stats.ham_messages, 2);
        // "free" appeared in both spam passes
        assert_eq!(stats.top_spam_words[0], ("free".to_string(), 2));
    }

    #[test]
    fn test_statistics_ties_keep_training_order() {
        let mut classifier = NaiveBayesClassifier::new();
        classifier.train(&strings(&["alpha beta gamma"]), &strings(&["noon plans"]));

        let stats = classifier.statistics();
        // All counts equal: first-seen order must survive the stable sort
        let words: Vec<&str> = stats
            .top_spam_words
            .iter()
            .map(|(w, _)| w.as_str())
            .collect();
        assert_eq!(words, vec!["alpha", "beta", "gamma"]);
        assert_eq!(stats.vocabulary_size, 5);
    }

    #[test]
    fn test_statistics_limit_and_ranking() {
        let mut classifier = NaiveBayesClassifier::new();
        let spam: Vec<String> = (0..12).map(|i| format!("word{i} filler")).collect();
        classifier.train(&spam, &strings(&["plain note"]));

        let stats = classifier.statistics();
        assert_eq!(stats.top_spam_words.len(), 10);
        // "filler" occurs 12 times, every word{i} once
        assert_eq!(stats.top_spam_words[0], ("filler".to_string(), 12));
    }
}
