use serde::Serialize;

use crate::ai_detector::AiDetector;
use crate::classifier::{ModelStats, NaiveBayesClassifier};
use crate::config::Config;
use crate::error::Result;
use crate::fraud_patterns::FraudPatterns;
use crate::risk::{self, RiskLevel};

/// Everything the presentation layer needs for one analyzed message.
#[derive(Debug, Clone, Serialize)]
pub struct MessageReport {
    /// Bayesian spam probability, 0-100.
    pub spam_probability: f64,
    /// Keyword dictionary fraud score, 0-100.
    pub keyword_score: f64,
    /// Combined fraud axis (the stronger of the two spam signals).
    pub fraud_score: f64,
    pub fraud_level: RiskLevel,
    /// Heuristic machine-authorship probability, 0-100.
    pub ai_probability: f64,
    pub ai_detected: bool,
    pub ai_confidence: f64,
    /// Weighted blend of the fraud axis and the AI probability.
    pub overall_risk: f64,
    pub overall_level: RiskLevel,
}

/// Owns the trained classifier, the AI detector, and the fraud dictionaries;
/// one `analyze` call runs all of them over a message and assembles the
/// report.
pub struct MessageAnalyzer {
    classifier: NaiveBayesClassifier,
    ai_detector: AiDetector,
    fraud_patterns: FraudPatterns,
    ai_threshold: f64,
}

impl MessageAnalyzer {
    /// Train a fresh classifier from the configured corpora and wire up the
    /// remaining scorers.
    pub fn from_config(config: &Config) -> Self {
        let mut classifier = NaiveBayesClassifier::new();
        classifier.train(
            &config.training.spam_messages,
            &config.training.ham_messages,
        );
        Self {
            classifier,
            ai_detector: AiDetector::new(),
            fraud_patterns: config.fraud_patterns.clone(),
            ai_threshold: config.ai_threshold,
        }
    }

    pub fn classifier(&self) -> &NaiveBayesClassifier {
        &self.classifier
    }

    pub fn statistics(&self) -> ModelStats {
        self.classifier.statistics()
    }

    /// Score `message` on every axis and blend the results.
    ///
    /// Classifier errors (untrained or degenerate training) propagate; the
    /// caller decides how to present them.
    pub fn analyze(&self, message: &str) -> Result<MessageReport> {
        let spam_probability = self.classifier.score_spam_probability(message)?;
        let detection = self.ai_detector.detect_ai(message, self.ai_threshold);
        let keyword_score = self.fraud_patterns.score(message);

        let fraud_score = risk::combine_fraud_axis(spam_probability, keyword_score);
        let overall = risk::overall_risk(fraud_score, detection.probability);

        Ok(MessageReport {
            spam_probability,
            keyword_score,
            fraud_score,
            fraud_level: RiskLevel::from_score(fraud_score),
            ai_probability: detection.probability,
            ai_detected: detection.is_ai_generated,
            ai_confidence: detection.confidence,
            overall_risk: overall,
            overall_level: RiskLevel::from_score(overall),
        })
    }
}
