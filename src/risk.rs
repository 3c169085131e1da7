use serde::Serialize;
use std::fmt;

/// Fixed blend weights for the overall risk percentage.
pub const FRAUD_WEIGHT: f64 = 0.7;
pub const AI_WEIGHT: f64 = 0.3;

const MEDIUM_THRESHOLD: f64 = 30.0;
const HIGH_THRESHOLD: f64 = 70.0;

/// Risk bucket for a 0-100 score: Low below 30, Medium below 70, High at 70
/// and above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_score(score: f64) -> Self {
        if score < MEDIUM_THRESHOLD {
            RiskLevel::Low
        } else if score < HIGH_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        };
        write!(f, "{label}")
    }
}

/// The fraud axis takes whichever of the two spam signals is stronger: the
/// Bayesian probability or the keyword dictionary score.
pub fn combine_fraud_axis(spam_probability: f64, keyword_score: f64) -> f64 {
    spam_probability.max(keyword_score)
}

/// Weighted blend of the fraud axis and the AI probability into one summary
/// percentage.
pub fn overall_risk(fraud_score: f64, ai_probability: f64) -> f64 {
    fraud_score * FRAUD_WEIGHT + ai_probability * AI_WEIGHT
}
