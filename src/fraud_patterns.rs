use serde::{Deserialize, Serialize};

/// Per-category point weights; each matched phrase adds its category weight.
const URGENT_WEIGHT: u32 = 10;
const FINANCIAL_WEIGHT: u32 = 15;
const SUSPICIOUS_LINK_WEIGHT: u32 = 20;
const PERSONAL_DATA_WEIGHT: u32 = 25;

const MAX_SCORE: f64 = 100.0;

/// Categorized fraud phrase lists, consumed read-only by the keyword scorer.
///
/// Independent of the Bayesian model: this is a plain additive lookup against
/// operator-supplied dictionaries, capped at 100.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FraudPatterns {
    pub urgent_phrases: Vec<String>,
    pub financial_phrases: Vec<String>,
    pub suspicious_links: Vec<String>,
    pub personal_data_requests: Vec<String>,
}

impl FraudPatterns {
    /// Additive keyword score for `text` in [0, 100].
    pub fn score(&self, text: &str) -> f64 {
        let lower = text.to_lowercase();
        let mut score = 0u32;

        let categories: [(&[String], u32); 4] = [
            (&self.urgent_phrases, URGENT_WEIGHT),
            (&self.financial_phrases, FINANCIAL_WEIGHT),
            (&self.suspicious_links, SUSPICIOUS_LINK_WEIGHT),
            (&self.personal_data_requests, PERSONAL_DATA_WEIGHT),
        ];

        for (phrases, weight) in categories {
            for phrase in phrases {
                if lower.contains(phrase.as_str()) {
                    score += weight;
                }
            }
        }

        (score as f64).min(MAX_SCORE)
    }
}

impl Default for FraudPatterns {
    /// Bundled dictionary covering the English and Russian phrases the scorer
    /// was built against; operators extend or replace these via the config
    /// file.
    fn default() -> Self {
        fn list(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }

        Self {
            urgent_phrases: list(&[
                "urgent",
                "act now",
                "immediately",
                "within 24 hours",
                "срочно",
                "немедленно",
                "в течение 24 часов",
            ]),
            financial_phrases: list(&[
                "free money",
                "cash prize",
                "you have won",
                "bank account",
                "wire transfer",
                "банковский счет",
                "выигрыш",
                "денежный приз",
            ]),
            suspicious_links: list(&[
                "http://",
                "bit.ly",
                "tinyurl",
                "click the link",
                "перейдите по ссылке",
            ]),
            personal_data_requests: list(&[
                "enter your password",
                "verify your account",
                "confirm your identity",
                "card number",
                "введите свои данные",
                "введите пароль",
                "номер карты",
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_scores_zero() {
        let patterns = FraudPatterns::default();
        assert_eq!(patterns.score("see you at the meeting tomorrow"), 0.0);
    }

    #[test]
    fn test_category_weights() {
        let patterns = FraudPatterns::default();
        assert_eq!(patterns.score("this is urgent"), 10.0);
        assert_eq!(patterns.score("claim your cash prize"), 15.0);
        assert_eq!(patterns.score("go to http://example.test"), 20.0);
        assert_eq!(patterns.score("please enter your password"), 25.0);
    }

    #[test]
    fn test_weights_accumulate_across_categories() {
        let patterns = FraudPatterns::default();
        // urgent (10) + financial (15) + link (20) + personal data (25)
        let score = patterns.score(
            "urgent: your cash prize is waiting at http://scam.test, enter your password",
        );
        assert_eq!(score, 70.0);
    }

    #[test]
    fn test_score_caps_at_100() {
        let patterns = FraudPatterns::default();
        let loaded = "urgent act now immediately free money cash prize you have won \
                      http://x bit.ly tinyurl enter your password verify your account \
                      confirm your identity card number";
        assert_eq!(patterns.score(loaded), 100.0);
    }

    #[test]
    fn test_russian_phrases_match() {
        let patterns = FraudPatterns::default();
        let message = "Срочно! Ваш банковский счет заблокирован, перейдите по ссылке";
        // urgent (10) + financial (15) + link (20)
        assert_eq!(patterns.score(message), 45.0);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let patterns = FraudPatterns::default();
        assert_eq!(patterns.score("URGENT"), 10.0);
        assert_eq!(patterns.score("Cash PRIZE"), 15.0);
    }
}
