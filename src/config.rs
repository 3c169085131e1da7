use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::ai_detector::DEFAULT_AI_THRESHOLD;
use crate::fraud_patterns::FraudPatterns;

/// Operator configuration: training corpora for the classifier, fraud phrase
/// dictionaries, and scoring thresholds. Loaded from YAML; every missing
/// section falls back to the bundled defaults so the binary works without a
/// config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub training: TrainingData,
    pub fraud_patterns: FraudPatterns,
    pub ai_threshold: f64,
}

/// Labeled example messages, one sequence per class. Immutable once handed to
/// training.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingData {
    pub spam_messages: Vec<String>,
    pub ham_messages: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            training: TrainingData::default(),
            fraud_patterns: FraudPatterns::default(),
            ai_threshold: DEFAULT_AI_THRESHOLD,
        }
    }
}

impl Default for TrainingData {
    /// Small bundled corpus (English and Russian) standing in for an external
    /// training data provider.
    fn default() -> Self {
        fn list(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }

        Self {
            spam_messages: list(&[
                "Congratulations! You have won a cash prize, claim your free money now",
                "URGENT: your bank account was blocked, verify your account immediately",
                "Win a free iPhone today, click the link http://prize-claim.example",
                "Limited time offer: wire transfer fee waived, act now",
                "Your payment is pending, enter your password to release the funds",
                "Уважаемый клиент! Ваш банковский счет заблокирован, срочно перейдите по ссылке",
                "Вы выиграли денежный приз, введите свои данные для получения",
                "Срочно! Подтвердите перевод в течение 24 часов",
            ]),
            ham_messages: list(&[
                "The project update is attached, let me know your comments",
                "Are we still meeting at noon tomorrow?",
                "Thanks for the report, the numbers look good",
                "Can you review the draft before Friday?",
                "Lunch plans moved to one, same place",
                "Привет! Встречаемся завтра в полдень у офиса",
                "Отчет готов, посмотри когда будет время",
                "Напоминание: собрание команды перенесено на среду",
            ]),
        }
    }
}

impl Config {
    /// Read and parse a YAML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Write this configuration as YAML.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_yaml::to_string(self).context("Failed to serialize configuration")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Reject configurations the scoring engine cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.training.spam_messages.is_empty() {
            bail!("training.spam_messages is empty; the classifier needs at least one spam example");
        }
        if self.training.ham_messages.is_empty() {
            bail!("training.ham_messages is empty; the classifier needs at least one ham example");
        }
        if !(0.0..=100.0).contains(&self.ai_threshold) {
            bail!(
                "ai_threshold must be within 0-100, got {}",
                self.ai_threshold
            );
        }
        Ok(())
    }
}
