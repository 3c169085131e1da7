pub mod ai_detector;
pub mod analyzer;
pub mod classifier;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod fraud_patterns;
pub mod risk;
pub mod tokenizer;

pub use ai_detector::{AiDetection, AiDetector, DEFAULT_AI_THRESHOLD};
pub use analyzer::{MessageAnalyzer, MessageReport};
pub use classifier::{MessageClass, ModelStats, NaiveBayesClassifier};
pub use config::Config;
pub use error::{AnalysisError, Result};
pub use fraud_patterns::FraudPatterns;
pub use risk::RiskLevel;
