use thiserror::Error;

/// Failures the scoring core can surface to callers.
///
/// Numeric instability inside the classifier is handled internally (log-space
/// accumulation plus a hard-decision fallback) and never escapes as an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("classifier has not been trained; call train() before scoring")]
    UntrainedModel,

    #[error("training corpus contains no {class} examples; the class prior degenerates to zero")]
    DegenerateTraining { class: &'static str },
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
