use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by the scoring engine and its stores.
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("Invalid feature vector: expected {expected} features, got {actual}")]
    InvalidFeatureVector { expected: usize, actual: usize },

    #[error("Feature at index {index} is not finite: {value}")]
    NonFiniteFeature { index: usize, value: f64 },

    #[error("Match not found: {id}")]
    MatchNotFound { id: String },

    #[error("Prediction not found: {id}")]
    PredictionNotFound { id: Uuid },

    #[error("Probability invariant violated: {detail}")]
    InvariantViolation { detail: String },

    #[error("Insight enrichment failed: {detail}")]
    Enrichment { detail: String },
}

impl PredictionError {
    /// True for caller mistakes, as opposed to internal model faults.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PredictionError::InvalidFeatureVector { .. }
                | PredictionError::NonFiniteFeature { .. }
        )
    }
}
