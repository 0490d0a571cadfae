use crate::domain::errors::PredictionError;
use crate::domain::prediction::Prediction;
use async_trait::async_trait;

/// Source of simulated market odds and model jitter.
///
/// The engine never reaches for a random number generator directly; every
/// stochastic input comes through this seam so tests can replay fixed
/// sequences and production can stay entropy-backed.
pub trait OddsSource: Send + Sync {
    /// Draws a value from the half-open interval `[lo, hi)`.
    fn sample(&self, lo: f64, hi: f64) -> f64;
}

/// Optional commentary layer over a finished prediction.
///
/// Implementations may consult an external model. Callers treat failures as
/// soft: the prediction keeps its template advice when annotation fails.
#[async_trait]
pub trait InsightService: Send + Sync {
    async fn annotate(&self, prediction: &Prediction) -> Result<String, PredictionError>;
}
