use crate::domain::errors::PredictionError;
use crate::domain::ports::{InsightService, OddsSource};
use crate::domain::prediction::Prediction;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Scripted odds source replaying a fixed sequence of prices.
///
/// Once the script runs out, every further call returns the midpoint of the
/// requested band so tests never fail on an extra draw.
pub struct FixedOddsSequence {
    script: Mutex<VecDeque<f64>>,
}

impl FixedOddsSequence {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            script: Mutex::new(values.into_iter().collect()),
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.lock().unwrap().len()
    }
}

impl OddsSource for FixedOddsSequence {
    fn sample(&self, lo: f64, hi: f64) -> f64 {
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| (lo + hi) / 2.0)
    }
}

/// Insight service that always fails. Exercises the degraded path where
/// predictions are returned without commentary.
pub struct FailingInsight;

#[async_trait]
impl InsightService for FailingInsight {
    async fn annotate(&self, _prediction: &Prediction) -> Result<String, PredictionError> {
        Err(PredictionError::Enrichment {
            detail: "insight backend unavailable".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_replays_in_order() {
        let source = FixedOddsSequence::new([2.0, 1.9, 2.1]);

        assert!((source.sample(1.85, 2.15) - 2.0).abs() < 1e-9);
        assert!((source.sample(1.85, 2.15) - 1.9).abs() < 1e-9);
        assert!((source.sample(1.85, 2.15) - 2.1).abs() < 1e-9);
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn test_exhausted_sequence_falls_back_to_midpoint() {
        let source = FixedOddsSequence::new([2.0]);
        let _ = source.sample(1.85, 2.15);

        let fallback = source.sample(1.0, 3.0);
        assert!((fallback - 2.0).abs() < 1e-9);
    }
}
