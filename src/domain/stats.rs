use serde::{Deserialize, Serialize};

use super::prediction::{Outcome, Prediction};

/// Confidence band cutoffs for the aggregate view. A prediction counts as
/// high confidence strictly above the upper bound and low confidence
/// strictly below the lower one; everything between is medium.
pub const HIGH_CONFIDENCE_FLOOR: f64 = 70.0;
pub const LOW_CONFIDENCE_CEILING: f64 = 55.0;

/// Picks per predicted outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeCounts {
    pub home: usize,
    pub draw: usize,
    pub away: usize,
}

/// Aggregate summary over every stored prediction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionStats {
    pub total: usize,
    pub high_confidence: usize,
    pub medium_confidence: usize,
    pub low_confidence: usize,
    pub by_outcome: OutcomeCounts,
    pub value_bets: usize,
    pub average_confidence: f64,
}

impl PredictionStats {
    /// Folds a set of predictions into bucket counts and a mean confidence
    /// rounded to 1 decimal place. An empty set yields all zeros.
    pub fn from_predictions(predictions: &[Prediction]) -> Self {
        if predictions.is_empty() {
            return Self::default();
        }

        let high = predictions
            .iter()
            .filter(|p| p.confidence > HIGH_CONFIDENCE_FLOOR)
            .count();
        let low = predictions
            .iter()
            .filter(|p| p.confidence < LOW_CONFIDENCE_CEILING)
            .count();
        let medium = predictions.len() - high - low;
        let value_bets = predictions.iter().filter(|p| p.is_value_bet()).count();

        let mut by_outcome = OutcomeCounts::default();
        for p in predictions {
            match p.predicted_outcome {
                Outcome::Home => by_outcome.home += 1,
                Outcome::Draw => by_outcome.draw += 1,
                Outcome::Away => by_outcome.away += 1,
            }
        }

        let mean =
            predictions.iter().map(|p| p.confidence).sum::<f64>() / predictions.len() as f64;

        Self {
            total: predictions.len(),
            high_confidence: high,
            medium_confidence: medium,
            low_confidence: low,
            by_outcome,
            value_bets,
            average_confidence: (mean * 10.0).round() / 10.0,
        }
    }
}
