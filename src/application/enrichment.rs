use crate::domain::errors::PredictionError;
use crate::domain::ports::InsightService;
use crate::domain::prediction::{Prediction, RiskLevel};
use async_trait::async_trait;

/// Rule-based insight backend.
///
/// Builds a deterministic commentary line from the prediction itself, so the
/// engine works fully offline. A remote analyst backend would implement
/// `InsightService` against the same trait.
pub struct StaticInsight;

impl StaticInsight {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StaticInsight {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InsightService for StaticInsight {
    async fn annotate(&self, prediction: &Prediction) -> Result<String, PredictionError> {
        let matchup = format!("{} vs {}", prediction.home_team, prediction.away_team);

        let note = match (prediction.value.is_value_bet, prediction.risk) {
            (true, RiskLevel::Low) => format!(
                "{}: market price {:.2} sits well above the model's fair {:.2} and the outcomes are cleanly separated. Rare edge.",
                matchup, prediction.value.market_odds, prediction.value.implied_odds
            ),
            (true, _) => format!(
                "{}: market price {:.2} runs ahead of fair value {:.2}, but the outcomes are not cleanly separated. Size down.",
                matchup, prediction.value.market_odds, prediction.value.implied_odds
            ),
            (false, RiskLevel::High) => format!(
                "{}: no pricing edge and the probabilities sit close together. Watching brief only.",
                matchup
            ),
            (false, _) => format!(
                "{}: the model finds no mispricing at {:.2}. Treat the pick as information, not an opportunity.",
                matchup, prediction.value.market_odds
            ),
        };

        Ok(note)
    }
}
