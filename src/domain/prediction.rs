use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Match result a prediction can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Home,
    Draw,
    Away,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Home => write!(f, "HOME"),
            Outcome::Draw => write!(f, "DRAW"),
            Outcome::Away => write!(f, "AWAY"),
        }
    }
}

/// Stake-risk classification of a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
        }
    }
}

/// Derived model inputs for one match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureSet {
    pub home_strength: f64,
    pub away_strength: f64,
    pub home_advantage: f64,
    pub form_differential: f64,
    pub h2h_score: f64,
}

impl FeatureSet {
    /// Copy with every component rounded to 2 decimal places, the precision
    /// stored on prediction records.
    pub fn rounded(&self) -> FeatureSet {
        FeatureSet {
            home_strength: round_2dp(self.home_strength),
            away_strength: round_2dp(self.away_strength),
            home_advantage: round_2dp(self.home_advantage),
            form_differential: round_2dp(self.form_differential),
            h2h_score: round_2dp(self.h2h_score),
        }
    }
}

/// Raw win/draw/loss probabilities, normalized to sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutcomeDistribution {
    pub home: f64,
    pub draw: f64,
    pub away: f64,
}

impl OutcomeDistribution {
    pub fn sum(&self) -> f64 {
        self.home + self.draw + self.away
    }

    /// Strongest outcome and its probability. An exact tie resolves in the
    /// fixed order home, away, draw.
    pub fn strongest(&self) -> (Outcome, f64) {
        let max = self.home.max(self.draw).max(self.away);
        if self.home == max {
            (Outcome::Home, self.home)
        } else if self.away == max {
            (Outcome::Away, self.away)
        } else {
            (Outcome::Draw, self.draw)
        }
    }

    /// Gap between the most and least likely outcome. Wide spreads mean the
    /// model sees a clear favorite.
    pub fn spread(&self) -> f64 {
        let max = self.home.max(self.draw).max(self.away);
        let min = self.home.min(self.draw).min(self.away);
        max - min
    }

    /// Percent view rounded to 1 decimal place.
    pub fn as_percentages(&self) -> OutcomePercentages {
        OutcomePercentages {
            home: round_1dp(self.home * 100.0),
            draw: round_1dp(self.draw * 100.0),
            away: round_1dp(self.away * 100.0),
        }
    }

    /// Percent view rounded to whole numbers, used by the raw-vector path.
    pub fn as_whole_percentages(&self) -> OutcomePercentages {
        OutcomePercentages {
            home: (self.home * 100.0).round(),
            draw: (self.draw * 100.0).round(),
            away: (self.away * 100.0).round(),
        }
    }
}

/// Probabilities expressed as percentages for presentation and storage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutcomePercentages {
    pub home: f64,
    pub draw: f64,
    pub away: f64,
}

/// Market comparison attached to a prediction. Stake is in bankroll units,
/// capped by the decision layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueAssessment {
    pub implied_odds: f64,
    pub market_odds: f64,
    pub expected_value: f64,
    pub is_value_bet: bool,
    pub recommended_stake: f64,
}

/// Full scored prediction, the unit stored in the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub id: Uuid,
    pub match_id: String,
    pub home_team: String,
    pub away_team: String,
    pub league: String,
    pub predicted_outcome: Outcome,
    pub confidence: f64,
    pub probabilities: OutcomePercentages,
    pub features: FeatureSet,
    pub value: ValueAssessment,
    pub risk: RiskLevel,
    pub advice: String,
    /// Supplementary commentary from the insight layer. Additive only; the
    /// advice template above is never replaced.
    pub insight: Option<String>,
    pub model_version: String,
    pub created_at: DateTime<Utc>,
}

impl Prediction {
    pub fn is_value_bet(&self) -> bool {
        self.value.is_value_bet
    }
}

/// Result of the raw-vector scoring path. Returned directly to the caller
/// and never stored, so it carries no id or timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomScore {
    pub predicted_outcome: Outcome,
    pub confidence: f64,
    pub probabilities: OutcomePercentages,
    pub model_version: String,
}

fn round_1dp(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_distribution(home: f64, draw: f64, away: f64) -> OutcomeDistribution {
        OutcomeDistribution { home, draw, away }
    }

    #[test]
    fn test_strongest_picks_highest_probability() {
        let d = create_test_distribution(0.2, 0.25, 0.55);
        assert_eq!(d.strongest(), (Outcome::Away, 0.55));

        let d = create_test_distribution(0.6, 0.25, 0.15);
        assert_eq!(d.strongest(), (Outcome::Home, 0.6));

        let d = create_test_distribution(0.3, 0.4, 0.3);
        assert_eq!(d.strongest(), (Outcome::Draw, 0.4));
    }

    #[test]
    fn test_strongest_tie_prefers_home_then_away() {
        let d = create_test_distribution(0.4, 0.2, 0.4);
        assert_eq!(d.strongest().0, Outcome::Home);

        let d = create_test_distribution(0.25, 0.375, 0.375);
        assert_eq!(d.strongest().0, Outcome::Away);
    }

    #[test]
    fn test_spread() {
        let d = create_test_distribution(0.6, 0.25, 0.15);
        assert!((d.spread() - 0.45).abs() < 1e-12);
    }

    #[test]
    fn test_percentages_rounded_to_one_decimal() {
        let d = create_test_distribution(0.54321, 0.2, 0.25679);
        let pct = d.as_percentages();

        assert_eq!(pct.home, 54.3);
        assert_eq!(pct.draw, 20.0);
        assert_eq!(pct.away, 25.7);
    }

    #[test]
    fn test_whole_percentages() {
        let d = create_test_distribution(0.546, 0.204, 0.25);
        let pct = d.as_whole_percentages();

        assert_eq!(pct.home, 55.0);
        assert_eq!(pct.draw, 20.0);
        assert_eq!(pct.away, 25.0);
    }

    #[test]
    fn test_feature_set_rounding() {
        let features = FeatureSet {
            home_strength: 0.61749,
            away_strength: 0.5555,
            home_advantage: 0.136,
            form_differential: -0.13,
            h2h_score: 0.44444,
        };

        let rounded = features.rounded();
        assert_eq!(rounded.home_strength, 0.62);
        assert_eq!(rounded.away_strength, 0.56);
        assert_eq!(rounded.home_advantage, 0.14);
        assert_eq!(rounded.form_differential, -0.13);
        assert_eq!(rounded.h2h_score, 0.44);
    }

    #[test]
    fn test_outcome_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Outcome::Home).unwrap(), "\"home\"");
        assert_eq!(
            serde_json::to_string(&RiskLevel::Medium).unwrap(),
            "\"medium\""
        );
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Away.to_string(), "AWAY");
        assert_eq!(RiskLevel::High.to_string(), "high");
    }
}
