//! Ad-hoc scoring from a raw 7-feature vector.
//!
//! A trimmed variant of the match pipeline for callers without a cataloged
//! match: its own strength weights, a softer sigmoid, and a jittered draw
//! share instead of the form-decay curve. Results are returned directly and
//! never stored.

use crate::domain::errors::PredictionError;
use crate::domain::model::{CUSTOM_MODEL_VERSION, distribution};
use crate::domain::ports::OddsSource;
use crate::domain::prediction::CustomScore;

/// Required length of the feature vector.
pub const FEATURE_COUNT: usize = 7;

/// Sigmoid steepness of this path, softer than the match-based one.
pub const CUSTOM_SIGMOID_SCALE: f64 = 4.0;
/// Draw share floor; jitter is added on top.
pub const DRAW_BASE: f64 = 0.20;
/// Width of the draw jitter band.
pub const DRAW_JITTER_SPAN: f64 = 0.05;
/// Keeps the goals ratio defined when a side has no recorded goals.
pub const GOALS_RATIO_EPSILON: f64 = 0.01;

const FORM_WEIGHT: f64 = 0.4;
const GOALS_WEIGHT: f64 = 0.3;
const H2H_WEIGHT: f64 = 0.3;

/// Validated payload of the raw-vector path, positional order:
/// `[home_form, away_form, h2h_ratio, home_goals_for, home_goals_against,
/// away_goals_for, away_goals_against]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CustomFeatures {
    pub home_form: f64,
    pub away_form: f64,
    pub h2h_ratio: f64,
    pub home_goals_for: f64,
    pub home_goals_against: f64,
    pub away_goals_for: f64,
    pub away_goals_against: f64,
}

impl CustomFeatures {
    /// Parses the positional slice, rejecting wrong lengths and non-finite
    /// entries before any computation runs.
    pub fn from_slice(features: &[f64]) -> Result<Self, PredictionError> {
        if features.len() != FEATURE_COUNT {
            return Err(PredictionError::InvalidFeatureVector {
                expected: FEATURE_COUNT,
                actual: features.len(),
            });
        }

        for (index, &value) in features.iter().enumerate() {
            if !value.is_finite() {
                return Err(PredictionError::NonFiniteFeature { index, value });
            }
        }

        Ok(Self {
            home_form: features[0],
            away_form: features[1],
            h2h_ratio: features[2],
            home_goals_for: features[3],
            home_goals_against: features[4],
            away_goals_for: features[5],
            away_goals_against: features[6],
        })
    }

    fn home_strength(&self) -> f64 {
        let goals_ratio = self.home_goals_for
            / (self.home_goals_for + self.home_goals_against + GOALS_RATIO_EPSILON);
        self.home_form * FORM_WEIGHT + goals_ratio * GOALS_WEIGHT + self.h2h_ratio * H2H_WEIGHT
    }

    fn away_strength(&self) -> f64 {
        let goals_ratio = self.away_goals_for
            / (self.away_goals_for + self.away_goals_against + GOALS_RATIO_EPSILON);
        self.away_form * FORM_WEIGHT
            + goals_ratio * GOALS_WEIGHT
            + (1.0 - self.h2h_ratio) * H2H_WEIGHT
    }
}

/// Scores a validated feature payload. The draw share draws its jitter from
/// the injected source, so a fixed source makes the result reproducible.
pub fn score(features: &CustomFeatures, jitter: &dyn OddsSource) -> CustomScore {
    let strength_gap = features.home_strength() - features.away_strength();

    let home = 1.0 / (1.0 + (-strength_gap * CUSTOM_SIGMOID_SCALE).exp());
    let draw = jitter.sample(DRAW_BASE, DRAW_BASE + DRAW_JITTER_SPAN);
    let away = 1.0 - home - draw;

    let dist = distribution::normalize(home, draw, away);
    let (outcome, max_prob) = dist.strongest();

    CustomScore {
        predicted_outcome: outcome,
        confidence: (max_prob * 100.0).round(),
        probabilities: dist.as_whole_percentages(),
        model_version: CUSTOM_MODEL_VERSION.to_string(),
    }
}
