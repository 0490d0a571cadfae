//! Closed-form win/draw/loss model.
//!
//! A logistic curve over the strength gap sets the home share, an
//! exponential decay over the form gap sets the draw share, and the away
//! side takes the remainder. The three are then normalized to sum to 1.

use crate::domain::prediction::{FeatureSet, OutcomeDistribution};

/// Steepness of the logistic curve mapping strength gap to home win share.
pub const STRENGTH_SIGMOID_SCALE: f64 = 5.0;
/// Decay rate of the draw share as the form gap widens.
pub const DRAW_DECAY_RATE: f64 = 2.0;
/// Draw share for perfectly matched sides.
pub const MAX_DRAW_PROBABILITY: f64 = 0.25;

/// Maps a feature set to a normalized outcome distribution.
pub fn outcome_distribution(features: &FeatureSet) -> OutcomeDistribution {
    let strength_gap = features.home_strength - features.away_strength;

    let home = sigmoid(strength_gap * STRENGTH_SIGMOID_SCALE);
    let draw = (-features.form_differential.abs() * DRAW_DECAY_RATE).exp() * MAX_DRAW_PROBABILITY;
    let away = 1.0 - home - draw;

    normalize(home, draw, away)
}

/// Rescales the three shares to sum to exactly 1. The raw shares already sum
/// to 1 by construction, so this only irons out floating-point residue.
pub fn normalize(home: f64, draw: f64, away: f64) -> OutcomeDistribution {
    let total = home + draw + away;
    OutcomeDistribution {
        home: home / total,
        draw: draw / total,
        away: away / total,
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
