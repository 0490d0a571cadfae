//! Betting decision layer on top of the outcome distribution.
//!
//! Pure functions: market odds are sampled by the caller through the
//! `OddsSource` seam, so everything here is deterministic and directly
//! testable.

use crate::domain::prediction::{Outcome, RiskLevel, ValueAssessment};

/// Default bounds of the simulated market odds band.
pub const DEFAULT_ODDS_FLOOR: f64 = 1.85;
pub const DEFAULT_ODDS_CEILING: f64 = 2.15;

/// Expected value a pick must clear, strictly, to count as a value bet.
pub const DEFAULT_VALUE_THRESHOLD: f64 = 0.05;
/// Stake units per unit of expected value.
pub const STAKE_PER_EV_UNIT: f64 = 10.0;
/// Hard cap on the recommended stake, bankroll units.
pub const DEFAULT_MAX_STAKE: f64 = 5.0;

/// Low risk needs both a clear favorite and real confidence.
pub const LOW_RISK_MIN_SPREAD: f64 = 0.4;
pub const LOW_RISK_MIN_CONFIDENCE: f64 = 65.0;
/// Medium risk needs either of the two.
pub const MEDIUM_RISK_MIN_SPREAD: f64 = 0.25;
pub const MEDIUM_RISK_MIN_CONFIDENCE: f64 = 55.0;

/// Confidence above which the advice turns assertive.
pub const CONFIDENT_ADVICE_FLOOR: f64 = 70.0;

/// Compares the model's top probability against sampled market odds.
///
/// The value test and the stake are computed from the raw expected value;
/// rounding applies only to the stored figures.
pub fn assess_value(
    max_prob: f64,
    market_odds: f64,
    value_threshold: f64,
    max_stake: f64,
) -> ValueAssessment {
    let implied_odds = 1.0 / max_prob;
    let expected_value = max_prob * market_odds - 1.0;
    let is_value_bet = expected_value > value_threshold;
    let stake = if is_value_bet {
        (expected_value * STAKE_PER_EV_UNIT).min(max_stake)
    } else {
        0.0
    };

    ValueAssessment {
        implied_odds: (implied_odds * 100.0).round() / 100.0,
        market_odds: (market_odds * 100.0).round() / 100.0,
        expected_value: (expected_value * 1000.0).round() / 1000.0,
        is_value_bet,
        recommended_stake: (stake * 10.0).round() / 10.0,
    }
}

/// Buckets a prediction by how separable the outcomes are.
///
/// Branch order matters: the low test runs first and requires both
/// conditions, the medium test accepts either.
pub fn classify_risk(spread: f64, confidence: f64) -> RiskLevel {
    if spread > LOW_RISK_MIN_SPREAD && confidence > LOW_RISK_MIN_CONFIDENCE {
        RiskLevel::Low
    } else if spread > MEDIUM_RISK_MIN_SPREAD || confidence > MEDIUM_RISK_MIN_CONFIDENCE {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

/// Renders the strategic advice line for a scored pick.
///
/// Priority: value opportunity, then high confidence, then a tight-match
/// warning, then the standard line.
pub fn advice(
    outcome: Outcome,
    confidence: f64,
    risk: RiskLevel,
    value: &ValueAssessment,
) -> String {
    let label = outcome_label(outcome);

    if value.is_value_bet && risk == RiskLevel::Low {
        format!(
            "HIGH VALUE: Strong {} with {:.1}% confidence. Market underpricing by {:.1}%.",
            label,
            confidence,
            value.expected_value * 100.0
        )
    } else if confidence > CONFIDENT_ADVICE_FLOOR {
        let tail = if risk == RiskLevel::Low {
            "Low risk opportunity."
        } else {
            "Moderate risk."
        };
        format!(
            "CONFIDENT: {} pick with {:.1}% probability. {}",
            label, confidence, tail
        )
    } else if risk == RiskLevel::High {
        "CAUTION: Tight match, probabilities close. Consider avoiding or small stake only."
            .to_string()
    } else {
        format!("STANDARD: {} slightly favored. Manage risk accordingly.", label)
    }
}

fn outcome_label(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Home => "home",
        Outcome::Draw => "draw",
        Outcome::Away => "away",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_bet_above_threshold() {
        let value = assess_value(0.6, 2.0, DEFAULT_VALUE_THRESHOLD, DEFAULT_MAX_STAKE);

        assert!(value.is_value_bet);
        assert_eq!(value.expected_value, 0.2);
        assert_eq!(value.recommended_stake, 2.0);
        assert_eq!(value.market_odds, 2.0);
        assert_eq!(value.implied_odds, 1.67);
    }

    #[test]
    fn test_threshold_is_strict() {
        // 0.53125 * 2.0 - 1.0 is exactly 0.0625, so an equal threshold
        // must not qualify while a lower one must.
        let at_threshold = assess_value(0.53125, 2.0, 0.0625, DEFAULT_MAX_STAKE);
        assert!(!at_threshold.is_value_bet);
        assert_eq!(at_threshold.recommended_stake, 0.0);

        let above_threshold = assess_value(0.53125, 2.0, 0.06, DEFAULT_MAX_STAKE);
        assert!(above_threshold.is_value_bet);
    }

    #[test]
    fn test_negative_edge_recommends_nothing() {
        let value = assess_value(0.4, 2.0, DEFAULT_VALUE_THRESHOLD, DEFAULT_MAX_STAKE);

        assert!(!value.is_value_bet);
        assert_eq!(value.expected_value, -0.2);
        assert_eq!(value.recommended_stake, 0.0);
    }

    #[test]
    fn test_stake_capped() {
        let value = assess_value(0.9, 2.15, DEFAULT_VALUE_THRESHOLD, DEFAULT_MAX_STAKE);

        assert!(value.is_value_bet);
        assert_eq!(value.recommended_stake, 5.0);
    }

    #[test]
    fn test_risk_boundaries() {
        assert_eq!(classify_risk(0.41, 66.0), RiskLevel::Low);
        // Exactly on the low thresholds falls through to medium.
        assert_eq!(classify_risk(0.4, 65.0), RiskLevel::Medium);
        assert_eq!(classify_risk(0.41, 65.0), RiskLevel::Medium);
        assert_eq!(classify_risk(0.2, 56.0), RiskLevel::Medium);
        assert_eq!(classify_risk(0.26, 40.0), RiskLevel::Medium);
        assert_eq!(classify_risk(0.25, 55.0), RiskLevel::High);
        assert_eq!(classify_risk(0.2, 50.0), RiskLevel::High);
        assert_eq!(classify_risk(0.1, 40.0), RiskLevel::High);
    }

    #[test]
    fn test_advice_priority_value_first() {
        let value = assess_value(0.62, 2.0, DEFAULT_VALUE_THRESHOLD, DEFAULT_MAX_STAKE);
        let line = advice(Outcome::Home, 62.0, RiskLevel::Low, &value);

        assert!(line.starts_with("HIGH VALUE:"));
        assert!(line.contains("home"));
        assert!(line.contains("62.0% confidence"));
        assert!(line.contains("24.0%"));
    }

    #[test]
    fn test_advice_confident_with_risk_tail() {
        let value = assess_value(0.72, 1.9, DEFAULT_VALUE_THRESHOLD, DEFAULT_MAX_STAKE);
        let line = advice(Outcome::Away, 72.4, RiskLevel::Medium, &value);

        assert!(line.starts_with("CONFIDENT:"));
        assert!(line.contains("away pick with 72.4% probability"));
        assert!(line.ends_with("Moderate risk."));
    }

    #[test]
    fn test_advice_caution_for_tight_match() {
        let value = assess_value(0.38, 1.9, DEFAULT_VALUE_THRESHOLD, DEFAULT_MAX_STAKE);
        let line = advice(Outcome::Draw, 38.0, RiskLevel::High, &value);

        assert!(line.starts_with("CAUTION:"));
    }

    #[test]
    fn test_advice_standard_otherwise() {
        let value = assess_value(0.52, 1.9, DEFAULT_VALUE_THRESHOLD, DEFAULT_MAX_STAKE);
        let line = advice(Outcome::Draw, 52.0, RiskLevel::Medium, &value);

        assert!(line.starts_with("STANDARD:"));
        assert!(line.contains("draw slightly favored"));
    }
}
