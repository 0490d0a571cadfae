//! Feature derivation from raw match statistics.
//!
//! Every weight lives here as a named constant; the scoring service never
//! sees a bare number.

use crate::domain::matches::{HeadToHead, MatchInfo};
use crate::domain::prediction::FeatureSet;

/// Flat edge every home side starts with.
pub const BASE_HOME_ADVANTAGE: f64 = 0.10;
/// Extra edge per point of home form.
pub const HOME_ADVANTAGE_FORM_WEIGHT: f64 = 0.05;

/// Head-to-head score when the teams have no shared history.
pub const NEUTRAL_H2H_SCORE: f64 = 0.5;
const H2H_WIN_POINTS: f64 = 3.0;
const H2H_DRAW_POINTS: f64 = 1.0;

/// Goals-per-game figure treated as elite scoring output.
pub const GOALS_NORMALIZER: f64 = 3.0;

const HOME_FORM_WEIGHT: f64 = 0.35;
const HOME_SCORING_WEIGHT: f64 = 0.25;
const HOME_ADVANTAGE_WEIGHT: f64 = 0.20;
const HOME_H2H_WEIGHT: f64 = 0.20;

const AWAY_FORM_WEIGHT: f64 = 0.40;
const AWAY_SCORING_WEIGHT: f64 = 0.30;
const AWAY_H2H_WEIGHT: f64 = 0.30;

/// Home advantage grows with form: in-form sides squeeze more out of their
/// crowd.
pub fn home_advantage(home_form: f64) -> f64 {
    BASE_HOME_ADVANTAGE + home_form * HOME_ADVANTAGE_FORM_WEIGHT
}

/// League-style points share of the head-to-head record from the home side's
/// perspective, on a 0..=1 scale. No shared history scores a neutral 0.5.
pub fn h2h_score(h2h: &HeadToHead) -> f64 {
    let total = h2h.total_games();
    if total == 0 {
        return NEUTRAL_H2H_SCORE;
    }

    let points = f64::from(h2h.home_wins) * H2H_WIN_POINTS + f64::from(h2h.draws) * H2H_DRAW_POINTS;
    points / (f64::from(total) * H2H_WIN_POINTS)
}

/// Derives the full feature set for one match.
///
/// Strengths are weighted sums and can leave the unit interval for extreme
/// inputs; the sigmoid downstream absorbs that, so they are not clamped.
pub fn derive(info: &MatchInfo) -> FeatureSet {
    let advantage = home_advantage(info.home_form);
    let h2h = h2h_score(&info.head_to_head);

    let home_strength = info.home_form * HOME_FORM_WEIGHT
        + (info.home_goals_avg / GOALS_NORMALIZER) * HOME_SCORING_WEIGHT
        + advantage * HOME_ADVANTAGE_WEIGHT
        + h2h * HOME_H2H_WEIGHT;

    let away_strength = info.away_form * AWAY_FORM_WEIGHT
        + (info.away_goals_avg / GOALS_NORMALIZER) * AWAY_SCORING_WEIGHT
        + (1.0 - h2h) * AWAY_H2H_WEIGHT;

    FeatureSet {
        home_strength,
        away_strength,
        home_advantage: advantage,
        form_differential: info.home_form - info.away_form,
        h2h_score: h2h,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn create_test_match(
        home_form: f64,
        away_form: f64,
        home_goals: f64,
        away_goals: f64,
        h2h: HeadToHead,
    ) -> MatchInfo {
        MatchInfo::new(
            "m-1",
            "Home FC",
            "Away FC",
            home_form,
            away_form,
            home_goals,
            away_goals,
            h2h,
            "Test League",
            Utc::now(),
        )
    }

    #[test]
    fn test_no_shared_history_scores_neutral() {
        assert_eq!(h2h_score(&HeadToHead::default()), 0.5);
    }

    #[test]
    fn test_h2h_score_all_home_wins_is_one() {
        let h2h = HeadToHead::new(10, 0, 0);
        assert_eq!(h2h_score(&h2h), 1.0);
    }

    #[test]
    fn test_h2h_score_all_away_wins_is_zero() {
        let h2h = HeadToHead::new(0, 10, 0);
        assert_eq!(h2h_score(&h2h), 0.0);
    }

    #[test]
    fn test_h2h_score_counts_draws_as_single_points() {
        // 12 wins and 8 draws out of 35 games: (36 + 8) / 105.
        let h2h = HeadToHead::new(12, 15, 8);
        let score = h2h_score(&h2h);
        assert!((score - 44.0 / 105.0).abs() < 1e-12);
    }

    #[test]
    fn test_home_advantage_range() {
        assert!((home_advantage(0.0) - 0.10).abs() < 1e-12);
        assert!((home_advantage(1.0) - 0.15).abs() < 1e-12);
    }

    #[test]
    fn test_derive_recombines_weighted_components() {
        let info = create_test_match(0.8, 0.6, 2.1, 1.5, HeadToHead::new(5, 3, 2));
        let features = derive(&info);

        let h2h = h2h_score(&info.head_to_head);
        let expected_home = 0.8 * 0.35 + (2.1 / 3.0) * 0.25 + home_advantage(0.8) * 0.20 + h2h * 0.20;
        let expected_away = 0.6 * 0.40 + (1.5 / 3.0) * 0.30 + (1.0 - h2h) * 0.30;

        assert!((features.home_strength - expected_home).abs() < 1e-12);
        assert!((features.away_strength - expected_away).abs() < 1e-12);
        assert!((features.form_differential - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_stronger_away_side_outscores_home() {
        // Weaker home form and scoring against an in-form visitor with the
        // better head-to-head record.
        let info = create_test_match(0.72, 0.85, 1.8, 2.3, HeadToHead::new(12, 15, 8));
        let features = derive(&info);

        assert!(features.away_strength > features.home_strength);
    }
}
