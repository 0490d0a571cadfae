use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Historical head-to-head record between two teams, from the home side's
/// perspective.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadToHead {
    pub home_wins: u32,
    pub away_wins: u32,
    pub draws: u32,
}

impl HeadToHead {
    pub fn new(home_wins: u32, away_wins: u32, draws: u32) -> Self {
        Self {
            home_wins,
            away_wins,
            draws,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.home_wins + self.away_wins + self.draws
    }
}

/// Descriptor of an upcoming match, the input to the scoring engine.
///
/// Form ratings live on a 0.0..=1.0 scale (share of recent points taken);
/// goal averages are goals per game over the same window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchInfo {
    pub id: String,
    pub home_team: String,
    pub away_team: String,
    pub home_form: f64,
    pub away_form: f64,
    pub home_goals_avg: f64,
    pub away_goals_avg: f64,
    pub head_to_head: HeadToHead,
    pub league: String,
    pub kickoff: DateTime<Utc>,
}

impl MatchInfo {
    /// Builds a match descriptor, coercing out-of-range stats into the
    /// domain the model is defined on.
    ///
    /// Forms are clamped into 0.0..=1.0 and goal averages floored at 0.0;
    /// non-finite inputs collapse to the neutral end of their range. The
    /// model downstream is total on that domain, so construction never
    /// fails.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        home_form: f64,
        away_form: f64,
        home_goals_avg: f64,
        away_goals_avg: f64,
        head_to_head: HeadToHead,
        league: impl Into<String>,
        kickoff: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            home_team: home_team.into(),
            away_team: away_team.into(),
            home_form: clamp_unit(home_form),
            away_form: clamp_unit(away_form),
            home_goals_avg: floor_zero(home_goals_avg),
            away_goals_avg: floor_zero(away_goals_avg),
            head_to_head,
            league: league.into(),
            kickoff,
        }
    }

    pub fn fixture_label(&self) -> String {
        format!("{} vs {}", self.home_team, self.away_team)
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

fn floor_zero(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_match(home_form: f64, away_form: f64) -> MatchInfo {
        MatchInfo::new(
            "m-1",
            "Home FC",
            "Away FC",
            home_form,
            away_form,
            1.5,
            1.2,
            HeadToHead::new(3, 2, 1),
            "Test League",
            Utc::now(),
        )
    }

    #[test]
    fn test_forms_clamped_into_unit_range() {
        let m = create_test_match(1.7, -0.3);

        assert_eq!(m.home_form, 1.0);
        assert_eq!(m.away_form, 0.0);
    }

    #[test]
    fn test_non_finite_inputs_collapse_to_neutral() {
        let m = MatchInfo::new(
            "m-2",
            "A",
            "B",
            f64::NAN,
            0.5,
            f64::INFINITY,
            1.0,
            HeadToHead::default(),
            "L",
            Utc::now(),
        );

        assert_eq!(m.home_form, 0.0);
        assert_eq!(m.home_goals_avg, 0.0);
    }

    #[test]
    fn test_negative_goal_average_floored() {
        let m = MatchInfo::new(
            "m-3",
            "A",
            "B",
            0.5,
            0.5,
            -1.0,
            2.0,
            HeadToHead::default(),
            "L",
            Utc::now(),
        );

        assert_eq!(m.home_goals_avg, 0.0);
        assert_eq!(m.away_goals_avg, 2.0);
    }

    #[test]
    fn test_head_to_head_total() {
        let h2h = HeadToHead::new(12, 15, 8);
        assert_eq!(h2h.total_games(), 35);

        assert_eq!(HeadToHead::default().total_games(), 0);
    }

    #[test]
    fn test_fixture_label() {
        let m = create_test_match(0.5, 0.5);
        assert_eq!(m.fixture_label(), "Home FC vs Away FC");
    }
}
