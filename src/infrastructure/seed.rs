use crate::domain::matches::{HeadToHead, MatchInfo};
use chrono::{Duration, Utc};

/// Built-in fixture catalog used when no external match feed is wired up.
///
/// Ids are fixed so the demo binary and tests can address individual
/// fixtures; kickoffs are staggered over the coming week.
pub fn sample_matches() -> Vec<MatchInfo> {
    let now = Utc::now();
    vec![
        MatchInfo::new(
            "sample-1",
            "Manchester United",
            "Liverpool",
            0.72,
            0.85,
            1.8,
            2.3,
            HeadToHead::new(12, 15, 8),
            "Premier League",
            now + Duration::days(2),
        ),
        MatchInfo::new(
            "sample-2",
            "Barcelona",
            "Real Madrid",
            0.88,
            0.82,
            2.5,
            2.1,
            HeadToHead::new(18, 16, 12),
            "La Liga",
            now + Duration::days(3),
        ),
        MatchInfo::new(
            "sample-3",
            "Bayern Munich",
            "Borussia Dortmund",
            0.91,
            0.75,
            3.0,
            1.9,
            HeadToHead::new(22, 10, 5),
            "Bundesliga",
            now + Duration::days(4),
        ),
        MatchInfo::new(
            "sample-4",
            "PSG",
            "Marseille",
            0.89,
            0.68,
            2.7,
            1.5,
            HeadToHead::new(25, 8, 7),
            "Ligue 1",
            now + Duration::days(5),
        ),
        MatchInfo::new(
            "sample-5",
            "Chelsea",
            "Arsenal",
            0.70,
            0.78,
            1.9,
            2.0,
            HeadToHead::new(14, 13, 11),
            "Premier League",
            now + Duration::days(6),
        ),
    ]
}
