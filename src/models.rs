use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GameEvent {
    pub month: String,
    pub year: i32,
    pub time: String,
    pub away_team: String,
    pub away_points: u32,
    pub home_team: String,
    pub home_points: u32,
    pub attendance: String,
    pub venue: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum StatsEventType {
    Team,
    Opponent,
}

impl Display for StatsEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsEventType::Team => write!(f, "TEAM"),
            StatsEventType::Opponent => write!(f, "OPPONENT"),
        }
    }
}

/// Per-game averages of one team (or of its opponents) over one season.
/// The three `average_*` fields only exist for [`StatsEventType::Team`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StatsEvent {
    pub team: String,
    pub season: String,
    pub wins: i32,
    pub losses: i32,
    pub division_position: i32,
    pub average_age: Option<f64>,
    pub average_height: Option<String>,
    pub average_weight: Option<i32>,
    pub games_played: i32,
    pub minutes_per_game: f64,
    pub field_goals_per_game: f64,
    pub field_goal_attempts_per_game: f64,
    pub field_goal_percentage: f64,
    pub three_pointers_per_game: f64,
    pub three_point_attempts_per_game: f64,
    pub three_point_percentage: f64,
    pub two_pointers_per_game: f64,
    pub two_point_attempts_per_game: f64,
    pub two_point_percentage: f64,
    pub free_throws_per_game: f64,
    pub free_throw_attempts_per_game: f64,
    pub free_throw_percentage: f64,
    pub offensive_rebounds_per_game: f64,
    pub defensive_rebounds_per_game: f64,
    pub total_rebounds_per_game: f64,
    pub assists_per_game: f64,
    pub steals_per_game: f64,
    pub blocks_per_game: f64,
    pub turnovers_per_game: f64,
    pub personal_fouls_per_game: f64,
    pub points_per_game: f64,
}

/// Records of one scrape together with their count.
/// The count is derived from the records and cannot be set on its own.
#[derive(Serialize, Debug, Clone)]
pub struct EventResponse<T> {
    records: Vec<T>,
    record_count: usize,
}

impl<T> EventResponse<T> {
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn record_count(&self) -> usize {
        self.record_count
    }
}

impl<T> From<Vec<T>> for EventResponse<T> {
    fn from(records: Vec<T>) -> Self {
        let record_count = records.len();
        EventResponse { records, record_count }
    }
}

/// `2023` -> `"2023-24"`, `1999` -> `"1999-00"`
pub fn season_tag(year: i32) -> String {
    format!("{year}-{:02}", (year as i64 + 1).rem_euclid(100))
}

/// The seasons a stats table is read for, newest first.
/// `current` is the first season stamped, `pre_era` the first one that is not.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonRange {
    pub current: i32,
    pub pre_era: i32,
}

impl SeasonRange {
    /// 2023-24 back to 1979-80, the first season with a three point line.
    pub const THREE_POINT_ERA: SeasonRange = SeasonRange { current: 2023, pre_era: 1978 };

    pub fn cursor(&self) -> SeasonCursor {
        SeasonCursor { year: self.current, stop: self.pre_era }
    }
}

impl Default for SeasonRange {
    fn default() -> Self {
        SeasonRange::THREE_POINT_ERA
    }
}

/// Counts seasons down from the current one and ends once the pre-era season is reached.
#[derive(Debug, Clone)]
pub struct SeasonCursor {
    year: i32,
    stop: i32,
}

impl Iterator for SeasonCursor {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        if self.year <= self.stop {
            return None;
        }
        let year = self.year;
        self.year -= 1;
        Some(year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_tag_pads_suffix() {
        assert_eq!(season_tag(2023), "2023-24");
        assert_eq!(season_tag(2008), "2008-09");
        assert_eq!(season_tag(1999), "1999-00");
        assert_eq!(season_tag(1979), "1979-80");
    }

    #[test]
    fn season_tag_at_integer_bounds() {
        assert_eq!(season_tag(i32::MAX), format!("{}-48", i32::MAX));
        assert_eq!(season_tag(i32::MIN), format!("{}-53", i32::MIN));
        assert_eq!(season_tag(-1), "-1-00");
    }

    #[test]
    fn cursor_covers_three_point_era() {
        let seasons: Vec<i32> = SeasonRange::THREE_POINT_ERA.cursor().collect();
        assert_eq!(seasons.len(), 45);
        assert_eq!(seasons.first(), Some(&2023));
        assert_eq!(seasons.last(), Some(&1979));
        assert!(seasons.windows(2).all(|w| w[0] - 1 == w[1]));
    }

    #[test]
    fn cursor_is_empty_when_range_is_empty() {
        let range = SeasonRange { current: 1978, pre_era: 1978 };
        assert_eq!(range.cursor().count(), 0);
    }

    #[test]
    fn record_count_follows_records() {
        let rsp: EventResponse<i32> = vec![1, 2, 3].into();
        assert_eq!(rsp.record_count(), 3);
        assert_eq!(rsp.records(), &[1, 2, 3]);

        let json = serde_json::to_value(&rsp).unwrap();
        assert_eq!(json["record_count"], 3);
        assert_eq!(json["records"].as_array().map(|e| e.len()), Some(3));
    }

    #[test]
    fn empty_response_has_zero_count() {
        let rsp: EventResponse<GameEvent> = vec![].into();
        assert_eq!(rsp.record_count(), 0);
    }

    #[test]
    fn stats_event_type_serializes_upper_case() {
        assert_eq!(serde_json::to_string(&StatsEventType::Opponent).unwrap(), "\"OPPONENT\"");
        assert_eq!(StatsEventType::Team.to_string(), "TEAM");
    }
}
