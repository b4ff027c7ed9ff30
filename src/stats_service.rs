use tracing::log;

use crate::CONFIG;
use crate::cells::Cells;
use crate::error::ScrapeError;
use crate::models::{season_tag, EventResponse, SeasonRange, StatsEvent, StatsEventType};
use crate::rest_client;
use crate::table_extractor::Row;

/// Column of each field in a row of a per-season totals table.
/// The opponent table has no roster averages, so everything after them sits further left.
pub struct StatsColumns {
    pub team: usize,
    pub wins: usize,
    pub losses: usize,
    pub division_position: usize,
    pub average_age: Option<usize>,
    pub average_height: Option<usize>,
    pub average_weight: Option<usize>,
    pub games_played: usize,
    pub minutes_per_game: usize,
    pub field_goals_per_game: usize,
    pub field_goal_attempts_per_game: usize,
    pub field_goal_percentage: usize,
    pub three_pointers_per_game: usize,
    pub three_point_attempts_per_game: usize,
    pub three_point_percentage: usize,
    pub two_pointers_per_game: usize,
    pub two_point_attempts_per_game: usize,
    pub two_point_percentage: usize,
    pub free_throws_per_game: usize,
    pub free_throw_attempts_per_game: usize,
    pub free_throw_percentage: usize,
    pub offensive_rebounds_per_game: usize,
    pub defensive_rebounds_per_game: usize,
    pub total_rebounds_per_game: usize,
    pub assists_per_game: usize,
    pub steals_per_game: usize,
    pub blocks_per_game: usize,
    pub turnovers_per_game: usize,
    pub personal_fouls_per_game: usize,
    pub points_per_game: usize,
}

pub const TEAM_COLUMNS: StatsColumns = StatsColumns {
    team: 1,
    wins: 2,
    losses: 3,
    division_position: 4,
    average_age: Some(6),
    average_height: Some(7),
    average_weight: Some(8),
    games_played: 10,
    minutes_per_game: 11,
    field_goals_per_game: 12,
    field_goal_attempts_per_game: 13,
    field_goal_percentage: 14,
    three_pointers_per_game: 15,
    three_point_attempts_per_game: 16,
    three_point_percentage: 17,
    two_pointers_per_game: 18,
    two_point_attempts_per_game: 19,
    two_point_percentage: 20,
    free_throws_per_game: 21,
    free_throw_attempts_per_game: 22,
    free_throw_percentage: 23,
    offensive_rebounds_per_game: 24,
    defensive_rebounds_per_game: 25,
    total_rebounds_per_game: 26,
    assists_per_game: 27,
    steals_per_game: 28,
    blocks_per_game: 29,
    turnovers_per_game: 30,
    personal_fouls_per_game: 31,
    points_per_game: 32,
};

pub const OPPONENT_COLUMNS: StatsColumns = StatsColumns {
    team: 1,
    wins: 2,
    losses: 3,
    division_position: 4,
    average_age: None,
    average_height: None,
    average_weight: None,
    games_played: 6,
    minutes_per_game: 7,
    field_goals_per_game: 8,
    field_goal_attempts_per_game: 9,
    field_goal_percentage: 10,
    three_pointers_per_game: 11,
    three_point_attempts_per_game: 12,
    three_point_percentage: 13,
    two_pointers_per_game: 14,
    two_point_attempts_per_game: 15,
    two_point_percentage: 16,
    free_throws_per_game: 17,
    free_throw_attempts_per_game: 18,
    free_throw_percentage: 19,
    offensive_rebounds_per_game: 20,
    defensive_rebounds_per_game: 21,
    total_rebounds_per_game: 22,
    assists_per_game: 23,
    steals_per_game: 24,
    blocks_per_game: 25,
    turnovers_per_game: 26,
    personal_fouls_per_game: 27,
    points_per_game: 28,
};

impl StatsEventType {
    pub fn columns(&self) -> &'static StatsColumns {
        match self {
            StatsEventType::Team => &TEAM_COLUMNS,
            StatsEventType::Opponent => &OPPONENT_COLUMNS,
        }
    }
}

pub fn map_season_stats(rows: &[Row], variant: StatsEventType) -> Result<Vec<StatsEvent>, ScrapeError> {
    map_season_stats_in(rows, variant, SeasonRange::THREE_POINT_ERA)
}

/// Rows are expected newest season first: row `i` is stamped `range.current - i`.
/// Rows past the end of the range are dropped without being looked at.
pub fn map_season_stats_in(rows: &[Row], variant: StatsEventType, range: SeasonRange) -> Result<Vec<StatsEvent>, ScrapeError> {
    let columns = variant.columns();
    rows.iter()
        .zip(range.cursor())
        .enumerate()
        .map(|(i, (row, year))| map_stats(&Cells::new(i, row), columns, season_tag(year)))
        .collect()
}

fn map_stats(cells: &Cells, c: &StatsColumns, season: String) -> Result<StatsEvent, ScrapeError> {
    Ok(StatsEvent {
        team: cells.string(c.team)?,
        season,
        wins: cells.parse(c.wins)?,
        losses: cells.parse(c.losses)?,
        division_position: cells.parse(c.division_position)?,
        average_age: cells.optional(c.average_age)?,
        average_height: cells.optional(c.average_height)?,
        average_weight: cells.optional(c.average_weight)?,
        games_played: cells.parse(c.games_played)?,
        minutes_per_game: cells.parse(c.minutes_per_game)?,
        field_goals_per_game: cells.parse(c.field_goals_per_game)?,
        field_goal_attempts_per_game: cells.parse(c.field_goal_attempts_per_game)?,
        field_goal_percentage: cells.percentage(c.field_goal_percentage)?,
        three_pointers_per_game: cells.parse(c.three_pointers_per_game)?,
        three_point_attempts_per_game: cells.parse(c.three_point_attempts_per_game)?,
        three_point_percentage: cells.percentage(c.three_point_percentage)?,
        two_pointers_per_game: cells.parse(c.two_pointers_per_game)?,
        two_point_attempts_per_game: cells.parse(c.two_point_attempts_per_game)?,
        two_point_percentage: cells.percentage(c.two_point_percentage)?,
        free_throws_per_game: cells.parse(c.free_throws_per_game)?,
        free_throw_attempts_per_game: cells.parse(c.free_throw_attempts_per_game)?,
        free_throw_percentage: cells.percentage(c.free_throw_percentage)?,
        offensive_rebounds_per_game: cells.parse(c.offensive_rebounds_per_game)?,
        defensive_rebounds_per_game: cells.parse(c.defensive_rebounds_per_game)?,
        total_rebounds_per_game: cells.parse(c.total_rebounds_per_game)?,
        assists_per_game: cells.parse(c.assists_per_game)?,
        steals_per_game: cells.parse(c.steals_per_game)?,
        blocks_per_game: cells.parse(c.blocks_per_game)?,
        turnovers_per_game: cells.parse(c.turnovers_per_game)?,
        personal_fouls_per_game: cells.parse(c.personal_fouls_per_game)?,
        points_per_game: cells.parse(c.points_per_game)?,
    })
}

pub struct StatsService;

impl StatsService {
    pub async fn scrape(team: &str, variant: StatsEventType) -> Result<EventResponse<StatsEvent>, ScrapeError> {
        let rows = rest_client::get_stats(team, variant).await?;
        let stats = map_season_stats_in(&rows, variant, CONFIG.season_range())?;
        log::info!("[SCRAPE] {} {variant} seasons for {team}", stats.len());
        Ok(stats.into())
    }
}
