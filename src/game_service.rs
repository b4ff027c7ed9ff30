use tracing::log;

use crate::cells::Cells;
use crate::error::ScrapeError;
use crate::models::{EventResponse, GameEvent};
use crate::rest_client;
use crate::table_extractor::Row;

/// Column of each field in a row of the monthly schedule table.
/// Columns 5 and 6 (box score link, overtime marker) are not read.
pub struct GameColumns {
    pub time: usize,
    pub away_team: usize,
    pub away_points: usize,
    pub home_team: usize,
    pub home_points: usize,
    pub attendance: usize,
    pub venue: usize,
}

pub const GAME_COLUMNS: GameColumns = GameColumns {
    time: 0,
    away_team: 1,
    away_points: 2,
    home_team: 3,
    home_points: 4,
    attendance: 7,
    venue: 8,
};

/// Maps every row, or fails on the first row that does not fit.
pub fn map_games(rows: &[Row], month: &str, year: i32) -> Result<Vec<GameEvent>, ScrapeError> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| map_game(&Cells::new(i, row), month, year))
        .collect()
}

fn map_game(cells: &Cells, month: &str, year: i32) -> Result<GameEvent, ScrapeError> {
    let c = &GAME_COLUMNS;
    Ok(GameEvent {
        month: month.to_string(),
        year,
        time: cells.string(c.time)?,
        away_team: cells.string(c.away_team)?,
        away_points: cells.parse(c.away_points)?,
        home_team: cells.string(c.home_team)?,
        home_points: cells.parse(c.home_points)?,
        attendance: cells.string(c.attendance)?,
        venue: cells.string(c.venue)?,
    })
}

pub struct GameService;

impl GameService {
    pub async fn scrape(month: &str, year: i32) -> Result<EventResponse<GameEvent>, ScrapeError> {
        let rows = rest_client::get_games(month, year).await?;
        let games = map_games(&rows, month, year)?;
        log::info!("[SCRAPE] {} games for {month} {year}", games.len());
        Ok(games.into())
    }
}
