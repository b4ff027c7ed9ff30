use crate::CONFIG;
use crate::models::StatsEventType;
use crate::table_extractor::{self, Row};
use crate::error::ScrapeError;

pub fn get_games_url(base: &str, month: &str, year: i32) -> String {
    format!("{base}/leagues/NBA_{year}_games-{month}.html")
}

pub fn get_stats_url(base: &str, team: &str, variant: StatsEventType) -> String {
    let team = team.to_uppercase();
    match variant {
        StatsEventType::Team => format!("{base}/teams/{team}/stats_per_game_totals.html"),
        StatsEventType::Opponent => format!("{base}/teams/{team}/opp_stats_per_game_totals.html"),
    }
}

pub async fn get_games(month: &str, year: i32) -> Result<Vec<Row>, ScrapeError> {
    let url = get_games_url(&CONFIG.source_url, month, year);
    table_extractor::fetch_rows(&url).await
}

pub async fn get_stats(team: &str, variant: StatsEventType) -> Result<Vec<Row>, ScrapeError> {
    let url = get_stats_url(&CONFIG.source_url, team, variant);
    table_extractor::fetch_rows(&url).await
}
