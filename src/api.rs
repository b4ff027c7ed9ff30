use std::net::SocketAddr;

use axum::{Router, extract::Query, response::{IntoResponse, Response}, Json};
use reqwest::StatusCode;
use serde::Deserialize;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing::log;

use crate::{LogResult, error::ScrapeError, game_service::GameService, models::StatsEventType, stats_service::StatsService};

pub struct Api;
impl Api {
    pub fn router() -> Router {
        Router::new()
            .route("/scrape/games", axum::routing::get(Api::get_games))
            .route("/scrape/stats/team", axum::routing::get(Api::get_team_stats))
            .route("/scrape/stats/opponent", axum::routing::get(Api::get_opponent_stats))
            .route("/", axum::routing::get(Api::root))
            .layer(ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
            )
    }

    pub async fn serve(port: u16) {
        let app = Api::router();
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        log::info!("[API] Listening on {}", addr);
        axum::Server::bind(&addr)
            .serve(app.into_make_service())
            .await
            .ok_log("[API] Server stopped");
    }

    async fn root() -> &'static str {
        "Nothing but net"
    }

    async fn get_games(Query(query): Query<GamesQuery>) -> Response {
        match GameService::scrape(&query.month, query.year).await {
            Ok(rsp) => Json(rsp).into_response(),
            Err(e) => e.into_response(),
        }
    }

    async fn get_team_stats(Query(query): Query<TeamQuery>) -> Response {
        Api::get_stats(&query.team, StatsEventType::Team).await
    }

    async fn get_opponent_stats(Query(query): Query<TeamQuery>) -> Response {
        Api::get_stats(&query.team, StatsEventType::Opponent).await
    }

    async fn get_stats(team: &str, variant: StatsEventType) -> Response {
        match StatsService::scrape(team, variant).await {
            Ok(rsp) => Json(rsp).into_response(),
            Err(e) => e.into_response(),
        }
    }
}

impl IntoResponse for ScrapeError {
    fn into_response(self) -> Response {
        let status = match &self {
            ScrapeError::Fetch(e) if e.status() == Some(StatusCode::NOT_FOUND) => StatusCode::NOT_FOUND,
            ScrapeError::Fetch(_) | ScrapeError::Parse(_) => StatusCode::BAD_GATEWAY,
            ScrapeError::Mapping { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        log::error!("[API] {} {}", status, self);
        (status, self.to_string()).into_response()
    }
}

#[derive(Deserialize)]
pub struct GamesQuery {
    pub month: String,
    pub year: i32,
}

#[derive(Deserialize)]
pub struct TeamQuery {
    pub team: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_error_is_internal() {
        let rsp = ScrapeError::mapping(2, "column 4 '': cannot parse integer from empty string").into_response();
        assert_eq!(rsp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn parse_error_is_bad_gateway() {
        let rsp = ScrapeError::Parse("document is not valid utf-8".to_string()).into_response();
        assert_eq!(rsp.status(), StatusCode::BAD_GATEWAY);
    }
}
