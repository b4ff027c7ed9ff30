use std::net::SocketAddr;
use std::time::Duration;

use axum::{Router, extract::Path, response::IntoResponse, body::StreamBody, routing::get};
use reqwest::StatusCode;
use tokio::task::JoinHandle;
use tokio_util::io::ReaderStream;

/// Stands in for basketball-reference, serving the pages under `tests/integration/external`.
pub struct ExternalServer {
    port: u16,
    handles: Vec<JoinHandle<()>>,
}

impl Drop for ExternalServer {
    fn drop(&mut self) {
        for e in &self.handles {
            e.abort();
        }
    }
}

impl ExternalServer {
    pub fn new(port: u16) -> ExternalServer {
        ExternalServer { port, handles: vec![] }
    }

    pub async fn start(&mut self) {
        let port = self.port;
        self.handles.push(tokio::spawn(async move { ExternalServer::serve_external_data(port).await }));

        tokio::time::sleep(Duration::from_millis(500)).await; // wait for mock to start
    }

    pub fn get_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }

    async fn serve_external_data(port: u16) {
        let addr = SocketAddr::from(([127, 0, 0, 1], port));
        let app = Router::new()
            .route("/leagues/:file", get(ExternalServer::get_league_file))
            .route("/teams/:team/:file", get(ExternalServer::get_team_file));

        axum::Server::bind(&addr)
            .serve(app.into_make_service())
            .await
            .unwrap();
    }

    async fn get_league_file(Path(file): Path<String>) -> impl IntoResponse {
        ExternalServer::get_file_from(format!("./tests/integration/external/leagues/{}", file)).await
    }

    async fn get_team_file(Path((team, file)): Path<(String, String)>) -> impl IntoResponse {
        ExternalServer::get_file_from(format!("./tests/integration/external/teams/{}/{}", team, file)).await
    }

    async fn get_file_from(path: String) -> impl IntoResponse {
        let file = match tokio::fs::File::open(path).await {
            Ok(file) => file,
            Err(err) => return Err((StatusCode::NOT_FOUND, format!("File not found: {}", err))),
        };
        let stream = ReaderStream::new(file);
        let body = StreamBody::new(stream);
        Ok(body)
    }
}
