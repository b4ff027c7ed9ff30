use std::process::{Command, Child};
use std::time::Duration;

use assert_cmd::prelude::CommandCargoExt;
use nba_scraper_rs::config_handler::Config;
use reqwest::Response;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Envelope<T> {
    pub records: Vec<T>,
    pub record_count: usize,
}

pub struct NbaServer {
    port: u16,
    child_process: Option<Child>,
}

impl Drop for NbaServer {
    fn drop(&mut self) {
        if let Some(child) = self.child_process.as_mut() {
            child.kill().expect("Should kill");
        }
    }
}

impl NbaServer {
    pub fn new(port: u16) -> NbaServer {
        NbaServer { port, child_process: None }
    }

    pub async fn start(&mut self, path: &str, external_url: &str) {
        let config = Config {
            port: self.port,
            source_url: external_url.to_string(),
            ..Default::default()
        };

        let config_str = serde_json::to_string(&config).unwrap();
        let config_path = format!("{path}/config.json");
        std::fs::write(config_path.clone(), config_str).unwrap();
        let child_process = Command::cargo_bin("nba-scraper-rs")
            .unwrap()
            .env("CONFIG_PATH", config_path)
            .env_remove("PORT")
            .spawn()
            .expect("should start");

        self.child_process = Some(child_process);
        self.wait_until_up().await;
    }

    async fn wait_until_up(&self) {
        for _ in 0..100 {
            if reqwest::get(self.url("/")).await.is_ok() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        panic!("server on port {} never came up", self.port);
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://localhost:{}{}", self.port, path)
    }

    pub async fn get(&self, path: &str) -> Result<Response, reqwest::Error> {
        reqwest::get(self.url(path)).await
    }
}
