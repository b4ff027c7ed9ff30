use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;

use crate::models::SeasonRange;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default="default_port")]
    pub port: u16,

    #[serde(default="default_source_url")]
    pub source_url: String,

    #[serde(default="default_current_season")]
    pub current_season: i32,

    #[serde(default="default_pre_era_season")]
    pub pre_era_season: i32,
}

fn default_port() -> u16 {
    8000
}

fn default_source_url() -> String {
    "https://www.basketball-reference.com".to_string()
}

fn default_current_season() -> i32 {
    SeasonRange::THREE_POINT_ERA.current
}

fn default_pre_era_season() -> i32 {
    SeasonRange::THREE_POINT_ERA.pre_era
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: default_port(),
            source_url: default_source_url(),
            current_season: default_current_season(),
            pre_era_season: default_pre_era_season(),
        }
    }
}

impl Config {
    pub fn season_range(&self) -> SeasonRange {
        SeasonRange { current: self.current_season, pre_era: self.pre_era_season }
    }
}

pub fn read_config(path: &str) -> anyhow::Result<Config> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Unable to read {path}"))?;
    serde_json::from_str(&data)
        .with_context(|| format!("Could not parse JSON at {path}"))
}

pub fn get_config() -> Config {
    let path = std::env::var("CONFIG_PATH").ok()
        .unwrap_or_else(|| "./deployment/config.json".to_string());
    let mut result = read_config(&path).unwrap_or_else(|e| {
        println!("[CONFIG] {e:#}, using defaults");
        Config::default()
    });
    if let Some(port) = std::env::var("PORT").ok().and_then(|e| e.parse().ok()) {
        result.port = port;
        println!("[CONFIG] PORT {}", result.port);
    }
    println!("[CONFIG] {:?}", result);
    result
}
