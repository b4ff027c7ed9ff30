use std::fmt::Display;

use config_handler::Config;
use lazy_static::lazy_static;
use tracing::log;

pub mod api;
pub mod cells;
pub mod config_handler;
pub mod error;
pub mod game_service;
pub mod models;
pub mod rest_client;
pub mod stats_service;
pub mod table_extractor;

lazy_static! {
    pub static ref CONFIG: Config = config_handler::get_config();
}

pub trait LogResult<T, E: Display> {
    fn ok_log(self, msg: &str) -> Option<T>;
}

impl<T, E: Display> LogResult<T, E> for Result<T, E> {
    fn ok_log(self, msg: &str) -> Option<T> {
        match self {
            Ok(o) => Some(o),
            Err(e) => {
                log::error!("{}: {}", msg, e);
                None
            }
        }
    }
}
