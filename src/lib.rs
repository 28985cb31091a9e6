#![allow(non_snake_case)]

use std::fmt::Display;

use config_handler::Config;
use lazy_static::lazy_static;
use tracing::log;

pub mod competition_service;
pub mod config_handler;
pub mod detail_session;
pub mod match_details_service;
pub mod match_list_service;
pub mod models;
pub mod models_external;
pub mod player_stats_service;
pub mod rest_client;
pub mod roster_service;
pub mod squad_service;
pub mod team_service;

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
