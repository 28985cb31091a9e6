use std::time::Instant;

use anyhow::Context;
use serde::de::DeserializeOwned;
use tracing::log;

use crate::{LogResult, CONFIG};

pub fn get_league_matches_url(season_id: i64) -> String {
    format!("{}/league-matches?key={}&season_id={season_id}", CONFIG.api_url, CONFIG.api_key)
}

pub fn get_league_players_url(season_id: i64) -> String {
    format!("{}/league-players?key={}&season_id={season_id}", CONFIG.api_url, CONFIG.api_key)
}

pub fn get_player_stats_url(player_id: i64) -> String {
    format!("{}/player-stats?key={}&player_id={player_id}", CONFIG.api_url, CONFIG.api_key)
}

pub fn get_team_url(team_id: i64) -> String {
    format!("{}/team?key={}&team_id={team_id}", CONFIG.api_url, CONFIG.api_key)
}

pub async fn get_call<T: DeserializeOwned>(url: &str) -> Option<T> {
    let before = Instant::now();
    if let Some(rsp) = reqwest::get(url).await.ok_log("[API] Call failed") {
        let res = rsp.json().await.ok_log("[API] Parse failed");
        log::info!("[REST] Call {url} {:.2?}", before.elapsed());
        res
    } else {
        None
    }
}

// Used for the one fetch that is fatal to the current view: the match list.
pub async fn get_required<T: DeserializeOwned>(url: &str) -> anyhow::Result<T> {
    let before = Instant::now();
    let rsp = reqwest::get(url).await
        .with_context(|| format!("call failed {url}"))?
        .error_for_status()
        .with_context(|| format!("bad status {url}"))?;
    let res = rsp.json().await
        .with_context(|| format!("parse failed {url}"))?;
    log::info!("[REST] Call {url} {:.2?}", before.elapsed());
    Ok(res)
}
