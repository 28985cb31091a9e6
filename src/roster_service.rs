use std::collections::HashSet;

use futures::future::join_all;
use tracing::log;

use crate::models::RosterEntry;
use crate::models_external::player::RawRosterPlayer;
use crate::models_external::ApiRsp;
use crate::rest_client;

pub struct RosterService;

impl RosterService {
    // Pulls the full league roster for every given season id. A failed season
    // fetch contributes nothing, entries keep season order.
    pub async fn fetch_league_roster(season_ids: &[i64]) -> Vec<RosterEntry> {
        let fetches = season_ids.iter().map(|season_id| async move {
            let url = rest_client::get_league_players_url(*season_id);
            let rsp: Option<ApiRsp<Vec<RawRosterPlayer>>> = rest_client::get_call(&url).await;
            rsp.and_then(|e| e.data).unwrap_or_default()
        });
        let entries: Vec<RosterEntry> = join_all(fetches)
            .await
            .into_iter()
            .flatten()
            .map(RosterEntry::from)
            .collect();
        log::info!("[ROSTER] {} entries over {} seasons", entries.len(), season_ids.len());
        entries
    }

    // Unique by player id, first occurrence wins. Entries without an
    // affiliation are excluded, not an error.
    pub fn dedupe(entries: &[RosterEntry], team_id: i64) -> Vec<RosterEntry> {
        let mut seen = HashSet::new();
        entries
            .iter()
            .filter(|e| e.team_id == Some(team_id))
            .filter(|e| seen.insert(e.player_id))
            .cloned()
            .collect()
    }
}
