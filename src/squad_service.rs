use std::cmp::Ordering;

use futures::future::join_all;
use tracing::log;

use crate::models::{EnrichedPlayer, RosterEntry};
use crate::player_stats_service::PlayerStatsService;

pub struct SquadService;

impl SquadService {
    // Fan out one stat fetch per player, at most `cap` of them, and fan back
    // in once all have settled. A failing player degrades to a bare entry.
    pub async fn aggregate(roster: Vec<RosterEntry>, cap: usize) -> Vec<EnrichedPlayer> {
        let mut included = roster;
        if included.len() > cap {
            log::info!("[SQUAD] Capping roster {} -> {cap}", included.len());
            included.truncate(cap);
        }
        let fetches = included.iter().map(PlayerStatsService::resolve_best);
        let mut players: Vec<EnrichedPlayer> = join_all(fetches).await;
        SquadService::sort_by_risk(&mut players);
        players
    }

    pub fn sort_by_risk(players: &mut [EnrichedPlayer]) {
        players.sort_by(|a, b| {
            b.cards_per_90()
                .partial_cmp(&a.cards_per_90())
                .unwrap_or(Ordering::Equal)
        });
    }
}
