use tracing::log;

use crate::competition_service::CompetitionService;
use crate::models::{Match, MatchDetail};
use crate::roster_service::RosterService;
use crate::squad_service::SquadService;
use crate::team_service::TeamService;
use crate::CONFIG;

pub struct MatchDetailsService;

impl MatchDetailsService {
    // Always produces a detail view. An unfetchable roster leaves both sides
    // empty, the caller renders that as "no players found".
    pub async fn assemble(m: &Match) -> MatchDetail {
        let competition_name = CompetitionService::resolve(m.competition_id);
        let season_ids = CONFIG.roster_seasons(m.competition_id);

        let entries = RosterService::fetch_league_roster(&season_ids).await;
        let home_roster = RosterService::dedupe(&entries, m.home_id);
        let away_roster = RosterService::dedupe(&entries, m.away_id);
        log::info!(
            "[DETAILS] {} vs {}: {}/{} players in {competition_name}",
            m.home_name, m.away_name, home_roster.len(), away_roster.len()
        );

        let (home_players, away_players, home_team, away_team) = tokio::join!(
            SquadService::aggregate(home_roster, CONFIG.roster_cap),
            SquadService::aggregate(away_roster, CONFIG.roster_cap),
            TeamService::get(m.home_id),
            TeamService::get(m.away_id),
        );

        MatchDetail {
            competition_name,
            home_players,
            away_players,
            home_team,
            away_team,
        }
    }
}
