use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::competition_service::CompetitionService;
use crate::models::{CompetitionGroup, Match};
use crate::models_external::fixture::RawMatch;
use crate::models_external::ApiRsp;
use crate::rest_client;

pub struct MatchListService;

impl MatchListService {
    // The only fatal fetch: a failure here must surface to the user.
    pub async fn fetch_upcoming(season_id: i64, max_time: DateTime<Utc>) -> anyhow::Result<Vec<Match>> {
        let url = rest_client::get_league_matches_url(season_id);
        let rsp: ApiRsp<Vec<RawMatch>> = rest_client::get_required(&url).await?;
        let mut matches: Vec<Match> = rsp
            .data
            .unwrap_or_default()
            .into_iter()
            .map(Match::from)
            .filter(|e| e.kickoff <= max_time)
            .collect();
        matches.sort_by_key(|e| e.kickoff);
        Ok(matches)
    }

    pub fn group(matches: Vec<Match>) -> Vec<CompetitionGroup> {
        let mut by_name: HashMap<String, Vec<Match>> = HashMap::new();
        for m in matches {
            by_name
                .entry(CompetitionService::resolve(m.competition_id))
                .or_insert_with(Vec::new)
                .push(m);
        }
        let mut groups: Vec<CompetitionGroup> = by_name
            .into_iter()
            .map(|(name, mut matches)| {
                matches.sort_by_key(|e| e.kickoff);
                CompetitionGroup { name, matches }
            })
            .collect();
        groups.sort_by(|a, b| {
            CompetitionService::priority(&a.name)
                .cmp(&CompetitionService::priority(&b.name))
                .then_with(|| a.name.cmp(&b.name))
        });
        groups
    }
}
