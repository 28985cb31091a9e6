use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Match, StringOrNum};

// Raw match record as served by the league-matches endpoint. Older API
// versions name the competition field league_id.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RawMatch {
    pub id: StringOrNum,
    pub homeID: StringOrNum,
    pub awayID: StringOrNum,
    #[serde(default)]
    pub home_name: String,
    #[serde(default)]
    pub away_name: String,
    pub date_unix: i64,
    #[serde(default, alias = "league_id")]
    pub competition_id: Option<StringOrNum>,
}

impl From<RawMatch> for Match {
    fn from(raw: RawMatch) -> Self {
        Match {
            id: raw.id.to_num(),
            home_id: raw.homeID.to_num(),
            away_id: raw.awayID.to_num(),
            home_name: raw.home_name,
            away_name: raw.away_name,
            kickoff: Utc
                .timestamp_opt(raw.date_unix, 0)
                .single()
                .unwrap_or_default(),
            competition_id: raw.competition_id.map(|e| e.to_num()),
        }
    }
}
