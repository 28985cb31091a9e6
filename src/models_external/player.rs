use serde::{Deserialize, Serialize};

use crate::models::{RosterEntry, StringOrNum};

// Roster record from the league-players endpoint. The club affiliation
// arrives as club_team_id on current API versions and team_id on older ones.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RawRosterPlayer {
    pub id: StringOrNum,
    #[serde(default)]
    pub known_as: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default, alias = "team_id")]
    pub club_team_id: Option<StringOrNum>,
}

impl From<RawRosterPlayer> for RosterEntry {
    fn from(raw: RawRosterPlayer) -> Self {
        RosterEntry {
            player_id: raw.id.to_num(),
            name: raw.known_as.or(raw.full_name).unwrap_or_default(),
            team_id: raw.club_team_id.map(|e| e.to_num()),
        }
    }
}

// One per competition/season the player has records in.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RawSeasonStat {
    #[serde(default)]
    pub competition_id: Option<StringOrNum>,
    #[serde(default)]
    pub yellow_cards_overall: i64,
    #[serde(default)]
    pub red_cards_overall: i64,
    #[serde(default)]
    pub minutes_played_overall: i64,
    #[serde(default)]
    pub appearances_overall: i64,
    #[serde(default)]
    pub goals_overall: i64,
    #[serde(default)]
    pub assists_overall: i64,
    #[serde(default)]
    pub cards_per_90_overall: Option<StringOrNum>,
    #[serde(default)]
    pub min_per_card_overall: Option<StringOrNum>,
}
