use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum StringOrNum {
    String(String),
    Int(i64),
    Float(f64),
}

impl StringOrNum {
    pub fn to_num(&self) -> i64 {
        match self {
            StringOrNum::String(str) => str.parse::<i64>().unwrap_or(0),
            StringOrNum::Int(n) => *n,
            StringOrNum::Float(f) => *f as i64,
        }
    }

    pub fn to_f64(&self) -> f64 {
        match self {
            StringOrNum::String(str) => str.parse::<f64>().unwrap_or(0.0),
            StringOrNum::Int(n) => *n as f64,
            StringOrNum::Float(f) => *f,
        }
    }

    pub fn to_str(&self) -> String {
        match self {
            StringOrNum::String(str) => str.to_owned(),
            StringOrNum::Int(n) => n.to_string(),
            StringOrNum::Float(f) => f.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Match {
    pub id: i64,
    pub home_id: i64,
    pub away_id: i64,
    pub home_name: String,
    pub away_name: String,
    pub kickoff: DateTime<Utc>,
    pub competition_id: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RosterEntry {
    pub player_id: i64,
    pub name: String,
    pub team_id: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BestStat {
    pub competition_id: Option<i64>,
    pub yellow_cards: i64,
    pub red_cards: i64,
    pub minutes_played: i64,
    pub appearances: i64,
    pub goals: i64,
    pub assists: i64,
    pub cards_per_90: String,
    pub min_per_card: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EnrichedPlayer {
    pub entry: RosterEntry,
    pub stats: Option<BestStat>,
}

impl EnrichedPlayer {
    pub fn cards_per_90(&self) -> f64 {
        self.stats
            .as_ref()
            .map(|e| e.cards_per_90.parse::<f64>().unwrap_or(0.0))
            .unwrap_or(0.0)
    }

    pub fn cards_per_90_display(&self) -> &str {
        self.stats
            .as_ref()
            .map(|e| e.cards_per_90.as_str())
            .unwrap_or("0.00")
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TeamMeta {
    pub venue: Option<String>,
    pub founded: Option<String>,
    pub country: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MatchDetail {
    pub competition_name: String,
    pub home_players: Vec<EnrichedPlayer>,
    pub away_players: Vec<EnrichedPlayer>,
    pub home_team: Option<TeamMeta>,
    pub away_team: Option<TeamMeta>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CompetitionGroup {
    pub name: String,
    pub matches: Vec<Match>,
}
