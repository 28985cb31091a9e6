use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LeagueSeasons {
    pub season_24_25: i64,
    pub season_25_26: i64,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    pub api_url: String,

    pub api_key: String,

    #[serde(default = "default_roster_cap")]
    pub roster_cap: usize,

    #[serde(default = "default_leagues")]
    pub leagues: HashMap<String, LeagueSeasons>,
}

fn default_roster_cap() -> usize {
    15
}

fn default_leagues() -> HashMap<String, LeagueSeasons> {
    HashMap::from([
        ("Premier League".to_string(), LeagueSeasons { season_24_25: 12325, season_25_26: 15050 }),
        ("Bundesliga".to_string(), LeagueSeasons { season_24_25: 12529, season_25_26: 14968 }),
        ("La Liga".to_string(), LeagueSeasons { season_24_25: 12316, season_25_26: 14956 }),
        ("Ligue 1".to_string(), LeagueSeasons { season_24_25: 12337, season_25_26: 14932 }),
        ("Serie A".to_string(), LeagueSeasons { season_24_25: 12530, season_25_26: 15068 }),
    ])
}

impl Config {
    // Season ids whose rosters make up the squads for a match in the given
    // competition. An id outside the configured leagues falls back to its own
    // season only.
    pub fn roster_seasons(&self, competition_id: Option<i64>) -> Vec<i64> {
        let Some(id) = competition_id else {
            return vec![];
        };
        for seasons in self.leagues.values() {
            if seasons.season_24_25 == id || seasons.season_25_26 == id {
                return vec![seasons.season_24_25, seasons.season_25_26];
            }
        }
        vec![id]
    }
}

pub fn get_config() -> Config {
    let path = std::env::var("CONFIG_PATH").ok()
        .unwrap_or_else(|| "./deployment/config.json".to_string());
    let data = fs::read_to_string(path.clone())
        .expect("Unable to read file");
    let result: Config = serde_json::from_str(&data)
        .unwrap_or_else(|_| panic!("{}", &format!("Could not parse JSON at {path}!")));
    println!("[CONFIG] {:?}", result);
    result
}

#[cfg(test)]
mod tests {
    use super::{default_leagues, Config};

    fn get_config() -> Config {
        Config {
            api_url: "http://localhost".to_string(),
            api_key: "key".to_string(),
            roster_cap: 15,
            leagues: default_leagues(),
        }
    }

    #[test]
    fn roster_seasons_covers_both_seasons_of_the_league() {
        let config = get_config();
        assert_eq!(config.roster_seasons(Some(15068)), vec![12530, 15068]);
        assert_eq!(config.roster_seasons(Some(12530)), vec![12530, 15068]);
    }

    #[test]
    fn unknown_competition_falls_back_to_its_own_season() {
        let config = get_config();
        assert_eq!(config.roster_seasons(Some(999)), vec![999]);
    }

    #[test]
    fn missing_competition_has_no_seasons() {
        let config = get_config();
        assert!(config.roster_seasons(None).is_empty());
    }
}
