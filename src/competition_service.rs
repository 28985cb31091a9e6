use std::collections::HashMap;

use lazy_static::lazy_static;

lazy_static! {
    // Season id -> competition name for the top 5 leagues' principal and
    // secondary competitions. Ids are season-specific.
    static ref COMPETITION_NAMES: HashMap<i64, &'static str> = HashMap::from([
        (12325, "Premier League"),
        (15050, "Premier League"),
        (12529, "Bundesliga"),
        (14968, "Bundesliga"),
        (12316, "La Liga"),
        (14956, "La Liga"),
        (12337, "Ligue 1"),
        (14932, "Ligue 1"),
        (12530, "Serie A"),
        (15068, "Serie A"),
        (12331, "UEFA Champions League"),
        (12333, "UEFA Europa League"),
        (12326, "FA Cup"),
        (12327, "EFL Cup"),
        (12315, "Copa del Rey"),
        (12528, "DFB-Pokal"),
        (12579, "Coppa Italia"),
        (12338, "Coupe de France"),
    ]);
}

// Display precedence for grouped fixtures, most prominent first.
const GROUP_PRIORITY: [&str; 13] = [
    "UEFA Champions League",
    "UEFA Europa League",
    "Premier League",
    "La Liga",
    "Serie A",
    "Bundesliga",
    "Ligue 1",
    "FA Cup",
    "EFL Cup",
    "Copa del Rey",
    "DFB-Pokal",
    "Coppa Italia",
    "Coupe de France",
];

pub struct CompetitionService;

impl CompetitionService {
    pub fn resolve(id: Option<i64>) -> String {
        match id {
            Some(id) => COMPETITION_NAMES
                .get(&id)
                .map(|e| e.to_string())
                .unwrap_or_else(|| format!("Unknown Competition (ID: {id})")),
            None => "Unknown Competition".to_string(),
        }
    }

    pub fn priority(name: &str) -> usize {
        GROUP_PRIORITY
            .iter()
            .position(|e| *e == name)
            .unwrap_or(GROUP_PRIORITY.len())
    }
}
