use serde::{Deserialize, Serialize};

use crate::models::{StringOrNum, TeamMeta};

// Venue/founding metadata from the team endpoint, passed through untouched.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RawTeam {
    #[serde(default, alias = "stadium_name")]
    pub venue: Option<String>,
    #[serde(default)]
    pub founded: Option<StringOrNum>,
    #[serde(default)]
    pub country: Option<String>,
}

impl From<RawTeam> for TeamMeta {
    fn from(raw: RawTeam) -> Self {
        TeamMeta {
            venue: raw.venue,
            founded: raw.founded.map(|e| e.to_str()),
            country: raw.country,
        }
    }
}
