use serde::{Deserialize, Serialize};

pub mod fixture;
pub mod player;
pub mod team;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiRsp<T> {
    #[serde(default)]
    pub data: Option<T>,
}
