use std::{
    collections::{HashMap, HashSet},
    net::SocketAddr,
    sync::Arc,
    time::Duration,
};

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::{sync::RwLock, task::JoinHandle};

pub const API_KEY: &str = "TEST_KEY";

#[derive(Deserialize)]
struct SeasonQuery {
    key: String,
    season_id: i64,
}

#[derive(Deserialize)]
struct PlayerQuery {
    key: String,
    player_id: i64,
}

#[derive(Deserialize)]
struct TeamQuery {
    key: String,
    team_id: i64,
}

#[derive(Default)]
pub struct AppState {
    pub matches: HashMap<i64, Value>,
    pub rosters: HashMap<i64, Value>,
    pub player_stats: HashMap<i64, Value>,
    pub failing_players: HashSet<i64>,
    pub teams: HashMap<i64, Value>,
}

type SafeAppState = Arc<RwLock<AppState>>;

pub struct ExternalServer {
    port: u16,
    handles: Vec<JoinHandle<()>>,
}

impl Drop for ExternalServer {
    fn drop(&mut self) {
        for e in &self.handles {
            e.abort();
        }
    }
}

impl ExternalServer {
    pub fn new(port: u16) -> ExternalServer {
        ExternalServer { port, handles: vec![] }
    }

    pub async fn start(&mut self) -> SafeAppState {
        let state = Arc::new(RwLock::new(AppState::default()));
        let external_mock = {
            let port = self.port;
            let state = state.clone();
            tokio::spawn(async move { ExternalServer::serve_external_data(state, port).await })
        };
        self.handles.push(external_mock);

        tokio::time::sleep(Duration::from_secs(1)).await; // wait for mock to start

        state
    }

    pub fn get_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }

    async fn serve_external_data(state: SafeAppState, port: u16) {
        let addr = SocketAddr::from(([127, 0, 0, 1], port));
        let app = Router::new()
            .route("/league-matches", get(ExternalServer::get_matches))
            .route("/league-players", get(ExternalServer::get_players))
            .route("/player-stats", get(ExternalServer::get_player_stats))
            .route("/team", get(ExternalServer::get_team))
            .with_state(state);

        axum::Server::bind(&addr)
            .serve(app.into_make_service())
            .await
            .unwrap();
    }

    async fn get_matches(State(state): State<SafeAppState>, Query(query): Query<SeasonQuery>) -> Response {
        if query.key != API_KEY {
            return StatusCode::UNAUTHORIZED.into_response();
        }
        ExternalServer::lookup(state.read().await.matches.get(&query.season_id))
    }

    async fn get_players(State(state): State<SafeAppState>, Query(query): Query<SeasonQuery>) -> Response {
        if query.key != API_KEY {
            return StatusCode::UNAUTHORIZED.into_response();
        }
        ExternalServer::lookup(state.read().await.rosters.get(&query.season_id))
    }

    async fn get_player_stats(State(state): State<SafeAppState>, Query(query): Query<PlayerQuery>) -> Response {
        if query.key != API_KEY {
            return StatusCode::UNAUTHORIZED.into_response();
        }
        let state = state.read().await;
        if state.failing_players.contains(&query.player_id) {
            // non-JSON body so the client sees a genuine parse failure too
            return (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response();
        }
        ExternalServer::lookup(state.player_stats.get(&query.player_id))
    }

    async fn get_team(State(state): State<SafeAppState>, Query(query): Query<TeamQuery>) -> Response {
        if query.key != API_KEY {
            return StatusCode::UNAUTHORIZED.into_response();
        }
        ExternalServer::lookup(state.read().await.teams.get(&query.team_id))
    }

    fn lookup(value: Option<&Value>) -> Response {
        match value {
            Some(v) => Json(v.clone()).into_response(),
            None => (StatusCode::NOT_FOUND, Json(json!({"error": "not found"}))).into_response(),
        }
    }
}
