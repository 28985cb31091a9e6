use std::sync::Arc;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::log;

use crate::match_details_service::MatchDetailsService;
use crate::models::{Match, MatchDetail};

pub type SafeDetailSession = Arc<RwLock<DetailSession>>;

#[derive(Debug, Clone, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Loading,
    Loaded(MatchDetail),
    Failed,
}

// One detail view at a time. Selecting a new match bumps the token, so a
// previously spawned load that settles late finds its token stale and its
// result is dropped instead of overwriting the current selection.
#[derive(Default)]
pub struct DetailSession {
    token: u64,
    state: SessionState,
}

impl DetailSession {
    pub fn new() -> SafeDetailSession {
        Arc::new(RwLock::new(DetailSession::default()))
    }

    pub fn begin(&mut self) -> u64 {
        self.token += 1;
        self.state = SessionState::Loading;
        self.token
    }

    pub fn complete(&mut self, token: u64, detail: MatchDetail) -> bool {
        if !self.accepts(token) {
            log::info!("[SESSION] Dropping stale result for token {token}");
            return false;
        }
        self.state = SessionState::Loaded(detail);
        true
    }

    pub fn fail(&mut self, token: u64) -> bool {
        if !self.accepts(token) {
            log::info!("[SESSION] Dropping stale failure for token {token}");
            return false;
        }
        self.state = SessionState::Failed;
        true
    }

    pub fn close(&mut self) {
        self.state = SessionState::Idle;
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    fn accepts(&self, token: u64) -> bool {
        token == self.token && matches!(self.state, SessionState::Loading)
    }
}

pub async fn spawn_load(session: SafeDetailSession, m: Match) -> JoinHandle<()> {
    let token = session.write().await.begin();
    tokio::spawn(async move {
        let detail = MatchDetailsService::assemble(&m).await;
        session.write().await.complete(token, detail);
    })
}
