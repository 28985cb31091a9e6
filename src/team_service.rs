use crate::models::TeamMeta;
use crate::models_external::team::RawTeam;
use crate::models_external::ApiRsp;
use crate::rest_client;

pub struct TeamService;

impl TeamService {
    pub async fn get(team_id: i64) -> Option<TeamMeta> {
        let url = rest_client::get_team_url(team_id);
        let rsp: Option<ApiRsp<Vec<RawTeam>>> = rest_client::get_call(&url).await;
        rsp.and_then(|e| e.data)
            .and_then(|teams| teams.into_iter().next())
            .map(TeamMeta::from)
    }
}
