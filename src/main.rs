use chrono::{Duration, Utc};
use tracing::log;

use card_predictor_rs::detail_session::{self, DetailSession, SessionState};
use card_predictor_rs::match_list_service::MatchListService;
use card_predictor_rs::models::{CompetitionGroup, EnrichedPlayer};
use card_predictor_rs::CONFIG;

#[tokio::main]
async fn main() {
    if std::env::var_os("RUST_LOG").is_none() {
        // Set the RUST_LOG, if it hasn't been explicitly defined
        std::env::set_var("RUST_LOG", "info")
    }

    // Configure a custom event formatter
    let format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_target(false)
        .with_ansi(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .compact();
    tracing_subscriber::fmt()
        .event_format(format)
        .with_max_level(tracing::Level::INFO)
        .init();

    let max_time = Utc::now() + Duration::days(7);
    let mut upcoming = vec![];
    for (league_name, seasons) in &CONFIG.leagues {
        match MatchListService::fetch_upcoming(seasons.season_25_26, max_time).await {
            Ok(matches) => {
                log::info!("[MAIN] {league_name}: {} matches in the next 7 days", matches.len());
                upcoming.extend(matches);
            }
            Err(e) => log::error!("[MAIN] Failed to fetch matches for {league_name}: {e:#}"),
        }
    }

    let groups = MatchListService::group(upcoming);
    print_groups(&groups);

    let Some(selected) = groups.first().and_then(|e| e.matches.first()).cloned() else {
        log::info!("[MAIN] No upcoming matches found");
        return;
    };

    log::info!("[MAIN] Selected {} vs {}", selected.home_name, selected.away_name);
    let session = DetailSession::new();
    let handle = detail_session::spawn_load(session.clone(), selected).await;
    _ = handle.await;

    let guard = session.read().await;
    match guard.state() {
        SessionState::Loaded(detail) => {
            log::info!("[MAIN] {} card risk", detail.competition_name);
            print_side("HOME", &detail.home_players);
            print_side("AWAY", &detail.away_players);
        }
        _ => log::error!("[MAIN] Failed to load match details"),
    }
}

fn print_groups(groups: &[CompetitionGroup]) {
    for group in groups {
        log::info!("[MAIN] {} ({} matches)", group.name, group.matches.len());
        for m in &group.matches {
            log::info!("[MAIN]   {} vs {} at {}", m.home_name, m.away_name, m.kickoff);
        }
    }
}

fn print_side(side: &str, players: &[EnrichedPlayer]) {
    for player in players {
        log::info!(
            "[MAIN] {side} {} cards/90 {}",
            player.entry.name,
            player.cards_per_90_display()
        );
    }
    if players.is_empty() {
        log::info!("[MAIN] {side} no players found");
    }
}
