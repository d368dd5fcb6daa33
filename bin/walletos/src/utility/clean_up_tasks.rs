use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;
use tracing::{debug, error, info};
use walletos_core::app_state::AppState;
use walletos_core::repositories::friend_repository::InviteRepository;
use walletos_core::repositories::magic_link_repository::MagicLinkRepository;
use walletos_core::repositories::session_repository::SessionRepository;

const DAILY_CLEANUP_INTERVAL: Duration = Duration::from_secs(60 * 60 * 24);

pub fn spawn_background_tasks(state: Arc<AppState>) {
    let state_clone = state.clone();

    // Purge expired sessions (daily)
    tokio::spawn(async move {
        info!("Starting daily expired sessions cleanup task");
        cleanup_expired_sessions(state_clone).await;
    });

    // Purge consumed/expired magic links (daily)
    let state_clone = state.clone();
    tokio::spawn(async move {
        info!("Starting daily stale magic links cleanup task");
        cleanup_stale_magic_links(state_clone).await;
    });

    // Purge consumed/expired friend invites (daily)
    let state_clone = state.clone();
    tokio::spawn(async move {
        info!("Starting daily stale invites cleanup task");
        cleanup_stale_invites(state_clone).await;
    });

    info!("Background maintenance tasks spawned");
}

async fn cleanup_expired_sessions(state: Arc<AppState>) {
    let mut interval = interval(DAILY_CLEANUP_INTERVAL);
    interval.tick().await;

    loop {
        interval.tick().await;

        let Ok(mut conn) = state.db.get() else {
            error!("Session cleanup: DB connection failed");
            continue;
        };

        match SessionRepository::delete_expired(&mut conn) {
            Ok(0) => debug!("No expired sessions"),
            Ok(n) => info!("Removed {} expired sessions", n),
            Err(e) => error!("Session cleanup failed: {}", e),
        }
    }
}

async fn cleanup_stale_magic_links(state: Arc<AppState>) {
    let mut interval = interval(DAILY_CLEANUP_INTERVAL);
    interval.tick().await;

    loop {
        interval.tick().await;

        let Ok(mut conn) = state.db.get() else {
            error!("Magic link cleanup: DB connection failed");
            continue;
        };

        match MagicLinkRepository::delete_stale(&mut conn) {
            Ok(0) => debug!("No stale magic links"),
            Ok(n) => info!("Removed {} stale magic links", n),
            Err(e) => error!("Magic link cleanup failed: {}", e),
        }
    }
}

async fn cleanup_stale_invites(state: Arc<AppState>) {
    let mut interval = interval(DAILY_CLEANUP_INTERVAL);
    interval.tick().await;

    loop {
        interval.tick().await;

        let Ok(mut conn) = state.db.get() else {
            error!("Invite cleanup: DB connection failed");
            continue;
        };

        match InviteRepository::delete_stale(&mut conn) {
            Ok(0) => debug!("No stale invites"),
            Ok(n) => info!("Removed {} stale invites", n),
            Err(e) => error!("Invite cleanup failed: {}", e),
        }
    }
}
