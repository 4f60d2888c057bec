//! # Explorer Fetch Tasks
//!
//! Async tasks for the four list explorers. All four follow the same shape:
//! snapshot filter and page under a brief write lock, bump the slot sequence,
//! then fetch off-thread and send the result (with its sequence) back over
//! the event channel.

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::core::service::GameDataService;
use crate::utils::runtime::TOKIO_RT;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, warn};

/// Fetch the current weapons page for the committed filter.
pub(crate) fn fetch_weapons(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    // Snapshot request parameters with minimal lock duration
    let (api_client, filter, page, seq) = {
        let mut state = state.write();
        let seq = state.weapons.slot.begin();
        (
            state.api_client.clone(),
            state.weapons.filter.clone(),
            state.weapons.page,
            seq,
        )
    }; // Lock released here

    if let Some(api_client) = api_client {
        TOKIO_RT.spawn(async move {
            let start = std::time::Instant::now();
            let result = api_client.list_weapons(&filter, &page).await;
            log_outcome("weapons", &result.as_ref().map(|p| p.items.len()), start);
            let _ = event_tx.send(AppEvent::WeaponsPage { seq, result }).await;
        });
    }
}

/// Fetch build recommendations for the selected weapon build archetype.
/// Does nothing when no build is selected.
pub(crate) fn fetch_weapons_by_build(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, build, seq) = {
        let mut state = state.write();
        let Some(build) = state.weapon_build_filter else {
            return;
        };
        let seq = state.weapon_build.begin();
        (state.api_client.clone(), build, seq)
    };

    if let Some(api_client) = api_client {
        TOKIO_RT.spawn(async move {
            let start = std::time::Instant::now();
            let result = api_client.weapons_by_build(build).await;
            log_outcome("weapons_by_build", &result.as_ref().map(|w| w.len()), start);
            let _ = event_tx
                .send(AppEvent::WeaponsByBuild { seq, result })
                .await;
        });
    }
}

/// Fetch the distinct weapon category list.
pub(crate) fn fetch_weapon_categories(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, seq) = {
        let mut state = state.write();
        let seq = state.weapon_categories.begin();
        (state.api_client.clone(), seq)
    };

    if let Some(api_client) = api_client {
        TOKIO_RT.spawn(async move {
            let start = std::time::Instant::now();
            let result = api_client.weapon_categories().await;
            log_outcome("weapon_categories", &result.as_ref().map(|c| c.len()), start);
            let _ = event_tx
                .send(AppEvent::WeaponCategories { seq, result })
                .await;
        });
    }
}

/// Fetch the current armors page for the committed filter.
pub(crate) fn fetch_armors(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, filter, page, seq) = {
        let mut state = state.write();
        let seq = state.armors.slot.begin();
        (
            state.api_client.clone(),
            state.armors.filter.clone(),
            state.armors.page,
            seq,
        )
    };

    if let Some(api_client) = api_client {
        TOKIO_RT.spawn(async move {
            let start = std::time::Instant::now();
            let result = api_client.list_armors(&filter, &page).await;
            log_outcome("armors", &result.as_ref().map(|p| p.items.len()), start);
            let _ = event_tx.send(AppEvent::ArmorsPage { seq, result }).await;
        });
    }
}

/// Fetch the current bosses page for the committed filter.
pub(crate) fn fetch_bosses(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, filter, page, seq) = {
        let mut state = state.write();
        let seq = state.bosses.slot.begin();
        (
            state.api_client.clone(),
            state.bosses.filter.clone(),
            state.bosses.page,
            seq,
        )
    };

    if let Some(api_client) = api_client {
        TOKIO_RT.spawn(async move {
            let start = std::time::Instant::now();
            let result = api_client.list_bosses(&filter, &page).await;
            log_outcome("bosses", &result.as_ref().map(|p| p.items.len()), start);
            let _ = event_tx.send(AppEvent::BossesPage { seq, result }).await;
        });
    }
}

/// Fetch the current classes page for the committed filter.
pub(crate) fn fetch_classes(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, filter, page, seq) = {
        let mut state = state.write();
        let seq = state.classes.slot.begin();
        (
            state.api_client.clone(),
            state.classes.filter.clone(),
            state.classes.page,
            seq,
        )
    };

    if let Some(api_client) = api_client {
        TOKIO_RT.spawn(async move {
            let start = std::time::Instant::now();
            let result = api_client.list_classes(&filter, &page).await;
            log_outcome("classes", &result.as_ref().map(|p| p.items.len()), start);
            let _ = event_tx.send(AppEvent::ClassesPage { seq, result }).await;
        });
    }
}

fn log_outcome(resource: &str, result: &Result<usize, &String>, start: std::time::Instant) {
    let duration = start.elapsed();
    match result {
        Ok(count) => debug!(
            resource = resource,
            item_count = count,
            duration_ms = duration.as_millis(),
            "List fetch completed"
        ),
        Err(e) => warn!(
            resource = resource,
            error = %e,
            duration_ms = duration.as_millis(),
            "List fetch failed - keeping last loaded page"
        ),
    }
}
