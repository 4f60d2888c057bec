//! # Event Handler
//!
//! Handles async event results from background tasks, updating application
//! state accordingly. Each fetch result carries the sequence number its task
//! was issued; [`FetchSlot::resolve`] silently drops results whose sequence
//! was superseded while the request was in flight.
//!
//! [`FetchSlot::resolve`]: crate::app::state::FetchSlot::resolve

use crate::app::{App, AppEvent};

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    /// Handle async event results
    ///
    /// Acquires the write lock per-event for minimal duration to prevent UI freezing.
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::WeaponsPage { seq, result } => {
                let mut state = self.state.write();
                if !state.weapons.slot.resolve(seq, result) {
                    tracing::debug!(seq = seq, "Discarded stale weapons page");
                }
            }
            AppEvent::WeaponsByBuild { seq, result } => {
                let mut state = self.state.write();
                if !state.weapon_build.resolve(seq, result) {
                    tracing::debug!(seq = seq, "Discarded stale build recommendations");
                }
            }
            AppEvent::WeaponCategories { seq, result } => {
                let mut state = self.state.write();
                state.weapon_categories.resolve(seq, result);
            }
            AppEvent::ArmorsPage { seq, result } => {
                let mut state = self.state.write();
                if !state.armors.slot.resolve(seq, result) {
                    tracing::debug!(seq = seq, "Discarded stale armors page");
                }
            }
            AppEvent::BossesPage { seq, result } => {
                let mut state = self.state.write();
                if !state.bosses.slot.resolve(seq, result) {
                    tracing::debug!(seq = seq, "Discarded stale bosses page");
                }
            }
            AppEvent::ClassesPage { seq, result } => {
                let mut state = self.state.write();
                if !state.classes.slot.resolve(seq, result) {
                    tracing::debug!(seq = seq, "Discarded stale classes page");
                }
            }
            AppEvent::DashboardLoaded { seq, result } => {
                let mut state = self.state.write();
                if !state.dashboard.resolve(seq, result) {
                    tracing::debug!(seq = seq, "Discarded stale dashboard refresh");
                }
            }
            AppEvent::HealthChecked(result) => {
                let mut state = self.state.write();
                state.backend_healthy = Some(result.is_ok());
            }
        }
    }
}
