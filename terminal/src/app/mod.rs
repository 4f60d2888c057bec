//! # Application Orchestrator
//!
//! The main [`App`] struct coordinates the UI rendering layer, async fetch
//! tasks, and shared application state.
//!
//! ## Architecture
//!
//! The application follows an event-driven architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  App (orchestrator)                                         │
//! │  - on_tick() - drains event channel every frame             │
//! │  - handle_*() - user action wrappers, trigger fetches       │
//! │  State: Arc<RwLock<AppState>> - locks held briefly          │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Async Tasks (Tokio runtime)                   │
//! │  - tasks::explorer - per-resource list fetches             │
//! │  - tasks::dashboard - combined dashboard load, health      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Staleness Guard
//!
//! Every fetch target is a [`FetchSlot`](state::FetchSlot) with a monotonic
//! sequence. Tasks carry the sequence they were issued; results whose
//! sequence is no longer current are discarded. Rapid page or filter
//! changes therefore always settle on the most recent request, regardless
//! of network ordering.
//!
//! ## State Management Pattern
//!
//! The application uses `Arc<RwLock<AppState>>` for thread-safe state.
//! Locks are held for minimal duration to prevent UI freezing: tasks
//! snapshot request parameters under a brief write lock, the UI clones
//! what it renders under a brief read lock.

mod event_handler;
mod events;
mod handlers;
mod state;
mod tasks;

pub use events::AppEvent;
pub use state::*;

use crate::core::config::Config;
use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;

/// How often the status bar health probe runs.
const HEALTH_CHECK_INTERVAL: Duration = Duration::from_secs(30);

/// Main application orchestrator that coordinates UI rendering, async tasks,
/// and state management.
pub struct App {
    /// Thread-safe shared application state.
    ///
    /// - Use `read()` for rendering (shared lock, multiple readers)
    /// - Use `write()` for updates (exclusive lock, single writer)
    /// - Hold locks for minimal duration to prevent UI freezing
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for async task results.
    ///
    /// Polled in `on_tick()` using `try_recv()` (non-blocking).
    pub event_rx: Receiver<AppEvent>,

    /// Channel sender cloned into async tasks (internal use).
    event_tx: Sender<AppEvent>,
}

impl App {
    /// Create a new application instance and start the initial loads.
    ///
    /// The dashboard refresh and first health probe are kicked off
    /// immediately; the explorer screens load lazily on first visit.
    pub fn new(config: &Config) -> Self {
        let api_client = Arc::new(crate::services::api::ApiClient::new(config));

        let state = AppState {
            current_screen: Screen::Dashboard,
            weapons: ExplorerState::default(),
            weapon_build_filter: None,
            weapon_build: FetchSlot::default(),
            weapon_categories: FetchSlot::default(),
            armors: ExplorerState::default(),
            bosses: ExplorerState::default(),
            classes: ExplorerState::default(),
            dashboard: FetchSlot::default(),
            api_client: Some(api_client),
            backend_healthy: None,
            last_health_check: std::time::Instant::now(),
        };

        let (event_tx, event_rx) = unbounded();

        let app = App {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            event_tx,
        };

        tasks::dashboard::refresh_dashboard(app.state.clone(), app.event_tx.clone());
        tasks::dashboard::check_health(app.state.clone(), app.event_tx.clone());

        tracing::info!("App state initialized - dashboard refresh and health probe started");

        app
    }

    /// Called every frame to process async events and run periodic work.
    ///
    /// Processes all pending events from `event_rx` using `try_recv()`
    /// (non-blocking, multiple events per tick) and re-runs the health
    /// probe on its interval.
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }

        let probe_due = {
            let state = self.state.read();
            state.last_health_check.elapsed() >= HEALTH_CHECK_INTERVAL
        };
        if probe_due {
            {
                let mut state = self.state.write();
                state.last_health_check = std::time::Instant::now();
            }
            tasks::dashboard::check_health(self.state.clone(), self.event_tx.clone());
        }
    }

    /// Handle async event results
    ///
    /// Delegates to the event_handler module for processing.
    fn handle_event(&mut self, event: AppEvent) {
        use event_handler::AppEventHandler;
        self.handle_event_impl(event);
    }

    // ========== GUI Action Methods - Delegating to Handlers ==========

    /// Handle a screen change, loading the target screen on first visit.
    pub fn handle_screen_change(&mut self, screen: Screen) {
        handlers::navigation::handle_screen_change(self.state.clone(), screen);
        self.ensure_screen_loaded(screen);
    }

    /// Navigate to next screen in Tab order
    pub fn next_screen(&mut self) {
        handlers::navigation::next_screen(self.state.clone());
        let screen = self.state.read().current_screen;
        self.ensure_screen_loaded(screen);
    }

    /// Navigate to previous screen in Tab order
    pub fn previous_screen(&mut self) {
        handlers::navigation::previous_screen(self.state.clone());
        let screen = self.state.read().current_screen;
        self.ensure_screen_loaded(screen);
    }

    /// Commit the typed filter on an explorer screen and refetch page one.
    pub fn handle_filter_apply(&mut self, screen: Screen) {
        if handlers::explorer::handle_filter_apply(self.state.clone(), screen) {
            self.fetch_screen(screen);
        }
    }

    /// Clear the filter on an explorer screen and refetch page one.
    pub fn handle_filter_clear(&mut self, screen: Screen) {
        if handlers::explorer::handle_filter_clear(self.state.clone(), screen) {
            self.fetch_screen(screen);
        }
    }

    /// Jump to a one-based page on an explorer screen.
    pub fn handle_page_select(&mut self, screen: Screen, page: u64) {
        if handlers::explorer::handle_page_select(self.state.clone(), screen, page) {
            self.fetch_screen(screen);
        }
    }

    /// Re-run the fetch behind the given screen, unconditionally.
    pub fn handle_refresh(&mut self, screen: Screen) {
        if screen == Screen::Weapons && self.state.read().weapon_build_filter.is_some() {
            tasks::explorer::fetch_weapons_by_build(self.state.clone(), self.event_tx.clone());
            return;
        }
        self.fetch_screen(screen);
    }

    /// Select a weapon build archetype, or `None` for the plain list.
    /// Selecting a build fetches its recommendations; re-selecting the
    /// current build is a no-op.
    pub fn handle_build_select(&mut self, build: Option<shared::BuildType>) {
        {
            let mut state = self.state.write();
            if state.weapon_build_filter == build {
                return;
            }
            state.weapon_build_filter = build;
        }
        if build.is_some() {
            tasks::explorer::fetch_weapons_by_build(self.state.clone(), self.event_tx.clone());
        }
    }

    /// Fetch a screen's data if nothing is loaded and nothing is in flight.
    fn ensure_screen_loaded(&mut self, screen: Screen) {
        let needs_fetch = {
            let state = self.state.read();
            match screen {
                Screen::Dashboard => state.dashboard.data.is_none() && !state.dashboard.loading,
                Screen::Weapons => {
                    state.weapons.slot.data.is_none() && !state.weapons.slot.loading
                }
                Screen::Armors => state.armors.slot.data.is_none() && !state.armors.slot.loading,
                Screen::Bosses => state.bosses.slot.data.is_none() && !state.bosses.slot.loading,
                Screen::Classes => {
                    state.classes.slot.data.is_none() && !state.classes.slot.loading
                }
            }
        };
        if needs_fetch {
            self.fetch_screen(screen);
        }

        // The category readout loads once alongside the first weapons visit.
        if screen == Screen::Weapons {
            let categories_missing = {
                let state = self.state.read();
                state.weapon_categories.data.is_none() && !state.weapon_categories.loading
            };
            if categories_missing {
                tasks::explorer::fetch_weapon_categories(
                    self.state.clone(),
                    self.event_tx.clone(),
                );
            }
        }
    }

    fn fetch_screen(&mut self, screen: Screen) {
        match screen {
            Screen::Dashboard => {
                tasks::dashboard::refresh_dashboard(self.state.clone(), self.event_tx.clone())
            }
            Screen::Weapons => tasks::explorer::fetch_weapons(self.state.clone(), self.event_tx.clone()),
            Screen::Armors => tasks::explorer::fetch_armors(self.state.clone(), self.event_tx.clone()),
            Screen::Bosses => tasks::explorer::fetch_bosses(self.state.clone(), self.event_tx.clone()),
            Screen::Classes => tasks::explorer::fetch_classes(self.state.clone(), self.event_tx.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::event_handler::AppEventHandler;
    use shared::{Page, Weapon};

    fn test_app() -> App {
        App::new(&Config::with_api_url("http://127.0.0.1:1"))
    }

    fn weapon_page(names: &[&str], total: u64) -> Page<Weapon> {
        Page {
            items: names
                .iter()
                .map(|name| {
                    serde_json::from_value(serde_json::json!({ "name": name })).unwrap()
                })
                .collect(),
            total,
            skip: 0,
            limit: 20,
        }
    }

    // ========== Screen Navigation Tests ==========

    #[test]
    fn initial_screen_is_dashboard() {
        let app = test_app();
        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Dashboard);
    }

    #[test]
    fn next_screen_cycles_forward_and_wraps() {
        let mut app = test_app();

        for expected in [
            Screen::Weapons,
            Screen::Armors,
            Screen::Bosses,
            Screen::Classes,
            Screen::Dashboard,
        ] {
            app.next_screen();
            let state = app.state.read();
            assert_eq!(state.current_screen, expected);
        }
    }

    #[test]
    fn previous_screen_cycles_backward() {
        let mut app = test_app();

        app.previous_screen();
        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Classes);
        drop(state);

        app.previous_screen();
        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Bosses);
    }

    #[test]
    fn next_then_previous_returns_to_original() {
        let mut app = test_app();

        app.next_screen();
        app.previous_screen();

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Dashboard);
    }

    // ========== Event Handling Tests ==========

    #[test]
    fn weapons_page_event_lands_when_sequence_matches() {
        let mut app = test_app();

        let seq = app.state.write().weapons.slot.begin();
        app.handle_event_impl(AppEvent::WeaponsPage {
            seq,
            result: Ok(weapon_page(&["Uchigatana"], 1)),
        });

        let state = app.state.read();
        let page = state.weapons.slot.data.as_ref().unwrap();
        assert_eq!(page.items[0].name, "Uchigatana");
        assert!(!state.weapons.slot.loading);
    }

    #[test]
    fn stale_weapons_page_event_is_discarded() {
        let mut app = test_app();

        let first = app.state.write().weapons.slot.begin();
        let second = app.state.write().weapons.slot.begin();

        // Responses arrive out of order: the newer request lands first.
        app.handle_event_impl(AppEvent::WeaponsPage {
            seq: second,
            result: Ok(weapon_page(&["Moonveil"], 1)),
        });
        app.handle_event_impl(AppEvent::WeaponsPage {
            seq: first,
            result: Ok(weapon_page(&["Dagger"], 1)),
        });

        let state = app.state.read();
        let page = state.weapons.slot.data.as_ref().unwrap();
        assert_eq!(page.items[0].name, "Moonveil");
    }

    #[test]
    fn failed_fetch_keeps_previous_page_and_records_error() {
        let mut app = test_app();

        let seq = app.state.write().weapons.slot.begin();
        app.handle_event_impl(AppEvent::WeaponsPage {
            seq,
            result: Ok(weapon_page(&["Uchigatana"], 1)),
        });

        let seq = app.state.write().weapons.slot.begin();
        app.handle_event_impl(AppEvent::WeaponsPage {
            seq,
            result: Err("Network error: connection refused".to_string()),
        });

        let state = app.state.read();
        assert!(state.weapons.slot.data.is_some());
        assert!(state
            .weapons
            .slot
            .error
            .as_deref()
            .unwrap()
            .contains("connection refused"));
    }

    #[test]
    fn health_event_updates_backend_flag() {
        let mut app = test_app();

        app.handle_event_impl(AppEvent::HealthChecked(Err("down".to_string())));
        assert_eq!(app.state.read().backend_healthy, Some(false));

        app.handle_event_impl(AppEvent::HealthChecked(Ok(
            serde_json::from_value(serde_json::json!({"status": "healthy"})).unwrap(),
        )));
        assert_eq!(app.state.read().backend_healthy, Some(true));
    }

    // ========== Filter / Pagination Wrapper Tests ==========

    #[test]
    fn filter_apply_resets_to_first_page() {
        let mut app = test_app();

        {
            let mut state = app.state.write();
            state.weapons.page.goto_page(5);
            state.weapons.filter_input = "katana".to_string();
        }

        app.handle_filter_apply(Screen::Weapons);

        let state = app.state.read();
        assert_eq!(state.weapons.page.skip, 0);
        assert_eq!(state.weapons.filter.name.as_deref(), Some("katana"));
        // A fresh fetch is in flight for the new filter.
        assert!(state.weapons.slot.loading);
    }

    // ========== Build Picker Tests ==========

    #[test]
    fn build_select_starts_a_recommendation_fetch() {
        let mut app = test_app();

        app.handle_build_select(Some(shared::BuildType::Strength));

        let state = app.state.read();
        assert_eq!(state.weapon_build_filter, Some(shared::BuildType::Strength));
        assert!(state.weapon_build.loading);
    }

    #[test]
    fn reselecting_current_build_does_not_refetch() {
        let mut app = test_app();

        app.handle_build_select(Some(shared::BuildType::Faith));
        {
            let mut state = app.state.write();
            state.weapon_build.resolve(1, Ok(vec![]));
        }

        app.handle_build_select(Some(shared::BuildType::Faith));
        assert!(!app.state.read().weapon_build.loading);
    }

    #[test]
    fn clearing_the_build_returns_to_the_plain_list() {
        let mut app = test_app();

        app.handle_build_select(Some(shared::BuildType::Quality));
        app.handle_build_select(None);

        assert!(app.state.read().weapon_build_filter.is_none());
    }

    #[test]
    fn build_recommendation_event_lands_in_the_build_slot() {
        let mut app = test_app();

        app.handle_build_select(Some(shared::BuildType::Dexterity));
        let seq = app.state.write().weapon_build.begin();
        app.handle_event_impl(AppEvent::WeaponsByBuild {
            seq,
            result: Ok(weapon_page(&["Uchigatana", "Nagakiba"], 2).items),
        });

        let state = app.state.read();
        assert_eq!(state.weapon_build.data.as_ref().unwrap().len(), 2);
        assert!(state.weapons.slot.data.is_none(), "list slot untouched");
    }

    #[test]
    fn dashboard_screen_has_no_filter() {
        let mut app = test_app();
        // Must be a no-op rather than a panic.
        app.handle_filter_apply(Screen::Dashboard);
        app.handle_filter_clear(Screen::Dashboard);
        app.handle_page_select(Screen::Dashboard, 3);
    }
}
