//! # Dashboard and Health Tasks
//!
//! The dashboard load is all-or-nothing: five requests run concurrently and
//! the first failure fails the whole refresh, leaving the previous dashboard
//! (if any) on screen with an error banner. Partial dashboards would show
//! totals from one snapshot next to charts from another.

use crate::app::events::AppEvent;
use crate::app::state::{AppState, DashboardData};
use crate::core::service::GameDataService;
use crate::utils::runtime::TOKIO_RT;
use async_channel::Sender;
use parking_lot::RwLock;
use shared::{NameFilter, PageRequest};
use std::sync::Arc;
use tracing::{debug, warn};

/// Page size used when pulling the full boss list for tier aggregation.
/// Comfortably above the catalogue size so one request covers everything.
const BOSS_SCAN_LIMIT: u64 = 500;

/// Refresh the dashboard: totals, weapon statistics, and boss aggregations.
pub(crate) fn refresh_dashboard(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, seq) = {
        let mut state = state.write();
        let seq = state.dashboard.begin();
        (state.api_client.clone(), seq)
    };

    if let Some(api_client) = api_client {
        TOKIO_RT.spawn(async move {
            let start = std::time::Instant::now();
            let result = load_dashboard(api_client.as_ref()).await;
            let duration = start.elapsed();

            match &result {
                Ok(data) => debug!(
                    weapon_total = data.weapon_total,
                    boss_total = data.boss_total,
                    duration_ms = duration.as_millis(),
                    "Dashboard refreshed"
                ),
                Err(e) => warn!(
                    error = %e,
                    duration_ms = duration.as_millis(),
                    "Dashboard refresh failed - keeping last loaded dashboard"
                ),
            }

            let _ = event_tx.send(AppEvent::DashboardLoaded { seq, result }).await;
        });
    }
}

/// Run the five dashboard requests concurrently and derive the view model.
///
/// Entity totals come from one-item probe pages; only the envelope `total`
/// is used. Bosses are pulled in full because tier counts and the carousels
/// need every record, not a page.
async fn load_dashboard(client: &impl GameDataService) -> Result<DashboardData, String> {
    let no_filter = NameFilter::default();
    let probe = PageRequest::with_limit(1);
    let boss_scan = PageRequest::with_limit(BOSS_SCAN_LIMIT);

    let (stats, weapons, armors, classes, bosses) = tokio::try_join!(
        client.weapon_statistics(),
        client.list_weapons(&no_filter, &probe),
        client.list_armors(&no_filter, &probe),
        client.list_classes(&no_filter, &probe),
        client.list_bosses(&no_filter, &boss_scan),
    )?;

    Ok(DashboardData::from_parts(
        stats,
        weapons.total,
        armors.total,
        classes.total,
        bosses,
    ))
}

/// Probe backend health for the status bar indicator.
pub(crate) fn check_health(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api_client = {
        let state = state.read();
        state.api_client.clone()
    };

    if let Some(api_client) = api_client {
        TOKIO_RT.spawn(async move {
            let result = api_client.check_health().await;
            if let Err(ref e) = result {
                debug!(error = %e, "Health probe failed");
            }
            let _ = event_tx.send(AppEvent::HealthChecked(result)).await;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use shared::{
        Armor, Boss, BuildType, ClassDef, HealthStatus, Page, Weapon, WeaponComparison,
        WeaponStatistics,
    };

    /// Canned backend where the armor leg can be made to fail.
    struct StubService {
        fail_armors: bool,
    }

    fn page<T>(total: u64) -> Page<T> {
        Page {
            items: vec![],
            total,
            skip: 0,
            limit: 1,
        }
    }

    #[async_trait]
    impl GameDataService for StubService {
        async fn list_weapons(
            &self,
            _filter: &NameFilter,
            _page: &PageRequest,
        ) -> Result<Page<Weapon>, String> {
            Ok(page(300))
        }

        async fn list_armors(
            &self,
            _filter: &NameFilter,
            _page: &PageRequest,
        ) -> Result<Page<Armor>, String> {
            if self.fail_armors {
                Err("Request failed: 500 Internal Server Error".to_string())
            } else {
                Ok(page(100))
            }
        }

        async fn list_bosses(
            &self,
            _filter: &NameFilter,
            _page: &PageRequest,
        ) -> Result<Page<Boss>, String> {
            Ok(page(12))
        }

        async fn list_classes(
            &self,
            _filter: &NameFilter,
            _page: &PageRequest,
        ) -> Result<Page<ClassDef>, String> {
            Ok(page(10))
        }

        async fn weapon_categories(&self) -> Result<Vec<String>, String> {
            Ok(vec![])
        }

        async fn weapon_statistics(&self) -> Result<WeaponStatistics, String> {
            Ok(WeaponStatistics::default())
        }

        async fn weapons_by_build(&self, _build: BuildType) -> Result<Vec<Weapon>, String> {
            Ok(vec![])
        }

        async fn compare_weapons(
            &self,
            _weapon_ids: Vec<String>,
        ) -> Result<WeaponComparison, String> {
            Err("not wired in this stub".to_string())
        }

        async fn check_health(&self) -> Result<HealthStatus, String> {
            Ok(HealthStatus {
                status: "healthy".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn one_failing_request_fails_the_whole_refresh() {
        let service = StubService { fail_armors: true };

        let err = load_dashboard(&service).await.unwrap_err();

        // No partial dashboard: the four healthy legs never produce a model.
        assert!(err.contains("500"));
    }

    #[tokio::test]
    async fn totals_come_from_all_five_requests() {
        let service = StubService { fail_armors: false };

        let data = load_dashboard(&service).await.unwrap();

        assert_eq!(data.weapon_total, 300);
        assert_eq!(data.armor_total, 100);
        assert_eq!(data.boss_total, 12);
        assert_eq!(data.class_total, 10);
    }
}
