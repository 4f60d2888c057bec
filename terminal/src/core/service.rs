//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use async_trait::async_trait;
use shared::{
    Armor, Boss, BuildType, ClassDef, HealthStatus, NameFilter, Page, PageRequest, Weapon,
    WeaponComparison, WeaponStatistics,
};

/// Trait for game data API operations.
///
/// This trait allows for dependency injection and mocking in tests. The
/// concrete implementation lives on [`crate::services::api::ApiClient`];
/// tasks and the dashboard loader only depend on this trait.
///
/// All methods return `Result<T, String>` so failures can cross the event
/// channel as plain messages.
#[async_trait]
pub trait GameDataService: Send + Sync {
    /// List weapons with an optional name filter and skip/limit pagination.
    async fn list_weapons(
        &self,
        filter: &NameFilter,
        page: &PageRequest,
    ) -> Result<Page<Weapon>, String>;

    /// List armor pieces with an optional name filter and skip/limit pagination.
    async fn list_armors(
        &self,
        filter: &NameFilter,
        page: &PageRequest,
    ) -> Result<Page<Armor>, String>;

    /// List bosses with an optional name filter and skip/limit pagination.
    async fn list_bosses(
        &self,
        filter: &NameFilter,
        page: &PageRequest,
    ) -> Result<Page<Boss>, String>;

    /// List starting classes with an optional name filter and skip/limit pagination.
    async fn list_classes(
        &self,
        filter: &NameFilter,
        page: &PageRequest,
    ) -> Result<Page<ClassDef>, String>;

    /// Distinct weapon categories.
    async fn weapon_categories(&self) -> Result<Vec<String>, String>;

    /// Aggregated weapon statistics (category counts, averages, top damage).
    async fn weapon_statistics(&self) -> Result<WeaponStatistics, String>;

    /// Weapons recommended for a build archetype, by scaling grade.
    async fn weapons_by_build(&self, build: BuildType) -> Result<Vec<Weapon>, String>;

    /// Compare a set of weapons by id.
    async fn compare_weapons(&self, weapon_ids: Vec<String>) -> Result<WeaponComparison, String>;

    /// Backend liveness probe.
    async fn check_health(&self) -> Result<HealthStatus, String>;
}
