//! # Weapon Endpoints
//!
//! Weapon list, category, statistics, and comparison queries.

use super::client::ApiClient;
use crate::core::error::AppError;
use shared::{
    BuildType, CompareRequest, NameFilter, Page, PageRequest, Weapon, WeaponComparison,
    WeaponStatistics,
};

/// List weapons with an optional name filter and skip/limit pagination.
#[tracing::instrument(skip(client, filter, page), fields(name = ?filter.name, skip = page.skip, limit = page.limit))]
pub async fn list_weapons(
    client: &ApiClient,
    filter: &NameFilter,
    page: &PageRequest,
) -> Result<Page<Weapon>, String> {
    let mut query = page.query();
    query.extend(filter.query());

    tracing::debug!("Fetching weapons page");

    let result = client.get_json::<Page<Weapon>>("/weapons", &query).await;

    if let Ok(ref page) = result {
        tracing::debug!(
            item_count = page.items.len(),
            total = page.total,
            "Weapons page fetched"
        );
    }
    result
}

/// Get the distinct weapon categories known to the backend.
pub async fn get_categories(client: &ApiClient) -> Result<Vec<String>, String> {
    client.get_json("/weapons/categories", &[]).await
}

/// Get aggregated weapon statistics for the dashboard.
#[tracing::instrument(skip(client))]
pub async fn get_statistics(client: &ApiClient) -> Result<WeaponStatistics, String> {
    let result = client
        .get_json::<WeaponStatistics>("/weapons/statistics", &[])
        .await;

    if let Ok(ref stats) = result {
        tracing::debug!(
            category_count = stats.by_category.len(),
            top_damage_count = stats.top_damage.len(),
            "Weapon statistics fetched"
        );
    }
    result
}

/// Get weapons recommended for a build archetype, by scaling grade.
#[tracing::instrument(skip(client), fields(build = build.as_str()))]
pub async fn list_by_build(client: &ApiClient, build: BuildType) -> Result<Vec<Weapon>, String> {
    let path = format!("/weapons/by-build/{}", build.as_str());
    let result = client.get_json::<Vec<Weapon>>(&path, &[]).await;

    if let Ok(ref weapons) = result {
        tracing::debug!(item_count = weapons.len(), "Build recommendations fetched");
    }
    result
}

/// Compare a set of weapons by id.
pub async fn compare_weapons(
    client: &ApiClient,
    weapon_ids: Vec<String>,
) -> Result<WeaponComparison, String> {
    if weapon_ids.is_empty() {
        let err = AppError::Validation("No weapons selected for comparison".to_string());
        return Err(err.to_string());
    }
    client
        .post_json("/weapons/compare", &CompareRequest { weapon_ids })
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;

    #[tokio::test]
    async fn compare_rejects_empty_selection_before_any_request() {
        let client = ApiClient::new(&Config::with_api_url("http://127.0.0.1:1"));
        let err = compare_weapons(&client, vec![]).await.unwrap_err();
        assert!(err.contains("Validation error"));
        assert!(err.contains("No weapons selected"));
    }
}
