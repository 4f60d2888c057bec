//! # Boss Endpoints

use super::client::ApiClient;
use shared::{Boss, NameFilter, Page, PageRequest};

/// List bosses with an optional name filter and skip/limit pagination.
#[tracing::instrument(skip(client, filter, page), fields(name = ?filter.name, skip = page.skip, limit = page.limit))]
pub async fn list_bosses(
    client: &ApiClient,
    filter: &NameFilter,
    page: &PageRequest,
) -> Result<Page<Boss>, String> {
    let mut query = page.query();
    query.extend(filter.query());

    client.get_json("/bosses", &query).await
}
