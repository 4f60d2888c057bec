//! # Armor Endpoints

use super::client::ApiClient;
use shared::{Armor, NameFilter, Page, PageRequest};

/// List armor pieces with an optional name filter and skip/limit pagination.
#[tracing::instrument(skip(client, filter, page), fields(name = ?filter.name, skip = page.skip, limit = page.limit))]
pub async fn list_armors(
    client: &ApiClient,
    filter: &NameFilter,
    page: &PageRequest,
) -> Result<Page<Armor>, String> {
    let mut query = page.query();
    query.extend(filter.query());

    client.get_json("/armors", &query).await
}
