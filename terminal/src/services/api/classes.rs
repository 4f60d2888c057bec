//! # Starting Class Endpoints

use super::client::ApiClient;
use shared::{ClassDef, NameFilter, Page, PageRequest};

/// List starting classes with an optional name filter and skip/limit pagination.
#[tracing::instrument(skip(client, filter, page), fields(name = ?filter.name, skip = page.skip, limit = page.limit))]
pub async fn list_classes(
    client: &ApiClient,
    filter: &NameFilter,
    page: &PageRequest,
) -> Result<Page<ClassDef>, String> {
    let mut query = page.query();
    query.extend(filter.query());

    client.get_json("/classes", &query).await
}
