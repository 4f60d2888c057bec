//! # API Client
//!
//! Main HTTP client for backend API communication.

use crate::core::config::Config;
use crate::core::service::GameDataService;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{
    Armor, Boss, BuildType, ClassDef, HealthStatus, NameFilter, Page, PageRequest, Weapon,
    WeaponComparison, WeaponStatistics,
};

/// All endpoints live under this prefix on the backend.
const API_PREFIX: &str = "/api/v1";

/// HTTP client for communicating with the game data backend.
///
/// This client handles all REST API calls and maintains a connection pool
/// for efficient HTTP/2 multiplexing. The per-request timeout from
/// [`Config`] bounds every call, so a hung backend surfaces as a timeout
/// error instead of a frozen UI.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client from the resolved configuration.
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.api_url.clone(),
        }
    }

    /// Build a full endpoint URL from a path under the API prefix.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, path)
    }

    /// GET a JSON payload from an endpoint path.
    ///
    /// Errors are normalized into three shapes: `Network error: ...` for
    /// transport failures, `Request failed: <status>` for non-2xx responses,
    /// and `Failed to parse response: ...` for decode failures.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, String> {
        let url = self.endpoint(path);
        let start = std::time::Instant::now();

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(url = %url, error = %e, "Request network error");
                format!("Network error: {}", e)
            })?;

        let status = response.status();
        let duration = start.elapsed();

        if status.is_success() {
            let parsed = response.json::<T>().await.map_err(|e| {
                tracing::error!(url = %url, error = %e, "Response parse error");
                format!("Failed to parse response: {}", e)
            })?;
            tracing::debug!(
                url = %url,
                status = status.as_u16(),
                duration_ms = duration.as_millis(),
                "Request completed"
            );
            Ok(parsed)
        } else {
            tracing::warn!(
                url = %url,
                status = status.as_u16(),
                duration_ms = duration.as_millis(),
                "Request failed with non-success status"
            );
            Err(format!("Request failed: {}", status))
        }
    }

    /// POST a JSON body to an endpoint path and decode the JSON response.
    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, String> {
        let url = self.endpoint(path);
        let start = std::time::Instant::now();

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(url = %url, error = %e, "Request network error");
                format!("Network error: {}", e)
            })?;

        let status = response.status();
        let duration = start.elapsed();

        if status.is_success() {
            let parsed = response.json::<T>().await.map_err(|e| {
                tracing::error!(url = %url, error = %e, "Response parse error");
                format!("Failed to parse response: {}", e)
            })?;
            tracing::debug!(
                url = %url,
                status = status.as_u16(),
                duration_ms = duration.as_millis(),
                "Request completed"
            );
            Ok(parsed)
        } else {
            tracing::warn!(
                url = %url,
                status = status.as_u16(),
                duration_ms = duration.as_millis(),
                "Request failed with non-success status"
            );
            Err(format!("Request failed: {}", status))
        }
    }
}

// Implement GameDataService trait for ApiClient
#[async_trait::async_trait]
impl GameDataService for ApiClient {
    async fn list_weapons(
        &self,
        filter: &NameFilter,
        page: &PageRequest,
    ) -> Result<Page<Weapon>, String> {
        crate::services::api::weapons::list_weapons(self, filter, page).await
    }

    async fn list_armors(
        &self,
        filter: &NameFilter,
        page: &PageRequest,
    ) -> Result<Page<Armor>, String> {
        crate::services::api::armors::list_armors(self, filter, page).await
    }

    async fn list_bosses(
        &self,
        filter: &NameFilter,
        page: &PageRequest,
    ) -> Result<Page<Boss>, String> {
        crate::services::api::bosses::list_bosses(self, filter, page).await
    }

    async fn list_classes(
        &self,
        filter: &NameFilter,
        page: &PageRequest,
    ) -> Result<Page<ClassDef>, String> {
        crate::services::api::classes::list_classes(self, filter, page).await
    }

    async fn weapon_categories(&self) -> Result<Vec<String>, String> {
        crate::services::api::weapons::get_categories(self).await
    }

    async fn weapon_statistics(&self) -> Result<WeaponStatistics, String> {
        crate::services::api::weapons::get_statistics(self).await
    }

    async fn weapons_by_build(&self, build: BuildType) -> Result<Vec<Weapon>, String> {
        crate::services::api::weapons::list_by_build(self, build).await
    }

    async fn compare_weapons(&self, weapon_ids: Vec<String>) -> Result<WeaponComparison, String> {
        crate::services::api::weapons::compare_weapons(self, weapon_ids).await
    }

    async fn check_health(&self) -> Result<HealthStatus, String> {
        crate::services::api::health::check_health(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_url_and_api_prefix() {
        let client = ApiClient::new(&Config::with_api_url("http://127.0.0.1:8000"));
        assert_eq!(
            client.endpoint("/weapons"),
            "http://127.0.0.1:8000/api/v1/weapons"
        );
    }

    #[test]
    fn trailing_slash_in_config_does_not_double_up() {
        let client = ApiClient::new(&Config::with_api_url("http://127.0.0.1:8000/"));
        assert_eq!(
            client.endpoint("/health"),
            "http://127.0.0.1:8000/api/v1/health"
        );
    }
}
