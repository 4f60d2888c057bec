//! # Health Probe

use super::client::ApiClient;
use shared::HealthStatus;

/// Probe the backend liveness endpoint.
///
/// The status bar polls this periodically; any error (network, HTTP, decode)
/// renders the backend as unreachable without touching loaded data.
pub async fn check_health(client: &ApiClient) -> Result<HealthStatus, String> {
    client.get_json("/health", &[]).await
}
