//! Aggregated weapon statistics, comparison payloads, and the health probe.

use serde::{Deserialize, Serialize};

use crate::dto::weapons::Weapon;

/// Aggregated weapon statistics from `GET /weapons/statistics`.
///
/// The backend computes this with a single faceted aggregation, so each
/// facet arrives as an array even when it holds one logical document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeaponStatistics {
    #[serde(default)]
    pub by_category: Vec<CategoryCount>,
    #[serde(default)]
    pub avg_stats: Vec<AvgWeaponStats>,
    #[serde(default)]
    pub top_damage: Vec<TopDamageEntry>,
}

impl WeaponStatistics {
    /// The single averages document, when the facet produced one.
    pub fn averages(&self) -> Option<&AvgWeaponStats> {
        self.avg_stats.first()
    }
}

/// One category bucket; the group key is nullable for uncategorized weapons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCount {
    #[serde(rename = "_id")]
    pub category: Option<String>,
    pub count: u64,
}

/// Collection-wide averages facet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvgWeaponStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_physical_damage: Option<f64>,
    #[serde(default)]
    pub total_weapons: u64,
}

/// One entry in the precomputed top-damage list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopDamageEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<f64>,
}

/// Request body for `POST /weapons/compare`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareRequest {
    pub weapon_ids: Vec<String>,
}

/// Side-by-side weapon comparison payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponComparison {
    #[serde(default)]
    pub weapons: Vec<Weapon>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_damage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lightest: Option<String>,
}

/// Response from `GET /api/v1/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_faceted_statistics() {
        let stats: WeaponStatistics = serde_json::from_value(json!({
            "by_category": [
                { "_id": "Katana", "count": 12 },
                { "_id": null, "count": 3 }
            ],
            "avg_stats": [
                { "avg_weight": 7.2, "avg_physical_damage": 101.4, "total_weapons": 300 }
            ],
            "top_damage": [
                { "name": "Giant-Crusher", "category": "Colossal Weapon", "damage": 155.0 }
            ]
        }))
        .unwrap();

        assert_eq!(stats.by_category.len(), 2);
        assert!(stats.by_category[1].category.is_none());
        assert_eq!(stats.averages().unwrap().total_weapons, 300);
        assert_eq!(stats.top_damage[0].damage, Some(155.0));
    }

    #[test]
    fn empty_statistics_decode_to_defaults() {
        let stats: WeaponStatistics = serde_json::from_value(json!({})).unwrap();
        assert!(stats.by_category.is_empty());
        assert!(stats.averages().is_none());
    }

    #[test]
    fn health_probe() {
        let healthy: HealthStatus = serde_json::from_value(json!({ "status": "healthy" })).unwrap();
        assert!(healthy.is_healthy());

        let degraded: HealthStatus =
            serde_json::from_value(json!({ "status": "degraded" })).unwrap();
        assert!(!degraded.is_healthy());
    }
}
