//! Boss DTOs.
//!
//! Bosses carry two backend-computed flags, `has_great_rune` and
//! `has_remembrance`, that drive the dashboard carousels. Membership there
//! requires a strict `Some(true)`: the [`crate::de::lenient_bool`] adapter
//! guarantees non-boolean wire values can never qualify.

use serde::{Deserialize, Serialize};

use crate::de::lenient_bool;

/// Tier label substituted when a record carries no `boss_tier`.
pub const UNCLASSIFIED_TIER: &str = "Unclassified";

/// A boss record as served by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boss {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drops: Option<Vec<String>>,
    #[serde(
        default,
        rename = "healthPoints",
        skip_serializing_if = "Option::is_none"
    )]
    pub health_points: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boss_tier: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub has_great_rune: Option<bool>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub has_remembrance: Option<bool>,
}

impl Boss {
    /// Stable display key: document id when present, otherwise the name.
    pub fn key(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.name)
    }

    /// Strict check: only a genuine boolean `true` counts.
    pub fn grants_great_rune(&self) -> bool {
        self.has_great_rune == Some(true)
    }

    /// Strict check: only a genuine boolean `true` counts.
    pub fn grants_remembrance(&self) -> bool {
        self.has_remembrance == Some(true)
    }

    /// Tier label for grouping, with the sentinel for untagged records.
    pub fn tier_label(&self) -> &str {
        self.boss_tier.as_deref().unwrap_or(UNCLASSIFIED_TIER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_full_record() {
        let boss: Boss = serde_json::from_value(json!({
            "id": "507f1f77bcf86cd799439011",
            "name": "Godrick the Grafted",
            "region": "Limgrave",
            "boss_tier": "Legendary",
            "has_great_rune": true,
            "has_remembrance": true,
            "drops": ["Godrick's Great Rune", "Remembrance of the Grafted"]
        }))
        .unwrap();

        assert!(boss.grants_great_rune());
        assert!(boss.grants_remembrance());
        assert_eq!(boss.tier_label(), "Legendary");
    }

    #[test]
    fn truthy_strings_do_not_grant_flags() {
        let boss: Boss = serde_json::from_value(json!({
            "name": "Suspicious Record",
            "has_great_rune": "true",
            "has_remembrance": 1
        }))
        .unwrap();

        assert_eq!(boss.has_great_rune, None);
        assert_eq!(boss.has_remembrance, None);
        assert!(!boss.grants_great_rune());
        assert!(!boss.grants_remembrance());
    }

    #[test]
    fn explicit_false_is_preserved_but_does_not_qualify() {
        let boss: Boss = serde_json::from_value(json!({
            "name": "Soldier of Godrick",
            "has_great_rune": false
        }))
        .unwrap();

        assert_eq!(boss.has_great_rune, Some(false));
        assert!(!boss.grants_great_rune());
    }

    #[test]
    fn missing_tier_uses_sentinel() {
        let boss: Boss = serde_json::from_value(json!({ "name": "Unknown" })).unwrap();
        assert_eq!(boss.tier_label(), UNCLASSIFIED_TIER);
    }
}
