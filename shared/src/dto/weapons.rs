//! Weapon DTOs: the weapon record itself plus its nested stat blocks.

use serde::{Deserialize, Serialize};

/// A weapon record as served by the backend.
///
/// Every stat is optional; the source dataset is incomplete for many entries
/// and the client renders whatever is present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weapon {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attack: Option<AttackStats>,
    #[serde(
        default,
        rename = "requiredAttributes",
        skip_serializing_if = "Option::is_none"
    )]
    pub required_attributes: Option<RequirementStats>,
    #[serde(default, rename = "scalesWith", skip_serializing_if = "Option::is_none")]
    pub scales_with: Option<ScalingStats>,
}

impl Weapon {
    /// Stable display key: document id when present, otherwise the name.
    pub fn key(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.name)
    }

    /// Total attack power across all present damage types.
    pub fn total_attack(&self) -> i64 {
        self.attack.as_ref().map(AttackStats::total).unwrap_or(0)
    }
}

/// Character build archetypes the backend can recommend weapons for.
///
/// Serialized as the lowercase path segment of
/// `GET /weapons/by-build/{build_type}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildType {
    Strength,
    Dexterity,
    /// Weapons scaling well with both strength and dexterity.
    Quality,
    Intelligence,
    Faith,
    Arcane,
}

impl BuildType {
    /// All build types in display order.
    pub fn all() -> &'static [BuildType] {
        &[
            BuildType::Strength,
            BuildType::Dexterity,
            BuildType::Quality,
            BuildType::Intelligence,
            BuildType::Faith,
            BuildType::Arcane,
        ]
    }

    /// Wire value used as the endpoint path segment.
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildType::Strength => "strength",
            BuildType::Dexterity => "dexterity",
            BuildType::Quality => "quality",
            BuildType::Intelligence => "intelligence",
            BuildType::Faith => "faith",
            BuildType::Arcane => "arcane",
        }
    }

    /// Human-readable label for pickers.
    pub fn label(&self) -> &'static str {
        match self {
            BuildType::Strength => "Strength",
            BuildType::Dexterity => "Dexterity",
            BuildType::Quality => "Quality",
            BuildType::Intelligence => "Intelligence",
            BuildType::Faith => "Faith",
            BuildType::Arcane => "Arcane",
        }
    }
}

/// Base attack damage per damage type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttackStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magic: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fire: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lightning: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holy: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical: Option<i64>,
}

impl AttackStats {
    /// Sum of all present damage types. Critical is a bonus, not damage.
    pub fn total(&self) -> i64 {
        [self.physical, self.magic, self.fire, self.lightning, self.holy]
            .iter()
            .flatten()
            .sum()
    }
}

/// Attribute requirements to wield a weapon.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequirementStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dexterity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intelligence: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faith: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arcane: Option<u32>,
}

impl RequirementStats {
    pub fn total(&self) -> u32 {
        [
            self.strength,
            self.dexterity,
            self.intelligence,
            self.faith,
            self.arcane,
        ]
        .iter()
        .flatten()
        .sum()
    }
}

/// Attribute scaling grades (letter grades E through S).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScalingStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dexterity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intelligence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faith: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arcane: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_full_record_with_camel_case_fields() {
        let weapon: Weapon = serde_json::from_value(json!({
            "id": "507f1f77bcf86cd799439011",
            "name": "Moonveil",
            "category": "Katana",
            "weight": 3.5,
            "attack": { "physical": 73, "magic": 87 },
            "requiredAttributes": { "strength": 12, "dexterity": 18, "intelligence": 23 },
            "scalesWith": { "strength": "E", "dexterity": "D", "intelligence": "B" }
        }))
        .unwrap();

        assert_eq!(weapon.key(), "507f1f77bcf86cd799439011");
        assert_eq!(weapon.total_attack(), 160);
        assert_eq!(weapon.required_attributes.unwrap().total(), 53);
        assert_eq!(weapon.scales_with.unwrap().intelligence.as_deref(), Some("B"));
    }

    #[test]
    fn tolerates_sparse_record_and_falls_back_to_name_key() {
        let weapon: Weapon = serde_json::from_value(json!({ "name": "Club" })).unwrap();
        assert_eq!(weapon.key(), "Club");
        assert_eq!(weapon.total_attack(), 0);
        assert!(weapon.category.is_none());
    }

    #[test]
    fn build_type_path_segments_are_lowercase() {
        for build in BuildType::all() {
            assert_eq!(build.as_str(), build.label().to_lowercase());
        }
    }

    #[test]
    fn attack_total_ignores_critical() {
        let attack = AttackStats {
            physical: Some(100),
            critical: Some(110),
            ..Default::default()
        };
        assert_eq!(attack.total(), 100);
    }
}
