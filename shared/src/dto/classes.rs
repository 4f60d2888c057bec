//! Starting-class DTOs.

use serde::{Deserialize, Serialize};

/// A starting class as served by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassDef {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<CharacterStats>,
}

impl ClassDef {
    /// Stable display key: document id when present, otherwise the name.
    pub fn key(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.name)
    }

    pub fn starting_level(&self) -> Option<u32> {
        self.stats.as_ref().and_then(|s| s.level)
    }
}

/// Starting stat spread of a class.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CharacterStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vigor: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mind: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endurance: Option<u32>,
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

impl CharacterStats {
    /// Sum of the eight attribute stats; level is excluded.
    pub fn total(&self) -> u32 {
        [
            self.vigor,
            self.mind,
            self.endurance,
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_class_with_stats() {
        let class: ClassDef = serde_json::from_value(json!({
            "id": "c1",
            "name": "Astrologer",
            "stats": {
                "level": 6, "vigor": 9, "mind": 15, "endurance": 9,
                "strength": 8, "dexterity": 12, "intelligence": 16,
                "faith": 7, "arcane": 9
            }
        }))
        .unwrap();

        assert_eq!(class.starting_level(), Some(6));
        assert_eq!(class.stats.as_ref().unwrap().total(), 85);
    }

    #[test]
    fn tolerates_missing_stats() {
        let class: ClassDef = serde_json::from_value(json!({ "name": "Wretch" })).unwrap();
        assert_eq!(class.starting_level(), None);
        assert_eq!(class.key(), "Wretch");
    }
}
