//! Armor DTOs.

use serde::{Deserialize, Serialize};

/// An armor piece as served by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Armor {
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
}

impl Armor {
    /// Stable display key: document id when present, otherwise the name.
    pub fn key(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_and_keys_on_id() {
        let armor: Armor = serde_json::from_value(json!({
            "id": "abc123",
            "name": "Knight Helm",
            "category": "Helm",
            "weight": 4.5
        }))
        .unwrap();
        assert_eq!(armor.key(), "abc123");
        assert_eq!(armor.weight, Some(4.5));
    }

    #[test]
    fn keys_on_name_when_id_absent() {
        let armor: Armor = serde_json::from_value(json!({ "name": "Cloth Garb" })).unwrap();
        assert_eq!(armor.key(), "Cloth Garb");
    }
}
