//! Deserialization adapters used across the DTOs.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a field as `Some(bool)` only when the wire value is a genuine
/// JSON boolean.
///
/// The source data passes through several ingestion steps and some records
/// carry truthy-looking strings or numbers (`"true"`, `1`) where a boolean
/// belongs. Those must never satisfy a strict `== Some(true)` check, so
/// anything that is not a JSON boolean decodes as `None` instead of failing
/// the whole document.
pub fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => Some(b),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Flagged {
        #[serde(default, deserialize_with = "super::lenient_bool")]
        flag: Option<bool>,
    }

    #[test]
    fn accepts_real_booleans() {
        let t: Flagged = serde_json::from_value(json!({ "flag": true })).unwrap();
        assert_eq!(t.flag, Some(true));

        let f: Flagged = serde_json::from_value(json!({ "flag": false })).unwrap();
        assert_eq!(f.flag, Some(false));
    }

    #[test]
    fn rejects_truthy_strings_and_numbers() {
        for bad in [json!("true"), json!("false"), json!(1), json!(0)] {
            let parsed: Flagged = serde_json::from_value(json!({ "flag": bad })).unwrap();
            assert_eq!(parsed.flag, None);
        }
    }

    #[test]
    fn tolerates_absent_and_null() {
        let absent: Flagged = serde_json::from_value(json!({})).unwrap();
        assert_eq!(absent.flag, None);

        let null: Flagged = serde_json::from_value(json!({ "flag": null })).unwrap();
        assert_eq!(null.flag, None);
    }
}
