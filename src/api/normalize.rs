//! Identifier normalisation
//!
//! Compatibility shim: the service may expose a record's identifier as
//! `id` or as `_id` (document-store style). Every list body passes through
//! here once, so the rest of the app only ever reads `id`.

use serde_json::{Map, Value};

use super::ClientError;
use crate::models::Record;

const ID_KEYS: [&str; 2] = ["id", "_id"];

/// Parse a JSON array body into records, resolving each record's `id`
pub fn parse_records<R: Record>(body: &str) -> Result<Vec<R>, ClientError> {
    let raw: Vec<Value> = serde_json::from_str(body)?;
    raw.into_iter()
        .map(|mut value| {
            normalize_id(&mut value)?;
            Ok(serde_json::from_value(value)?)
        })
        .collect()
}

/// Write the first usable identifier into `id`
pub fn normalize_id(record: &mut Value) -> Result<(), ClientError> {
    let obj = record.as_object_mut().ok_or(ClientError::MissingId)?;
    let id = resolve_id(obj).ok_or(ClientError::MissingId)?;
    obj.insert("id".to_string(), Value::String(id));
    Ok(())
}

fn resolve_id(obj: &Map<String, Value>) -> Option<String> {
    ID_KEYS.iter().find_map(|key| match obj.get(*key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Employee, Task};
    use serde_json::json;

    #[test]
    fn test_underscore_id_is_copied() {
        let mut value = json!({ "_id": "65f0", "title": "x" });
        normalize_id(&mut value).unwrap();
        assert_eq!(value["id"], "65f0");
    }

    #[test]
    fn test_plain_id_wins() {
        let mut value = json!({ "id": "a", "_id": "b" });
        normalize_id(&mut value).unwrap();
        assert_eq!(value["id"], "a");
    }

    #[test]
    fn test_empty_id_falls_back() {
        let mut value = json!({ "id": "", "_id": "b" });
        normalize_id(&mut value).unwrap();
        assert_eq!(value["id"], "b");
    }

    #[test]
    fn test_numeric_id() {
        let mut value = json!({ "id": 7 });
        normalize_id(&mut value).unwrap();
        assert_eq!(value["id"], "7");
    }

    #[test]
    fn test_missing_id_rejects_list() {
        let body = r#"[{"_id":"1","title":"a"},{"title":"b"}]"#;
        assert!(matches!(parse_records::<Task>(body), Err(ClientError::MissingId)));
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let body = r#"[{"_id":"e1","name":"Ann","email":"a@x.com","position":null,"is_active":false,"created_at":"2024-01-01T00:00:00"}]"#;
        let employees = parse_records::<Employee>(body).unwrap();
        assert_eq!(employees[0].id, "e1");
        assert!(!employees[0].is_active);
    }

    #[test]
    fn test_malformed_body() {
        assert!(matches!(parse_records::<Task>("{oops"), Err(ClientError::Serde(_))));
    }
}
