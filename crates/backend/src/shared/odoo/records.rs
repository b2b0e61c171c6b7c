//! Typed rows as Odoo's `search_read`/`read` return them.
//!
//! Odoo's wire format has a few quirks the deserializers normalize at the
//! edge: absent char/date columns come back as `false` instead of null,
//! many2one references come back as `[id, display_name]` pairs, and
//! numeric studio fields may be missing entirely on old records.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Project row from `project.project`
#[derive(Debug, Clone, Deserialize)]
pub struct OdooProjectRecord {
    pub id: i64,
    #[serde(default, deserialize_with = "false_as_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub tag_ids: Vec<i64>,
    /// Completion fraction in [0, 1]
    #[serde(
        default,
        rename = "x_progress_project",
        deserialize_with = "lenient_f64"
    )]
    pub progress: f64,
    #[serde(default, rename = "date_start", deserialize_with = "false_as_none")]
    pub start_date: Option<String>,
    /// Odoo stores the project deadline in the bare `date` column
    #[serde(default, rename = "date", deserialize_with = "false_as_none")]
    pub deadline: Option<String>,
    #[serde(default)]
    pub task_ids: Vec<i64>,
}

/// Task row from `project.task`
#[derive(Debug, Clone, Deserialize)]
pub struct OdooTaskRecord {
    pub id: i64,
    #[serde(default, deserialize_with = "false_as_none")]
    pub name: Option<String>,
    /// many2one: `[id, display_name]` when set, `false` otherwise
    #[serde(default, deserialize_with = "many2one_id")]
    pub project_id: Option<i64>,
    /// Completion percentage in [0, 100], from the studio field
    #[serde(
        default,
        rename = "x_studio_persentase",
        deserialize_with = "lenient_f64"
    )]
    pub percent: f64,
}

fn false_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_f64().unwrap_or(0.0))
}

fn many2one_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_i64(),
        Value::Array(items) => items.first().and_then(Value::as_i64),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_project_with_false_dates() {
        let record: OdooProjectRecord = serde_json::from_value(json!({
            "id": 12,
            "name": "S1 - Main Tower",
            "tag_ids": [1],
            "x_progress_project": 0.35,
            "date_start": false,
            "date": "2025-11-13"
        }))
        .unwrap();
        assert_eq!(record.start_date, None);
        assert_eq!(record.deadline.as_deref(), Some("2025-11-13"));
        assert_eq!(record.progress, 0.35);
        assert!(record.task_ids.is_empty());
    }

    #[test]
    fn test_project_with_missing_progress_and_name() {
        let record: OdooProjectRecord = serde_json::from_value(json!({
            "id": 3,
            "name": false,
            "tag_ids": []
        }))
        .unwrap();
        assert_eq!(record.name, None);
        assert_eq!(record.progress, 0.0);
    }

    #[test]
    fn test_task_many2one_forms() {
        let pair: OdooTaskRecord = serde_json::from_value(json!({
            "id": 41,
            "name": "Schematic design",
            "project_id": [7, "S1 - Main Tower"],
            "x_studio_persentase": 60
        }))
        .unwrap();
        assert_eq!(pair.project_id, Some(7));
        assert_eq!(pair.percent, 60.0);

        let scalar: OdooTaskRecord = serde_json::from_value(json!({
            "id": 42,
            "name": "Mood board",
            "project_id": 9
        }))
        .unwrap();
        assert_eq!(scalar.project_id, Some(9));
        assert_eq!(scalar.percent, 0.0);

        let unset: OdooTaskRecord = serde_json::from_value(json!({
            "id": 43,
            "name": "Orphan",
            "project_id": false
        }))
        .unwrap();
        assert_eq!(unset.project_id, None);
    }
}
