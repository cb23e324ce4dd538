//! End-of-run persistence: pretty JSON dump plus a flattened CSV view.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::Context;
use serde_json::Value;

/// Flatten one record into dot-notation (key, value) pairs. Nested objects
/// recurse; arrays and scalars are kept whole.
pub fn flatten_record(record: &Value) -> Vec<(String, Value)> {
    let mut out = Vec::new();
    flatten_into("", record, &mut out);
    out
}

fn flatten_into(prefix: &str, value: &Value, out: &mut Vec<(String, Value)>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_into(&path, child, out);
            }
        }
        other => out.push((prefix.to_string(), other.clone())),
    }
}

/// CSV cell rendering: scalars print bare, arrays and nested values as
/// compact JSON, nulls as the empty field.
fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Write the raw records as pretty-printed JSON.
pub fn write_json(path: &Path, records: &[Value]) -> anyhow::Result<()> {
    let body = serde_json::to_string_pretty(records)?;
    fs::write(path, body).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Write the flattened CSV. The header is the union of all flattened keys in
/// first-seen order; records missing a key get an empty field.
pub fn write_csv(path: &Path, records: &[Value]) -> anyhow::Result<()> {
    let flattened: Vec<Vec<(String, Value)>> = records.iter().map(flatten_record).collect();

    let mut header: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    for record in &flattened {
        for (key, _) in record {
            if seen.insert(key.clone()) {
                header.push(key.clone());
            }
        }
    }

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(&header)?;
    for record in &flattened {
        let row: Vec<String> = header
            .iter()
            .map(|key| {
                record
                    .iter()
                    .find(|(k, _)| k == key)
                    .map(|(_, v)| render_cell(v))
                    .unwrap_or_default()
            })
            .collect();
        writer.write_record(&row)?;
    }
    writer.flush().with_context(|| format!("flushing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flatten_nested_objects() {
        let record = json!({"id": 1, "lipid": {"name": "DLin", "props": {"mw": 642.1}}});
        let flat = flatten_record(&record);
        let keys: Vec<&str> = flat.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["id", "lipid.name", "lipid.props.mw"]);
    }

    #[test]
    fn test_flatten_keeps_arrays_whole() {
        let record = json!({"tags": ["a", "b"]});
        let flat = flatten_record(&record);
        assert_eq!(flat.len(), 1);
        assert_eq!(flat[0].1, json!(["a", "b"]));
    }

    #[test]
    fn test_csv_header_is_key_union() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let records = vec![json!({"a": 1, "b": 2}), json!({"b": 3, "c": 4})];
        write_csv(&path, &records).unwrap();

        let body = std::fs::read_to_string(&path).unwrap();
        let mut lines = body.lines();
        assert_eq!(lines.next().unwrap(), "a,b,c");
        assert_eq!(lines.next().unwrap(), "1,2,");
        assert_eq!(lines.next().unwrap(), ",3,4");
    }

    #[test]
    fn test_json_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let records = vec![json!({"id": 1}), json!({"id": 2, "nested": {"x": true}})];
        write_json(&path, &records).unwrap();

        let body = std::fs::read_to_string(&path).unwrap();
        let back: Vec<Value> = serde_json::from_str(&body).unwrap();
        assert_eq!(back, records);
    }

    #[test]
    fn test_write_to_bad_path_errors() {
        let records = vec![json!({"id": 1})];
        assert!(write_json(Path::new("/nonexistent/dir/out.json"), &records).is_err());
        assert!(write_csv(Path::new("/nonexistent/dir/out.csv"), &records).is_err());
    }
}
