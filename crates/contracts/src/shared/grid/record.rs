//! Field access for records of arbitrary shape.
//!
//! The grid never reads record fields directly. Every lookup goes through a
//! [`RecordAccessor`], whose contract is: a path that cannot be resolved
//! yields an empty string, never a panic.

use serde_json::Value;

/// Resolves a dotted path (`"payment_method.name"`) in a JSON record.
///
/// Numeric segments index into arrays (`"images.0.url"`).
pub fn resolve_path<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return None;
    }
    path.split('.').try_fold(record, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Display text of a JSON value: strings as-is, `null` as empty,
/// scalars via `to_string`, arrays and objects as compact JSON.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Text at `path`, empty when any segment is missing.
pub fn field_text(record: &Value, path: &str) -> String {
    resolve_path(record, path).map(value_text).unwrap_or_default()
}

fn json_row_id(record: &Value) -> String {
    field_text(record, "id")
}

/// Explicit field and identity resolvers for a record type.
pub struct RecordAccessor<R> {
    field: fn(&R, &str) -> String,
    id: fn(&R) -> String,
}

impl<R> Clone for RecordAccessor<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for RecordAccessor<R> {}

impl<R> std::fmt::Debug for RecordAccessor<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordAccessor").finish_non_exhaustive()
    }
}

impl<R> RecordAccessor<R> {
    pub const fn new(field: fn(&R, &str) -> String, id: fn(&R) -> String) -> Self {
        Self { field, id }
    }

    pub fn field(&self, record: &R, path: &str) -> String {
        (self.field)(record, path)
    }

    pub fn id(&self, record: &R) -> String {
        (self.id)(record)
    }
}

impl RecordAccessor<Value> {
    /// Accessor for untyped JSON records identified by their `id` field.
    pub const fn json() -> Self {
        Self::new(field_text, json_row_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_lookup() {
        let record = json!({
            "id": 7,
            "payment_method": {"name": "Card", "fee": 1.5},
            "images": [{"url": "a.png"}]
        });
        assert_eq!(field_text(&record, "payment_method.name"), "Card");
        assert_eq!(field_text(&record, "payment_method.fee"), "1.5");
        assert_eq!(field_text(&record, "images.0.url"), "a.png");
        assert_eq!(field_text(&record, "id"), "7");
    }

    #[test]
    fn test_missing_segments_resolve_to_empty() {
        let record = json!({"payment_method": null, "name": "A", "tags": ["x"]});
        assert_eq!(field_text(&record, "payment_method.name"), "");
        assert_eq!(field_text(&record, "name.first"), "");
        assert_eq!(field_text(&record, "tags.3"), "");
        assert_eq!(field_text(&record, "tags.first"), "");
        assert_eq!(field_text(&record, "missing"), "");
        assert_eq!(field_text(&record, ""), "");
        assert_eq!(field_text(&json!("scalar"), "name"), "");
    }

    #[test]
    fn test_value_text() {
        assert_eq!(value_text(&json!(true)), "true");
        assert_eq!(value_text(&json!(null)), "");
        assert_eq!(value_text(&json!(["a", 1])), r#"["a",1]"#);
    }

    #[test]
    fn test_json_accessor_uses_id_field() {
        let accessor = RecordAccessor::json();
        assert_eq!(accessor.id(&json!({"id": "r-1"})), "r-1");
        assert_eq!(accessor.id(&json!({"name": "no id"})), "");
        assert_eq!(accessor.field(&json!({"a": {"b": 2}}), "a.b"), "2");
    }
}
