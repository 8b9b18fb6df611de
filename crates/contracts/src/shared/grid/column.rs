use super::record::RecordAccessor;

/// Column of a grid: a field path plus an optional custom renderer.
pub struct ColumnSpec<R> {
    pub key: String,
    pub label: String,
    pub render: Option<fn(&R) -> String>,
    pub sortable: bool,
}

impl<R> Clone for ColumnSpec<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            label: self.label.clone(),
            render: self.render,
            sortable: self.sortable,
        }
    }
}

impl<R> std::fmt::Debug for ColumnSpec<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("custom_render", &self.render.is_some())
            .field("sortable", &self.sortable)
            .finish()
    }
}

impl<R> ColumnSpec<R> {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            render: None,
            sortable: true,
        }
    }

    pub fn with_render(mut self, render: fn(&R) -> String) -> Self {
        self.render = Some(render);
        self
    }

    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// Cell text: the custom renderer if any, else the value at `key`.
    pub fn display(&self, record: &R, accessor: &RecordAccessor<R>) -> String {
        match self.render {
            Some(render) => render(record),
            None => accessor.field(record, &self.key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_display_prefers_renderer() {
        let accessor = RecordAccessor::json();
        let record = json!({"status": "active", "price": {"amount": 10}});

        let plain = ColumnSpec::<Value>::new("price.amount", "Price");
        assert_eq!(plain.display(&record, &accessor), "10");

        let badge = ColumnSpec::<Value>::new("status", "Status").with_render(|r| {
            if r["status"] == "active" { "Active".to_string() } else { "Inactive".to_string() }
        });
        assert_eq!(badge.display(&record, &accessor), "Active");
        assert_eq!(badge.display(&json!({}), &accessor), "Inactive");
    }
}
