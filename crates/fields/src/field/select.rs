//! Dropdown fields: the stored value plus its resolved display label.

use crate::escape;
use crate::form_data::FormData;
use crate::interface::FieldValue;
use formpdf_types::{Entry, FieldDescriptor};
use serde_json::{Value, json};
use std::cell::OnceCell;

pub struct Select<'a> {
    field: &'a FieldDescriptor,
    entry: &'a Entry,
    cache: OnceCell<Value>,
}

impl<'a> Select<'a> {
    pub fn new(field: &'a FieldDescriptor, entry: &'a Entry) -> Self {
        Self {
            field,
            entry,
            cache: OnceCell::new(),
        }
    }

    fn label(&self) -> &str {
        self.value()
            .get("label")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }
}

impl FieldValue for Select<'_> {
    fn descriptor(&self) -> &FieldDescriptor {
        self.field
    }

    fn value(&self) -> &Value {
        self.cache.get_or_init(|| {
            let raw = self.entry.field_value(self.field.id).unwrap_or_default();
            let label = self.field.choice_text(raw).unwrap_or(raw);
            json!({ "value": raw, "label": label })
        })
    }

    fn value_html(&self) -> String {
        escape::html(self.label())
    }

    fn form_data(&self) -> FormData {
        let mut data = FormData::new();
        let raw = self
            .value()
            .get("value")
            .cloned()
            .unwrap_or(Value::String(String::new()));
        data.insert(self.field, raw);
        data.insert_suffixed(self.field, "_name", Value::String(self.label().to_string()));
        data
    }
}
