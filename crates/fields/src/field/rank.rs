//! Rank survey fields: choices in the order the respondent placed them.

use crate::escape;
use crate::interface::FieldValue;
use formpdf_types::{Entry, FieldDescriptor};
use serde_json::Value;
use std::cell::OnceCell;

pub struct Rank<'a> {
    field: &'a FieldDescriptor,
    entry: &'a Entry,
    cache: OnceCell<Value>,
}

impl<'a> Rank<'a> {
    pub fn new(field: &'a FieldDescriptor, entry: &'a Entry) -> Self {
        Self {
            field,
            entry,
            cache: OnceCell::new(),
        }
    }
}

impl FieldValue for Rank<'_> {
    fn descriptor(&self) -> &FieldDescriptor {
        self.field
    }

    fn value(&self) -> &Value {
        self.cache.get_or_init(|| {
            let raw = self.entry.field_value(self.field.id).unwrap_or_default();
            let ordered: Vec<Value> = raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|v| {
                    Value::String(self.field.choice_text(v).unwrap_or(v).to_string())
                })
                .collect();
            Value::Array(ordered)
        })
    }

    fn value_html(&self) -> String {
        let Some(items) = self.value().as_array() else {
            return String::new();
        };
        if items.is_empty() {
            return String::new();
        }
        let mut out = String::from("<ol class=\"rank\">");
        for item in items {
            out.push_str(&format!(
                "<li>{}</li>",
                escape::html(item.as_str().unwrap_or_default())
            ));
        }
        out.push_str("</ol>");
        out
    }
}
