//! Name fields: prefix/first/middle/last/suffix parts, space-joined.

use crate::escape;
use crate::form_data::FormData;
use crate::interface::FieldValue;
use formpdf_types::{Entry, FieldDescriptor};
use itertools::Itertools;
use serde_json::{Value, json};
use std::cell::OnceCell;

// Conventional sub-input offsets of name fields.
const PARTS: &[(&str, u32)] = &[
    ("prefix", 2),
    ("first", 3),
    ("middle", 4),
    ("last", 6),
    ("suffix", 8),
];

pub struct Name<'a> {
    field: &'a FieldDescriptor,
    entry: &'a Entry,
    cache: OnceCell<Value>,
}

impl<'a> Name<'a> {
    pub fn new(field: &'a FieldDescriptor, entry: &'a Entry) -> Self {
        Self {
            field,
            entry,
            cache: OnceCell::new(),
        }
    }

    fn joined(&self) -> String {
        PARTS
            .iter()
            .filter_map(|(key, _)| self.value().get(*key).and_then(Value::as_str))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .join(" ")
    }
}

impl FieldValue for Name<'_> {
    fn descriptor(&self) -> &FieldDescriptor {
        self.field
    }

    fn value(&self) -> &Value {
        self.cache.get_or_init(|| {
            // Simple-mode name fields store the whole name under the bare id.
            if let Some(raw) = self.entry.field_value(self.field.id) {
                return json!({ "first": raw });
            }
            let mut map = serde_json::Map::new();
            for (key, part) in PARTS {
                let raw = self
                    .entry
                    .input_value(self.field.id, *part)
                    .unwrap_or_default();
                map.insert((*key).to_string(), Value::String(raw.to_string()));
            }
            Value::Object(map)
        })
    }

    fn value_html(&self) -> String {
        escape::html(&self.joined())
    }

    fn form_data(&self) -> FormData {
        let mut data = FormData::new();
        data.insert(self.field, Value::String(self.joined()));
        for (key, part) in PARTS {
            if let Some(part_value) = self.value().get(*key) {
                data.insert_raw(
                    format!("{}.{}", self.field.id, part),
                    part_value.clone(),
                );
            }
        }
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{entry_with, simple_field};
    use formpdf_types::FieldType;

    #[test]
    fn joins_non_empty_parts() {
        let field = simple_field(3, FieldType::Name, "Name");
        let entry = entry_with(&[("3.2", "Dr"), ("3.3", "Ada"), ("3.4", ""), ("3.6", "Lovelace")]);
        let name = Name::new(&field, &entry);
        assert_eq!(name.value_html(), "Dr Ada Lovelace");
    }

    #[test]
    fn all_blank_parts_is_empty() {
        let field = simple_field(3, FieldType::Name, "Name");
        let entry = entry_with(&[("3.3", ""), ("3.6", "")]);
        assert!(Name::new(&field, &entry).is_empty());
    }

    #[test]
    fn form_data_has_full_name_and_parts() {
        let field = simple_field(3, FieldType::Name, "Name");
        let entry = entry_with(&[("3.3", "Ada"), ("3.6", "Lovelace")]);
        let data = Name::new(&field, &entry).form_data();
        assert_eq!(data.get("3"), Some(&json!("Ada Lovelace")));
        assert_eq!(data.get("Name"), Some(&json!("Ada Lovelace")));
        assert_eq!(data.get("3.3"), Some(&json!("Ada")));
        assert_eq!(data.get("3.6"), Some(&json!("Lovelace")));
    }
}
