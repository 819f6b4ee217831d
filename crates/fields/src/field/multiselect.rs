//! Multi-select fields: JSON-array or comma-delimited stored values.

use crate::escape;
use crate::form_data::FormData;
use crate::interface::FieldValue;
use formpdf_types::{Entry, FieldDescriptor};
use serde_json::{Value, json};
use std::cell::OnceCell;

pub struct Multiselect<'a> {
    field: &'a FieldDescriptor,
    entry: &'a Entry,
    cache: OnceCell<Value>,
}

impl<'a> Multiselect<'a> {
    pub fn new(field: &'a FieldDescriptor, entry: &'a Entry) -> Self {
        Self {
            field,
            entry,
            cache: OnceCell::new(),
        }
    }
}

/// Newer forms store multiselect values as a JSON array, older ones as a
/// comma-delimited string. Both decode to the same vector.
fn split_stored(raw: &str) -> Vec<String> {
    if raw.trim_start().starts_with('[') {
        if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(raw) {
            return items
                .into_iter()
                .filter_map(|v| match v {
                    Value::String(s) if !s.is_empty() => Some(s),
                    _ => None,
                })
                .collect();
        }
    }
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl FieldValue for Multiselect<'_> {
    fn descriptor(&self) -> &FieldDescriptor {
        self.field
    }

    fn value(&self) -> &Value {
        self.cache.get_or_init(|| {
            let raw = self.entry.field_value(self.field.id).unwrap_or_default();
            let values = split_stored(raw);
            let labels: Vec<String> = values
                .iter()
                .map(|v| self.field.choice_text(v).unwrap_or(v).to_string())
                .collect();
            json!({ "values": values, "labels": labels })
        })
    }

    fn value_html(&self) -> String {
        let labels: Vec<&str> = self
            .value()
            .get("labels")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();
        labels
            .iter()
            .map(|l| escape::html(l))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn form_data(&self) -> FormData {
        let mut data = FormData::new();
        data.insert(
            self.field,
            self.value().get("values").cloned().unwrap_or(json!([])),
        );
        data.insert_suffixed(
            self.field,
            "_name",
            self.value().get("labels").cloned().unwrap_or(json!([])),
        );
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{entry_with, simple_field};
    use formpdf_types::{Choice, FieldType};

    fn ms_field() -> FieldDescriptor {
        let mut field = simple_field(9, FieldType::Multiselect, "Languages");
        field.choices = vec![
            Choice {
                text: "English".into(),
                value: "en".into(),
                price: None,
            },
            Choice {
                text: "Norwegian".into(),
                value: "no".into(),
                price: None,
            },
        ];
        field
    }

    #[test]
    fn decodes_json_array_storage() {
        let field = ms_field();
        let entry = entry_with(&[("9", r#"["en","no"]"#)]);
        assert_eq!(
            Multiselect::new(&field, &entry).value_html(),
            "English, Norwegian"
        );
    }

    #[test]
    fn decodes_comma_delimited_storage() {
        let field = ms_field();
        let entry = entry_with(&[("9", "en, no")]);
        assert_eq!(
            Multiselect::new(&field, &entry).value_html(),
            "English, Norwegian"
        );
    }

    #[test]
    fn discards_empty_selections() {
        let field = ms_field();
        let entry = entry_with(&[("9", "en,,")]);
        let ms = Multiselect::new(&field, &entry);
        assert_eq!(ms.value().get("values"), Some(&json!(["en"])));
    }
}
