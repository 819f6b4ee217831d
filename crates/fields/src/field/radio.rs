//! Radio buttons: a single selected choice.

use crate::escape;
use crate::form_data::FormData;
use crate::interface::FieldValue;
use formpdf_types::{Entry, FieldDescriptor};
use serde_json::{Value, json};
use std::cell::OnceCell;

pub struct Radio<'a> {
    field: &'a FieldDescriptor,
    entry: &'a Entry,
    cache: OnceCell<Value>,
}

impl<'a> Radio<'a> {
    pub fn new(field: &'a FieldDescriptor, entry: &'a Entry) -> Self {
        Self {
            field,
            entry,
            cache: OnceCell::new(),
        }
    }
}

impl FieldValue for Radio<'_> {
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
        escape::html(
            self.value()
                .get("label")
                .and_then(Value::as_str)
                .unwrap_or_default(),
        )
    }

    fn form_data(&self) -> FormData {
        let mut data = FormData::new();
        let raw = self
            .value()
            .get("value")
            .cloned()
            .unwrap_or(Value::String(String::new()));
        let label = self
            .value()
            .get("label")
            .cloned()
            .unwrap_or(Value::String(String::new()));
        data.insert(self.field, raw);
        data.insert_suffixed(self.field, "_name", label);
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{entry_with, simple_field};
    use formpdf_types::{Choice, FieldType};

    #[test]
    fn selected_choice_renders_its_label() {
        let mut field = simple_field(8, FieldType::Radio, "Plan");
        field.choices = vec![Choice {
            text: "Monthly ($5)".into(),
            value: "monthly".into(),
            price: None,
        }];
        let entry = entry_with(&[("8", "monthly")]);
        let radio = Radio::new(&field, &entry);
        assert_eq!(radio.value_html(), "Monthly ($5)");
        assert!(!radio.is_empty());
    }

    #[test]
    fn unanswered_radio_is_empty() {
        let field = simple_field(8, FieldType::Radio, "Plan");
        let entry = entry_with(&[]);
        assert!(Radio::new(&field, &entry).is_empty());
    }
}
