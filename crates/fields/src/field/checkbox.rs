//! Checkboxes: one stored value per ticked sub-input.

use crate::escape;
use crate::form_data::FormData;
use crate::interface::FieldValue;
use formpdf_types::{Entry, FieldDescriptor};
use serde_json::{Value, json};
use std::cell::OnceCell;

pub struct Checkbox<'a> {
    field: &'a FieldDescriptor,
    entry: &'a Entry,
    cache: OnceCell<Value>,
}

impl<'a> Checkbox<'a> {
    pub fn new(field: &'a FieldDescriptor, entry: &'a Entry) -> Self {
        Self {
            field,
            entry,
            cache: OnceCell::new(),
        }
    }

    fn labels(&self) -> Vec<&str> {
        self.value()
            .get("labels")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

impl FieldValue for Checkbox<'_> {
    fn descriptor(&self) -> &FieldDescriptor {
        self.field
    }

    fn value(&self) -> &Value {
        self.cache.get_or_init(|| {
            let mut values = Vec::new();
            let mut labels = Vec::new();
            for (_, raw) in self.entry.field_values(self.field.id) {
                if raw.is_empty() {
                    continue;
                }
                values.push(raw.to_string());
                labels.push(self.field.choice_text(raw).unwrap_or(raw).to_string());
            }
            json!({ "values": values, "labels": labels })
        })
    }

    fn value_html(&self) -> String {
        let labels = self.labels();
        if labels.is_empty() {
            return String::new();
        }
        let mut out = String::from("<ul class=\"bulleted\">");
        for label in labels {
            out.push_str(&format!("<li>{}</li>", escape::html(label)));
        }
        out.push_str("</ul>");
        out
    }

    fn form_data(&self) -> FormData {
        let mut data = FormData::new();
        let values = self.value().get("values").cloned().unwrap_or(json!([]));
        let labels = self.value().get("labels").cloned().unwrap_or(json!([]));
        data.insert(self.field, values);
        data.insert_suffixed(self.field, "_name", labels);
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{entry_with, simple_field};
    use formpdf_types::{Choice, FieldType};

    fn checkbox_field() -> FieldDescriptor {
        let mut field = simple_field(7, FieldType::Checkbox, "Toppings");
        field.choices = vec![
            Choice {
                text: "Extra Cheese".into(),
                value: "cheese".into(),
                price: None,
            },
            Choice {
                text: "Olives".into(),
                value: "olives".into(),
                price: None,
            },
        ];
        field
    }

    #[test]
    fn collects_ticked_inputs_only() {
        let field = checkbox_field();
        let entry = entry_with(&[("7.1", "cheese"), ("7.2", ""), ("7.3", "olives")]);
        let checkbox = Checkbox::new(&field, &entry);
        assert_eq!(checkbox.labels(), vec!["Extra Cheese", "Olives"]);
        let html = checkbox.value_html();
        assert!(html.starts_with("<ul class=\"bulleted\">"));
        assert!(html.contains("<li>Olives</li>"));
    }

    #[test]
    fn double_digit_inputs_keep_choice_order() {
        let mut field = simple_field(7, FieldType::Checkbox, "Toppings");
        field.choices = (1..=12)
            .map(|n| Choice {
                text: format!("Choice {n}"),
                value: format!("c{n}"),
                price: None,
            })
            .collect();
        let entry = entry_with(&[("7.2", "c2"), ("7.10", "c10")]);
        let checkbox = Checkbox::new(&field, &entry);
        assert_eq!(checkbox.value().get("values"), Some(&json!(["c2", "c10"])));
        assert_eq!(checkbox.labels(), vec!["Choice 2", "Choice 10"]);
    }

    #[test]
    fn nothing_ticked_is_empty() {
        let field = checkbox_field();
        let entry = entry_with(&[("7.1", "")]);
        let checkbox = Checkbox::new(&field, &entry);
        assert!(checkbox.is_empty());
        assert_eq!(checkbox.value_html(), "");
    }

    #[test]
    fn form_data_carries_values_and_names() {
        let field = checkbox_field();
        let entry = entry_with(&[("7.1", "cheese")]);
        let data = Checkbox::new(&field, &entry).form_data();
        assert_eq!(data.get("7"), Some(&json!(["cheese"])));
        assert_eq!(data.get("Toppings_name"), Some(&json!(["Extra Cheese"])));
    }
}
