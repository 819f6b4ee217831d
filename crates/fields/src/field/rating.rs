//! Rating survey fields: one selected choice.

use crate::escape;
use crate::interface::FieldValue;
use formpdf_types::{Entry, FieldDescriptor};
use serde_json::Value;
use std::cell::OnceCell;

pub struct Rating<'a> {
    field: &'a FieldDescriptor,
    entry: &'a Entry,
    cache: OnceCell<Value>,
}

impl<'a> Rating<'a> {
    pub fn new(field: &'a FieldDescriptor, entry: &'a Entry) -> Self {
        Self {
            field,
            entry,
            cache: OnceCell::new(),
        }
    }
}

impl FieldValue for Rating<'_> {
    fn descriptor(&self) -> &FieldDescriptor {
        self.field
    }

    fn value(&self) -> &Value {
        self.cache.get_or_init(|| {
            let raw = self.entry.field_value(self.field.id).unwrap_or_default();
            Value::String(self.field.choice_text(raw).unwrap_or(raw).to_string())
        })
    }

    fn value_html(&self) -> String {
        escape::html(self.value().as_str().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{entry_with, simple_field};
    use formpdf_types::{Choice, FieldType};

    #[test]
    fn resolves_the_selected_rating() {
        let mut field = simple_field(23, FieldType::Rating, "Satisfaction");
        field.choices = vec![Choice {
            text: "Very satisfied".into(),
            value: "5".into(),
            price: None,
        }];
        let entry = entry_with(&[("23", "5")]);
        assert_eq!(Rating::new(&field, &entry).value_html(), "Very satisfied");
    }
}
