//! Number fields, currency-aware when the field declares the format.

use crate::escape;
use crate::interface::FieldValue;
use formpdf_types::{Currency, Entry, FieldDescriptor};
use serde_json::Value;
use std::cell::OnceCell;

pub struct Number<'a> {
    field: &'a FieldDescriptor,
    entry: &'a Entry,
    cache: OnceCell<Value>,
}

impl<'a> Number<'a> {
    pub fn new(field: &'a FieldDescriptor, entry: &'a Entry) -> Self {
        Self {
            field,
            entry,
            cache: OnceCell::new(),
        }
    }
}

impl FieldValue for Number<'_> {
    fn descriptor(&self) -> &FieldDescriptor {
        self.field
    }

    fn value(&self) -> &Value {
        self.cache.get_or_init(|| {
            let raw = self.entry.field_value(self.field.id).unwrap_or_default();
            if raw.is_empty() {
                return Value::String(String::new());
            }
            match self.field.number_format.as_deref() {
                Some("currency") => {
                    let currency = Currency::new(&self.entry.currency);
                    Value::String(currency.format(currency.parse(raw)))
                }
                _ => Value::String(raw.to_string()),
            }
        })
    }

    fn value_html(&self) -> String {
        escape::html(self.value().as_str().unwrap_or_default())
    }
}
