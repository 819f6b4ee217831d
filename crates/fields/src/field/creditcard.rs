//! Credit card fields: only the masked number and card type ever reach the
//! PDF.

use crate::escape;
use crate::interface::FieldValue;
use formpdf_types::{Entry, FieldDescriptor};
use serde_json::{Value, json};
use std::cell::OnceCell;

pub struct CreditCard<'a> {
    field: &'a FieldDescriptor,
    entry: &'a Entry,
    cache: OnceCell<Value>,
}

impl<'a> CreditCard<'a> {
    pub fn new(field: &'a FieldDescriptor, entry: &'a Entry) -> Self {
        Self {
            field,
            entry,
            cache: OnceCell::new(),
        }
    }
}

impl FieldValue for CreditCard<'_> {
    fn descriptor(&self) -> &FieldDescriptor {
        self.field
    }

    fn value(&self) -> &Value {
        self.cache.get_or_init(|| {
            json!({
                "number": self.entry.input_value(self.field.id, 1).unwrap_or_default(),
                "card_type": self.entry.input_value(self.field.id, 4).unwrap_or_default(),
            })
        })
    }

    fn value_html(&self) -> String {
        let number = self
            .value()
            .get("number")
            .and_then(Value::as_str)
            .unwrap_or_default();
        let card_type = self
            .value()
            .get("card_type")
            .and_then(Value::as_str)
            .unwrap_or_default();
        match (card_type.is_empty(), number.is_empty()) {
            (false, false) => format!("{}<br />{}", escape::html(card_type), escape::html(number)),
            (true, false) => escape::html(number),
            _ => String::new(),
        }
    }
}
