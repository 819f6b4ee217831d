//! The fallback normalizer: renders whatever the entry stored, as plain
//! text. Used for unmapped field types and as the substitute when a concrete
//! normalizer cannot be constructed.

use crate::escape;
use crate::interface::FieldValue;
use formpdf_types::{Entry, FieldDescriptor};
use itertools::Itertools;
use serde_json::Value;
use std::cell::OnceCell;

pub struct DefaultField<'a> {
    field: &'a FieldDescriptor,
    entry: &'a Entry,
    cache: OnceCell<Value>,
}

impl<'a> DefaultField<'a> {
    pub fn new(field: &'a FieldDescriptor, entry: &'a Entry) -> Self {
        Self {
            field,
            entry,
            cache: OnceCell::new(),
        }
    }
}

impl FieldValue for DefaultField<'_> {
    fn descriptor(&self) -> &FieldDescriptor {
        self.field
    }

    fn value(&self) -> &Value {
        self.cache.get_or_init(|| {
            // Bare value when present, otherwise every stored sub-input
            // joined in key order.
            if let Some(raw) = self.entry.field_value(self.field.id) {
                return Value::String(raw.to_string());
            }
            let joined = self
                .entry
                .field_values(self.field.id)
                .map(|(_, v)| v)
                .filter(|v| !v.is_empty())
                .join(", ");
            Value::String(joined)
        })
    }

    fn value_html(&self) -> String {
        escape::html(self.value().as_str().unwrap_or_default())
    }
}
