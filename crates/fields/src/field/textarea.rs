//! Multi-line text: textarea, post-content, post-excerpt.

use crate::escape;
use crate::interface::FieldValue;
use formpdf_types::{Entry, FieldDescriptor};
use serde_json::Value;
use std::cell::OnceCell;

pub struct Textarea<'a> {
    field: &'a FieldDescriptor,
    entry: &'a Entry,
    cache: OnceCell<Value>,
}

impl<'a> Textarea<'a> {
    pub fn new(field: &'a FieldDescriptor, entry: &'a Entry) -> Self {
        Self {
            field,
            entry,
            cache: OnceCell::new(),
        }
    }
}

impl FieldValue for Textarea<'_> {
    fn descriptor(&self) -> &FieldDescriptor {
        self.field
    }

    fn value(&self) -> &Value {
        self.cache.get_or_init(|| {
            Value::String(
                self.entry
                    .field_value(self.field.id)
                    .unwrap_or_default()
                    .to_string(),
            )
        })
    }

    fn value_html(&self) -> String {
        escape::html_multiline(self.value().as_str().unwrap_or_default())
    }
}
