//! Consent and terms-of-service fields.
//!
//! Always reported non-empty so declined consent still occupies its layout
//! slot; `is_field_empty` exposes the real accepted/declined state.

use crate::escape;
use crate::form_data::FormData;
use crate::interface::FieldValue;
use formpdf_types::{Entry, FieldDescriptor};
use serde_json::{Value, json};
use std::cell::OnceCell;

pub struct Consent<'a> {
    field: &'a FieldDescriptor,
    entry: &'a Entry,
    cache: OnceCell<Value>,
}

impl<'a> Consent<'a> {
    pub fn new(field: &'a FieldDescriptor, entry: &'a Entry) -> Self {
        Self {
            field,
            entry,
            cache: OnceCell::new(),
        }
    }

    fn accepted(&self) -> bool {
        self.value()
            .get("accepted")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }
}

impl FieldValue for Consent<'_> {
    fn descriptor(&self) -> &FieldDescriptor {
        self.field
    }

    fn value(&self) -> &Value {
        self.cache.get_or_init(|| {
            // Consent fields split across .1 (tick) / .2 (statement); plain
            // terms-of-service fields store the acceptance under the bare id.
            let (accepted, statement) = if self.field.inputs.is_empty() {
                let raw = self.entry.field_value(self.field.id).unwrap_or_default();
                (!raw.is_empty(), raw.to_string())
            } else {
                let tick = self
                    .entry
                    .input_value(self.field.id, 1)
                    .unwrap_or_default();
                let statement = self
                    .entry
                    .input_value(self.field.id, 2)
                    .unwrap_or_default();
                (!tick.is_empty() && tick != "0", statement.to_string())
            };
            json!({ "accepted": accepted, "statement": statement })
        })
    }

    fn value_html(&self) -> String {
        let statement = self
            .value()
            .get("statement")
            .and_then(Value::as_str)
            .unwrap_or_default();
        if self.accepted() {
            format!("&#10004; {}", escape::sanitize_rich(statement))
        } else {
            String::from("&#10008;")
        }
    }

    fn form_data(&self) -> FormData {
        let mut data = FormData::new();
        data.insert(self.field, self.value().clone());
        data.insert_suffixed(self.field, "_value", Value::Bool(self.accepted()));
        data
    }

    /// Consent always occupies its slot in the rendered document.
    fn is_empty(&self) -> bool {
        false
    }

    fn is_field_empty(&self) -> bool {
        !self.accepted()
    }
}
