//! Address fields: a postal block honoring the zip-before-city convention.

use crate::context::FieldContext;
use crate::escape;
use crate::form_data::FormData;
use crate::interface::FieldValue;
use formpdf_types::FieldDescriptor;
use serde_json::{Value, json};
use std::cell::OnceCell;

pub struct Address<'a> {
    field: &'a FieldDescriptor,
    ctx: FieldContext<'a>,
    cache: OnceCell<Value>,
}

impl<'a> Address<'a> {
    pub fn new(field: &'a FieldDescriptor, ctx: FieldContext<'a>) -> Self {
        Self {
            field,
            ctx,
            cache: OnceCell::new(),
        }
    }

    fn part(&self, key: &str) -> &str {
        self.value()
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }
}

impl FieldValue for Address<'_> {
    fn descriptor(&self) -> &FieldDescriptor {
        self.field
    }

    fn value(&self) -> &Value {
        self.cache.get_or_init(|| {
            let entry = self.ctx.entry;
            let id = self.field.id;
            json!({
                "street": entry.input_value(id, 1).unwrap_or_default(),
                "street2": entry.input_value(id, 2).unwrap_or_default(),
                "city": entry.input_value(id, 3).unwrap_or_default(),
                "state": entry.input_value(id, 4).unwrap_or_default(),
                "zip": entry.input_value(id, 5).unwrap_or_default(),
                "country": entry.input_value(id, 6).unwrap_or_default(),
            })
        })
    }

    fn value_html(&self) -> String {
        let city = self.part("city").trim();
        let state = self.part("state").trim();
        let zip = self.part("zip").trim();

        // "Springfield, IL 62704", or "62704 Springfield, IL" for locales
        // that put the postal code first.
        let mut locality = String::new();
        if self.ctx.prefs.zip_before_city {
            if !zip.is_empty() {
                locality.push_str(zip);
            }
            if !city.is_empty() {
                if !locality.is_empty() {
                    locality.push(' ');
                }
                locality.push_str(city);
            }
            if !state.is_empty() {
                if !locality.is_empty() {
                    locality.push_str(", ");
                }
                locality.push_str(state);
            }
        } else {
            if !city.is_empty() {
                locality.push_str(city);
            }
            if !state.is_empty() {
                if !locality.is_empty() {
                    locality.push_str(", ");
                }
                locality.push_str(state);
            }
            if !zip.is_empty() {
                if !locality.is_empty() {
                    locality.push(' ');
                }
                locality.push_str(zip);
            }
        }

        [
            self.part("street").trim(),
            self.part("street2").trim(),
            locality.as_str(),
            self.part("country").trim(),
        ]
        .iter()
        .filter(|line| !line.is_empty())
        .map(|line| escape::html(line))
        .collect::<Vec<_>>()
        .join("<br />")
    }

    fn form_data(&self) -> FormData {
        let mut data = FormData::new();
        data.insert(self.field, self.value().clone());
        data
    }
}
