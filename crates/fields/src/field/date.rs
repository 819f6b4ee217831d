//! Date fields, re-rendered per the field's declared display format.

use crate::escape;
use crate::interface::FieldValue;
use chrono::NaiveDate;
use formpdf_types::{Entry, FieldDescriptor};
use serde_json::Value;
use std::cell::OnceCell;

pub struct Date<'a> {
    field: &'a FieldDescriptor,
    entry: &'a Entry,
    cache: OnceCell<Value>,
}

impl<'a> Date<'a> {
    pub fn new(field: &'a FieldDescriptor, entry: &'a Entry) -> Self {
        Self {
            field,
            entry,
            cache: OnceCell::new(),
        }
    }
}

fn display_format(declared: Option<&str>) -> &'static str {
    let declared = declared.unwrap_or("mdy");
    let (order, _) = declared
        .split_once('_')
        .unwrap_or((declared, ""));
    let sep = if declared.ends_with("_dash") {
        '-'
    } else if declared.ends_with("_dot") {
        '.'
    } else {
        '/'
    };
    match (order, sep) {
        ("dmy", '/') => "%d/%m/%Y",
        ("dmy", '-') => "%d-%m-%Y",
        ("dmy", '.') => "%d.%m.%Y",
        ("ymd", '/') => "%Y/%m/%d",
        ("ymd", '-') => "%Y-%m-%d",
        ("ymd", '.') => "%Y.%m.%d",
        (_, '-') => "%m-%d-%Y",
        (_, '.') => "%m.%d.%Y",
        _ => "%m/%d/%Y",
    }
}

impl FieldValue for Date<'_> {
    fn descriptor(&self) -> &FieldDescriptor {
        self.field
    }

    fn value(&self) -> &Value {
        self.cache.get_or_init(|| {
            let raw = self.entry.field_value(self.field.id).unwrap_or_default();
            if raw.is_empty() {
                return Value::String(String::new());
            }
            // Entries store ISO dates; anything else passes through verbatim.
            match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                Ok(date) => Value::String(
                    date.format(display_format(self.field.date_format.as_deref()))
                        .to_string(),
                ),
                Err(_) => Value::String(raw.to_string()),
            }
        })
    }

    fn value_html(&self) -> String {
        escape::html(self.value().as_str().unwrap_or_default())
    }
}
