//! File uploads: single URLs or JSON-array multi-file values, with local
//! path resolution for form-data consumers.

use crate::context::FieldContext;
use crate::escape;
use crate::form_data::FormData;
use crate::interface::FieldValue;
use formpdf_types::FieldDescriptor;
use serde_json::{Value, json};
use std::cell::OnceCell;

pub struct FileUpload<'a> {
    field: &'a FieldDescriptor,
    ctx: FieldContext<'a>,
    cache: OnceCell<Value>,
}

impl<'a> FileUpload<'a> {
    pub fn new(field: &'a FieldDescriptor, ctx: FieldContext<'a>) -> Self {
        Self {
            field,
            ctx,
            cache: OnceCell::new(),
        }
    }

    fn urls(&self) -> Vec<&str> {
        self.value()
            .as_array()
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

fn basename(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

impl FieldValue for FileUpload<'_> {
    fn descriptor(&self) -> &FieldDescriptor {
        self.field
    }

    fn value(&self) -> &Value {
        self.cache.get_or_init(|| {
            let raw = self
                .ctx
                .entry
                .field_value(self.field.id)
                .unwrap_or_default();
            if raw.is_empty() {
                return json!([]);
            }
            if raw.trim_start().starts_with('[') {
                if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(raw) {
                    let urls: Vec<Value> = items
                        .into_iter()
                        .filter(|v| v.as_str().is_some_and(|s| !s.is_empty()))
                        .collect();
                    return Value::Array(urls);
                }
            }
            json!([raw])
        })
    }

    fn value_html(&self) -> String {
        self.urls()
            .iter()
            .map(|url| {
                format!(
                    "<a href=\"{}\">{}</a>",
                    escape::html(url),
                    escape::html(basename(url))
                )
            })
            .collect::<Vec<_>>()
            .join("<br />")
    }

    fn form_data(&self) -> FormData {
        let mut data = FormData::new();
        data.insert(self.field, self.value().clone());

        // Local filesystem paths where resolvable; the URL otherwise.
        let paths: Vec<Value> = self
            .urls()
            .iter()
            .map(|url| {
                self.ctx
                    .uploads
                    .resolve(url)
                    .map(|p| Value::String(p.to_string_lossy().into_owned()))
                    .unwrap_or_else(|| Value::String((*url).to_string()))
            })
            .collect();
        data.insert_suffixed(self.field, "_path", Value::Array(paths));
        data
    }
}
