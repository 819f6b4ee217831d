//! Post image fields: `url|:|title|:|caption|:|description` storage.

use crate::context::FieldContext;
use crate::escape;
use crate::form_data::FormData;
use crate::interface::FieldValue;
use formpdf_types::FieldDescriptor;
use serde_json::{Value, json};
use std::cell::OnceCell;

pub struct PostImage<'a> {
    field: &'a FieldDescriptor,
    ctx: FieldContext<'a>,
    cache: OnceCell<Value>,
}

impl<'a> PostImage<'a> {
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

impl FieldValue for PostImage<'_> {
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
            let mut parts = raw.split("|:|");
            json!({
                "url": parts.next().unwrap_or_default(),
                "title": parts.next().unwrap_or_default(),
                "caption": parts.next().unwrap_or_default(),
                "description": parts.next().unwrap_or_default(),
            })
        })
    }

    fn value_html(&self) -> String {
        let url = self.part("url");
        if url.is_empty() {
            return String::new();
        }
        let mut out = format!(
            "<img src=\"{}\" alt=\"{}\" class=\"post-image\" />",
            escape::html(url),
            escape::html(self.part("title"))
        );
        for text in [self.part("title"), self.part("caption"), self.part("description")] {
            if !text.is_empty() {
                out.push_str(&format!("<p>{}</p>", escape::html(text)));
            }
        }
        out
    }

    fn form_data(&self) -> FormData {
        let mut data = FormData::new();
        data.insert(self.field, self.value().clone());
        let url = self.part("url");
        let path = self
            .ctx
            .uploads
            .resolve(url)
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|| url.to_string());
        data.insert_suffixed(self.field, "_path", Value::String(path));
        data
    }
}
