//! Signature fields: the stored filename resolved to an on-disk image.

use crate::context::FieldContext;
use crate::escape;
use crate::form_data::FormData;
use crate::interface::FieldValue;
use formpdf_types::FieldDescriptor;
use serde_json::Value;
use std::cell::OnceCell;

// Declared display sizes are tuned for screens; PDFs use a third.
const DISPLAY_SCALE: u32 = 3;
const FALLBACK_WIDTH: u32 = 75;
const FALLBACK_HEIGHT: u32 = 45;

pub struct Signature<'a> {
    field: &'a FieldDescriptor,
    ctx: FieldContext<'a>,
    cache: OnceCell<Value>,
}

impl<'a> Signature<'a> {
    pub fn new(field: &'a FieldDescriptor, ctx: FieldContext<'a>) -> Self {
        Self {
            field,
            ctx,
            cache: OnceCell::new(),
        }
    }

    fn url(&self) -> &str {
        self.value().as_str().unwrap_or_default()
    }
}

impl FieldValue for Signature<'_> {
    fn descriptor(&self) -> &FieldDescriptor {
        self.field
    }

    fn value(&self) -> &Value {
        self.cache.get_or_init(|| {
            Value::String(
                self.ctx
                    .entry
                    .field_value(self.field.id)
                    .unwrap_or_default()
                    .to_string(),
            )
        })
    }

    fn value_html(&self) -> String {
        let url = self.url();
        if url.is_empty() {
            return String::new();
        }

        let (src, width, height) = match self.ctx.uploads.resolve(url) {
            Some(path) => {
                let width = self
                    .field
                    .display_width
                    .map(|w| (w / DISPLAY_SCALE).max(1))
                    .unwrap_or(FALLBACK_WIDTH);
                let height = self
                    .field
                    .display_height
                    .map(|h| (h / DISPLAY_SCALE).max(1))
                    .unwrap_or(FALLBACK_HEIGHT);
                (path.to_string_lossy().into_owned(), width, height)
            }
            // Unreadable file: keep the URL and the safe default size.
            None => (url.to_string(), FALLBACK_WIDTH, FALLBACK_HEIGHT),
        };

        format!(
            "<img src=\"{}\" alt=\"Signature\" width=\"{}\" height=\"{}\" />",
            escape::html(&src),
            width,
            height
        )
    }

    fn form_data(&self) -> FormData {
        let mut data = FormData::new();
        data.insert(self.field, self.value().clone());
        let path = self
            .ctx
            .uploads
            .resolve(self.url())
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.url().to_string());
        data.insert_suffixed(self.field, "_path", Value::String(path));
        data
    }
}
