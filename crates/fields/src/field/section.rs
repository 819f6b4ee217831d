//! Section breaks: a heading, optionally with its description, empty only if
//! every contained field is empty.

use crate::context::FieldContext;
use crate::escape;
use crate::factory::FieldFactory;
use crate::form_data::FormData;
use crate::interface::FieldValue;
use formpdf_types::FieldDescriptor;
use serde_json::Value;
use std::cell::OnceCell;

pub struct Section<'a> {
    field: &'a FieldDescriptor,
    ctx: FieldContext<'a>,
    factory: FieldFactory<'a>,
    cache: OnceCell<Value>,
}

impl<'a> Section<'a> {
    pub fn new(field: &'a FieldDescriptor, ctx: FieldContext<'a>, factory: FieldFactory<'a>) -> Self {
        Self {
            field,
            ctx,
            factory,
            cache: OnceCell::new(),
        }
    }
}

impl FieldValue for Section<'_> {
    fn descriptor(&self) -> &FieldDescriptor {
        self.field
    }

    fn value(&self) -> &Value {
        self.cache
            .get_or_init(|| Value::String(self.field.description.clone()))
    }

    fn value_html(&self) -> String {
        escape::sanitize_rich(self.value().as_str().unwrap_or_default())
    }

    /// A section break is empty only when every field it contains, resolved
    /// through the same factory, is empty.
    fn is_empty(&self) -> bool {
        self.ctx
            .form
            .section_fields(self.field.id)
            .into_iter()
            .filter(|f| !f.field_type.is_display_only())
            .all(|f| self.factory.create(f).is_empty())
    }

    fn form_data(&self) -> FormData {
        FormData::new()
    }

    fn html(&self) -> String {
        let mut out = format!(
            "<h3 id=\"field-{}\" class=\"gfpdf-section-title\">{}</h3>",
            self.field.id,
            escape::html(self.field.label.trim())
        );
        if self.ctx.prefs.show_section_content && !self.field.description.trim().is_empty() {
            out.push_str(&format!(
                "<div class=\"gfpdf-section-description\">{}</div>",
                self.value_html()
            ));
        }
        out
    }
}
