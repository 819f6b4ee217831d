//! Static HTML blocks. Content is author-supplied markup, so it goes through
//! the restricted sanitizer rather than full escaping.

use crate::escape;
use crate::form_data::FormData;
use crate::interface::FieldValue;
use formpdf_types::FieldDescriptor;
use serde_json::Value;
use std::cell::OnceCell;

pub struct Html<'a> {
    field: &'a FieldDescriptor,
    cache: OnceCell<Value>,
}

impl<'a> Html<'a> {
    pub fn new(field: &'a FieldDescriptor) -> Self {
        Self {
            field,
            cache: OnceCell::new(),
        }
    }
}

impl FieldValue for Html<'_> {
    fn descriptor(&self) -> &FieldDescriptor {
        self.field
    }

    fn value(&self) -> &Value {
        self.cache.get_or_init(|| {
            Value::String(self.field.content.clone().unwrap_or_default())
        })
    }

    fn value_html(&self) -> String {
        escape::sanitize_rich(self.value().as_str().unwrap_or_default())
    }

    // HTML blocks contribute nothing to custom templates.
    fn form_data(&self) -> FormData {
        FormData::new()
    }

    fn html(&self) -> String {
        format!(
            "<div id=\"field-{}\" class=\"gfpdf-html gfpdf-field\"><div class=\"value\">{}</div></div>",
            self.field.id,
            self.value_html()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::simple_field;
    use formpdf_types::FieldType;

    #[test]
    fn keeps_markup_but_sanitizes() {
        let mut field = simple_field(20, FieldType::Html, "");
        field.content = Some("<p>Hi</p><script>evil()</script>".to_string());
        let html = Html::new(&field);
        assert_eq!(html.value_html(), "<p>Hi</p>");
        assert!(html.form_data().is_empty());
    }

    #[test]
    fn no_label_wrapper() {
        let mut field = simple_field(20, FieldType::Html, "ignored");
        field.content = Some("<p>x</p>".to_string());
        let markup = Html::new(&field).html();
        assert!(!markup.contains("class=\"label\""));
    }
}
