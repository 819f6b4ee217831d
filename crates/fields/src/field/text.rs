//! Single-line text values: text, hidden, phone, time, post-title, post-tags.

use crate::escape;
use crate::interface::FieldValue;
use formpdf_types::{Entry, FieldDescriptor};
use serde_json::Value;
use std::cell::OnceCell;

pub struct Text<'a> {
    field: &'a FieldDescriptor,
    entry: &'a Entry,
    cache: OnceCell<Value>,
}

impl<'a> Text<'a> {
    pub fn new(field: &'a FieldDescriptor, entry: &'a Entry) -> Self {
        Self {
            field,
            entry,
            cache: OnceCell::new(),
        }
    }
}

impl FieldValue for Text<'_> {
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
        escape::html(self.value().as_str().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{entry_with, simple_field};
    use formpdf_types::FieldType;

    #[test]
    fn memoizes_the_raw_value() {
        let field = simple_field(1, FieldType::Text, "Nickname");
        let entry = entry_with(&[("1", "gonzo <admin>")]);
        let text = Text::new(&field, &entry);

        let first = text.value() as *const Value;
        let second = text.value() as *const Value;
        assert_eq!(first, second);
        assert_eq!(text.value(), &Value::String("gonzo <admin>".into()));
    }

    #[test]
    fn escapes_markup() {
        let field = simple_field(1, FieldType::Text, "Nickname");
        let entry = entry_with(&[("1", "gonzo <admin>")]);
        let text = Text::new(&field, &entry);
        assert_eq!(text.value_html(), "gonzo &lt;admin&gt;");
        assert!(!text.is_empty());
    }

    #[test]
    fn missing_value_is_empty() {
        let field = simple_field(1, FieldType::Text, "Nickname");
        let entry = entry_with(&[]);
        assert!(Text::new(&field, &entry).is_empty());
    }
}
