//! The composite wrapper for poll/quiz/survey/post-category/post-custom
//! fields: owns the inner normalizer resolved from the field's `input_type`
//! and forwards every call to it.
//!
//! The inner cache is primed at construction so later lookups never
//! recompute.

use crate::form_data::FormData;
use crate::interface::FieldValue;
use formpdf_types::FieldDescriptor;
use serde_json::Value;

pub struct Composite<'a> {
    field: &'a FieldDescriptor,
    inner: Box<dyn FieldValue + 'a>,
}

impl<'a> Composite<'a> {
    pub fn new(field: &'a FieldDescriptor, inner: Box<dyn FieldValue + 'a>) -> Self {
        inner.value();
        Self { field, inner }
    }
}

impl FieldValue for Composite<'_> {
    fn descriptor(&self) -> &FieldDescriptor {
        self.field
    }

    fn value(&self) -> &Value {
        self.inner.value()
    }

    fn value_html(&self) -> String {
        self.inner.value_html()
    }

    fn form_data(&self) -> FormData {
        self.inner.form_data()
    }

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn is_field_empty(&self) -> bool {
        self.inner.is_field_empty()
    }

    fn html(&self) -> String {
        self.inner.html()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::radio::Radio;
    use crate::test_support::{entry_with, simple_field};
    use formpdf_types::{Choice, FieldType};

    #[test]
    fn forwards_to_the_inner_normalizer() {
        let mut field = simple_field(18, FieldType::Poll, "Favourite?");
        field.input_type = Some(FieldType::Radio);
        field.choices = vec![Choice {
            text: "Blue".into(),
            value: "b".into(),
            price: None,
        }];
        let entry = entry_with(&[("18", "b")]);
        let poll = Composite::new(&field, Box::new(Radio::new(&field, &entry)));
        assert_eq!(poll.value_html(), "Blue");
        assert!(!poll.is_empty());
        assert_eq!(poll.descriptor().field_type, FieldType::Poll);
    }
}
