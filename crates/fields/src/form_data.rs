//! The flattened, multiply-keyed map of field outputs consumed by custom PDF
//! templates.
//!
//! Historically-shipped templates address fields by several spellings at
//! once, so every field is inserted under `"{id}.{label}"`, `"{id}"` and
//! `"{label}"` simultaneously, plus suffixed variants (`_name`, `_value`,
//! `_path`) where a type exposes them. No spelling is canonical; all resolve
//! to the same underlying value.

use crate::factory::FieldFactory;
use formpdf_types::FieldDescriptor;
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormData {
    values: BTreeMap<String, Value>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts one value under all three legacy spellings.
    pub fn insert(&mut self, field: &FieldDescriptor, value: Value) {
        self.insert_suffixed(field, "", value);
    }

    /// Inserts one value under all three legacy spellings with a suffix
    /// appended to each, e.g. `"3.Signature_path"` / `"3_path"` /
    /// `"Signature_path"`.
    pub fn insert_suffixed(&mut self, field: &FieldDescriptor, suffix: &str, value: Value) {
        let label = field.label.trim();
        self.values
            .insert(format!("{}.{}{}", field.id, label, suffix), value.clone());
        if !label.is_empty() {
            self.values.insert(format!("{label}{suffix}"), value.clone());
        }
        self.values.insert(format!("{}{}", field.id, suffix), value);
    }

    /// Inserts a value under a single literal key (per-input parts, the
    /// products aggregate).
    pub fn insert_raw(&mut self, key: impl Into<String>, value: Value) {
        self.values.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Absorbs another map; later inserts win on key collisions.
    pub fn merge(&mut self, other: FormData) {
        self.values.extend(other.values);
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.values.into_iter().collect())
    }
}

/// Builds the complete form-data map for a render: every field's own map
/// plus the products aggregate under its two reserved keys.
pub fn collect(factory: &FieldFactory<'_>) -> FormData {
    let mut data = FormData::new();
    for field in &factory.context().form.fields {
        if field.field_type.is_display_only() {
            continue;
        }
        data.merge(factory.create(field).form_data());
    }

    let aggregate = factory.products().to_value();
    if let Value::Object(mut map) = aggregate {
        if let Some(products) = map.remove("products") {
            data.insert_raw("products", products);
        }
        if let Some(totals) = map.remove("products_totals") {
            data.insert_raw("products_totals", totals);
        }
    }
    data
}
