//! Shared fixtures for the integration tests.

// Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use formpdf::types::{Entry, EntryId, FieldDescriptor, FieldId, FieldType, Form, FormId, InputKey};
use std::collections::BTreeMap;

pub fn field(id: u32, field_type: FieldType, label: &str) -> FieldDescriptor {
    FieldDescriptor {
        id: FieldId(id),
        field_type,
        label: label.to_string(),
        ..Default::default()
    }
}

pub fn form(fields: Vec<FieldDescriptor>) -> Form {
    Form {
        id: FormId(12),
        title: "Order Form".to_string(),
        fields,
        pagination: None,
    }
}

pub fn entry(values: &[(&str, &str)]) -> Entry {
    Entry {
        id: EntryId(407),
        form_id: FormId(12),
        values: values
            .iter()
            .map(|(k, v)| (InputKey::from(*k), v.to_string()))
            .collect::<BTreeMap<_, _>>(),
        created_by: None,
        ip: "203.0.113.9".to_string(),
        date_created: Utc.with_ymd_and_hms(2026, 2, 14, 9, 30, 0).unwrap(),
        currency: "USD".to_string(),
    }
}
