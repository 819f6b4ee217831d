//! Shared fixtures for normalizer unit tests.

use chrono::{TimeZone, Utc};
use formpdf_types::{Entry, EntryId, FieldDescriptor, FieldId, FieldType, Form, FormId, InputKey};
use std::collections::BTreeMap;

pub fn simple_field(id: u32, field_type: FieldType, label: &str) -> FieldDescriptor {
    FieldDescriptor {
        id: FieldId(id),
        field_type,
        label: label.to_string(),
        ..Default::default()
    }
}

pub fn entry_with(values: &[(&str, &str)]) -> Entry {
    Entry {
        id: EntryId(501),
        form_id: FormId(1),
        values: values
            .iter()
            .map(|(k, v)| (InputKey::from(*k), v.to_string()))
            .collect::<BTreeMap<_, _>>(),
        created_by: None,
        ip: "198.51.100.4".to_string(),
        date_created: Utc.with_ymd_and_hms(2026, 2, 14, 9, 30, 0).unwrap(),
        currency: "USD".to_string(),
    }
}

pub fn form_with(fields: Vec<FieldDescriptor>) -> Form {
    Form {
        id: FormId(1),
        title: "Test Form".to_string(),
        fields,
        pagination: None,
    }
}
