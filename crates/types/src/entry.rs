//! A single submitted form entry.

use crate::ids::{EntryId, FieldId, FormId, InputKey, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The submitted data for one form instance.
///
/// Values are stored flat, keyed by input key: simple fields under their bare
/// field id, multi-part fields under dotted keys. Immutable for the duration
/// of a render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub form_id: FormId,
    #[serde(default)]
    pub values: BTreeMap<InputKey, String>,
    #[serde(default)]
    pub created_by: Option<UserId>,
    #[serde(default)]
    pub ip: String,
    pub date_created: DateTime<Utc>,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Entry {
    /// The raw value stored under `key`, if any.
    pub fn value(&self, key: &InputKey) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// The raw value of a simple single-input field.
    pub fn field_value(&self, id: FieldId) -> Option<&str> {
        self.value(&InputKey::field(id))
    }

    /// The raw value of one sub-input of a multi-part field.
    pub fn input_value(&self, id: FieldId, part: u32) -> Option<&str> {
        self.value(&InputKey::input(id, part))
    }

    /// All stored `(key, value)` pairs belonging to a field, in sub-input order.
    ///
    /// For field 3 this yields `"3"`, `"3.1"`, `"3.2"`, ... but not `"30"`.
    /// Map order is lexicographic, which would put `"3.10"` before `"3.2"`,
    /// so the keys are reordered by their numeric part suffix.
    pub fn field_values(&self, id: FieldId) -> impl Iterator<Item = (&InputKey, &str)> {
        let mut pairs: Vec<_> = self
            .values
            .iter()
            .filter(|(k, _)| k.field_id() == Some(id))
            .map(|(k, v)| (k, v.as_str()))
            .collect();
        pairs.sort_by_key(|(k, _)| k.part());
        pairs.into_iter()
    }

    /// Age of the entry relative to `now`, in whole minutes.
    pub fn age_minutes(&self, now: DateTime<Utc>) -> i64 {
        (now - self.date_created).num_minutes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry() -> Entry {
        Entry {
            id: EntryId(101),
            form_id: FormId(7),
            values: BTreeMap::from([
                (InputKey::from("3"), "plain".to_string()),
                (InputKey::from("3.1"), "part one".to_string()),
                (InputKey::from("30"), "other field".to_string()),
            ]),
            created_by: None,
            ip: "203.0.113.7".to_string(),
            date_created: Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap(),
            currency: "USD".to_string(),
        }
    }

    #[test]
    fn field_values_does_not_match_prefix_ids() {
        let entry = entry();
        let keys: Vec<_> = entry
            .field_values(FieldId(3))
            .map(|(k, _)| k.as_str().to_string())
            .collect();
        assert_eq!(keys, vec!["3", "3.1"]);
    }

    #[test]
    fn field_values_follow_sub_input_order() {
        let mut entry = entry();
        entry.values.insert(InputKey::from("3.10"), "part ten".to_string());
        entry.values.insert(InputKey::from("3.2"), "part two".to_string());
        let keys: Vec<_> = entry
            .field_values(FieldId(3))
            .map(|(k, _)| k.as_str().to_string())
            .collect();
        assert_eq!(keys, vec!["3", "3.1", "3.2", "3.10"]);
    }

    #[test]
    fn age_in_minutes() {
        let entry = entry();
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 32, 10).unwrap();
        assert_eq!(entry.age_minutes(now), 32);
    }
}
