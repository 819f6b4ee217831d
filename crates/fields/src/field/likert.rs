//! Likert survey rows: a row-per-input, column-per-choice grid.

use crate::escape;
use crate::interface::FieldValue;
use formpdf_types::{Entry, FieldDescriptor};
use serde_json::{Value, json};
use std::cell::OnceCell;

pub struct Likert<'a> {
    field: &'a FieldDescriptor,
    entry: &'a Entry,
    cache: OnceCell<Value>,
}

impl<'a> Likert<'a> {
    pub fn new(field: &'a FieldDescriptor, entry: &'a Entry) -> Self {
        Self {
            field,
            entry,
            cache: OnceCell::new(),
        }
    }
}

impl FieldValue for Likert<'_> {
    fn descriptor(&self) -> &FieldDescriptor {
        self.field
    }

    fn value(&self) -> &Value {
        self.cache.get_or_init(|| {
            // Multi-row likerts key answers per row input; single-row ones
            // store the column under the bare field id.
            if self.field.inputs.is_empty() {
                let raw = self.entry.field_value(self.field.id).unwrap_or_default();
                let label = self.field.choice_text(raw).unwrap_or(raw);
                return json!({ "": label });
            }
            let mut rows = serde_json::Map::new();
            for input in &self.field.inputs {
                let raw = self.entry.value(&input.id).unwrap_or_default();
                let label = self.field.choice_text(raw).unwrap_or(raw);
                rows.insert(input.label.clone(), Value::String(label.to_string()));
            }
            Value::Object(rows)
        })
    }

    fn value_html(&self) -> String {
        let Some(rows) = self.value().as_object() else {
            return String::new();
        };
        let mut out = String::from("<table class=\"likert\"><thead><tr><th></th>");
        for choice in &self.field.choices {
            out.push_str(&format!("<th>{}</th>", escape::html(&choice.text)));
        }
        out.push_str("</tr></thead><tbody>");
        for (row_label, answer) in rows {
            out.push_str(&format!("<tr><td>{}</td>", escape::html(row_label)));
            let answer = answer.as_str().unwrap_or_default();
            for choice in &self.field.choices {
                if choice.text == answer {
                    out.push_str("<td class=\"selected\">&#10004;</td>");
                } else {
                    out.push_str("<td></td>");
                }
            }
            out.push_str("</tr>");
        }
        out.push_str("</tbody></table>");
        out
    }
}
