//! List fields: simple single-column rows or columnar "advanced" rows.

use crate::escape;
use crate::interface::FieldValue;
use formpdf_types::{Entry, FieldDescriptor};
use serde_json::{Value, json};
use std::cell::OnceCell;

pub struct List<'a> {
    field: &'a FieldDescriptor,
    entry: &'a Entry,
    cache: OnceCell<Value>,
}

impl<'a> List<'a> {
    pub fn new(field: &'a FieldDescriptor, entry: &'a Entry) -> Self {
        Self {
            field,
            entry,
            cache: OnceCell::new(),
        }
    }
}

impl FieldValue for List<'_> {
    fn descriptor(&self) -> &FieldDescriptor {
        self.field
    }

    fn value(&self) -> &Value {
        self.cache.get_or_init(|| {
            let raw = self.entry.field_value(self.field.id).unwrap_or_default();
            if raw.is_empty() {
                return json!([]);
            }
            serde_json::from_str(raw).unwrap_or_else(|_| json!([raw]))
        })
    }

    fn value_html(&self) -> String {
        let Some(rows) = self.value().as_array() else {
            return String::new();
        };
        if rows.is_empty() {
            return String::new();
        }

        // Associative rows mean a columnar list; the first row supplies the
        // header.
        if let Some(first) = rows.first().and_then(Value::as_object) {
            let columns: Vec<&str> = first.keys().map(String::as_str).collect();
            let mut out = String::from("<table class=\"gfield_list\"><thead><tr>");
            for column in &columns {
                out.push_str(&format!("<th>{}</th>", escape::html(column)));
            }
            out.push_str("</tr></thead><tbody>");
            for row in rows {
                out.push_str("<tr>");
                for column in &columns {
                    let cell = row
                        .get(*column)
                        .and_then(Value::as_str)
                        .unwrap_or_default();
                    out.push_str(&format!("<td>{}</td>", escape::html(cell)));
                }
                out.push_str("</tr>");
            }
            out.push_str("</tbody></table>");
            return out;
        }

        let mut out = String::from("<ul class=\"bulleted\">");
        for row in rows {
            let cell = row.as_str().unwrap_or_default();
            out.push_str(&format!("<li>{}</li>", escape::html(cell)));
        }
        out.push_str("</ul>");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{entry_with, simple_field};
    use formpdf_types::FieldType;

    #[test]
    fn simple_rows_render_as_bullets() {
        let field = simple_field(13, FieldType::List, "Chores");
        let entry = entry_with(&[("13", r#"["dishes","laundry"]"#)]);
        let html = List::new(&field, &entry).value_html();
        assert!(html.contains("<li>dishes</li>"));
        assert!(html.contains("<li>laundry</li>"));
    }

    #[test]
    fn columnar_rows_render_headers_from_first_row() {
        let field = simple_field(13, FieldType::List, "Crew");
        let entry = entry_with(&[(
            "13",
            r#"[{"Name":"Ada","Role":"Lead"},{"Name":"Alan","Role":"<QA>"}]"#,
        )]);
        let html = List::new(&field, &entry).value_html();
        assert!(html.contains("<th>Name</th><th>Role</th>"));
        assert!(html.contains("<td>&lt;QA&gt;</td>"));
    }

    #[test]
    fn empty_list_is_empty() {
        let field = simple_field(13, FieldType::List, "Chores");
        let entry = entry_with(&[("13", "[]")]);
        let list = List::new(&field, &entry);
        assert!(list.is_empty());
        assert_eq!(list.value_html(), "");
    }
}
