//! Output filename resolution: merge-tag substitution followed by
//! filesystem sanitisation.

use formpdf_types::{Entry, FieldId, Form};
use itertools::Itertools;

/// Substitutes merge tags in a filename pattern against one form/entry pair.
///
/// Supported tags: `{form_id}`, `{entry_id}`, `{form_title}`,
/// `{date_created:FMT}` (chrono format string), and `{Label:ID}` which
/// expands to the submitted value of field `ID`. Unknown tags resolve to the
/// empty string.
pub fn resolve_filename(pattern: &str, form: &Form, entry: &Entry) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        match tail.find('}') {
            Some(end) => {
                out.push_str(&resolve_tag(&tail[..end], form, entry));
                rest = &tail[end + 1..];
            }
            None => {
                // Unterminated tag, keep the literal text.
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

fn resolve_tag(tag: &str, form: &Form, entry: &Entry) -> String {
    match tag {
        "form_id" => form.id.to_string(),
        "entry_id" => entry.id.to_string(),
        "form_title" => form.title.clone(),
        _ => {
            if let Some(format) = tag.strip_prefix("date_created:") {
                return entry.date_created.format(format).to_string();
            }
            if let Some((_, id)) = tag.split_once(':') {
                if let Ok(id) = id.trim().parse::<u32>() {
                    return field_text(FieldId(id), entry);
                }
            }
            log::debug!("unknown filename merge tag '{{{tag}}}'");
            String::new()
        }
    }
}

/// Joined sub-input values of one field, in key order.
fn field_text(id: FieldId, entry: &Entry) -> String {
    entry
        .field_values(id)
        .map(|(_, v)| v)
        .filter(|v| !v.trim().is_empty())
        .join(" ")
}

/// Strips characters that are invalid in filenames on common filesystems and
/// collapses the result to something safe to write.
pub fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| !matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|'))
        .filter(|c| !c.is_control())
        .collect();
    let trimmed = cleaned.trim().trim_matches('.').trim();
    if trimmed.is_empty() {
        "document".to_string()
    } else {
        trimmed.to_string()
    }
}
