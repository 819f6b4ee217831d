//! The row/column layout state machine.
//!
//! Consumes fields in form order and emits row wrapper markup based on each
//! field's CSS layout hint. Invariant: every opened row closes exactly once,
//! and closing an already-closed container is a no-op.

use formpdf_types::{FieldDescriptor, FieldType};

/// Column layout hint parsed from a field's CSS class string.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ColumnHint {
    /// Full-width field; no column grouping.
    None,
    /// First slot of a row with the given column count.
    Start(u8),
    /// A later slot of a row with the given column count.
    Follow(u8),
}

impl ColumnHint {
    /// Malformed or unknown hints degrade to full width rather than failing.
    pub fn parse(css_class: &str) -> Self {
        for class in css_class.split_whitespace() {
            match class {
                "gf_left_half" => return Self::Start(2),
                "gf_right_half" => return Self::Follow(2),
                "gf_left_third" => return Self::Start(3),
                "gf_middle_third" | "gf_right_third" => return Self::Follow(3),
                _ => {}
            }
        }
        Self::None
    }

    fn width(self) -> Option<u8> {
        match self {
            Self::None => None,
            Self::Start(w) | Self::Follow(w) => Some(w),
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum State {
    Closed,
    OpenFull,
    OpenPartial { filled: u8, width: u8 },
}

/// Block-level field types never share a row with anything.
fn groupable(field: &FieldDescriptor) -> bool {
    !matches!(field.field_type, FieldType::Html | FieldType::Section)
}

pub struct FieldContainer {
    state: State,
    row_count: usize,
}

impl Default for FieldContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldContainer {
    pub fn new() -> Self {
        Self {
            state: State::Closed,
            row_count: 0,
        }
    }

    /// Processes one field in form order, appending any wrapper markup to
    /// `out`. Call before emitting the field's own markup.
    pub fn handle(&mut self, field: &FieldDescriptor, out: &mut String) {
        let hint = if groupable(field) {
            ColumnHint::parse(&field.css_class)
        } else {
            // Non-groupable fields break out of any open row and take a
            // fresh full-width one.
            ColumnHint::None
        };

        match (self.state, hint) {
            // A follow-up slot that fits the open row renders inline.
            (State::OpenPartial { filled, width }, ColumnHint::Follow(w))
                if w == width && filled < width =>
            {
                self.state = State::OpenPartial {
                    filled: filled + 1,
                    width,
                };
            }
            (state, hint) => {
                if state != State::Closed {
                    self.close(out);
                }
                self.open(hint, out);
            }
        }
    }

    fn open(&mut self, hint: ColumnHint, out: &mut String) {
        self.row_count += 1;
        let stripe = if self.row_count % 2 == 1 { "odd" } else { "even" };
        match hint.width() {
            Some(width) => {
                out.push_str(&format!(
                    "<div class=\"row-separator {stripe} columns-{width}\">"
                ));
                self.state = State::OpenPartial { filled: 1, width };
            }
            None => {
                out.push_str(&format!("<div class=\"row-separator {stripe}\">"));
                self.state = State::OpenFull;
            }
        }
    }

    /// Closes the open row, if any. Safe to call repeatedly.
    pub fn close(&mut self, out: &mut String) {
        if self.state != State::Closed {
            out.push_str("</div>");
            self.state = State::Closed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formpdf_types::FieldDescriptor;

    fn field(css: &str) -> FieldDescriptor {
        FieldDescriptor {
            css_class: css.to_string(),
            ..Default::default()
        }
    }

    fn html_field() -> FieldDescriptor {
        FieldDescriptor {
            field_type: FieldType::Html,
            ..Default::default()
        }
    }

    fn openers(s: &str) -> usize {
        s.matches("<div class=\"row-separator").count()
    }

    fn closers(s: &str) -> usize {
        s.matches("</div>").count()
    }

    #[test]
    fn hint_parsing() {
        assert_eq!(ColumnHint::parse("gf_left_half"), ColumnHint::Start(2));
        assert_eq!(ColumnHint::parse("big gf_right_third"), ColumnHint::Follow(3));
        assert_eq!(ColumnHint::parse("gf_bogus_hint"), ColumnHint::None);
        assert_eq!(ColumnHint::parse(""), ColumnHint::None);
    }

    #[test]
    fn two_column_pairs_share_rows() {
        let mut container = FieldContainer::new();
        let mut out = String::new();
        for css in ["gf_left_half", "gf_right_half", "gf_left_half", "gf_right_half"] {
            container.handle(&field(css), &mut out);
        }
        container.close(&mut out);
        assert_eq!(openers(&out), 2);
        assert_eq!(closers(&out), 2);
    }

    #[test]
    fn full_width_fields_rotate_rows() {
        let mut container = FieldContainer::new();
        let mut out = String::new();
        container.handle(&field(""), &mut out);
        container.handle(&field(""), &mut out);
        container.close(&mut out);
        assert_eq!(openers(&out), 2);
        assert_eq!(closers(&out), 2);
        assert!(out.contains("row-separator odd"));
        assert!(out.contains("row-separator even"));
    }

    #[test]
    fn mismatched_shape_closes_and_reopens() {
        let mut container = FieldContainer::new();
        let mut out = String::new();
        container.handle(&field("gf_left_half"), &mut out);
        // A third-width follow does not fit a halves row.
        container.handle(&field("gf_middle_third"), &mut out);
        container.close(&mut out);
        assert_eq!(openers(&out), 2);
        assert_eq!(closers(&out), 2);
        assert!(out.contains("columns-2"));
        assert!(out.contains("columns-3"));
    }

    #[test]
    fn overfull_row_spills_into_a_new_one() {
        let mut container = FieldContainer::new();
        let mut out = String::new();
        for css in ["gf_left_half", "gf_right_half", "gf_right_half"] {
            container.handle(&field(css), &mut out);
        }
        container.close(&mut out);
        assert_eq!(openers(&out), 2);
        assert_eq!(closers(&out), 2);
    }

    #[test]
    fn html_block_breaks_an_open_partial_row() {
        let mut container = FieldContainer::new();
        let mut out = String::new();
        container.handle(&field("gf_left_half"), &mut out);
        container.handle(&html_field(), &mut out);
        container.close(&mut out);
        assert_eq!(openers(&out), 2);
        assert_eq!(closers(&out), 2);
    }

    #[test]
    fn close_is_idempotent() {
        let mut container = FieldContainer::new();
        let mut out = String::new();
        container.handle(&field(""), &mut out);
        container.close(&mut out);
        container.close(&mut out);
        container.close(&mut out);
        assert_eq!(openers(&out), 1);
        assert_eq!(closers(&out), 1);
    }

    #[test]
    fn closing_a_fresh_container_emits_nothing() {
        let mut container = FieldContainer::new();
        let mut out = String::new();
        container.close(&mut out);
        assert!(out.is_empty());
    }
}
