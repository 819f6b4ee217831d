//! Walks a form's fields in page order and concatenates their rendered
//! fragments into a complete document body.

use crate::container::FieldContainer;
use formpdf_fields::products::ProductsSummary;
use formpdf_fields::{FieldFactory, escape};
use std::rc::Rc;

/// Per-render presentation switches, resolved from the PDF configuration.
#[derive(Debug, Clone, Copy)]
pub struct AssemblerOptions {
    /// Render fields whose value is empty.
    pub show_empty: bool,
    /// Render static HTML blocks.
    pub show_html: bool,
    /// Emit page-name headings on multi-page forms.
    pub show_page_names: bool,
}

impl Default for AssemblerOptions {
    fn default() -> Self {
        Self {
            show_empty: false,
            show_html: true,
            show_page_names: false,
        }
    }
}

/// Produces the HTML body for one entry: every renderable field wrapped by
/// the layout container, followed by the order summary when the form sells
/// products.
pub fn assemble_body(factory: &FieldFactory<'_>, options: AssemblerOptions) -> String {
    let form = factory.context().form;
    let multi_page = form.page_count() > 1;

    let mut out = String::new();
    let mut container = FieldContainer::new();
    let mut current_page = 0u32;
    let mut has_products = false;

    for field in &form.fields {
        if field.field_type.is_display_only() {
            continue;
        }

        if multi_page && options.show_page_names && field.page_number != current_page {
            current_page = field.page_number;
            if let Some(title) = form.page_title(current_page) {
                if !title.trim().is_empty() {
                    // Page headings sit outside any row.
                    container.close(&mut out);
                    out.push_str(&format!(
                        "<h3 class=\"gfpdf-page\">{}</h3>",
                        escape::html(title)
                    ));
                }
            }
        }

        // Products render once, as a summary table after the field loop.
        if field.field_type.is_product_family() {
            has_products = true;
            continue;
        }

        let normalizer = factory.create(field);
        if normalizer.is_empty() && !options.show_empty {
            continue;
        }
        if field.field_type == formpdf_types::FieldType::Html && !options.show_html {
            continue;
        }

        container.handle(field, &mut out);
        out.push_str(&normalizer.html());
    }
    container.close(&mut out);

    if has_products {
        let summary = ProductsSummary::new(Rc::clone(factory.products()));
        if !summary.is_empty() {
            out.push_str(&summary.html());
        }
    }

    log::debug!(
        "assembled body for form {} entry {} ({} bytes)",
        form.id,
        factory.context().entry.id,
        out.len()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use formpdf_fields::{FieldContext, NoUploads, RenderPrefs};
    use chrono::Utc;
    use formpdf_types::{
        Entry, EntryId, FieldDescriptor, FieldId, FieldType, Form, FormId, InputKey, Pagination,
    };
    use std::collections::BTreeMap;

    fn field(id: u32, ty: FieldType, label: &str) -> FieldDescriptor {
        FieldDescriptor {
            id: FieldId(id),
            field_type: ty,
            label: label.to_string(),
            ..Default::default()
        }
    }

    fn entry(form: &Form, values: &[(&str, &str)]) -> Entry {
        Entry {
            id: EntryId(1),
            form_id: form.id,
            values: values
                .iter()
                .map(|(k, v)| (InputKey::from(*k), v.to_string()))
                .collect::<BTreeMap<_, _>>(),
            created_by: None,
            ip: String::new(),
            date_created: Utc::now(),
            currency: "USD".to_string(),
        }
    }

    fn assemble(form: &Form, entry: &Entry, options: AssemblerOptions) -> String {
        let prefs = RenderPrefs::default();
        let ctx = FieldContext {
            form,
            entry,
            prefs: &prefs,
            uploads: &NoUploads,
        };
        let factory = FieldFactory::new(ctx);
        assemble_body(&factory, options)
    }

    #[test]
    fn empty_fields_are_skipped_by_default() {
        let form = Form {
            id: FormId(1),
            title: "t".into(),
            fields: vec![field(1, FieldType::Text, "A"), field(2, FieldType::Text, "B")],
            pagination: None,
        };
        let entry = entry(&form, &[("1", "filled")]);

        let body = assemble(&form, &entry, AssemblerOptions::default());
        assert!(body.contains("field-1"));
        assert!(!body.contains("field-2"));

        let body = assemble(
            &form,
            &entry,
            AssemblerOptions {
                show_empty: true,
                ..Default::default()
            },
        );
        assert!(body.contains("field-2"));
    }

    #[test]
    fn wrapper_balance_holds_for_any_stream() {
        let mut f1 = field(1, FieldType::Text, "L");
        f1.css_class = "gf_left_half".into();
        let mut f2 = field(2, FieldType::Text, "R");
        f2.css_class = "gf_right_half".into();
        let form = Form {
            id: FormId(1),
            title: "t".into(),
            fields: vec![f1, f2, field(3, FieldType::Text, "Full")],
            pagination: None,
        };
        let entry = entry(&form, &[("1", "a"), ("2", "b"), ("3", "c")]);
        let body = assemble(&form, &entry, AssemblerOptions::default());
        let opens = body.matches("<div class=\"row-separator").count();
        assert_eq!(opens, 2);
        // Row closers plus the per-field wrapper closers all balance.
        assert_eq!(body.matches("<div").count(), body.matches("</div>").count());
    }

    #[test]
    fn page_headings_appear_on_multi_page_forms() {
        let mut f1 = field(1, FieldType::Text, "A");
        f1.page_number = 1;
        let mut f2 = field(2, FieldType::Text, "B");
        f2.page_number = 2;
        let form = Form {
            id: FormId(1),
            title: "t".into(),
            fields: vec![f1, f2],
            pagination: Some(Pagination {
                pages: vec!["Intro".into(), "Details".into()],
            }),
        };
        let entry = entry(&form, &[("1", "a"), ("2", "b")]);
        let body = assemble(
            &form,
            &entry,
            AssemblerOptions {
                show_page_names: true,
                ..Default::default()
            },
        );
        assert!(body.contains("<h3 class=\"gfpdf-page\">Intro</h3>"));
        assert!(body.contains("<h3 class=\"gfpdf-page\">Details</h3>"));
    }

    #[test]
    fn products_render_once_as_a_summary_table() {
        let mut product = field(1, FieldType::Product, "Mug");
        product.base_price = Some("$10.00".into());
        let form = Form {
            id: FormId(1),
            title: "t".into(),
            fields: vec![product, field(2, FieldType::Total, "Total")],
            pagination: None,
        };
        let entry = entry(&form, &[("1.1", "Mug"), ("1.2", "$10.00"), ("1.3", "2")]);
        let body = assemble(&form, &entry, AssemblerOptions::default());
        assert_eq!(body.matches("entry-products").count(), 1);
        assert!(body.contains("$20.00"));
        // No inline product field markup.
        assert!(!body.contains("field-1"));
    }
}
