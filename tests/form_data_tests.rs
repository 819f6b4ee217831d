//! Form-data contract tests over the public surface.

mod common;

use common::{entry, field, form};
use formpdf::fields::form_data;
use formpdf::fields::{FieldContext, FieldValue, NoUploads, RenderPrefs};
use formpdf::types::{FieldId, FieldInput, FieldType, InputKey};
use formpdf::FieldFactory;

#[test]
fn every_field_is_reachable_under_all_three_spellings() {
    let form = form(vec![
        field(1, FieldType::Text, "Name"),
        field(2, FieldType::Email, "Email"),
    ]);
    let entry = entry(&[("1", "Ada"), ("2", "ada@example.test")]);
    let prefs = RenderPrefs::default();
    let ctx = FieldContext {
        form: &form,
        entry: &entry,
        prefs: &prefs,
        uploads: &NoUploads,
    };
    let factory = FieldFactory::new(ctx);
    let data = form_data::collect(&factory);

    for (id, label, expected) in [(1, "Name", "Ada"), (2, "Email", "ada@example.test")] {
        let spellings = [format!("{id}.{label}"), format!("{id}"), label.to_string()];
        for key in &spellings {
            assert_eq!(
                data.get(key).and_then(|v| v.as_str()),
                Some(expected),
                "missing spelling {key}"
            );
        }
        assert_eq!(data.get(&spellings[0]), data.get(&spellings[1]));
        assert_eq!(data.get(&spellings[1]), data.get(&spellings[2]));
    }
}

#[test]
fn value_is_idempotent_across_calls() {
    let mut name = field(3, FieldType::Name, "Name");
    name.inputs = vec![
        FieldInput {
            id: InputKey::input(FieldId(3), 3),
            label: "First".into(),
        },
        FieldInput {
            id: InputKey::input(FieldId(3), 6),
            label: "Last".into(),
        },
    ];
    let form = form(vec![name]);
    let entry = entry(&[("3.3", "Ada"), ("3.6", "Lovelace")]);
    let prefs = RenderPrefs::default();
    let ctx = FieldContext {
        form: &form,
        entry: &entry,
        prefs: &prefs,
        uploads: &NoUploads,
    };
    let factory = FieldFactory::new(ctx);
    let normalizer = factory.create(&form.fields[0]);

    let first = normalizer.value().clone();
    for _ in 0..3 {
        assert_eq!(normalizer.value(), &first);
    }
    assert_eq!(normalizer.html(), normalizer.html());
}

#[test]
fn collected_data_includes_the_products_keys() {
    let mut product = field(4, FieldType::Product, "Workshop");
    product.base_price = Some("$150.00".into());
    let form = form(vec![field(1, FieldType::Text, "Name"), product]);
    let entry = entry(&[
        ("1", "Ada"),
        ("4.1", "Workshop"),
        ("4.2", "$150.00"),
        ("4.3", "1"),
    ]);
    let prefs = RenderPrefs::default();
    let ctx = FieldContext {
        form: &form,
        entry: &entry,
        prefs: &prefs,
        uploads: &NoUploads,
    };
    let factory = FieldFactory::new(ctx);
    let data = form_data::collect(&factory);

    let totals = data.get("products_totals").expect("totals present");
    assert_eq!(totals["total"].as_f64(), Some(150.0));
    assert!(data.get("products").is_some());
}
