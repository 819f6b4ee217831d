//! The per-render products aggregate: the single source of truth for every
//! product, option, shipping and total figure of an entry.
//!
//! Computed once and cached; the individual product-family normalizers only
//! slice it. Invariant: `totals.total == sum(products[*].subtotal) +
//! totals.shipping`, with the order subtotal defined as `total - shipping`
//! rather than recomputed.

use crate::escape;
use formpdf_types::{Currency, Entry, FieldDescriptor, FieldId, FieldType, Form, InputKey};
use serde::Serialize;
use serde_json::Value;
use std::cell::OnceCell;
use std::collections::BTreeMap;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductOption {
    pub field_label: String,
    pub name: String,
    pub price: f64,
    pub price_formatted: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductEntry {
    pub name: String,
    /// Effective unit price: base price plus all selected option prices.
    pub price: f64,
    pub price_formatted: String,
    pub quantity: f64,
    pub options: Vec<ProductOption>,
    pub subtotal: f64,
    pub subtotal_formatted: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrderTotals {
    pub subtotal: f64,
    pub subtotal_formatted: String,
    pub shipping: f64,
    pub shipping_formatted: String,
    pub shipping_name: String,
    pub total: f64,
    pub total_formatted: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductsAggregate {
    pub products: BTreeMap<FieldId, ProductEntry>,
    pub totals: OrderTotals,
}

impl ProductsAggregate {
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Lazily computed aggregation of all product-family fields in one entry.
/// One instance exists per render, shared by every dependent normalizer via
/// `Rc`.
pub struct Products<'a> {
    form: &'a Form,
    entry: &'a Entry,
    cache: OnceCell<ProductsAggregate>,
}

impl<'a> Products<'a> {
    pub fn new(form: &'a Form, entry: &'a Entry) -> Self {
        Self {
            form,
            entry,
            cache: OnceCell::new(),
        }
    }

    pub fn aggregate(&self) -> &ProductsAggregate {
        self.cache.get_or_init(|| self.compute())
    }

    /// The aggregate as a JSON value: `{products: {...}, products_totals:
    /// {...}}`.
    pub fn to_value(&self) -> Value {
        let aggregate = self.aggregate();
        serde_json::json!({
            "products": aggregate.products,
            "products_totals": aggregate.totals,
        })
    }

    fn compute(&self) -> ProductsAggregate {
        let currency = Currency::new(&self.entry.currency);
        let mut products: BTreeMap<FieldId, ProductEntry> = BTreeMap::new();

        for field in &self.form.fields {
            if field.field_type != FieldType::Product {
                continue;
            }
            if let Some(product) = self.read_product(field, &currency) {
                products.insert(field.id, product);
            }
        }

        // Separate quantity fields override the product's own quantity input.
        for field in &self.form.fields {
            if field.field_type != FieldType::Quantity {
                continue;
            }
            let Some(product_id) = field.product_field else {
                continue;
            };
            if let Some(product) = products.get_mut(&product_id) {
                let raw = self.entry.field_value(field.id).unwrap_or("0");
                product.quantity = currency.parse(raw);
            }
        }

        for field in &self.form.fields {
            if field.field_type != FieldType::Option {
                continue;
            }
            let Some(product_id) = field.product_field else {
                continue;
            };
            let Some(product) = products.get_mut(&product_id) else {
                continue;
            };
            for option in self.read_options(field, &currency) {
                product.price += option.price;
                product.options.push(option);
            }
        }

        products.retain(|_, p| p.quantity > 0.0);

        let mut running = 0.0;
        for product in products.values_mut() {
            product.price_formatted = currency.format(product.price);
            product.subtotal = product.price * product.quantity;
            product.subtotal_formatted = currency.format(product.subtotal);
            running += product.subtotal;
        }

        let (shipping, shipping_name) = self.read_shipping(&currency);
        let total = running + shipping;
        // Defined as total minus shipping so the invariant holds even under
        // formatting-induced rounding.
        let subtotal = total - shipping;

        ProductsAggregate {
            products,
            totals: OrderTotals {
                subtotal,
                subtotal_formatted: currency.format(subtotal),
                shipping,
                shipping_formatted: currency.format(shipping),
                shipping_name,
                total,
                total_formatted: currency.format(total),
            },
        }
    }

    fn read_product(
        &self,
        field: &FieldDescriptor,
        currency: &Currency,
    ) -> Option<ProductEntry> {
        // Single-input products store "Name|price" under the bare id;
        // multi-input ones use .1/.2/.3 for name/price/quantity.
        let (name, price_raw, qty_raw) = if let Some(raw) = self.entry.field_value(field.id) {
            let (name, price) = split_choice(raw);
            (name.to_string(), price.map(str::to_string), None)
        } else {
            let name = self.entry.input_value(field.id, 1).map(str::to_string);
            let price = self.entry.input_value(field.id, 2).map(str::to_string);
            let qty = self.entry.input_value(field.id, 3).map(str::to_string);
            if name.is_none() && price.is_none() {
                return None;
            }
            (name.unwrap_or_default(), price, qty)
        };

        let name = if name.is_empty() {
            field.label.clone()
        } else {
            name
        };
        let price_source = price_raw
            .or_else(|| field.base_price.clone())
            .unwrap_or_default();
        let price = currency.parse(&price_source);
        let quantity = match qty_raw {
            Some(q) => currency.parse(&q),
            None if field.disable_quantity => 1.0,
            None => 1.0,
        };

        Some(ProductEntry {
            name,
            price,
            price_formatted: String::new(),
            quantity,
            options: Vec::new(),
            subtotal: 0.0,
            subtotal_formatted: String::new(),
        })
    }

    fn read_options(&self, field: &FieldDescriptor, currency: &Currency) -> Vec<ProductOption> {
        let mut selected: Vec<String> = Vec::new();
        if let Some(raw) = self.entry.field_value(field.id) {
            if !raw.is_empty() {
                selected.push(raw.to_string());
            }
        }
        // Checkbox-style options store one value per sub-input.
        for (key, raw) in self.entry.field_values(field.id) {
            if key.as_str().contains('.') && !raw.is_empty() {
                selected.push(raw.to_string());
            }
        }

        selected
            .iter()
            .map(|raw| {
                let (name, price) = split_choice(raw);
                let price = price
                    .map(|p| currency.parse(p))
                    .or_else(|| {
                        field
                            .choices
                            .iter()
                            .find(|c| c.value == name || c.text == name)
                            .and_then(|c| c.price.as_deref())
                            .map(|p| currency.parse(p))
                    })
                    .unwrap_or(0.0);
                ProductOption {
                    field_label: field.label.clone(),
                    name: name.to_string(),
                    price,
                    price_formatted: currency.format(price),
                }
            })
            .collect()
    }

    fn read_shipping(&self, currency: &Currency) -> (f64, String) {
        for field in &self.form.fields {
            if field.field_type != FieldType::Shipping {
                continue;
            }
            let raw = self
                .entry
                .field_value(field.id)
                .or_else(|| self.entry.value(&InputKey::input(field.id, 1)))
                .unwrap_or("");
            if raw.is_empty() {
                continue;
            }
            let (name, price) = split_choice(raw);
            let amount = match price {
                Some(p) => currency.parse(p),
                None => currency.parse(name),
            };
            let label = if price.is_some() {
                name.to_string()
            } else {
                field.label.clone()
            };
            return (amount, label);
        }
        (0.0, String::new())
    }
}

/// Splits the `"Name|price"` convention used by choice-backed product values.
fn split_choice(raw: &str) -> (&str, Option<&str>) {
    match raw.split_once('|') {
        Some((name, price)) => (name, Some(price)),
        None => (raw, None),
    }
}

/// Renders the whole aggregate as one order-summary table, used by the
/// assembler in place of inline product fields.
pub struct ProductsSummary<'a> {
    products: Rc<Products<'a>>,
}

impl<'a> ProductsSummary<'a> {
    pub fn new(products: Rc<Products<'a>>) -> Self {
        Self { products }
    }

    pub fn is_empty(&self) -> bool {
        self.products.aggregate().is_empty()
    }

    pub fn html(&self) -> String {
        let aggregate = self.products.aggregate();
        if aggregate.is_empty() {
            return String::new();
        }

        let mut out = String::from(
            "<div id=\"products\" class=\"gfpdf-field\"><table class=\"entry-products\">\
             <thead><tr><th class=\"name\">Product</th><th class=\"qty\">Qty</th>\
             <th class=\"price\">Unit Price</th><th class=\"subtotal\">Price</th></tr></thead><tbody>",
        );
        for product in aggregate.products.values() {
            out.push_str("<tr><td class=\"name\">");
            out.push_str(&escape::html(&product.name));
            if !product.options.is_empty() {
                out.push_str("<ul class=\"options\">");
                for option in &product.options {
                    out.push_str(&format!(
                        "<li>{}: {} ({})</li>",
                        escape::html(&option.field_label),
                        escape::html(&option.name),
                        escape::html(&option.price_formatted)
                    ));
                }
                out.push_str("</ul>");
            }
            out.push_str(&format!(
                "</td><td class=\"qty\">{}</td><td class=\"price\">{}</td><td class=\"subtotal\">{}</td></tr>",
                product.quantity,
                escape::html(&product.price_formatted),
                escape::html(&product.subtotal_formatted)
            ));
        }
        out.push_str("</tbody><tfoot>");
        if aggregate.totals.shipping > 0.0 {
            out.push_str(&format!(
                "<tr><td colspan=\"3\" class=\"label\">Subtotal</td><td>{}</td></tr>\
                 <tr><td colspan=\"3\" class=\"label\">Shipping{}</td><td>{}</td></tr>",
                escape::html(&aggregate.totals.subtotal_formatted),
                if aggregate.totals.shipping_name.is_empty() {
                    String::new()
                } else {
                    format!(" ({})", escape::html(&aggregate.totals.shipping_name))
                },
                escape::html(&aggregate.totals.shipping_formatted)
            ));
        }
        out.push_str(&format!(
            "<tr><td colspan=\"3\" class=\"label\">Total</td><td>{}</td></tr>",
            escape::html(&aggregate.totals.total_formatted)
        ));
        out.push_str("</tfoot></table></div>");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formpdf_types::{Choice, EntryId, FormId};
    use chrono::Utc;

    fn product_form() -> Form {
        Form {
            id: FormId(1),
            title: "Order".into(),
            fields: vec![
                FieldDescriptor {
                    id: FieldId(1),
                    field_type: FieldType::Product,
                    label: "T-Shirt".into(),
                    base_price: Some("$20.00".into()),
                    ..Default::default()
                },
                FieldDescriptor {
                    id: FieldId(2),
                    field_type: FieldType::Option,
                    label: "Print".into(),
                    product_field: Some(FieldId(1)),
                    choices: vec![Choice {
                        text: "Front".into(),
                        value: "Front".into(),
                        price: Some("$5.00".into()),
                    }],
                    ..Default::default()
                },
                FieldDescriptor {
                    id: FieldId(3),
                    field_type: FieldType::Shipping,
                    label: "Shipping".into(),
                    ..Default::default()
                },
                FieldDescriptor {
                    id: FieldId(4),
                    field_type: FieldType::Total,
                    label: "Total".into(),
                    ..Default::default()
                },
            ],
            pagination: None,
        }
    }

    fn order_entry() -> Entry {
        Entry {
            id: EntryId(10),
            form_id: FormId(1),
            values: BTreeMap::from([
                (InputKey::from("1.1"), "T-Shirt".to_string()),
                (InputKey::from("1.2"), "$20.00".to_string()),
                (InputKey::from("1.3"), "2".to_string()),
                (InputKey::from("2"), "Front|5".to_string()),
                (InputKey::from("3"), "Express|10".to_string()),
            ]),
            created_by: None,
            ip: String::new(),
            date_created: Utc::now(),
            currency: "USD".to_string(),
        }
    }

    #[test]
    fn totals_invariant_holds() {
        let form = product_form();
        let entry = order_entry();
        let products = Products::new(&form, &entry);
        let aggregate = products.aggregate();

        let sum: f64 = aggregate.products.values().map(|p| p.subtotal).sum();
        assert_eq!(aggregate.totals.total, sum + aggregate.totals.shipping);
        assert_eq!(
            aggregate.totals.subtotal,
            aggregate.totals.total - aggregate.totals.shipping
        );
    }

    #[test]
    fn options_fold_into_unit_price() {
        let form = product_form();
        let entry = order_entry();
        let products = Products::new(&form, &entry);
        let aggregate = products.aggregate();

        let product = &aggregate.products[&FieldId(1)];
        assert_eq!(product.price, 25.0);
        assert_eq!(product.quantity, 2.0);
        assert_eq!(product.subtotal, 50.0);
        assert_eq!(product.options.len(), 1);
        assert_eq!(aggregate.totals.shipping, 10.0);
        assert_eq!(aggregate.totals.shipping_name, "Express");
        assert_eq!(aggregate.totals.total, 60.0);
        assert_eq!(aggregate.totals.total_formatted, "$60.00");
    }

    #[test]
    fn computes_once() {
        let form = product_form();
        let entry = order_entry();
        let products = Products::new(&form, &entry);
        let first = products.aggregate() as *const _;
        let second = products.aggregate() as *const _;
        assert_eq!(first, second);
    }

    #[test]
    fn zero_quantity_products_are_dropped() {
        let form = product_form();
        let mut entry = order_entry();
        entry
            .values
            .insert(InputKey::from("1.3"), "0".to_string());
        let products = Products::new(&form, &entry);
        assert!(products.aggregate().is_empty());
        assert_eq!(products.aggregate().totals.total, 10.0);
    }

    #[test]
    fn summary_table_lists_products_and_totals() {
        let form = product_form();
        let entry = order_entry();
        let products = Rc::new(Products::new(&form, &entry));
        let html = ProductsSummary::new(products).html();
        assert!(html.contains("T-Shirt"));
        assert!(html.contains("$60.00"));
        assert!(html.contains("Express"));
    }
}
