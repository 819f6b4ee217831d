//! Product-family normalizers: views over the shared [`Products`] aggregate.
//!
//! None of these perform their own summation; each slices the aggregate for
//! its field and caches the slice.

use crate::escape;
use crate::form_data::FormData;
use crate::interface::FieldValue;
use crate::products::Products;
use formpdf_types::{FieldDescriptor, FieldId};
use serde_json::{Value, json};
use std::cell::OnceCell;
use std::rc::Rc;

pub struct Product<'a> {
    field: &'a FieldDescriptor,
    products: Rc<Products<'a>>,
    cache: OnceCell<Value>,
}

impl<'a> Product<'a> {
    pub fn new(field: &'a FieldDescriptor, products: Rc<Products<'a>>) -> Self {
        Self {
            field,
            products,
            cache: OnceCell::new(),
        }
    }
}

impl FieldValue for Product<'_> {
    fn descriptor(&self) -> &FieldDescriptor {
        self.field
    }

    fn value(&self) -> &Value {
        self.cache.get_or_init(|| {
            match self.products.aggregate().products.get(&self.field.id) {
                Some(entry) => serde_json::to_value(entry).unwrap_or(Value::Null),
                None => Value::Null,
            }
        })
    }

    fn value_html(&self) -> String {
        let value = self.value();
        let name = value.get("name").and_then(Value::as_str).unwrap_or_default();
        let price = value
            .get("price_formatted")
            .and_then(Value::as_str)
            .unwrap_or_default();
        if name.is_empty() {
            return String::new();
        }
        let mut out = format!("{} ({})", escape::html(name), escape::html(price));
        if let Some(options) = value.get("options").and_then(Value::as_array) {
            if !options.is_empty() {
                out.push_str("<ul class=\"options\">");
                for option in options {
                    let option_name = option
                        .get("name")
                        .and_then(Value::as_str)
                        .unwrap_or_default();
                    let option_price = option
                        .get("price_formatted")
                        .and_then(Value::as_str)
                        .unwrap_or_default();
                    out.push_str(&format!(
                        "<li>{} ({})</li>",
                        escape::html(option_name),
                        escape::html(option_price)
                    ));
                }
                out.push_str("</ul>");
            }
        }
        out
    }

    fn form_data(&self) -> FormData {
        let mut data = FormData::new();
        data.insert(self.field, self.value().clone());
        let name = self
            .value()
            .get("name")
            .cloned()
            .unwrap_or(Value::String(String::new()));
        data.insert_suffixed(self.field, "_name", name);
        data
    }
}

/// Option fields slice the options of their associated product.
pub struct OptionField<'a> {
    field: &'a FieldDescriptor,
    product_id: FieldId,
    products: Rc<Products<'a>>,
    cache: OnceCell<Value>,
}

impl<'a> OptionField<'a> {
    pub fn new(
        field: &'a FieldDescriptor,
        product_id: FieldId,
        products: Rc<Products<'a>>,
    ) -> Self {
        Self {
            field,
            product_id,
            products,
            cache: OnceCell::new(),
        }
    }
}

impl FieldValue for OptionField<'_> {
    fn descriptor(&self) -> &FieldDescriptor {
        self.field
    }

    fn value(&self) -> &Value {
        self.cache.get_or_init(|| {
            let aggregate = self.products.aggregate();
            let options: Vec<Value> = aggregate
                .products
                .get(&self.product_id)
                .map(|p| {
                    p.options
                        .iter()
                        .filter(|o| o.field_label == self.field.label)
                        .filter_map(|o| serde_json::to_value(o).ok())
                        .collect()
                })
                .unwrap_or_default();
            Value::Array(options)
        })
    }

    fn value_html(&self) -> String {
        let Some(options) = self.value().as_array() else {
            return String::new();
        };
        if options.is_empty() {
            return String::new();
        }
        let mut out = String::from("<ul class=\"bulleted\">");
        for option in options {
            let name = option
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or_default();
            let price = option
                .get("price_formatted")
                .and_then(Value::as_str)
                .unwrap_or_default();
            out.push_str(&format!(
                "<li>{} ({})</li>",
                escape::html(name),
                escape::html(price)
            ));
        }
        out.push_str("</ul>");
        out
    }
}

/// Quantity fields expose the resolved quantity of their product.
pub struct Quantity<'a> {
    field: &'a FieldDescriptor,
    product_id: FieldId,
    products: Rc<Products<'a>>,
    cache: OnceCell<Value>,
}

impl<'a> Quantity<'a> {
    pub fn new(
        field: &'a FieldDescriptor,
        product_id: FieldId,
        products: Rc<Products<'a>>,
    ) -> Self {
        Self {
            field,
            product_id,
            products,
            cache: OnceCell::new(),
        }
    }
}

impl FieldValue for Quantity<'_> {
    fn descriptor(&self) -> &FieldDescriptor {
        self.field
    }

    fn value(&self) -> &Value {
        self.cache.get_or_init(|| {
            self.products
                .aggregate()
                .products
                .get(&self.product_id)
                .map(|p| json!(p.quantity))
                .unwrap_or(Value::Null)
        })
    }

    fn value_html(&self) -> String {
        match self.value().as_f64() {
            Some(q) => {
                if q.fract() == 0.0 {
                    format!("{}", q as i64)
                } else {
                    format!("{q}")
                }
            }
            None => String::new(),
        }
    }
}

/// Shipping fields expose the order-wide shipping figure.
pub struct Shipping<'a> {
    field: &'a FieldDescriptor,
    products: Rc<Products<'a>>,
    cache: OnceCell<Value>,
}

impl<'a> Shipping<'a> {
    pub fn new(field: &'a FieldDescriptor, products: Rc<Products<'a>>) -> Self {
        Self {
            field,
            products,
            cache: OnceCell::new(),
        }
    }
}

impl FieldValue for Shipping<'_> {
    fn descriptor(&self) -> &FieldDescriptor {
        self.field
    }

    fn value(&self) -> &Value {
        self.cache.get_or_init(|| {
            let totals = &self.products.aggregate().totals;
            json!({
                "name": totals.shipping_name,
                "shipping": totals.shipping,
                "shipping_formatted": totals.shipping_formatted,
            })
        })
    }

    fn value_html(&self) -> String {
        let value = self.value();
        let name = value.get("name").and_then(Value::as_str).unwrap_or_default();
        let amount = value
            .get("shipping_formatted")
            .and_then(Value::as_str)
            .unwrap_or_default();
        if name.is_empty() {
            escape::html(amount)
        } else {
            format!("{} ({})", escape::html(name), escape::html(amount))
        }
    }

    fn is_empty(&self) -> bool {
        self.products.aggregate().totals.shipping == 0.0
    }
}

/// Total fields expose the grand total.
pub struct Total<'a> {
    field: &'a FieldDescriptor,
    products: Rc<Products<'a>>,
    cache: OnceCell<Value>,
}

impl<'a> Total<'a> {
    pub fn new(field: &'a FieldDescriptor, products: Rc<Products<'a>>) -> Self {
        Self {
            field,
            products,
            cache: OnceCell::new(),
        }
    }
}

impl FieldValue for Total<'_> {
    fn descriptor(&self) -> &FieldDescriptor {
        self.field
    }

    fn value(&self) -> &Value {
        self.cache.get_or_init(|| {
            let totals = &self.products.aggregate().totals;
            json!({
                "total": totals.total,
                "total_formatted": totals.total_formatted,
            })
        })
    }

    fn value_html(&self) -> String {
        escape::html(
            self.value()
                .get("total_formatted")
                .and_then(Value::as_str)
                .unwrap_or_default(),
        )
    }

    fn is_empty(&self) -> bool {
        self.products.aggregate().totals.total == 0.0
    }
}
