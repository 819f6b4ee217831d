//! The field factory: enumerated-variant dispatch from a descriptor's type
//! to its concrete normalizer.
//!
//! Resolution is a single `match` over [`FieldType`]; synonyms share
//! normalizers. Unknown types and construction failures never abort a render:
//! both substitute the default normalizer, with a warning for the latter.

use crate::context::FieldContext;
use crate::error::FieldError;
use crate::field::{
    address::Address, checkbox::Checkbox, composite::Composite, consent::Consent,
    creditcard::CreditCard, date::Date, default::DefaultField, fileupload::FileUpload, html::Html,
    likert::Likert, list::List, multiselect::Multiselect, name::Name, number::Number,
    post_image::PostImage, product, radio::Radio, rank::Rank, rating::Rating, section::Section,
    select::Select, signature::Signature, text::Text, textarea::Textarea, website::Website,
};
use crate::interface::FieldValue;
use crate::products::Products;
use formpdf_types::{FieldDescriptor, FieldType};
use std::rc::Rc;

pub struct FieldFactory<'a> {
    ctx: FieldContext<'a>,
    products: Rc<Products<'a>>,
}

impl<'a> Clone for FieldFactory<'a> {
    fn clone(&self) -> Self {
        Self {
            ctx: self.ctx,
            products: Rc::clone(&self.products),
        }
    }
}

impl<'a> FieldFactory<'a> {
    pub fn new(ctx: FieldContext<'a>) -> Self {
        let products = Rc::new(Products::new(ctx.form, ctx.entry));
        Self { ctx, products }
    }

    pub fn context(&self) -> &FieldContext<'a> {
        &self.ctx
    }

    /// The per-render products aggregate shared by every product-family
    /// normalizer this factory hands out.
    pub fn products(&self) -> &Rc<Products<'a>> {
        &self.products
    }

    /// Resolves the normalizer for a field. Construction failures fall back
    /// to the default normalizer rather than propagating.
    pub fn create(&self, field: &'a FieldDescriptor) -> Box<dyn FieldValue + 'a> {
        match self.try_create(field) {
            Ok(normalizer) => normalizer,
            Err(err) => {
                log::warn!(
                    "falling back to default normalizer for field {} ({}): {}",
                    field.id,
                    field.field_type,
                    err
                );
                Box::new(DefaultField::new(field, self.ctx.entry))
            }
        }
    }

    fn try_create(
        &self,
        field: &'a FieldDescriptor,
    ) -> Result<Box<dyn FieldValue + 'a>, FieldError> {
        let entry = self.ctx.entry;
        Ok(match &field.field_type {
            FieldType::Text
            | FieldType::Hidden
            | FieldType::Phone
            | FieldType::Email
            | FieldType::Time
            | FieldType::PostTitle
            | FieldType::PostTags => Box::new(Text::new(field, entry)),
            FieldType::Textarea | FieldType::PostContent | FieldType::PostExcerpt => {
                Box::new(Textarea::new(field, entry))
            }
            FieldType::Number => Box::new(Number::new(field, entry)),
            FieldType::Website => Box::new(Website::new(field, entry)),
            FieldType::Select => Box::new(Select::new(field, entry)),
            FieldType::Multiselect => Box::new(Multiselect::new(field, entry)),
            FieldType::Checkbox => Box::new(Checkbox::new(field, entry)),
            FieldType::Radio => Box::new(Radio::new(field, entry)),
            FieldType::Name => Box::new(Name::new(field, entry)),
            FieldType::Address => Box::new(Address::new(field, self.ctx)),
            FieldType::Date => Box::new(Date::new(field, entry)),
            FieldType::FileUpload => Box::new(FileUpload::new(field, self.ctx)),
            FieldType::List => Box::new(List::new(field, entry)),
            FieldType::Html => Box::new(Html::new(field)),
            FieldType::Section => {
                Box::new(Section::new(field, self.ctx, self.clone()))
            }
            FieldType::Signature => Box::new(Signature::new(field, self.ctx)),
            FieldType::Consent | FieldType::Tos => Box::new(Consent::new(field, entry)),
            FieldType::CreditCard => Box::new(CreditCard::new(field, entry)),
            FieldType::Likert => Box::new(Likert::new(field, entry)),
            FieldType::Rank => Box::new(Rank::new(field, entry)),
            FieldType::Rating => Box::new(Rating::new(field, entry)),
            FieldType::PostImage => Box::new(PostImage::new(field, self.ctx)),
            // Composite types delegate to the normalizer of their backing
            // input type.
            FieldType::Poll
            | FieldType::Quiz
            | FieldType::Survey
            | FieldType::PostCategory
            | FieldType::PostCustomField => self.create_composite(field)?,
            FieldType::Product => {
                Box::new(product::Product::new(field, Rc::clone(&self.products)))
            }
            FieldType::Option => {
                let product_id = field
                    .product_field
                    .ok_or(FieldError::MissingProductField(field.id))?;
                Box::new(product::OptionField::new(
                    field,
                    product_id,
                    Rc::clone(&self.products),
                ))
            }
            FieldType::Quantity => {
                let product_id = field
                    .product_field
                    .ok_or(FieldError::MissingProductField(field.id))?;
                Box::new(product::Quantity::new(
                    field,
                    product_id,
                    Rc::clone(&self.products),
                ))
            }
            FieldType::Shipping => {
                Box::new(product::Shipping::new(field, Rc::clone(&self.products)))
            }
            FieldType::Total => Box::new(product::Total::new(field, Rc::clone(&self.products))),
            // Display-only and unknown types render their raw value.
            FieldType::Captcha
            | FieldType::Password
            | FieldType::Page
            | FieldType::Unknown(_) => Box::new(DefaultField::new(field, entry)),
        })
    }

    fn create_composite(
        &self,
        field: &'a FieldDescriptor,
    ) -> Result<Box<dyn FieldValue + 'a>, FieldError> {
        let entry = self.ctx.entry;
        let inner_type = field
            .input_type
            .as_ref()
            .ok_or(FieldError::UnsupportedInputType(field.id))?;
        let inner: Box<dyn FieldValue + 'a> = match inner_type {
            FieldType::Select => Box::new(Select::new(field, entry)),
            FieldType::Multiselect => Box::new(Multiselect::new(field, entry)),
            FieldType::Checkbox => Box::new(Checkbox::new(field, entry)),
            FieldType::Radio => Box::new(Radio::new(field, entry)),
            FieldType::Text => Box::new(Text::new(field, entry)),
            FieldType::Textarea => Box::new(Textarea::new(field, entry)),
            FieldType::Number => Box::new(Number::new(field, entry)),
            FieldType::Date => Box::new(Date::new(field, entry)),
            FieldType::Likert => Box::new(Likert::new(field, entry)),
            FieldType::Rank => Box::new(Rank::new(field, entry)),
            FieldType::Rating => Box::new(Rating::new(field, entry)),
            other => {
                return Err(FieldError::WrongInputType(field.id, other.to_string()));
            }
        };
        Ok(Box::new(Composite::new(field, inner)))
    }
}
