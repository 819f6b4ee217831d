//! # formpdf-fields
//!
//! The field abstraction layer: converts each form field of an entry into
//! three normalized representations: a memoized raw value, a sanitized HTML
//! fragment, and a flattened multi-key form-data map.
//!
//! The entry point is [`FieldFactory`], which resolves a
//! [`FieldDescriptor`](formpdf_types::FieldDescriptor) to the concrete
//! normalizer for its type and falls back to the default normalizer when no
//! mapping exists or construction fails. All normalizers implement the
//! [`FieldValue`] capability trait; product-family normalizers are views over
//! the shared [`Products`] aggregate.

pub mod context;
pub mod error;
pub mod escape;
pub mod factory;
pub mod field;
pub mod form_data;
pub mod interface;
pub mod products;

#[cfg(test)]
pub(crate) mod test_support;

pub use context::{DirUploadResolver, FieldContext, NoUploads, RenderPrefs, UploadResolver};
pub use error::FieldError;
pub use factory::FieldFactory;
pub use form_data::FormData;
pub use interface::{FieldValue, is_empty_value};
pub use products::{Products, ProductsAggregate, ProductsSummary};
