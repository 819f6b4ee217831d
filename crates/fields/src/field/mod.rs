//! Concrete field normalizers, one module per field kind.
//!
//! Synonym field types share a normalizer: post-title/tags render like text,
//! post-content/excerpt like textareas, quiz/poll/survey delegate through the
//! composite wrapper to whichever kind backs their `input_type`.

pub mod address;
pub mod checkbox;
pub mod composite;
pub mod consent;
pub mod creditcard;
pub mod date;
pub mod default;
pub mod fileupload;
pub mod html;
pub mod likert;
pub mod list;
pub mod multiselect;
pub mod name;
pub mod number;
pub mod post_image;
pub mod product;
pub mod radio;
pub mod rank;
pub mod rating;
pub mod section;
pub mod select;
pub mod signature;
pub mod text;
pub mod textarea;
pub mod website;
