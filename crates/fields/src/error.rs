use formpdf_types::FieldId;
use thiserror::Error;

/// Construction failures inside the field factory.
///
/// These never propagate out of a render: the factory substitutes the default
/// normalizer instead.
#[derive(Error, Debug)]
pub enum FieldError {
    #[error("composite field {0} declares no usable input type")]
    UnsupportedInputType(FieldId),
    #[error("field {0} cannot be backed by a '{1}' input")]
    WrongInputType(FieldId, String),
    #[error("option/quantity field {0} has no associated product field")]
    MissingProductField(FieldId),
    #[error("malformed stored value for field {0}: {1}")]
    MalformedValue(FieldId, String),
}
