use thiserror::Error;

use footprint_core::models::field::FieldError;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown model: {0}")]
    UnknownModel(String),

    #[error("validation rejected {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("no reading '{field_id}' for category '{category_id}'")]
    MissingReading {
        category_id: String,
        field_id: String,
    },
}
