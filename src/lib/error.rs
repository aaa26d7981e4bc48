use thiserror::Error;

use crate::models::input::{CropType, InputField};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FootprintError {
    /// A form field is not a finite number or not one of the accepted names
    #[error("invalid value '{value}' for field {field}")]
    InvalidInput { field: InputField, value: String },

    /// The coefficient table does not define the requested crop
    #[error("no coefficients defined for crop {0}")]
    MissingCrop(CropType),

    #[error("invalid configuration: {0}")]
    Config(String),

    /// A batch submission failed validation; nothing was computed
    #[error("submission {index}: {source}")]
    Submission {
        index: usize,
        #[source]
        source: Box<FootprintError>,
    },
}

impl FootprintError {
    pub fn invalid_input(field: InputField, value: impl ToString) -> Self {
        FootprintError::InvalidInput {
            field,
            value: value.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FootprintError>;
