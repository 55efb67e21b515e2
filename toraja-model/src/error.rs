use std::fmt::{self, Display};

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    UnknownLocale(String),
    UnknownCategory(String),
    UnknownContentKind(String),
    InvalidCoordinates { lat: f64, lng: f64 },
    InvalidDocument(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::UnknownLocale(raw) => {
                write!(f, "unknown locale: {raw}")
            }
            ModelError::UnknownCategory(raw) => {
                write!(f, "unknown category: {raw}")
            }
            ModelError::UnknownContentKind(raw) => {
                write!(f, "unknown content kind: {raw}")
            }
            ModelError::InvalidCoordinates { lat, lng } => {
                write!(f, "invalid coordinates: ({lat}, {lng})")
            }
            ModelError::InvalidDocument(msg) => {
                write!(f, "invalid document: {msg}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
