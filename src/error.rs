//! Errors raised by collection operations.

use crate::types::{ErrorVec, ValidationError};
use thiserror::Error;

/// Failure of a single collection operation.
///
/// Validation-origin failures are always aggregated into one
/// [`ValidationError`]; the store is left unchanged whenever an operation
/// returns an error.
#[derive(Debug, Error)]
pub enum CollectionError {
    /// The strict pre-check rejected an input whose runtime type is not admitted.
    #[error("{0}")]
    ElementType(ValidationError),

    /// The element validator rejected an input.
    #[error("{0}")]
    ElementValidation(ValidationError),

    /// Slice assignment with a value count different from the slice length.
    #[error("attempt to assign sequence of size {provided} to slice of size {expected}")]
    Arity { expected: usize, provided: usize },

    /// Both positional/existing data and named data were given to a constructor.
    #[error("cannot provide both positional data and named data")]
    ConstructionConflict,

    #[error("key not found: {0:?}")]
    KeyNotFound(String),

    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Text handed to a JSON entry point was not valid JSON.
    #[error("invalid JSON input: {0}")]
    Json(#[source] serde_json::Error),

    /// Elements could not be encoded.
    #[error("failed to encode collection: {0}")]
    Encode(#[source] serde_json::Error),
}

impl CollectionError {
    /// The aggregated validation error, for the two validation variants.
    pub fn validation_error(&self) -> Option<&ValidationError> {
        match self {
            Self::ElementType(err) | Self::ElementValidation(err) => Some(err),
            _ => None,
        }
    }

    #[inline]
    pub fn is_type_error(&self) -> bool {
        matches!(self, Self::ElementType(_))
    }

    /// Folds several per-element failures into one error scoped to `title`.
    ///
    /// The result is a type error only when every failure was one. Failures
    /// that are not validation errors win outright.
    pub(crate) fn merge(title: &str, failures: Vec<CollectionError>) -> Self {
        let all_type_errors = failures.iter().all(Self::is_type_error);
        let mut errors = ErrorVec::new();
        for failure in failures {
            match failure {
                Self::ElementType(err) | Self::ElementValidation(err) => {
                    errors.extend(err.into_errors())
                }
                other => return other,
            }
        }
        let merged = ValidationError::new(title, errors);
        if all_type_errors {
            Self::ElementType(merged)
        } else {
            Self::ElementValidation(merged)
        }
    }
}

/// Result alias for collection operations.
pub type Result<T, E = CollectionError> = std::result::Result<T, E>;

/// Failure of a persistence operation.
#[derive(Debug, Error)]
pub enum PersistError<E>
where
    E: std::error::Error + 'static,
{
    #[error(transparent)]
    Collection(#[from] CollectionError),

    #[error("backend error: {0}")]
    Backend(#[source] E),
}
