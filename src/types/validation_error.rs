//! Aggregated validation failures.
//!
//! Every failing write path raises exactly one [`ValidationError`], scoped to
//! the collection class that rejected the value and carrying every
//! [`ErrorDetails`] record the element validator produced, already re-based
//! to the collection's location.

use crate::types::{ErrorDetails, ErrorVec};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A non-empty list of [`ErrorDetails`] raised on behalf of one collection.
///
/// # Examples
///
/// ```
/// use model_collections::{loc, ErrorDetails, ValidationError};
///
/// let err = ValidationError::new(
///     "Sequence[User]",
///     [ErrorDetails::new("missing", "Field required").at(loc![0, "name"])],
/// );
///
/// assert_eq!(err.error_count(), 1);
/// assert!(err.to_string().starts_with("1 validation error for Sequence[User]"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    title: String,
    errors: ErrorVec<ErrorDetails>,
}

impl ValidationError {
    /// Builds an error scoped to `title` (usually a collection class name).
    pub fn new<T, I>(title: T, errors: I) -> Self
    where
        T: Into<String>,
        I: IntoIterator<Item = ErrorDetails>,
    {
        Self {
            title: title.into(),
            errors: errors.into_iter().collect(),
        }
    }

    /// Name of the collection class that raised the error.
    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The individual failures, in the order they were found.
    #[inline]
    pub fn errors(&self) -> &[ErrorDetails] {
        &self.errors
    }

    #[inline]
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Consumes the error, returning its records.
    #[inline]
    pub fn into_errors(self) -> ErrorVec<ErrorDetails> {
        self.errors
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.errors.len();
        let plural = if count == 1 { "" } else { "s" };
        write!(f, "{count} validation error{plural} for {}", self.title)?;
        for error in &self.errors {
            write!(
                f,
                "\n{}\n  {} [type={}, input_value={}]",
                error.loc, error.msg, error.kind, error.input
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}
