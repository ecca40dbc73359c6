//! Extension trait for re-basing validator results.
//!
//! Element validators report locations relative to the element. Every
//! collection write path knows where the element is going, so it re-bases the
//! engine's errors before raising them:
//!
//! ```
//! use model_collections::traits::ResultExt;
//! use model_collections::{loc, ErrorDetails, ErrorVec};
//!
//! let engine: Result<(), ErrorVec<ErrorDetails>> =
//!     Err([ErrorDetails::new("missing", "Field required").at(loc!["name"])].into_iter().collect());
//!
//! let err = engine.at(&loc![3]).into_validation_error("Sequence[User]").unwrap_err();
//! assert_eq!(err.errors()[0].loc, loc![3, "name"]);
//! ```

use crate::convert::wrap_errors_with_loc;
use crate::types::{ErrorDetails, ErrorVec, Location, ValidationError};

/// Extension methods for `Result<T, ErrorVec<ErrorDetails>>`.
pub trait ResultExt<T> {
    /// Prefixes every error location with `loc`.
    fn at(self, loc: &Location) -> Result<T, ErrorVec<ErrorDetails>>;

    /// Aggregates the error records into one [`ValidationError`] scoped to `title`.
    fn into_validation_error<S: Into<String>>(self, title: S) -> Result<T, ValidationError>;
}

impl<T> ResultExt<T> for Result<T, ErrorVec<ErrorDetails>> {
    #[inline]
    fn at(self, loc: &Location) -> Result<T, ErrorVec<ErrorDetails>> {
        self.map_err(|errors| wrap_errors_with_loc(errors, loc))
    }

    #[inline]
    fn into_validation_error<S: Into<String>>(self, title: S) -> Result<T, ValidationError> {
        self.map_err(|errors| ValidationError::new(title, errors))
    }
}
