use crate::types::{ErrorDetails, ErrorVec, Location, ValidationError};
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

/// Applicative-style validation outcome that accumulates error records instead of failing fast.
///
/// `Validation<A>` is either a validated value or one or more [`ErrorDetails`].
/// Unlike `Result`, collecting an iterator of validations keeps going past the
/// first failure, which is what bulk paths need: decoding a whole raw array
/// reports every offending element in one error.
///
/// # Examples
///
/// ```
/// use model_collections::validation::Validation;
/// use model_collections::{loc, ErrorDetails};
///
/// let items = vec![
///     Validation::valid(1),
///     Validation::invalid(ErrorDetails::new("int_type", "bad").at(loc![1])),
///     Validation::invalid(ErrorDetails::new("int_type", "bad").at(loc![2])),
/// ];
///
/// let all: Validation<Vec<i32>> = items.into_iter().collect();
/// assert_eq!(all.into_errors().unwrap().len(), 2);
/// ```
#[must_use]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum Validation<A> {
    Valid(A),
    Invalid(ErrorVec<ErrorDetails>),
}

impl<A> Validation<A> {
    /// Wraps a validated value.
    #[inline]
    pub fn valid(value: A) -> Self {
        Self::Valid(value)
    }

    /// Creates an invalid outcome from a single record.
    #[inline]
    pub fn invalid(error: ErrorDetails) -> Self {
        Self::Invalid(smallvec![error])
    }

    /// Lifts a validator result.
    #[inline]
    pub fn from_result(result: Result<A, ErrorVec<ErrorDetails>>) -> Self {
        match result {
            Ok(value) => Self::Valid(value),
            Err(errors) => Self::Invalid(errors),
        }
    }

    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Maps the valid value, leaving errors untouched.
    #[inline]
    pub fn map<B, F>(self, f: F) -> Validation<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Valid(value) => Validation::Valid(f(value)),
            Self::Invalid(errors) => Validation::Invalid(errors),
        }
    }

    /// Re-bases every error record under `prefix`.
    ///
    /// # Examples
    ///
    /// ```
    /// use model_collections::validation::Validation;
    /// use model_collections::{loc, ErrorDetails};
    ///
    /// let missing = ErrorDetails::new("missing", "Field required").at(loc!["name"]);
    /// let v = Validation::<()>::invalid(missing);
    /// let errors = v.at(&loc![4]).into_errors().unwrap();
    /// assert_eq!(errors[0].loc, loc![4, "name"]);
    /// ```
    pub fn at(self, prefix: &Location) -> Self {
        match self {
            Self::Valid(value) => Self::Valid(value),
            Self::Invalid(errors) => {
                Self::Invalid(errors.iter().map(|e| e.prefixed(prefix)).collect())
            }
        }
    }

    /// Converts into a `Result`, wrapping all records into one [`ValidationError`] titled `title`.
    pub fn into_result<T: Into<String>>(self, title: T) -> Result<A, ValidationError> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(errors) => Err(ValidationError::new(title, errors)),
        }
    }

    #[must_use]
    #[inline]
    pub fn into_errors(self) -> Option<ErrorVec<ErrorDetails>> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors),
        }
    }

    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<A> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }
}

impl<A> From<Result<A, ErrorVec<ErrorDetails>>> for Validation<A> {
    #[inline]
    fn from(result: Result<A, ErrorVec<ErrorDetails>>) -> Self {
        Self::from_result(result)
    }
}
