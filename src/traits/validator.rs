use crate::traits::model::Input;
use crate::types::{ErrorDetails, ErrorVec};

/// Switches forwarded to a [`Validator`] on every pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidateOptions {
    /// Disable coercion of differently typed inputs.
    pub strict: bool,
    /// Allow reading fields off record-like objects of another class.
    pub from_attributes: bool,
}

impl ValidateOptions {
    /// Options used by collection write paths.
    #[inline]
    pub fn assignment(strict: bool) -> Self {
        Self {
            strict,
            from_attributes: true,
        }
    }

    /// Options used by bulk decoding of raw external input.
    #[inline]
    pub fn lax() -> Self {
        Self {
            strict: false,
            from_attributes: true,
        }
    }
}

/// A compiled, reusable validator for one element type.
///
/// This is the seam to the schema engine: a collection never inspects element
/// fields itself, it hands each incoming [`Input`] to its validator and stores
/// whatever comes back. Error locations are relative to the element.
pub trait Validator<T>: Send + Sync {
    fn validate(
        &self,
        input: Input<T>,
        options: ValidateOptions,
    ) -> Result<T, ErrorVec<ErrorDetails>>;
}

impl<T, F> Validator<T> for F
where
    F: Fn(Input<T>, ValidateOptions) -> Result<T, ErrorVec<ErrorDetails>> + Send + Sync,
{
    #[inline]
    fn validate(
        &self,
        input: Input<T>,
        options: ValidateOptions,
    ) -> Result<T, ErrorVec<ErrorDetails>> {
        self(input, options)
    }
}
