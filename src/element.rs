//! The element descriptor shared by every instance of a specialized collection class.

use crate::annotation::{get_types_from_annotation, Annotation};
use crate::engine::ModelValidator;
use crate::traits::{Input, Model, ValidateOptions, Validator};
use crate::types::{ErrorDetails, ErrorVec};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Binds a declared element annotation to its compiled validator.
///
/// The admissible runtime types are derived from the annotation once, when
/// the descriptor is built; the descriptor is immutable afterwards.
pub struct Element<T> {
    annotation: Annotation,
    admissible: Vec<Cow<'static, str>>,
    validator: Arc<dyn Validator<T>>,
}

impl<T: Model> Element<T> {
    /// Compiles `annotation` with the default serde-backed validator.
    pub fn new(annotation: Annotation) -> Self {
        let validator = ModelValidator::<T>::for_annotation(&annotation);
        Self::with_validator(annotation, validator)
    }

    /// Uses a custom validator for `annotation`.
    pub fn with_validator<V>(annotation: Annotation, validator: V) -> Self
    where
        V: Validator<T> + 'static,
    {
        let admissible = get_types_from_annotation(&annotation);
        Self {
            annotation,
            admissible,
            validator: Arc::new(validator),
        }
    }

    #[inline]
    pub fn annotation(&self) -> &Annotation {
        &self.annotation
    }

    /// Runtime type names the strict pre-check accepts.
    #[inline]
    pub fn admissible_types(&self) -> &[Cow<'static, str>] {
        &self.admissible
    }

    /// Returns whether `input`'s runtime type is one of the admissible types.
    pub fn admits(&self, input: &Input<T>) -> bool {
        let runtime = input.runtime_type();
        self.admissible.iter().any(|ty| *ty == runtime)
    }

    /// Runs the compiled validator.
    #[inline]
    pub fn validate(
        &self,
        input: Input<T>,
        options: ValidateOptions,
    ) -> Result<T, ErrorVec<ErrorDetails>> {
        self.validator.validate(input, options)
    }
}

impl<T> fmt::Debug for Element<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("annotation", &self.annotation)
            .field("admissible", &self.admissible)
            .finish_non_exhaustive()
    }
}
