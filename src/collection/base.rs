//! The validation engine shared by every collection shape.
//!
//! A [`CollectionClass`] is what specializing a collection with an element
//! type produces: a name, the shape, the shared [`Element`] descriptor and the
//! [`CollectionConfig`] policy. Every write path of every collection instance
//! goes through [`CollectionClass::validate_element`].

use crate::config::CollectionConfig;
use crate::element::Element;
use crate::error::{CollectionError, Result};
use crate::traits::{Input, Model, ResultExt, ValidateOptions};
use crate::types::{kind, ErrorDetails, Location, ValidationError};
use crate::validation::Validation;
use serde_json::Value;
use std::fmt::{self, Display};
use std::sync::Arc;

/// Container shape of a collection class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    Sequence,
    Mapping,
}

impl Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sequence => "Sequence",
            Self::Mapping => "Mapping",
        })
    }
}

/// A collection specialized with one element type.
///
/// Classes are shared behind `Arc`; instances keep a reference to theirs.
/// [`subclass`](CollectionClass::subclass) derives a class with its own name
/// and policy that shares the same element descriptor.
#[derive(Debug)]
pub struct CollectionClass<T> {
    name: String,
    kind: CollectionKind,
    element: Arc<Element<T>>,
    config: CollectionConfig,
}

impl<T: Model> CollectionClass<T> {
    /// Builds a class named `Kind[annotation]` with the default policy.
    pub fn new(kind: CollectionKind, element: Arc<Element<T>>) -> Self {
        let name = format!("{kind}[{}]", element.annotation());
        Self {
            name,
            kind,
            element,
            config: CollectionConfig::default(),
        }
    }

    /// Derives a named class with its own policy and the same element descriptor.
    ///
    /// # Examples
    ///
    /// ```
    /// # use model_collections::Model;
    /// # use serde::{Deserialize, Serialize};
    /// # #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    /// # struct User { name: String }
    /// # impl Model for User {}
    /// use model_collections::{CollectionConfig, Sequence};
    /// use std::sync::Arc;
    ///
    /// let base = Sequence::<User>::default_class();
    /// let weak = base.subclass("WeakUsers", CollectionConfig::lax());
    ///
    /// assert_eq!(weak.name(), "WeakUsers");
    /// assert!(Arc::ptr_eq(base.element(), weak.element()));
    /// ```
    pub fn subclass<N: Into<String>>(&self, name: N, config: CollectionConfig) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            kind: self.kind,
            element: Arc::clone(&self.element),
            config,
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn kind(&self) -> CollectionKind {
        self.kind
    }

    #[inline]
    pub fn element(&self) -> &Arc<Element<T>> {
        &self.element
    }

    #[inline]
    pub fn config(&self) -> &CollectionConfig {
        &self.config
    }

    /// Validates one incoming value for storage at `loc`.
    ///
    /// 1. With `validate_assignment` off the value is taken as is: instances
    ///    pass through untouched, other inputs are decoded without any check.
    /// 2. With `validate_assignment_strict` on, an input whose runtime type is
    ///    not admitted by the element annotation is rejected with
    ///    [`CollectionError::ElementType`] before the validator runs.
    /// 3. The validator then runs, strictly if the pre-check ran, with
    ///    attribute extraction allowed.
    /// 4. Validator errors are re-based under `loc` and raised as one
    ///    [`CollectionError::ElementValidation`] titled with the class name.
    pub fn validate_element(&self, value: Input<T>, loc: &Location) -> Result<T> {
        if !self.config.validate_assignment {
            return self.take_unchecked(value, loc);
        }

        let strict = self.config.validate_assignment_strict;
        if strict {
            self.validate_element_type(&value, loc)?;
        }

        tracing::trace!(collection = %self.name, location = %loc, strict, "validating element");
        self.element
            .validate(value, ValidateOptions::assignment(strict))
            .at(loc)
            .into_validation_error(self.name.as_str())
            .map_err(|err| {
                tracing::debug!(
                    collection = %self.name,
                    location = %loc,
                    errors = err.error_count(),
                    "element rejected by validator"
                );
                CollectionError::ElementValidation(err)
            })
    }

    /// The strict pre-check alone: fails unless `value`'s runtime type is admitted.
    pub fn validate_element_type(&self, value: &Input<T>, loc: &Location) -> Result<()> {
        if self.element.admits(value) {
            return Ok(());
        }
        let expected = self.element.annotation().to_string();
        tracing::debug!(
            collection = %self.name,
            location = %loc,
            runtime_type = %value.runtime_type(),
            expected = %expected,
            "element rejected by instance check"
        );
        let error = ErrorDetails::new(
            kind::IS_INSTANCE_OF,
            format!("Input should be an instance of {expected}"),
        )
        .at(loc.clone())
        .with_input(value.to_value())
        .with_ctx("class", Value::String(expected));
        let title = self.name.as_str();
        Err(CollectionError::ElementType(ValidationError::new(title, [error])))
    }

    /// Engine validation used when decoding raw external input in bulk.
    ///
    /// Ignores the assignment policy and never fails fast, so callers can
    /// collect every element's outcome.
    pub fn validate_raw(&self, value: Input<T>, loc: &Location) -> Validation<T> {
        Validation::from_result(self.element.validate(value, ValidateOptions::lax()))
            .at(loc)
    }

    fn take_unchecked(&self, value: Input<T>, loc: &Location) -> Result<T> {
        let raw = match value {
            Input::Instance(model) => return Ok(model),
            Input::Attributes { fields, .. } => Value::Object(fields),
            Input::Raw(raw) => raw,
        };
        tracing::warn!(collection = %self.name, location = %loc, "storing unvalidated input");
        serde_json::from_value(raw.clone()).map_err(|err| {
            let error = crate::convert::decode_error(&err, raw).at(loc.clone());
            CollectionError::ElementValidation(ValidationError::new(self.name.as_str(), [error]))
        })
    }

    /// Runs `validate_element` on every `(location, value)` pair, reporting all failures at once.
    pub(crate) fn validate_all<I>(&self, values: I) -> Result<Vec<T>>
    where
        I: IntoIterator<Item = (Location, Input<T>)>,
    {
        let mut validated = Vec::new();
        let mut failures = Vec::new();
        for (loc, value) in values {
            match self.validate_element(value, &loc) {
                Ok(model) => validated.push(model),
                Err(err) => failures.push(err),
            }
        }
        if failures.is_empty() {
            Ok(validated)
        } else {
            Err(CollectionError::merge(&self.name, failures))
        }
    }

    /// Collects bulk outcomes into the stored shape, raising one error for all failures.
    pub(crate) fn finish_bulk<A, C>(
        &self,
        outcomes: impl IntoIterator<Item = Validation<A>>,
    ) -> Result<C>
    where
        C: FromIterator<A>,
    {
        outcomes
            .into_iter()
            .collect::<Validation<C>>()
            .into_result(self.name.as_str())
            .map_err(CollectionError::ElementValidation)
    }

    /// Error for a bulk input of the wrong overall shape.
    pub(crate) fn shape_error(
        &self,
        error_kind: &'static str,
        msg: &str,
        input: Value,
    ) -> CollectionError {
        CollectionError::ElementValidation(ValidationError::new(
            self.name.as_str(),
            [ErrorDetails::new(error_kind, msg).with_input(input)],
        ))
    }
}
