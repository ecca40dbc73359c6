//! Default element validator backed by serde.
//!
//! [`ModelValidator`] is what a collection uses unless it is specialized with
//! a custom [`Validator`]. Shape checking is serde decoding; field constraints
//! are the model's own [`Model::check`].

use crate::annotation::Annotation;
use crate::convert::decode_error;
use crate::traits::{Input, Model, ValidateOptions, Validator};
use crate::types::{kind, ErrorDetails, ErrorVec};
use serde_json::Value;
use smallvec::smallvec;
use std::marker::PhantomData;

/// Serde-backed validator for a [`Model`].
///
/// | input                         | strict                  | lax               |
/// |-------------------------------|-------------------------|-------------------|
/// | `Instance`                    | `check()`               | `check()`         |
/// | `Attributes`, `from_attributes` | decode, `check()`     | decode, `check()` |
/// | `Raw(object)`                 | `model_type` error      | decode, `check()` |
/// | any other `Raw`               | `model_type` error      | `model_type` error|
///
/// Revalidating an instance returns it unchanged when its checks pass.
pub struct ModelValidator<T> {
    expected: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Model> ModelValidator<T> {
    pub fn new() -> Self {
        Self::for_annotation(&T::annotation())
    }

    /// Names `annotation` as the expected type in shape errors.
    pub fn for_annotation(annotation: &Annotation) -> Self {
        Self {
            expected: annotation.to_string(),
            _marker: PhantomData,
        }
    }

    fn decode(&self, value: Value) -> Result<T, ErrorVec<ErrorDetails>> {
        serde_json::from_value::<T>(value.clone())
            .map_err(|err| smallvec![decode_error(&err, value)])
    }

    fn wrong_shape(&self, input: Value, strict: bool) -> ErrorVec<ErrorDetails> {
        let msg = if strict {
            format!("Input should be an instance of {}", self.expected)
        } else {
            format!(
                "Input should be a valid dictionary or instance of {}",
                self.expected
            )
        };
        smallvec![ErrorDetails::new(kind::MODEL_TYPE, msg)
            .with_input(input)
            .with_ctx("class_name", Value::String(self.expected.clone()))]
    }
}

impl<T: Model> Default for ModelValidator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Model> Validator<T> for ModelValidator<T> {
    fn validate(
        &self,
        input: Input<T>,
        options: ValidateOptions,
    ) -> Result<T, ErrorVec<ErrorDetails>> {
        let model = match input {
            Input::Instance(model) => model,
            Input::Attributes { fields, .. } if options.from_attributes => {
                self.decode(Value::Object(fields))?
            }
            Input::Attributes { fields, .. } => {
                return Err(smallvec![ErrorDetails::new(
                    kind::MODEL_ATTRIBUTES_TYPE,
                    "Input should be a valid dictionary or object to extract fields from",
                )
                .with_input(Value::Object(fields))]);
            }
            Input::Raw(Value::Object(fields)) if !options.strict => {
                self.decode(Value::Object(fields))?
            }
            Input::Raw(value) => return Err(self.wrong_shape(value, options.strict)),
        };
        model.check()?;
        Ok(model)
    }
}
