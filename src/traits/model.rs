//! Element models and the raw inputs handed to collection write paths.

use crate::annotation::{short_type_name, Annotation};
use crate::convert::json_kind;
use crate::types::{ErrorDetails, ErrorVec};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::fmt::Debug;

/// A validated data model that can be stored in a collection.
///
/// Field shape is described by the serde implementations; field constraints
/// beyond shape go in [`check`](Model::check), which every validation pass
/// runs. Union element types are enums over several models: they return an
/// [`Annotation::Union`] and report the active member from
/// [`class_name`](Model::class_name).
///
/// # Examples
///
/// ```
/// use model_collections::{loc, ErrorDetails, ErrorVec, Model};
/// use serde::{Deserialize, Serialize};
/// use serde_json::json;
///
/// #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// struct User {
///     name: String,
///     age: i64,
/// }
///
/// impl Model for User {
///     fn check(&self) -> Result<(), ErrorVec<ErrorDetails>> {
///         if self.age < 0 {
///             let msg = "Input should be greater than or equal to 0";
///             let err = ErrorDetails::new("greater_than_equal", msg)
///                 .at(loc!["age"])
///                 .with_input(json!(self.age));
///             return Err([err].into_iter().collect());
///         }
///         Ok(())
///     }
/// }
///
/// assert_eq!(User::annotation().to_string(), "User");
/// ```
pub trait Model: Clone + PartialEq + Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// The declared type expression for this element type.
    fn annotation() -> Annotation {
        Annotation::of::<Self>()
    }

    /// Runtime type of this instance, checked against the admissible types in strict mode.
    fn class_name(&self) -> Cow<'static, str> {
        Cow::Borrowed(short_type_name::<Self>())
    }

    /// Field constraints; locations are relative to the instance.
    fn check(&self) -> Result<(), ErrorVec<ErrorDetails>> {
        Ok(())
    }
}

/// A value offered to a collection, before validation.
#[derive(Debug, Clone, PartialEq)]
pub enum Input<T> {
    /// An already-built element.
    Instance(T),
    /// A record-like object of some other class, read through its attributes.
    Attributes {
        class: String,
        fields: Map<String, Value>,
    },
    /// Loosely typed input such as a decoded JSON document.
    Raw(Value),
}

impl<T: Model> Input<T> {
    /// Wraps an element.
    #[inline]
    pub fn instance(value: T) -> Self {
        Self::Instance(value)
    }

    /// Wraps a loosely typed value.
    #[inline]
    pub fn raw(value: Value) -> Self {
        Self::Raw(value)
    }

    /// Wraps a duck-typed object of class `class` exposing `fields`.
    pub fn attributes<C: Into<String>>(class: C, fields: Map<String, Value>) -> Self {
        Self::Attributes {
            class: class.into(),
            fields,
        }
    }

    /// Runtime type name of the input.
    ///
    /// # Examples
    ///
    /// ```
    /// # use model_collections::{Input, Model};
    /// # use serde::{Deserialize, Serialize};
    /// # #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    /// # struct User { name: String }
    /// # impl Model for User {}
    /// use serde_json::json;
    ///
    /// assert_eq!(Input::<User>::raw(json!({"name": "A"})).runtime_type(), "object");
    /// assert_eq!(Input::instance(User { name: "A".into() }).runtime_type(), "User");
    /// ```
    pub fn runtime_type(&self) -> Cow<'_, str> {
        match self {
            Self::Instance(value) => value.class_name(),
            Self::Attributes { class, .. } => Cow::Borrowed(class.as_str()),
            Self::Raw(value) => Cow::Borrowed(json_kind(value)),
        }
    }

    /// JSON rendering of the input, used as `input` in error records.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Instance(value) => serde_json::to_value(value).unwrap_or_else(|err| {
                tracing::debug!(error = %err, "input could not be encoded for an error record");
                Value::Null
            }),
            Self::Attributes { fields, .. } => Value::Object(fields.clone()),
            Self::Raw(value) => value.clone(),
        }
    }
}

impl<T> From<T> for Input<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::Instance(value)
    }
}
