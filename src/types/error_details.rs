use crate::types::Location;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::fmt::{self, Display};

/// Machine-readable error kinds produced by this crate and its default validator.
pub mod kind {
    /// Strict pre-check: the input's runtime type is not admitted by the element type.
    pub const IS_INSTANCE_OF: &str = "is_instance_of";
    /// The input cannot be turned into a model at all (wrong shape).
    pub const MODEL_TYPE: &str = "model_type";
    /// Attribute extraction was requested from an input that does not allow it.
    pub const MODEL_ATTRIBUTES_TYPE: &str = "model_attributes_type";
    /// Decoding a structured input into the model failed.
    pub const DESERIALIZE: &str = "deserialize";
    /// A sequence was expected.
    pub const LIST_TYPE: &str = "list_type";
    /// A string-keyed mapping was expected.
    pub const DICT_TYPE: &str = "dict_type";
    /// An unknown named argument was supplied.
    pub const EXTRA_FORBIDDEN: &str = "extra_forbidden";
}

/// A single structured validation failure.
///
/// Mirrors the records a schema engine emits: what went wrong (`kind`, `msg`),
/// where (`loc`), on which value (`input`) and any extra parameters (`ctx`).
///
/// # Examples
///
/// ```
/// use model_collections::{loc, ErrorDetails};
/// use serde_json::json;
///
/// let err = ErrorDetails::new("greater_than_equal", "Input should be greater than or equal to 0")
///     .at(loc!["age"])
///     .with_input(json!(-1))
///     .with_ctx("ge", json!(0));
///
/// assert_eq!(err.prefixed(&loc![2]).loc.to_string(), "2.age");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetails {
    #[serde(rename = "type")]
    pub kind: Cow<'static, str>,
    pub loc: Location,
    pub msg: String,
    #[serde(default)]
    pub input: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ctx: Option<Map<String, Value>>,
}

impl ErrorDetails {
    /// Creates an error at the root location with a `null` input.
    pub fn new<K, M>(kind: K, msg: M) -> Self
    where
        K: Into<Cow<'static, str>>,
        M: Into<String>,
    {
        Self {
            kind: kind.into(),
            loc: Location::new(),
            msg: msg.into(),
            input: Value::Null,
            ctx: None,
        }
    }

    /// Sets the location.
    #[inline]
    pub fn at<L: Into<Location>>(mut self, loc: L) -> Self {
        self.loc = loc.into();
        self
    }

    /// Records the offending input value.
    #[inline]
    pub fn with_input(mut self, input: Value) -> Self {
        self.input = input;
        self
    }

    /// Adds one context entry.
    pub fn with_ctx<K: Into<String>>(mut self, key: K, value: Value) -> Self {
        self.ctx
            .get_or_insert_with(Map::new)
            .insert(key.into(), value);
        self
    }

    /// Returns a copy whose location is `prefix` followed by the current location.
    #[must_use]
    pub fn prefixed(&self, prefix: &Location) -> Self {
        Self {
            loc: self.loc.prefixed(prefix),
            ..self.clone()
        }
    }
}

impl Display for ErrorDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.loc.is_empty() {
            write!(f, "{} [type={}]", self.msg, self.kind)
        } else {
            write!(f, "{}: {} [type={}]", self.loc, self.msg, self.kind)
        }
    }
}
