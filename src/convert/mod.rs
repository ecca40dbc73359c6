//! Conversions between engine output, locations and JSON values.
//!
//! - [`wrap_errors_with_loc`] re-bases a list of error records under the
//!   position of the element they belong to.
//! - [`json_kind`] names the runtime type of a loosely typed JSON input.
//! - [`decode_error`] turns a serde decoding failure into an [`ErrorDetails`].
//! - [`encode_json`] renders a value as compact or indented JSON text.

use crate::types::{kind, ErrorDetails, ErrorVec, Location};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

/// Prefixes the location of every error in `errors` with `loc_prefix`.
///
/// # Examples
///
/// ```
/// use model_collections::convert::wrap_errors_with_loc;
/// use model_collections::{loc, ErrorDetails};
///
/// let errors = [
///     ErrorDetails::new("missing", "Field required").at(loc!["name"]),
///     ErrorDetails::new("model_type", "Input should be a valid dictionary"),
/// ];
/// let wrapped = wrap_errors_with_loc(errors, &loc![3]);
///
/// assert_eq!(wrapped[0].loc, loc![3, "name"]);
/// assert_eq!(wrapped[1].loc, loc![3]);
/// ```
pub fn wrap_errors_with_loc<I>(errors: I, loc_prefix: &Location) -> ErrorVec<ErrorDetails>
where
    I: IntoIterator<Item = ErrorDetails>,
{
    errors
        .into_iter()
        .map(|mut error| {
            error.loc = error.loc.prefixed(loc_prefix);
            error
        })
        .collect()
}

/// Runtime type name of a JSON value.
///
/// Integers and floating-point numbers are told apart so that a strict
/// element type can admit one without the other.
#[must_use]
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "number",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Wraps a serde decoding failure for `input` into one error record.
pub fn decode_error(error: &serde_json::Error, input: Value) -> ErrorDetails {
    ErrorDetails::new(kind::DESERIALIZE, error.to_string())
        .with_input(input)
}

/// Encodes `value` as JSON text, indented by `indent` spaces per level when given.
///
/// # Examples
///
/// ```
/// use model_collections::convert::encode_json;
///
/// assert_eq!(encode_json(&[1, 2], None).unwrap(), "[1,2]");
/// assert_eq!(encode_json(&[1], Some(2)).unwrap(), "[\n  1\n]");
/// ```
pub fn encode_json<S>(value: &S, indent: Option<usize>) -> Result<String, serde_json::Error>
where
    S: Serialize + ?Sized,
{
    let Some(width) = indent else {
        return serde_json::to_string(value);
    };
    let padding = b" ".repeat(width);
    let mut buf = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&padding));
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
