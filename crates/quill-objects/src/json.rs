//! JSON encoding and typed decoding.
//!
//! Encoding follows the value's own field order. Maps decoded into
//! [`serde_json::Value`] keep the key order of the input text, and finite
//! floats parse back to the exact value they were written from.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_json::error::Category;

use crate::error::{JsonError, Result};

/// Serialize `value` to compact JSON.
///
/// ```
/// assert_eq!(quill_objects::encode(&[1, 2, 3])?, "[1,2,3]");
/// # Ok::<(), quill_objects::JsonError>(())
/// ```
///
/// Non-finite floats (`NaN`, `±inf`) have no JSON form and are written as
/// `null`, so a shape holding one encodes fine but will not decode back
/// into the same type.
///
/// # Errors
///
/// [`JsonError::Encode`] if the value cannot be represented as JSON.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(JsonError::Encode)
}

/// Parse `json` into a structural value with no particular type.
///
/// # Errors
///
/// [`JsonError::Parse`] if `json` is not valid JSON.
pub fn decode_value(json: &str) -> Result<Value> {
    serde_json::from_str(json).map_err(JsonError::Parse)
}

/// Parse `json` and build a `T` from it.
///
/// ```
/// use quill_objects::{Rectangle, Shape, decode_as};
///
/// let r: Rectangle = decode_as(r#"{"width":10,"height":20}"#)?;
/// assert!((r.area() - 200.0).abs() < f64::EPSILON);
/// # Ok::<(), quill_objects::JsonError>(())
/// ```
///
/// # Errors
///
/// [`JsonError::Parse`] if `json` is not valid JSON, or
/// [`JsonError::Shape`] if it is valid but does not fit `T`.
pub fn decode_as<T: DeserializeOwned>(json: &str) -> Result<T> {
    serde_json::from_str(json).map_err(|source| match source.classify() {
        Category::Data => JsonError::Shape {
            type_name: std::any::type_name::<T>(),
            source,
        },
        Category::Io | Category::Syntax | Category::Eof => JsonError::Parse(source),
    })
}
