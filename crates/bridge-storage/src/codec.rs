//! Codecs between stored JSON values and typed values

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::marker::PhantomData;
use thiserror::Error;

/// Why a stored value was rejected.
///
/// Never surfaced by [`StoredValue::read`](crate::StoredValue::read); it only
/// reaches logs and callers that decode values themselves.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected shape: expected {0}")]
    Shape(&'static str),

    #[error("Invalid value: {0}")]
    Invalid(String),
}

/// Validates and decodes an untyped JSON value into `Self::Value`, and
/// encodes typed values back into their stored representation.
pub trait Codec {
    type Value;

    fn decode(&self, value: &Value) -> Result<Self::Value, DecodeError>;

    fn encode(&self, value: &Self::Value) -> serde_json::Result<Value>;
}

/// Codec for any serde type. Strict: one invalid element rejects the whole value.
pub struct JsonCodec<T>(PhantomData<fn() -> T>);

impl<T> JsonCodec<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for JsonCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for JsonCodec<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> Codec for JsonCodec<T>
where
    T: Serialize + DeserializeOwned,
{
    type Value = T;

    fn decode(&self, value: &Value) -> Result<T, DecodeError> {
        Ok(T::deserialize(value)?)
    }

    fn encode(&self, value: &T) -> serde_json::Result<Value> {
        serde_json::to_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn test_json_codec_decode() {
        let codec = JsonCodec::<Vec<Point>>::new();
        let points = codec.decode(&json!([{ "x": 1, "y": 2 }])).unwrap();
        assert_eq!(points, vec![Point { x: 1, y: 2 }]);
    }

    #[test]
    fn test_json_codec_rejects_whole_value() {
        let codec = JsonCodec::<Vec<Point>>::new();
        let result = codec.decode(&json!([{ "x": 1, "y": 2 }, { "x": "bad" }]));
        assert!(matches!(result, Err(DecodeError::Json(_))));
    }
}
