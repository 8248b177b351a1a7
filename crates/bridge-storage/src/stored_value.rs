//! Typed access to a single stored key
//!
//! Read path:
//! ```text
//! absent            -> write default, return default
//! bare text valid   -> value
//! JSON text valid   -> value
//! otherwise         -> overwrite with default, return default
//! ```

use serde_json::Value;

use crate::codec::{Codec, DecodeError};
use crate::store::KeyValueStore;
use crate::Result;

/// A key, the value it falls back to, and the codec validating it.
pub struct StoredValue<C: Codec> {
    key: &'static str,
    default: C::Value,
    codec: C,
}

impl<C: Codec> StoredValue<C> {
    pub fn new(key: &'static str, default: C::Value, codec: C) -> Self {
        Self {
            key,
            default,
            codec,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Encode `value` and store it. Strings are stored bare, everything else
    /// as JSON text.
    pub fn write(&self, store: &dyn KeyValueStore, value: C::Value) -> Result<C::Value> {
        let text = match self.codec.encode(&value)? {
            Value::String(text) => text,
            other => other.to_string(),
        };
        store.set_item(self.key, &text)?;

        tracing::debug!(key = %self.key, "Wrote stored value");
        Ok(value)
    }

    fn decode(&self, raw: &str) -> std::result::Result<C::Value, DecodeError> {
        self.codec
            .decode(&Value::String(raw.to_string()))
            .or_else(|_| {
                let parsed: Value = serde_json::from_str(raw)?;
                self.codec.decode(&parsed)
            })
    }
}

impl<C> StoredValue<C>
where
    C: Codec,
    C::Value: Clone,
{
    /// Decode the stored value, restoring the default when it is missing or
    /// invalid. Only store failures are returned as errors.
    pub fn read(&self, store: &dyn KeyValueStore) -> Result<C::Value> {
        let Some(raw) = store.get_item(self.key)? else {
            tracing::debug!(key = %self.key, "No stored value, writing default");
            return self.write(store, self.default.clone());
        };

        match self.decode(&raw) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::warn!(
                    key = %self.key,
                    error = %e,
                    "Stored value failed validation, restoring default"
                );
                self.write(store, self.default.clone())
            }
        }
    }
}
