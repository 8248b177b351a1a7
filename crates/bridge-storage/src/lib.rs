//! zkBridge Storage Layer
//!
//! Synchronous, string-keyed persistence for client-side bridge state.
//! Reads are self-healing: a stored value that fails validation is replaced
//! by its default instead of surfacing an error.

mod codec;
mod database;
mod error;
mod migrations;
mod store;
mod stored_value;

pub use codec::{Codec, DecodeError, JsonCodec};
pub use database::Database;
pub use error::StorageError;
pub use store::{KeyValueStore, MemoryStore, SharedStore};
pub use stored_value::StoredValue;

pub type Result<T> = std::result::Result<T, StorageError>;
