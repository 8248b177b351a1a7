//! zkBridge Core
//!
//! Client-side persistence for the bridge: preferred currency, custom
//! tokens, pending transactions and the policy acknowledgement. Every
//! accessor reads and decodes afresh; corrupted state resets to defaults
//! instead of failing.

mod bridge;
mod config;
mod error;
pub mod keys;
mod pending;
mod preferences;
mod tokens;

pub use bridge::BridgeStorage;
pub use config::Config;
pub use error::CoreError;
pub use pending::PendingTxLedger;
pub use preferences::Preferences;
pub use tokens::CustomTokenRegistry;

// Re-export the layers underneath
pub use bridge_domain::{
    Chain, ChainKey, Currency, Env, PendingLedger, PendingTx, PendingTxKind, PolicyCheck, Token,
    WrappedToken,
};
pub use bridge_storage::{Database, KeyValueStore, MemoryStore, SharedStore, StorageError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
