//! zkBridge Domain
//!
//! Entities persisted by the bridge client and the codecs that validate
//! them when they are read back from storage.

mod chain;
mod codecs;
mod currency;
mod error;
mod pending_tx;
mod policy;
mod token;

pub use chain::{Chain, ChainKey, Env};
pub use codecs::{
    CurrencyCodec, PendingLedger, PendingLedgerCodec, PolicyCheckCodec, TokenListCodec,
};
pub use currency::Currency;
pub use error::DomainError;
pub use pending_tx::{PendingTx, PendingTxKind, SerializedPendingTx};
pub use policy::PolicyCheck;
pub use token::{Token, WrappedToken};

pub type Result<T> = std::result::Result<T, DomainError>;
