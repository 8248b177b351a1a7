//! Domain error types

use bridge_storage::DecodeError;
use thiserror::Error;

use crate::chain::ChainKey;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Chain {0} is not configured in this environment")]
    UnknownChain(ChainKey),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Claim for deposit {0} has no claim transaction hash")]
    MissingClaimHash(String),
}

impl From<DomainError> for DecodeError {
    fn from(err: DomainError) -> Self {
        DecodeError::Invalid(err.to_string())
    }
}
