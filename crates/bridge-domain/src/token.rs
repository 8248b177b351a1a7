//! ERC20 token definitions

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// Contract address, compared as stored
    pub address: String,
    pub chain_id: u64,
    #[serde(rename = "logoURI")]
    pub logo_uri: String,
    /// The same asset on the other side of the bridge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrapped_token: Option<WrappedToken>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WrappedToken {
    pub address: String,
    pub chain_id: u64,
}

impl Token {
    pub fn has_address(&self, address: &str) -> bool {
        self.address == address
    }

    /// True if the token lives on `chain_id` natively or through its wrapped
    /// counterpart.
    pub fn is_on_chain(&self, chain_id: u64) -> bool {
        self.chain_id == chain_id
            || self
                .wrapped_token
                .as_ref()
                .is_some_and(|wrapped| wrapped.chain_id == chain_id)
    }
}
