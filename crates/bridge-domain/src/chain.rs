//! Chains and the environment that configures them

use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChainKey {
    Ethereum,
    PolygonZkevm,
}

impl ChainKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChainKey::Ethereum => "ethereum",
            ChainKey::PolygonZkevm => "polygon-zkevm",
        }
    }
}

impl std::fmt::Display for ChainKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chain {
    /// Stable identifier used when the chain is persisted
    pub key: ChainKey,
    pub name: String,
    /// EVM chain id
    pub chain_id: u64,
    /// Bridge network id
    pub network_id: u32,
    pub explorer_url: Url,
}

/// Environment supplied by the caller. Pending transactions only decode
/// against chains configured here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Env {
    pub chains: Vec<Chain>,
}

impl Env {
    pub fn new(chains: Vec<Chain>) -> Self {
        Self { chains }
    }

    pub fn chain_by_key(&self, key: ChainKey) -> Option<&Chain> {
        self.chains.iter().find(|chain| chain.key == key)
    }
}
