//! Bridge transactions that have not completed end-to-end
//!
//! A pending transaction is persisted in its serialized form, where chains
//! are referenced by key and the amount is a decimal string. Turning it back
//! into a [`PendingTx`] needs the caller's [`Env`] to resolve those keys.

use bridge_storage::DecodeError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::chain::{Chain, ChainKey, Env};
use crate::error::DomainError;
use crate::token::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PendingTxKind {
    /// Deposited on the origin chain, not yet claimable
    Deposit,
    /// Claim submitted on the destination chain, not yet confirmed
    Claim,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTx {
    pub kind: PendingTxKind,
    pub deposit_tx_hash: String,
    pub claim_tx_hash: Option<String>,
    pub from: Chain,
    pub to: Chain,
    pub token: Token,
    /// Amount in token base units
    pub amount: u128,
    pub timestamp: DateTime<Utc>,
}

/// Stored shape of a [`PendingTx`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedPendingTx {
    #[serde(rename = "type")]
    pub kind: PendingTxKind,
    pub deposit_tx_hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claim_tx_hash: Option<String>,
    pub from: ChainKey,
    pub to: ChainKey,
    pub token: Token,
    pub amount: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl PendingTx {
    pub fn deposit(
        deposit_tx_hash: String,
        from: Chain,
        to: Chain,
        token: Token,
        amount: u128,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            kind: PendingTxKind::Deposit,
            deposit_tx_hash,
            claim_tx_hash: None,
            from,
            to,
            token,
            amount,
            timestamp,
        }
    }

    /// The same transfer once its claim has been submitted
    pub fn into_claim(self, claim_tx_hash: String) -> Self {
        Self {
            kind: PendingTxKind::Claim,
            claim_tx_hash: Some(claim_tx_hash),
            ..self
        }
    }

    pub fn to_serialized(&self) -> SerializedPendingTx {
        SerializedPendingTx {
            kind: self.kind,
            deposit_tx_hash: self.deposit_tx_hash.clone(),
            claim_tx_hash: self.claim_tx_hash.clone(),
            from: self.from.key,
            to: self.to.key,
            token: self.token.clone(),
            amount: self.amount.to_string(),
            timestamp: self.timestamp,
        }
    }

    /// Decode an untyped stored element under `env`
    pub fn parse(value: &Value, env: &Env) -> Result<Self, DecodeError> {
        let serialized = SerializedPendingTx::deserialize(value)?;
        Ok(serialized.resolve(env)?)
    }
}

impl SerializedPendingTx {
    pub fn resolve(self, env: &Env) -> crate::Result<PendingTx> {
        let from = resolve_chain(env, self.from)?;
        let to = resolve_chain(env, self.to)?;

        let amount = self
            .amount
            .parse::<u128>()
            .map_err(|_| DomainError::InvalidAmount(self.amount.clone()))?;

        if self.kind == PendingTxKind::Claim && self.claim_tx_hash.is_none() {
            return Err(DomainError::MissingClaimHash(self.deposit_tx_hash));
        }

        Ok(PendingTx {
            kind: self.kind,
            deposit_tx_hash: self.deposit_tx_hash,
            claim_tx_hash: self.claim_tx_hash,
            from,
            to,
            token: self.token,
            amount,
            timestamp: self.timestamp,
        })
    }
}

fn resolve_chain(env: &Env, key: ChainKey) -> crate::Result<Chain> {
    env.chain_by_key(key)
        .cloned()
        .ok_or(DomainError::UnknownChain(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;
    use url::Url;

    fn chain(key: ChainKey, chain_id: u64, network_id: u32) -> Chain {
        Chain {
            key,
            name: key.to_string(),
            chain_id,
            network_id,
            explorer_url: Url::parse("https://explorer.example.com").unwrap(),
        }
    }

    fn env() -> Env {
        Env::new(vec![
            chain(ChainKey::Ethereum, 5, 0),
            chain(ChainKey::PolygonZkevm, 1442, 1),
        ])
    }

    fn token() -> Token {
        Token {
            name: "Ether".to_string(),
            symbol: "ETH".to_string(),
            decimals: 18,
            address: "0x0000000000000000000000000000000000000000".to_string(),
            chain_id: 5,
            logo_uri: String::new(),
            wrapped_token: None,
        }
    }

    fn deposit() -> PendingTx {
        let env = env();
        PendingTx::deposit(
            "0xdeposit".to_string(),
            env.chains[0].clone(),
            env.chains[1].clone(),
            token(),
            1_000_000_000_000_000_000,
            Utc.timestamp_millis_opt(1_672_531_200_123).unwrap(),
        )
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(deposit().to_serialized()).unwrap();
        assert_eq!(json["type"], "deposit");
        assert_eq!(json["depositTxHash"], "0xdeposit");
        assert_eq!(json["from"], "ethereum");
        assert_eq!(json["to"], "polygon-zkevm");
        assert_eq!(json["amount"], "1000000000000000000");
        assert_eq!(json["timestamp"], 1_672_531_200_123i64);
        assert!(json.get("claimTxHash").is_none());
    }

    #[test]
    fn test_parse_resolves_chains() {
        let claim = deposit().into_claim("0xclaim".to_string());
        let json = serde_json::to_value(claim.to_serialized()).unwrap();

        let parsed = PendingTx::parse(&json, &env()).unwrap();
        assert_eq!(parsed, claim);
        assert_eq!(parsed.to.chain_id, 1442);
    }

    #[test]
    fn test_parse_rejects_unconfigured_chain() {
        let json = serde_json::to_value(deposit().to_serialized()).unwrap();
        let ethereum_only = Env::new(vec![chain(ChainKey::Ethereum, 5, 0)]);

        let err = PendingTx::parse(&json, &ethereum_only).unwrap_err();
        assert!(err.to_string().contains("polygon-zkevm"));
    }

    #[test]
    fn test_parse_rejects_invalid_amount() {
        let mut json = serde_json::to_value(deposit().to_serialized()).unwrap();
        json["amount"] = json!("1.5");
        assert!(PendingTx::parse(&json, &env()).is_err());
    }

    #[test]
    fn test_parse_rejects_claim_without_hash() {
        let mut json = serde_json::to_value(deposit().to_serialized()).unwrap();
        json["type"] = json!("claim");
        assert!(PendingTx::parse(&json, &env()).is_err());
    }

    #[test]
    fn test_parse_rejects_malformed_record() {
        assert!(PendingTx::parse(&json!({ "depositTxHash": "0x01" }), &env()).is_err());
        assert!(PendingTx::parse(&json!("0x01"), &env()).is_err());
    }
}
