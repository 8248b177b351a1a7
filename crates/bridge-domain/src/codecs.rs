//! Storage codecs for domain entities
//!
//! Two tolerance policies are in use:
//! - Token lists are validated as a whole. One bad entry rejects the list.
//! - Pending ledgers are validated per element. Bad entries are dropped and
//!   the rest of the account's list survives in order.

use bridge_storage::{Codec, DecodeError, JsonCodec};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::chain::Env;
use crate::currency::Currency;
use crate::pending_tx::{PendingTx, SerializedPendingTx};
use crate::policy::PolicyCheck;
use crate::token::Token;

pub type CurrencyCodec = JsonCodec<Currency>;
pub type PolicyCheckCodec = JsonCodec<PolicyCheck>;
pub type TokenListCodec = JsonCodec<Vec<Token>>;

/// Pending transactions keyed by account
pub type PendingLedger = BTreeMap<String, Vec<PendingTx>>;

pub struct PendingLedgerCodec<'a> {
    env: &'a Env,
}

impl<'a> PendingLedgerCodec<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self { env }
    }
}

impl Codec for PendingLedgerCodec<'_> {
    type Value = PendingLedger;

    fn decode(&self, value: &Value) -> Result<PendingLedger, DecodeError> {
        let Value::Object(accounts) = value else {
            return Err(DecodeError::Shape("object of account lists"));
        };

        let mut ledger = PendingLedger::new();
        for (account, list) in accounts {
            let Value::Array(items) = list else {
                return Err(DecodeError::Shape("array of pending transactions"));
            };

            let txs = items
                .iter()
                .filter_map(|item| match PendingTx::parse(item, self.env) {
                    Ok(tx) => Some(tx),
                    Err(e) => {
                        tracing::warn!(
                            account = %account,
                            error = %e,
                            "Dropping invalid pending transaction"
                        );
                        None
                    }
                })
                .collect();

            ledger.insert(account.clone(), txs);
        }

        Ok(ledger)
    }

    fn encode(&self, ledger: &PendingLedger) -> serde_json::Result<Value> {
        let serialized: BTreeMap<&str, Vec<SerializedPendingTx>> = ledger
            .iter()
            .map(|(account, txs)| {
                (
                    account.as_str(),
                    txs.iter().map(PendingTx::to_serialized).collect(),
                )
            })
            .collect();

        serde_json::to_value(serialized)
    }
}
