//! Pending transaction ledger
//!
//! Per account key:
//! ```text
//! absent --add--> populated --add / partial remove--> populated
//!                 populated --remove last--> absent
//! ```
//! An account never stays in the ledger with an empty list through these
//! operations.

use bridge_domain::{Env, PendingLedger, PendingLedgerCodec, PendingTx};
use bridge_storage::{SharedStore, StoredValue};

use crate::keys;
use crate::Result;

#[derive(Clone)]
pub struct PendingTxLedger {
    store: SharedStore,
}

impl PendingTxLedger {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    fn ledger(env: &Env) -> StoredValue<PendingLedgerCodec<'_>> {
        StoredValue::new(
            keys::PENDING_TXS,
            PendingLedger::new(),
            PendingLedgerCodec::new(env),
        )
    }

    /// All pending transactions, keyed by account
    pub fn get_pending_txs(&self, env: &Env) -> Result<PendingLedger> {
        Ok(Self::ledger(env).read(self.store.as_ref())?)
    }

    fn set_pending_txs(&self, env: &Env, ledger: PendingLedger) -> Result<PendingLedger> {
        Ok(Self::ledger(env).write(self.store.as_ref(), ledger)?)
    }

    pub fn get_account_pending_txs(&self, account: &str, env: &Env) -> Result<Vec<PendingTx>> {
        Ok(self
            .get_pending_txs(env)?
            .remove(account)
            .unwrap_or_default())
    }

    /// Append `tx` to the account's list. Deposit hashes are not checked for
    /// duplicates.
    pub fn add_account_pending_tx(
        &self,
        account: &str,
        env: &Env,
        tx: PendingTx,
    ) -> Result<Vec<PendingTx>> {
        let mut ledger = self.get_pending_txs(env)?;
        let is_new_account = !ledger.contains_key(account);

        let deposit_tx_hash = tx.deposit_tx_hash.clone();
        let account_txs = ledger.entry(account.to_string()).or_default();
        account_txs.push(tx);
        let account_txs = account_txs.clone();

        self.set_pending_txs(env, ledger)?;

        if is_new_account {
            tracing::info!(account = %account, "Created pending transaction ledger for account");
        }
        tracing::debug!(
            account = %account,
            deposit_tx_hash = %deposit_tx_hash,
            count = account_txs.len(),
            "Added pending transaction"
        );

        Ok(account_txs)
    }

    /// Remove every entry with `deposit_tx_hash`. The account is dropped from
    /// the ledger once its list is empty.
    pub fn remove_account_pending_tx(
        &self,
        account: &str,
        env: &Env,
        deposit_tx_hash: &str,
    ) -> Result<Vec<PendingTx>> {
        let mut ledger = self.get_pending_txs(env)?;

        let remaining: Vec<PendingTx> = ledger
            .get(account)
            .map(|txs| {
                txs.iter()
                    .filter(|tx| tx.deposit_tx_hash != deposit_tx_hash)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        if remaining.is_empty() {
            if ledger.remove(account).is_some() {
                tracing::info!(account = %account, "Removed pending transaction ledger for account");
            }
        } else {
            ledger.insert(account.to_string(), remaining);
        }

        self.set_pending_txs(env, ledger)?;

        tracing::debug!(
            account = %account,
            deposit_tx_hash = %deposit_tx_hash,
            "Removed pending transaction"
        );

        self.get_account_pending_txs(account, env)
    }
}
