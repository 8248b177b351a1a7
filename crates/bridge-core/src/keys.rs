//! Storage keys, one per persisted entity

pub const PREFERRED_CURRENCY: &str = "preferred-currency";
pub const CUSTOM_TOKENS: &str = "custom-tokens";
pub const PENDING_TXS: &str = "pending-txs";
pub const POLICY_CHECK: &str = "policy-check";
