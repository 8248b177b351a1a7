//! Custom token registry
//!
//! Tokens the user imported by address. Entries are unique by address and
//! newest first.

use bridge_domain::{Chain, Token, TokenListCodec};
use bridge_storage::{SharedStore, StoredValue};

use crate::keys;
use crate::Result;

#[derive(Clone)]
pub struct CustomTokenRegistry {
    store: SharedStore,
}

impl CustomTokenRegistry {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    fn tokens() -> StoredValue<TokenListCodec> {
        StoredValue::new(keys::CUSTOM_TOKENS, Vec::new(), TokenListCodec::new())
    }

    pub fn get_custom_tokens(&self) -> Result<Vec<Token>> {
        Ok(Self::tokens().read(self.store.as_ref())?)
    }

    pub fn set_custom_tokens(&self, tokens: Vec<Token>) -> Result<Vec<Token>> {
        Ok(Self::tokens().write(self.store.as_ref(), tokens)?)
    }

    /// Prepend `token` unless a token with the same address is already stored
    pub fn add_custom_token(&self, token: Token) -> Result<Vec<Token>> {
        let mut tokens = self.get_custom_tokens()?;
        if tokens.iter().any(|t| t.has_address(&token.address)) {
            tracing::debug!(address = %token.address, "Custom token already added");
            return Ok(tokens);
        }

        tracing::info!(
            address = %token.address,
            symbol = %token.symbol,
            chain_id = token.chain_id,
            "Adding custom token"
        );
        tokens.insert(0, token);
        self.set_custom_tokens(tokens)
    }

    pub fn remove_custom_token(&self, token: &Token) -> Result<Vec<Token>> {
        let mut tokens = self.get_custom_tokens()?;
        tokens.retain(|t| !t.has_address(&token.address));

        tracing::info!(address = %token.address, "Removed custom token");
        self.set_custom_tokens(tokens)
    }

    /// Custom tokens native to `chain` or wrapped onto it
    pub fn get_chain_custom_tokens(&self, chain: &Chain) -> Result<Vec<Token>> {
        let mut tokens = self.get_custom_tokens()?;
        tokens.retain(|t| t.is_on_chain(chain.chain_id));
        Ok(tokens)
    }

    pub fn is_chain_custom_token(&self, token: &Token, chain: &Chain) -> Result<bool> {
        Ok(self
            .get_chain_custom_tokens(chain)?
            .iter()
            .any(|t| t.has_address(&token.address)))
    }

    /// Drop custom tokens that are now part of `env_tokens`
    pub fn cleanup_custom_tokens(&self, env_tokens: &[Token]) -> Result<Vec<Token>> {
        let mut tokens = self.get_custom_tokens()?;
        let before = tokens.len();
        tokens.retain(|t| !env_tokens.iter().any(|env_token| env_token.has_address(&t.address)));

        let pruned = before - tokens.len();
        if pruned > 0 {
            tracing::info!(pruned, "Pruned custom tokens now supported by the environment");
        }

        self.set_custom_tokens(tokens)
    }
}
