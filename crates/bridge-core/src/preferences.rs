//! Preferred currency and policy acknowledgement

use bridge_domain::{Currency, CurrencyCodec, PolicyCheck, PolicyCheckCodec};
use bridge_storage::{SharedStore, StoredValue};

use crate::keys;
use crate::Result;

#[derive(Clone)]
pub struct Preferences {
    store: SharedStore,
    /// Returned while no valid currency is stored
    default_currency: Currency,
}

impl Preferences {
    pub fn new(store: SharedStore, default_currency: Currency) -> Self {
        Self {
            store,
            default_currency,
        }
    }

    fn currency(&self) -> StoredValue<CurrencyCodec> {
        StoredValue::new(
            keys::PREFERRED_CURRENCY,
            self.default_currency,
            CurrencyCodec::new(),
        )
    }

    fn policy_check(&self) -> StoredValue<PolicyCheckCodec> {
        StoredValue::new(
            keys::POLICY_CHECK,
            PolicyCheck::Unchecked,
            PolicyCheckCodec::new(),
        )
    }

    pub fn get_currency(&self) -> Result<Currency> {
        Ok(self.currency().read(self.store.as_ref())?)
    }

    pub fn set_currency(&self, currency: Currency) -> Result<Currency> {
        let currency = self.currency().write(self.store.as_ref(), currency)?;
        tracing::debug!(currency = %currency, "Preferred currency updated");
        Ok(currency)
    }

    pub fn get_policy_check(&self) -> Result<PolicyCheck> {
        Ok(self.policy_check().read(self.store.as_ref())?)
    }

    /// Record that the user accepted the policy. There is no way to undo this.
    pub fn set_policy_check(&self) -> Result<PolicyCheck> {
        let checked = self
            .policy_check()
            .write(self.store.as_ref(), PolicyCheck::Checked)?;
        tracing::info!("Policy acknowledged");
        Ok(checked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_storage::{KeyValueStore, MemoryStore};
    use std::sync::Arc;

    fn preferences(default_currency: Currency) -> (MemoryStore, Preferences) {
        let store = MemoryStore::new();
        let prefs = Preferences::new(Arc::new(store.clone()), default_currency);
        (store, prefs)
    }

    #[test]
    fn test_currency_defaults_to_configured() {
        let (store, prefs) = preferences(Currency::Eur);

        assert_eq!(prefs.get_currency().unwrap(), Currency::Eur);
        assert_eq!(
            store.get_item(keys::PREFERRED_CURRENCY).unwrap().as_deref(),
            Some("EUR")
        );
    }

    #[test]
    fn test_currency_round_trip() {
        let (store, prefs) = preferences(Currency::Usd);

        assert_eq!(prefs.set_currency(Currency::Jpy).unwrap(), Currency::Jpy);
        assert_eq!(prefs.get_currency().unwrap(), Currency::Jpy);
        assert_eq!(
            store.get_item(keys::PREFERRED_CURRENCY).unwrap().as_deref(),
            Some("JPY")
        );
    }

    #[test]
    fn test_corrupted_currency_heals() {
        let (store, prefs) = preferences(Currency::Gbp);
        store.set_item(keys::PREFERRED_CURRENCY, "Dogecoin").unwrap();

        assert_eq!(prefs.get_currency().unwrap(), Currency::Gbp);
        assert_eq!(
            store.get_item(keys::PREFERRED_CURRENCY).unwrap().as_deref(),
            Some("GBP")
        );
    }

    #[test]
    fn test_json_encoded_currency_accepted() {
        let (store, prefs) = preferences(Currency::Usd);
        store.set_item(keys::PREFERRED_CURRENCY, "\"CNY\"").unwrap();

        assert_eq!(prefs.get_currency().unwrap(), Currency::Cny);
    }

    #[test]
    fn test_policy_check() {
        let (store, prefs) = preferences(Currency::Usd);

        assert_eq!(prefs.get_policy_check().unwrap(), PolicyCheck::Unchecked);
        assert_eq!(
            store.get_item(keys::POLICY_CHECK).unwrap().as_deref(),
            Some("Unchecked")
        );

        assert_eq!(prefs.set_policy_check().unwrap(), PolicyCheck::Checked);
        assert_eq!(prefs.get_policy_check().unwrap(), PolicyCheck::Checked);
        // Setting again is harmless
        assert_eq!(prefs.set_policy_check().unwrap(), PolicyCheck::Checked);
    }

    #[test]
    fn test_corrupted_policy_check_heals() {
        let (store, prefs) = preferences(Currency::Usd);
        store.set_item(keys::POLICY_CHECK, "{\"checked\":true}").unwrap();

        assert_eq!(prefs.get_policy_check().unwrap(), PolicyCheck::Unchecked);
        assert_eq!(
            store.get_item(keys::POLICY_CHECK).unwrap().as_deref(),
            Some("Unchecked")
        );
    }
}
