//! # Wallet Configuration
//!
//! Settings for a [`ConnectionStore`](crate::ConnectionStore). Defaults match
//! what a page expects out of the box; the frontend overrides them from its
//! build-time constants.
//!
//! ```rust
//! use lib_wallet::WalletConfig;
//!
//! let config = WalletConfig::default().with_consent_key("goldencity.wallet");
//! assert!(config.validate().is_ok());
//! assert!(config.revoke_on_disconnect);
//! ```

use serde::Deserialize;

use crate::error::{Result, WalletError};

/// Storage key of the consent flag unless configured otherwise.
pub const DEFAULT_CONSENT_KEY: &str = "walletConnected";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WalletConfig {
    /// Key under which the consent flag is persisted.
    pub consent_key: String,

    /// Ask the provider to drop the site's account permission on disconnect.
    ///
    /// Wallets that lack `wallet_revokePermissions` are tolerated either way.
    pub revoke_on_disconnect: bool,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            consent_key: DEFAULT_CONSENT_KEY.to_string(),
            revoke_on_disconnect: true,
        }
    }
}

impl WalletConfig {
    pub fn with_consent_key(mut self, key: impl Into<String>) -> Self {
        self.consent_key = key.into();
        self
    }

    pub fn with_revoke_on_disconnect(mut self, revoke: bool) -> Self {
        self.revoke_on_disconnect = revoke;
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.consent_key.trim().is_empty() {
            return Err(WalletError::Config("consent key must not be empty".to_string()));
        }

        if self.consent_key.chars().any(char::is_whitespace) {
            return Err(WalletError::Config(format!(
                "consent key must not contain whitespace: {:?}",
                self.consent_key
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WalletConfig::default();
        assert_eq!(config.consent_key, "walletConnected");
        assert!(config.revoke_on_disconnect);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_key_rejected() {
        let config = WalletConfig::default().with_consent_key("   ");
        assert!(matches!(config.validate(), Err(WalletError::Config(_))));
    }

    #[test]
    fn test_key_with_whitespace_rejected() {
        let config = WalletConfig::default().with_consent_key("wallet connected");
        assert!(matches!(config.validate(), Err(WalletError::Config(_))));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: WalletConfig =
            serde_json::from_str(r#"{ "revoke_on_disconnect": false }"#).unwrap();
        assert_eq!(config.consent_key, "walletConnected");
        assert!(!config.revoke_on_disconnect);
    }
}
