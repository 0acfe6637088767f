//! # Wallet Error Types
//!
//! [`WalletError`] covers every way a wallet operation can fail. None of them
//! is fatal: the store turns them into a user-visible string in
//! [`ConnectionState::error`](crate::ConnectionState::error) (or only logs them)
//! and the page keeps running.
//!
//! ## Error Categories
//!
//! - **ProviderMissing**: no injected wallet in the page
//! - **UserRejected**: the user dismissed the wallet prompt (EIP-1193 code 4001)
//! - **Provider**: any other provider failure, message passed through
//! - **Storage**: the consent flag could not be read or written
//! - **Config**: invalid [`WalletConfig`](crate::WalletConfig)
//!
//! ## Error Conversion
//!
//! - `ProviderRpcError` → `UserRejected` for code 4001, `Provider` otherwise
//! - `StorageError` → `Storage`

use shared::dto::rpc::ProviderRpcError;
use thiserror::Error;

/// Convenience type alias for `Result<T, WalletError>`.
pub type Result<T> = std::result::Result<T, WalletError>;

/// Message shown when the page has no injected provider.
pub const PROVIDER_MISSING_MESSAGE: &str = "MetaMask is not installed. Please install it to connect.";

/// Message shown when the user rejects the connection prompt.
pub const USER_REJECTED_MESSAGE: &str = "You rejected the wallet connection request.";

/// Message shown when the provider fails without saying why.
pub const CONNECT_FAILED_MESSAGE: &str = "Failed to connect wallet";

#[derive(Debug, Error)]
pub enum WalletError {
    /// No wallet provider was injected into the page.
    #[error("MetaMask is not installed. Please install it to connect.")]
    ProviderMissing,

    /// The user rejected the request in the wallet UI.
    #[error("You rejected the wallet connection request.")]
    UserRejected,

    /// Any other provider failure.
    #[error("Provider error: {message}")]
    Provider { code: Option<i64>, message: String },

    /// Consent flag storage failure.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl WalletError {
    /// The string shown to the user in connection state.
    pub fn user_message(&self) -> String {
        match self {
            WalletError::ProviderMissing => PROVIDER_MISSING_MESSAGE.to_string(),
            WalletError::UserRejected => USER_REJECTED_MESSAGE.to_string(),
            WalletError::Provider { message, .. } if message.trim().is_empty() => {
                CONNECT_FAILED_MESSAGE.to_string()
            }
            WalletError::Provider { message, .. } => message.clone(),
            WalletError::Storage(_) | WalletError::Config(_) => CONNECT_FAILED_MESSAGE.to_string(),
        }
    }
}

impl From<ProviderRpcError> for WalletError {
    fn from(err: ProviderRpcError) -> Self {
        if err.is_user_rejected() {
            WalletError::UserRejected
        } else {
            WalletError::Provider {
                code: err.code,
                message: err.message,
            }
        }
    }
}

/// Durable key-value storage failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    /// The storage backend is not available (no window, storage disabled).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The backend refused the operation (quota, security policy).
    #[error("storage access failed: {0}")]
    Access(String),
}
