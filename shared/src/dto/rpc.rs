use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// EIP-1193 error codes reported by injected providers
pub mod codes {
    /// The user rejected the request.
    pub const USER_REJECTED: i64 = 4001;
    /// The requested method and/or account has not been authorized by the user.
    pub const UNAUTHORIZED: i64 = 4100;
    /// The provider does not support the requested method.
    pub const UNSUPPORTED_METHOD: i64 = 4200;
    /// The provider is disconnected from all chains.
    pub const DISCONNECTED: i64 = 4900;
    /// The provider is not connected to the requested chain.
    pub const CHAIN_DISCONNECTED: i64 = 4901;
    /// JSON-RPC "method not found".
    pub const METHOD_NOT_FOUND: i64 = -32601;
    /// JSON-RPC "internal error".
    pub const INTERNAL_ERROR: i64 = -32603;
}

/// Provider methods the wallet connection uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpcMethod {
    /// `eth_accounts`: already-authorized accounts, never prompts
    Accounts,
    /// `eth_requestAccounts`: prompts the user for account access
    RequestAccounts,
    /// `wallet_revokePermissions`: drops the site's account permission (EIP-2255)
    RevokePermissions,
}

impl RpcMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            RpcMethod::Accounts => "eth_accounts",
            RpcMethod::RequestAccounts => "eth_requestAccounts",
            RpcMethod::RevokePermissions => "wallet_revokePermissions",
        }
    }
}

/// Argument object for `provider.request(args)`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RequestArguments {
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl RequestArguments {
    pub fn new(method: RpcMethod) -> Self {
        Self {
            method: method.as_str().to_string(),
            params: None,
        }
    }

    pub fn with_params(method: RpcMethod, params: Value) -> Self {
        Self {
            method: method.as_str().to_string(),
            params: Some(params),
        }
    }

    /// `wallet_revokePermissions` for the `eth_accounts` permission
    pub fn revoke_accounts() -> Self {
        Self::with_params(RpcMethod::RevokePermissions, json!([{ "eth_accounts": {} }]))
    }
}

/// Error thrown by `provider.request()`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProviderRpcError {
    /// Absent when the provider threw a plain `Error` without a code.
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ProviderRpcError {
    pub fn new(code: Option<i64>, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    pub fn is_user_rejected(&self) -> bool {
        self.code == Some(codes::USER_REJECTED)
    }

    /// The provider does not know the method (old wallets lack `wallet_revokePermissions`).
    pub fn is_unsupported(&self) -> bool {
        matches!(
            self.code,
            Some(codes::UNSUPPORTED_METHOD) | Some(codes::METHOD_NOT_FOUND)
        )
    }
}

impl std::fmt::Display for ProviderRpcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.code {
            Some(code) => write!(f, "{} (code {})", self.message, code),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ProviderRpcError {}
