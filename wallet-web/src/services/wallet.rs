//! Injected Ethereum Provider via wasm-bindgen
//!
//! JavaScript interop for the EIP-1193 provider that MetaMask (and compatible
//! extensions) inject as `window.ethereum`.

use async_trait::async_trait;
use js_sys::Reflect;
use lib_wallet::{AccountsChangedHandler, Subscription, WalletProvider};
use serde::Serialize;
use shared::dto::rpc::{codes, ProviderRpcError, RequestArguments, RpcMethod};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Provider event carrying the new account list.
pub const ACCOUNTS_CHANGED: &str = "accountsChanged";

// ============================================================================
// PROVIDER ACCESS (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
export function injectedEthereum() {
    if (typeof window !== 'undefined' && window.ethereum) {
        return window.ethereum;
    }
    return null;
}

export async function ethereumRequest(provider, args) {
    return await provider.request(args);
}

export function ethereumOn(provider, event, handler) {
    if (typeof provider.on !== 'function') {
        return false;
    }
    provider.on(event, handler);
    return true;
}

export function ethereumRemoveListener(provider, event, handler) {
    if (typeof provider.removeListener === 'function') {
        provider.removeListener(event, handler);
    } else if (typeof provider.off === 'function') {
        provider.off(event, handler);
    }
}
")]
extern "C" {
    /// `window.ethereum`, or null when no wallet is installed
    #[wasm_bindgen(js_name = injectedEthereum)]
    fn injected_ethereum() -> JsValue;

    /// `provider.request(args)`
    #[wasm_bindgen(js_name = ethereumRequest, catch)]
    async fn ethereum_request(provider: &JsValue, args: JsValue) -> Result<JsValue, JsValue>;

    /// `provider.on(event, handler)`; false when the provider has no event API
    #[wasm_bindgen(js_name = ethereumOn)]
    fn ethereum_on(provider: &JsValue, event: &str, handler: &js_sys::Function) -> bool;

    #[wasm_bindgen(js_name = ethereumRemoveListener)]
    fn ethereum_remove_listener(provider: &JsValue, event: &str, handler: &js_sys::Function);
}

// ============================================================================
// ETHEREUM PROVIDER
// ============================================================================

/// Handle to the injected `window.ethereum` object
#[derive(Clone, Debug)]
pub struct EthereumProvider {
    inner: JsValue,
}

impl EthereumProvider {
    /// Look up the injected provider. `None` when no wallet extension is installed.
    pub fn detect() -> Option<Self> {
        let inner = injected_ethereum();
        if inner.is_null() || inner.is_undefined() {
            return None;
        }
        Some(Self { inner })
    }

    async fn request(&self, args: RequestArguments) -> Result<JsValue, ProviderRpcError> {
        // Plain objects, not Maps: wallets read `args.method` and `params[0].eth_accounts`
        let js_args = args
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| {
                ProviderRpcError::new(None, format!("Failed to encode {} request: {}", args.method, e))
            })?;

        ethereum_request(&self.inner, js_args)
            .await
            .map_err(|e| provider_error(&e))
    }

    async fn request_account_list(&self, method: RpcMethod) -> Result<Vec<String>, ProviderRpcError> {
        let value = self.request(RequestArguments::new(method)).await?;
        serde_wasm_bindgen::from_value(value).map_err(|e| {
            ProviderRpcError::new(
                Some(codes::INTERNAL_ERROR),
                format!("Unexpected {} response: {}", method.as_str(), e),
            )
        })
    }
}

#[async_trait(?Send)]
impl WalletProvider for EthereumProvider {
    async fn accounts(&self) -> Result<Vec<String>, ProviderRpcError> {
        self.request_account_list(RpcMethod::Accounts).await
    }

    async fn request_accounts(&self) -> Result<Vec<String>, ProviderRpcError> {
        self.request_account_list(RpcMethod::RequestAccounts).await
    }

    async fn revoke_permissions(&self) -> Result<(), ProviderRpcError> {
        self.request(RequestArguments::revoke_accounts()).await.map(|_| ())
    }

    fn on_accounts_changed(&self, handler: AccountsChangedHandler) -> Subscription {
        let closure = Closure::<dyn FnMut(JsValue)>::new(move |accounts: JsValue| {
            match serde_wasm_bindgen::from_value::<Vec<String>>(accounts) {
                Ok(accounts) => handler(accounts),
                Err(e) => log::warn!("Ignoring malformed {} payload: {}", ACCOUNTS_CHANGED, e),
            }
        });

        if !ethereum_on(&self.inner, ACCOUNTS_CHANGED, closure.as_ref().unchecked_ref()) {
            log::warn!("Wallet provider has no event API, account changes will not be tracked");
            return Subscription::noop();
        }

        let provider = self.inner.clone();
        Subscription::new(move || {
            ethereum_remove_listener(&provider, ACCOUNTS_CHANGED, closure.as_ref().unchecked_ref());
            drop(closure);
        })
    }
}

/// Convert a thrown JS value into a provider error.
///
/// EIP-1193 errors are objects with a numeric `code` and a `message`; some
/// wallets throw bare strings.
fn provider_error(err: &JsValue) -> ProviderRpcError {
    let code = Reflect::get(err, &JsValue::from_str("code"))
        .ok()
        .and_then(|value| value.as_f64())
        .map(|code| code as i64);

    let message = Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|value| value.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err));

    ProviderRpcError::new(code, message)
}
