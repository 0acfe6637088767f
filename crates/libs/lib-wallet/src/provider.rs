//! # Wallet Provider Seam
//!
//! [`WalletProvider`] is the store's view of the injected wallet: three
//! `request()` calls and the `accountsChanged` event. The browser binding lives
//! in `wallet-web`; tests use a scripted fake.
//!
//! Providers are single-threaded JavaScript objects, so the trait is `?Send`.

use std::fmt;
use std::rc::Rc;

use async_trait::async_trait;
use shared::dto::rpc::ProviderRpcError;

/// Callback for `accountsChanged` events. Receives the provider's account list.
pub type AccountsChangedHandler = Box<dyn Fn(Vec<String>)>;

/// Trait for injected wallet operations
///
/// This trait allows the store to run against `window.ethereum` in the browser
/// and against fakes in tests.
#[async_trait(?Send)]
pub trait WalletProvider {
    /// `eth_accounts`: accounts this site is already authorized for. Never prompts.
    async fn accounts(&self) -> Result<Vec<String>, ProviderRpcError>;

    /// `eth_requestAccounts`: prompts the user. Rejection carries code 4001.
    async fn request_accounts(&self) -> Result<Vec<String>, ProviderRpcError>;

    /// `wallet_revokePermissions` for `eth_accounts`. Not every wallet supports it.
    async fn revoke_permissions(&self) -> Result<(), ProviderRpcError>;

    /// Register `handler` for `accountsChanged`. Dropping the returned guard unregisters it.
    fn on_accounts_changed(&self, handler: AccountsChangedHandler) -> Subscription;
}

#[async_trait(?Send)]
impl<P: WalletProvider + ?Sized> WalletProvider for Rc<P> {
    async fn accounts(&self) -> Result<Vec<String>, ProviderRpcError> {
        (**self).accounts().await
    }

    async fn request_accounts(&self) -> Result<Vec<String>, ProviderRpcError> {
        (**self).request_accounts().await
    }

    async fn revoke_permissions(&self) -> Result<(), ProviderRpcError> {
        (**self).revoke_permissions().await
    }

    fn on_accounts_changed(&self, handler: AccountsChangedHandler) -> Subscription {
        (**self).on_accounts_changed(handler)
    }
}

/// Event registration guard.
///
/// Runs its release action exactly once, on [`unsubscribe`](Subscription::unsubscribe)
/// or on drop.
#[must_use = "dropping a Subscription unregisters the handler immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A guard with nothing to release.
    pub fn noop() -> Self {
        Self { release: None }
    }

    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}
