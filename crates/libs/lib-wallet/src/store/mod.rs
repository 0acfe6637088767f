//! # Connection Store
//!
//! [`ConnectionStore`] owns the wallet connection state of one page and keeps
//! it in sync with the injected provider and the persisted consent flag.
//!
//! ## Lifecycle
//!
//! 1. [`ConnectionStore::new`] subscribes to `accountsChanged`
//! 2. [`initialize`](ConnectionStore::initialize) reconnects silently if consent was given before
//! 3. [`connect`](ConnectionStore::connect) / [`disconnect`](ConnectionStore::disconnect)
//!    and provider events mutate the state
//! 4. Dropping the store (or [`dispose`](ConnectionStore::dispose)) unsubscribes
//!
//! ## Observing State
//!
//! Every change is published on a `tokio::sync::watch` channel. UI code holds a
//! receiver from [`subscribe`](ConnectionStore::subscribe) and re-renders on
//! `changed()`; one-off reads use [`state`](ConnectionStore::state).
//!
//! ## Concurrency
//!
//! All methods take `&self` and run on the page's single event loop; the only
//! suspension points are provider calls. A `connect()` issued while another one
//! is in flight returns `Ok(None)` without prompting the user again.

use std::cell::RefCell;
use std::rc::Rc;

use shared::utils::short_address;
use tokio::sync::watch;

use crate::config::WalletConfig;
use crate::error::{Result, WalletError};
use crate::provider::{Subscription, WalletProvider};
use crate::state::ConnectionState;
use crate::storage::{ConsentFlag, ConsentStorage};

pub struct ConnectionStore<P, S> {
    provider: Option<P>,
    consent: ConsentFlag<S>,
    config: WalletConfig,
    state: watch::Sender<ConnectionState>,
    accounts_subscription: RefCell<Option<Subscription>>,
}

impl<P, S> ConnectionStore<P, S>
where
    P: WalletProvider + 'static,
    S: ConsentStorage + 'static,
{
    /// Create the store and subscribe to the provider's account changes.
    ///
    /// `provider` is `None` when the page has no injected wallet; every
    /// operation still works and `connect()` reports the missing wallet.
    ///
    /// # Errors
    ///
    /// Returns [`WalletError::Config`] if `config` fails validation.
    pub fn new(provider: Option<P>, storage: S, config: WalletConfig) -> Result<Rc<Self>> {
        config.validate()?;
        Ok(Self::build(provider, storage, config))
    }

    /// Create the store with [`WalletConfig::default`], which always validates.
    pub fn with_default_config(provider: Option<P>, storage: S) -> Rc<Self> {
        Self::build(provider, storage, WalletConfig::default())
    }

    fn build(provider: Option<P>, storage: S, config: WalletConfig) -> Rc<Self> {
        let (state, _) = watch::channel(ConnectionState::default());
        let store = Rc::new(Self {
            provider,
            consent: ConsentFlag::new(storage, config.consent_key.clone()),
            config,
            state,
            accounts_subscription: RefCell::new(None),
        });

        if let Some(provider) = store.provider.as_ref() {
            let weak = Rc::downgrade(&store);
            let subscription = provider.on_accounts_changed(Box::new(move |accounts| {
                if let Some(store) = weak.upgrade() {
                    store.on_accounts_changed(accounts);
                }
            }));
            *store.accounts_subscription.borrow_mut() = Some(subscription);
        } else {
            log::debug!("No wallet provider injected, skipping accountsChanged subscription");
        }

        store
    }
}

impl<P, S> ConnectionStore<P, S>
where
    P: WalletProvider,
    S: ConsentStorage,
{
    /// Current state snapshot.
    pub fn state(&self) -> ConnectionState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<ConnectionState> {
        self.state.subscribe()
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    pub fn consent_granted(&self) -> bool {
        self.consent.is_granted()
    }

    pub fn config(&self) -> &WalletConfig {
        &self.config
    }

    /// Reconnect silently on startup.
    ///
    /// Only runs when the consent flag is set, so a wallet that still exposes an
    /// account after the user disconnected here is not adopted. Failures are
    /// logged and never reach `error`.
    pub async fn initialize(&self) {
        if !self.consent.is_granted() {
            log::debug!("No stored wallet consent, staying disconnected");
            return;
        }

        let Some(provider) = self.provider.as_ref() else {
            log::debug!("Stored wallet consent but no provider injected");
            return;
        };

        match provider.accounts().await {
            Ok(accounts) => match accounts.into_iter().next() {
                Some(account) => {
                    log::info!("Restored wallet connection: {}", short_address(Some(&account)));
                    self.state.send_modify(|state| state.set_connected(account));
                }
                None => log::debug!("Stored wallet consent but no authorized accounts"),
            },
            Err(e) => log::warn!("Error checking wallet connection: {}", WalletError::from(e)),
        }
    }

    /// Ask the wallet for account access.
    ///
    /// Returns the connected account, or `Ok(None)` when the wallet granted no
    /// account or another connect is still in flight. Errors are also written
    /// to the state as the user-visible message.
    pub async fn connect(&self) -> Result<Option<String>> {
        let in_flight = self.state.borrow().loading;
        if in_flight {
            log::debug!("Wallet connect already in flight, ignoring");
            return Ok(None);
        }

        self.state.send_modify(ConnectionState::begin_connect);
        let _pending = PendingConnect(&self.state);

        let Some(provider) = self.provider.as_ref() else {
            let err = WalletError::ProviderMissing;
            log::error!("{}", err);
            self.state.send_modify(|state| state.set_failed(err.user_message()));
            return Err(err);
        };

        log::info!("Wallet provider detected, requesting accounts...");
        match provider.request_accounts().await {
            Ok(accounts) => {
                let Some(account) = accounts.into_iter().next() else {
                    log::warn!("Wallet granted access without any accounts");
                    self.state.send_modify(|state| state.loading = false);
                    return Ok(None);
                };

                self.grant_consent();
                log::info!("Wallet connected: {}", short_address(Some(&account)));
                let connected = account.clone();
                self.state.send_modify(move |state| {
                    state.set_connected(connected);
                    state.loading = false;
                });
                Ok(Some(account))
            }
            Err(e) => {
                let err = WalletError::from(e);
                log::error!("Error connecting wallet: {}", err);
                self.state.send_modify(|state| state.set_failed(err.user_message()));
                Err(err)
            }
        }
    }

    /// Disconnect locally, asking the wallet to revoke the permission first.
    ///
    /// The revoke is best effort: wallets without `wallet_revokePermissions`
    /// or that refuse it do not stop the local disconnect.
    pub async fn disconnect(&self) {
        if self.config.revoke_on_disconnect {
            if let Some(provider) = self.provider.as_ref() {
                match provider.revoke_permissions().await {
                    Ok(()) => log::debug!("Wallet permissions revoked"),
                    Err(e) if e.is_unsupported() => {
                        log::debug!("Wallet does not support revoking permissions: {}", e)
                    }
                    Err(e) => log::warn!("Failed to revoke wallet permissions: {}", e),
                }
            }
        }

        self.clear();
        log::info!("Wallet disconnected");
    }

    /// Handle the provider's `accountsChanged` event.
    ///
    /// An empty list means the user disconnected or locked the wallet. A new
    /// account is adopted only if the user consented to connecting here.
    pub fn on_accounts_changed(&self, accounts: Vec<String>) {
        match accounts.into_iter().next() {
            None => {
                log::info!("Wallet reported no accounts, clearing connection");
                self.clear();
            }
            Some(account) if self.consent.is_granted() => {
                log::info!("Wallet account changed: {}", short_address(Some(&account)));
                self.state.send_modify(|state| state.set_connected(account));
            }
            Some(account) => {
                log::debug!(
                    "Ignoring accountsChanged for {} without stored consent",
                    short_address(Some(&account))
                );
            }
        }
    }

    /// Unsubscribe from provider events now instead of on drop.
    pub fn dispose(&self) {
        let subscription = self.accounts_subscription.borrow_mut().take();
        if let Some(subscription) = subscription {
            subscription.unsubscribe();
            log::debug!("Unsubscribed from accountsChanged");
        }
    }

    fn clear(&self) {
        if let Err(e) = self.consent.revoke() {
            log::warn!("Failed to clear wallet consent: {}", WalletError::from(e));
        }
        self.state.send_modify(ConnectionState::clear);
    }

    fn grant_consent(&self) {
        if let Err(e) = self.consent.grant() {
            log::warn!("Failed to persist wallet consent: {}", WalletError::from(e));
        }
    }
}

/// Clears `loading` when a connect ends without reaching a completion branch,
/// e.g. its future was dropped while the wallet prompt was open.
struct PendingConnect<'a>(&'a watch::Sender<ConnectionState>);

impl Drop for PendingConnect<'_> {
    fn drop(&mut self) {
        self.0.send_if_modified(|state| std::mem::replace(&mut state.loading, false));
    }
}

#[cfg(test)]
mod tests;
