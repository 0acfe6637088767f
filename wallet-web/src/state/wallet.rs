//! Wallet state management

use std::rc::Rc;

use leptos::prelude::*;
use lib_wallet::{ConnectionState, ConnectionStore, WalletConfig};

use crate::services::{EthereumProvider, LocalStorageConsent};
use crate::utils::constants::{CONSENT_KEY, REVOKE_ON_DISCONNECT};

pub type BrowserStore = ConnectionStore<EthereumProvider, LocalStorageConsent>;

/// Wallet context shared by every component under `App`
///
/// `state` mirrors the store's watch channel so views re-render on change.
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub state: RwSignal<ConnectionState>,
    store: StoredValue<Rc<BrowserStore>, LocalStorage>,
}

impl WalletContext {
    pub fn new(store: Rc<BrowserStore>) -> Self {
        let state = RwSignal::new(store.state());
        let mut receiver = store.subscribe();

        leptos::task::spawn_local(async move {
            // Ends once the store is dropped or the signal is disposed
            while receiver.changed().await.is_ok() {
                let snapshot = receiver.borrow_and_update().clone();
                if state.try_set(snapshot).is_some() {
                    break;
                }
            }
        });

        Self {
            state,
            store: StoredValue::new_local(store),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.state.with(|state| state.is_connected)
    }

    pub fn loading(&self) -> bool {
        self.state.with(|state| state.loading)
    }

    pub fn address(&self) -> Option<String> {
        self.state.with(|state| state.account.clone())
    }

    pub fn display_address(&self) -> String {
        self.state.with(|state| state.display_address())
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|state| state.error.clone())
    }

    pub fn has_provider(&self) -> bool {
        self.store.with_value(|store| store.has_provider())
    }

    /// Restore a previous connection. Run once at mount.
    pub fn initialize(&self) {
        let store = self.store.get_value();
        leptos::task::spawn_local(async move {
            store.initialize().await;
        });
    }

    pub fn connect(&self) {
        let store = self.store.get_value();
        leptos::task::spawn_local(async move {
            // The failure message is already in state for the UI
            if let Err(e) = store.connect().await {
                log::debug!("Connect finished with error: {}", e);
            }
        });
    }

    pub fn disconnect(&self) {
        let store = self.store.get_value();
        leptos::task::spawn_local(async move {
            store.disconnect().await;
        });
    }
}

/// Wallet settings from build-time constants
pub fn wallet_config() -> WalletConfig {
    WalletConfig::default()
        .with_consent_key(CONSENT_KEY)
        .with_revoke_on_disconnect(REVOKE_ON_DISCONNECT)
}

pub fn provide_wallet_context() -> WalletContext {
    let provider = EthereumProvider::detect();
    if provider.is_none() {
        log::warn!("No injected wallet provider found (window.ethereum)");
    }

    let store = BrowserStore::new(provider.clone(), LocalStorageConsent::new(), wallet_config())
        .unwrap_or_else(|e| {
            log::error!("{}; using default wallet settings", e);
            BrowserStore::with_default_config(provider, LocalStorageConsent::new())
        });

    let context = WalletContext::new(store);
    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}
