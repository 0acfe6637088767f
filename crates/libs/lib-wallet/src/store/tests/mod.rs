//! # Connection Store Tests
//!
//! Test suite for the store against a scripted provider and in-memory storage.

mod connect;

use super::*;
use crate::error::StorageError;
use crate::provider::AccountsChangedHandler;
use crate::storage::MemoryStorage;
use async_trait::async_trait;
use shared::dto::rpc::{codes, ProviderRpcError};
use std::cell::Cell;

pub const CONSENT_KEY: &str = "walletConnected";
pub const ACCOUNT_A: &str = "0xaa00000000000000000000000000000000000001";
pub const ACCOUNT_B: &str = "0xbb00000000000000000000000000000000000002";

pub type TestStore = ConnectionStore<Rc<MockProvider>, Rc<MemoryStorage>>;

/// Scripted provider recording every call
pub struct MockProvider {
    authorized: RefCell<std::result::Result<Vec<String>, ProviderRpcError>>,
    request_reply: RefCell<std::result::Result<Vec<String>, ProviderRpcError>>,
    revoke_reply: RefCell<std::result::Result<(), ProviderRpcError>>,
    /// Suspend once inside `request_accounts`, like a wallet prompt would.
    yield_on_request: Cell<bool>,
    pub accounts_calls: Cell<usize>,
    pub request_calls: Cell<usize>,
    pub revoke_calls: Cell<usize>,
    handler: Rc<RefCell<Option<AccountsChangedHandler>>>,
}

impl MockProvider {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            authorized: RefCell::new(Ok(vec![])),
            request_reply: RefCell::new(Ok(vec![ACCOUNT_A.to_string()])),
            revoke_reply: RefCell::new(Ok(())),
            yield_on_request: Cell::new(false),
            accounts_calls: Cell::new(0),
            request_calls: Cell::new(0),
            revoke_calls: Cell::new(0),
            handler: Rc::new(RefCell::new(None)),
        })
    }

    pub fn set_authorized(&self, reply: std::result::Result<Vec<String>, ProviderRpcError>) {
        *self.authorized.borrow_mut() = reply;
    }

    pub fn set_request_reply(&self, reply: std::result::Result<Vec<String>, ProviderRpcError>) {
        *self.request_reply.borrow_mut() = reply;
    }

    pub fn set_revoke_reply(&self, reply: std::result::Result<(), ProviderRpcError>) {
        *self.revoke_reply.borrow_mut() = reply;
    }

    pub fn suspend_requests(&self) {
        self.yield_on_request.set(true);
    }

    pub fn is_subscribed(&self) -> bool {
        self.handler.borrow().is_some()
    }

    /// Fire `accountsChanged` like the wallet extension would.
    pub fn emit_accounts_changed(&self, accounts: &[&str]) {
        let handler = self.handler.borrow();
        if let Some(handler) = handler.as_ref() {
            handler(accounts.iter().map(|a| a.to_string()).collect());
        }
    }
}

#[async_trait(?Send)]
impl WalletProvider for MockProvider {
    async fn accounts(&self) -> std::result::Result<Vec<String>, ProviderRpcError> {
        self.accounts_calls.set(self.accounts_calls.get() + 1);
        self.authorized.borrow().clone()
    }

    async fn request_accounts(&self) -> std::result::Result<Vec<String>, ProviderRpcError> {
        self.request_calls.set(self.request_calls.get() + 1);
        if self.yield_on_request.get() {
            tokio::task::yield_now().await;
        }
        self.request_reply.borrow().clone()
    }

    async fn revoke_permissions(&self) -> std::result::Result<(), ProviderRpcError> {
        self.revoke_calls.set(self.revoke_calls.get() + 1);
        self.revoke_reply.borrow().clone()
    }

    fn on_accounts_changed(&self, handler: AccountsChangedHandler) -> Subscription {
        *self.handler.borrow_mut() = Some(handler);
        let slot = self.handler.clone();
        Subscription::new(move || {
            slot.borrow_mut().take();
        })
    }
}

/// Storage whose writes always fail, reads report no value
pub struct ReadOnlyStorage;

impl ConsentStorage for ReadOnlyStorage {
    fn get(&self, _key: &str) -> std::result::Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> std::result::Result<(), StorageError> {
        Err(StorageError::Access("QuotaExceededError".to_string()))
    }

    fn remove(&self, _key: &str) -> std::result::Result<(), StorageError> {
        Err(StorageError::Access("QuotaExceededError".to_string()))
    }
}

/// Build a store over `provider` with default config
pub fn test_store(provider: Option<Rc<MockProvider>>, storage: Rc<MemoryStorage>) -> Rc<TestStore> {
    ConnectionStore::new(provider, storage, WalletConfig::default())
        .expect("default config is valid")
}

/// Storage holding consent from an earlier visit
pub fn consented_storage() -> Rc<MemoryStorage> {
    Rc::new(MemoryStorage::with_entry(CONSENT_KEY, "true"))
}

pub fn consent_value(storage: &MemoryStorage) -> Option<String> {
    storage.get(CONSENT_KEY).expect("memory storage never fails")
}

pub fn rejected() -> ProviderRpcError {
    ProviderRpcError::new(Some(codes::USER_REJECTED), "User rejected the request.")
}

pub fn connected_state(account: &str) -> ConnectionState {
    ConnectionState {
        account: Some(account.to_string()),
        is_connected: true,
        loading: false,
        error: None,
    }
}
