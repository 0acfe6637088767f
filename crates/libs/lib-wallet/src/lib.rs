//! # Wallet Connection Library
//!
//! Connection state for a browser page talking to an injected EIP-1193 wallet
//! (`window.ethereum`). The library is platform-agnostic: the wallet and the
//! durable key-value storage are traits, implemented over `wasm-bindgen` by
//! `wallet-web` and by in-memory fakes in tests.
//!
//! ## Modules
//!
//! - [`store`]: [`ConnectionStore`], the connect/disconnect/initialize state machine
//! - [`state`]: [`ConnectionState`] snapshot and derived [`ConnectionStatus`]
//! - [`provider`]: [`WalletProvider`] trait and the [`Subscription`] guard
//! - [`storage`]: [`ConsentStorage`] trait, [`ConsentFlag`] and [`MemoryStorage`]
//! - [`config`]: [`WalletConfig`]
//! - [`error`]: [`WalletError`] and [`StorageError`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lib_wallet::{ConnectionStore, MemoryStorage, WalletConfig, WalletProvider};
//!
//! async fn run<P: WalletProvider + 'static>(provider: Option<P>) -> lib_wallet::Result<()> {
//!     let store = ConnectionStore::new(provider, MemoryStorage::new(), WalletConfig::default())?;
//!     store.initialize().await;
//!
//!     if let Some(account) = store.connect().await? {
//!         println!("connected as {}", lib_wallet::format_address(Some(&account)));
//!     }
//!
//!     store.disconnect().await;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod provider;
pub mod state;
pub mod storage;
pub mod store;

pub use config::WalletConfig;
pub use error::{Result, StorageError, WalletError};
pub use provider::{AccountsChangedHandler, Subscription, WalletProvider};
pub use state::{ConnectionState, ConnectionStatus};
pub use storage::{ConsentFlag, ConsentStorage, MemoryStorage};
pub use store::ConnectionStore;

/// `0xABCD...7890` display form; empty for no account.
pub use shared::utils::short_address as format_address;
