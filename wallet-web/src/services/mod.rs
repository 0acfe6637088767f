//! Browser services: the injected wallet and localStorage

pub mod storage;
pub mod wallet;

pub use storage::LocalStorageConsent;
pub use wallet::EthereumProvider;
