//! # Data Transfer Objects (DTOs)
//!
//! Structures exchanged with the host-injected wallet provider.
//!
//! ## Module Organization
//!
//! - [`rpc`] - EIP-1193 `request()` arguments and provider errors
//!
//! ## Example Exchange
//!
//! ```text
//! window.ethereum.request({ "method": "eth_requestAccounts" })
//!   -> ["0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"]
//!
//! window.ethereum.request({
//!   "method": "wallet_revokePermissions",
//!   "params": [{ "eth_accounts": {} }]
//! })
//!   -> null
//!
//! rejected request:
//!   { "code": 4001, "message": "User rejected the request." }
//! ```

pub mod rpc;

pub use rpc::*;
