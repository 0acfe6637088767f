//! # Shared Types Library
//!
//! Types and helpers shared between the wallet core (`lib-wallet`) and the
//! browser frontend (`wallet-web`).
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects exchanged with the injected wallet provider
//!   - **[`dto::rpc`]**: EIP-1193 request arguments, method names and error codes
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::short_address`]**: The navbar's `0x1234...abcd` form
//!
//! ## Wire Format
//!
//! The provider speaks JSON-shaped JavaScript objects. DTOs serialize with
//! `serde` and cross into JavaScript through `serde-wasm-bindgen` in the
//! frontend:
//! - Optional fields are omitted when `None` (using `#[serde(skip_serializing_if = "Option::is_none")]`)
//! - Method names keep their JSON-RPC spelling (`eth_requestAccounts`, ...)
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::rpc::{RequestArguments, RpcMethod};
//! use shared::utils::short_address;
//!
//! let args = RequestArguments::new(RpcMethod::RequestAccounts);
//! assert_eq!(args.method, "eth_requestAccounts");
//!
//! assert_eq!(short_address(Some("0xABCDEF1234567890")), "0xABCD...7890");
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
