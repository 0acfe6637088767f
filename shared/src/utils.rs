//! # Shared Utility Functions
//!
//! Common utility functions used by the wallet core and the web frontend.
//!
//! ## Address Formatting
//!
//! Functions for formatting Ethereum account addresses for display:
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`short_address`] - The navbar form: first 6 and last 4, empty for no account
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed";
//! let formatted = format_address(address, 6, 4);
//! assert_eq!(formatted, "0x5aae...eaed");
//! ```

/// Characters kept from the start of an address by [`short_address`] (`0x` plus four hex digits)
pub const SHORT_PREFIX_LEN: usize = 6;

/// Characters kept from the end of an address by [`short_address`]
pub const SHORT_SUFFIX_LEN: usize = 4;

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// An address of exactly `prefix_len + suffix_len` characters is still
/// truncated. Anything shorter is returned as-is since the two ends would overlap.
///
/// # Arguments
///
/// * `address` - The wallet address to format
/// * `prefix_len` - Number of characters to show at the start
/// * `suffix_len` - Number of characters to show at the end
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed";
/// assert_eq!(format_address(addr, 6, 4), "0x5aae...eaed");
/// assert_eq!(format_address(addr, 4, 4), "0x5a...eaed");
/// assert_eq!(format_address("0x1234", 6, 4), "0x1234");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.chars().count();

    if address_len < prefix_len + suffix_len {
        return address.to_string();
    }

    let prefix: String = address.chars().take(prefix_len).collect();
    let suffix: String = address.chars().skip(address_len - suffix_len).collect();

    format!("{}...{}", prefix, suffix)
}

/// Format an optional account for the navbar (`0xABCD...7890`).
///
/// Returns an empty string when there is no account.
///
/// # Examples
///
/// ```rust
/// use shared::utils::short_address;
///
/// assert_eq!(short_address(Some("0xABCDEF1234567890")), "0xABCD...7890");
/// assert_eq!(short_address(None), "");
/// ```
pub fn short_address(address: Option<&str>) -> String {
    match address {
        Some(address) if !address.is_empty() => {
            format_address(address, SHORT_PREFIX_LEN, SHORT_SUFFIX_LEN)
        }
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_address() {
        let addr = "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed";
        assert_eq!(format_address(addr, 6, 4), "0x5aae...eaed");
        assert_eq!(format_address(addr, 4, 4), "0x5a...eaed");
        assert_eq!(format_address(addr, 2, 2), "0x...ed");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("0x1234", 6, 4), "0x1234");
        assert_eq!(format_address("0x1234567", 6, 4), "0x1234567");
        assert_eq!(format_address("", 6, 4), "");
    }

    #[test]
    fn test_format_address_exact_length() {
        assert_eq!(format_address("0x12345678", 6, 4), "0x1234...5678");
        assert_eq!(short_address(Some("0x12345678")), "0x1234...5678");
    }

    #[test]
    fn test_short_address() {
        assert_eq!(short_address(Some("0xABCDEF1234567890")), "0xABCD...7890");
        assert_eq!(short_address(None), "");
        assert_eq!(short_address(Some("")), "");
    }

    #[test]
    fn test_short_address_keeps_case() {
        assert_eq!(
            short_address(Some("0x5AAEB6053F3E94C9b9A09f33669435E7Ef1BeAed")),
            "0x5AAE...eAed"
        );
    }
}
