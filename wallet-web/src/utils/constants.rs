//! Application constants

use lib_wallet::config::DEFAULT_CONSENT_KEY;

pub const BRAND_NAME: &str = "GoldenCity";

pub const METAMASK_INSTALL_URL: &str = "https://metamask.io/download/";

// Wallet settings, overridable at build time
pub const CONSENT_KEY: &str = match option_env!("WALLET_CONSENT_KEY") {
    Some(key) => key,
    None => DEFAULT_CONSENT_KEY,
};

/// Set `WALLET_KEEP_PERMISSIONS` at build time to leave the site's permission in the wallet on disconnect.
pub const REVOKE_ON_DISCONNECT: bool = option_env!("WALLET_KEEP_PERMISSIONS").is_none();

/// Navbar entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { name: "Home", href: "/" },
    NavItem { name: "Properties", href: "/properties" },
    NavItem { name: "About", href: "/about" },
    NavItem { name: "FAQ", href: "/faq" },
    NavItem { name: "Blog", href: "/blog" },
];
