//! UI Components

pub mod navbar;
pub mod wallet_button;

pub use navbar::Navbar;
pub use wallet_button::WalletButton;
