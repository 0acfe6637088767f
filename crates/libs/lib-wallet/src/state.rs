//! Connection state snapshot

/// What the UI renders: account, flags and the last error message.
///
/// `is_connected` implies `account.is_some()`; the mutators below are the only
/// way the store changes it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConnectionState {
    pub account: Option<String>,
    pub is_connected: bool,
    /// True only while a connect request is in flight.
    pub loading: bool,
    pub error: Option<String>,
}

/// Coarse status derived from [`ConnectionState`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectionStatus {
    Disconnected,
    Connecting,
    Connected,
    /// Disconnected with a message; a new connect attempt leaves it.
    Error,
}

impl ConnectionState {
    pub fn status(&self) -> ConnectionStatus {
        if self.loading {
            ConnectionStatus::Connecting
        } else if self.is_connected {
            ConnectionStatus::Connected
        } else if self.error.is_some() {
            ConnectionStatus::Error
        } else {
            ConnectionStatus::Disconnected
        }
    }

    pub fn address(&self) -> Option<&str> {
        self.account.as_deref()
    }

    /// `0xABCD...7890`, or empty when disconnected.
    pub fn display_address(&self) -> String {
        shared::utils::short_address(self.address())
    }

    pub(crate) fn begin_connect(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub(crate) fn set_connected(&mut self, account: String) {
        self.account = Some(account);
        self.is_connected = true;
        self.error = None;
    }

    pub(crate) fn set_failed(&mut self, message: String) {
        self.error = Some(message);
        self.loading = false;
    }

    /// Drop the account. `loading` belongs to the in-flight request and is left alone.
    pub(crate) fn clear(&mut self) {
        self.account = None;
        self.is_connected = false;
        self.error = None;
    }
}
