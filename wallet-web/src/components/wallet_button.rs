//! Wallet Connect Button

use leptos::prelude::*;
use lib_wallet::{ConnectionState, ConnectionStatus};

use crate::state::wallet::use_wallet_context;
use crate::utils::constants::METAMASK_INSTALL_URL;

/// Button text for a connection state
pub fn wallet_button_label(state: &ConnectionState) -> String {
    match state.status() {
        ConnectionStatus::Connecting => "Connecting...".to_string(),
        ConnectionStatus::Connected => state.display_address(),
        ConnectionStatus::Disconnected | ConnectionStatus::Error => "Connect".to_string(),
    }
}

/// Connect when disconnected, disconnect when connected. Shows the last error below.
#[component]
pub fn WalletButton(#[prop(default = "btn")] class: &'static str) -> impl IntoView {
    let wallet = use_wallet_context();

    let on_click = move |_| {
        if wallet.is_connected() {
            wallet.disconnect();
        } else {
            wallet.connect();
        }
    };

    view! {
        <div class="wallet-control">
            <button
                type="button"
                class=class
                disabled=move || wallet.loading()
                title=move || if wallet.is_connected() { "Disconnect wallet" } else { "Connect wallet" }
                on:click=on_click
            >
                {move || wallet.state.with(wallet_button_label)}
            </button>
            {move || wallet.error().map(|message| view! {
                <p class="wallet-error">
                    {message}
                    {(!wallet.has_provider()).then(|| view! {
                        " "
                        <a href=METAMASK_INSTALL_URL target="_blank" rel="noopener noreferrer">
                            "Install MetaMask"
                        </a>
                    })}
                </p>
            })}
        </div>
    }
}
