//! Home Page

use leptos::prelude::*;
use lib_wallet::ConnectionStatus;

use crate::state::wallet::use_wallet_context;
use crate::utils::constants::BRAND_NAME;

#[component]
pub fn HomePage() -> impl IntoView {
    let wallet = use_wallet_context();

    let status_line = move || {
        wallet.state.with(|state| match state.status() {
            ConnectionStatus::Connected => format!("Wallet connected: {}", state.display_address()),
            ConnectionStatus::Connecting => "Waiting for your wallet...".to_string(),
            ConnectionStatus::Disconnected | ConnectionStatus::Error => {
                "Connect your wallet to save listings and make offers.".to_string()
            }
        })
    };

    view! {
        <section class="container hero">
            <h1 class="hero-title">{format!("Welcome to {}", BRAND_NAME)}</h1>
            <p class="hero-subtitle">{status_line}</p>
        </section>
    }
}
