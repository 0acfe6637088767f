//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::WalletButton;
use crate::utils::constants::{BRAND_NAME, NAV_ITEMS};

#[component]
pub fn Navbar() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <nav class="navbar">
            <div class="nav-inner">
                <A href="/" attr:class="nav-brand">
                    <svg width="30" height="35" fill="none" xmlns="http://www.w3.org/2000/svg">
                        <circle cx="15" cy="20" r="10" stroke="#0682ff"/>
                        <circle cx="15" cy="20" r="6" stroke="#0682ff" stroke-width="3"/>
                    </svg>
                    <span class="nav-title">{BRAND_NAME}</span>
                </A>

                // Desktop navigation
                <div class="nav-links">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| view! { <A href=item.href attr:class="nav-link">{item.name}</A> })
                        .collect_view()}
                    <WalletButton/>
                </div>

                // Mobile menu button
                <button
                    type="button"
                    class="nav-menu-toggle"
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "\u{2715}" } else { "\u{2630}" }}
                </button>
            </div>

            // Mobile navigation; any click inside closes it
            <Show when=move || menu_open.get()>
                <div class="nav-mobile" on:click=move |_| set_menu_open.set(false)>
                    {NAV_ITEMS
                        .iter()
                        .map(|item| view! { <A href=item.href attr:class="nav-mobile-link">{item.name}</A> })
                        .collect_view()}
                    <WalletButton class="btn btn-block"/>
                </div>
            </Show>
        </nav>
    }
}
