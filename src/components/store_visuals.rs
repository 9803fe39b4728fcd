//! Store Visuals
//!
//! Logo with initial-letter fallback and the shipping badge.

use leptos::prelude::*;

use crate::models::OnlineStore;

/// Store logo, or the first letter of the name when there is no logo
#[component]
pub fn StoreLogo(
    store: OnlineStore,
    #[prop(into)] class: String,
) -> impl IntoView {
    let alt = store.display_name().to_string();
    match store.logo() {
        Some(src) => view! {
            <img class=class src=src.to_string() alt=alt loading="lazy" />
        }.into_any(),
        None => {
            let initial = store.initial().map(String::from).unwrap_or_default();
            view! {
                <div class=format!("{} logo-placeholder", class) aria-label=alt>
                    <span class="logo-initial">{initial}</span>
                </div>
            }.into_any()
        }
    }
}

/// "Global Shipping" badge; nothing for local-only stores
#[component]
pub fn ShippingBadge(international: bool) -> impl IntoView {
    international.then(|| view! {
        <span class="badge shipping-badge">"🌐 Global Shipping"</span>
    })
}
