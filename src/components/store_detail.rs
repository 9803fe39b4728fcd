//! Store Detail Overlay
//!
//! Expanded view of the store held in the detail slot. Closes via the close
//! buttons, a click on the backdrop, or the Escape key.

use leptos::prelude::*;
use leptos_overlay::{bind_escape_key, make_on_backdrop_click};

use crate::components::{ShippingBadge, StoreLogo};
use crate::store::{store_close_detail, use_directory_store, DirectoryStateStoreFields};

/// Open the store's website in a new browsing context
fn open_website(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.open_with_url_and_target(url, "_blank") {
        log::warn!("[DETAIL] Could not open {}: {:?}", url, e);
    }
}

#[component]
pub fn StoreDetail() -> impl IntoView {
    let store = use_directory_store();
    let close = move || store_close_detail(&store);

    bind_escape_key(close);
    let on_backdrop = make_on_backdrop_click(close);

    move || {
        let selected = store.detail().read().current().cloned()?;
        let on_backdrop = on_backdrop.clone();

        let category = selected.category_label("Retailer").to_string();
        let origin = selected.origin_label().to_string();
        let name = selected.store_name.clone().unwrap_or_default();
        let description = selected.description.clone().unwrap_or_default();
        let international = selected.ships_internationally();
        let website = selected.website().map(str::to_string);

        Some(view! {
            <div class="detail-backdrop" on:click=on_backdrop>
                <div class="detail-surface" role="dialog" aria-modal="true">
                    <div class="detail-media">
                        <StoreLogo store=selected class="detail-logo" />
                        <button class="detail-close" title="Close" on:click=move |_| close()>"✕"</button>
                    </div>
                    <div class="detail-body">
                        <div class="detail-badges">
                            <span class="badge category-badge">{category}</span>
                            <ShippingBadge international=international />
                        </div>
                        <h2 class="detail-name">{name}</h2>
                        <p class="detail-origin">"📍 " {origin}</p>
                        <p class="detail-description">{description}</p>
                        <div class="detail-actions">
                            {website.map(|url| view! {
                                <button class="visit-btn" on:click=move |_| open_website(&url)>
                                    "Visit Official Store ↗"
                                </button>
                            })}
                            <button class="secondary-btn" on:click=move |_| close()>"Close"</button>
                        </div>
                    </div>
                </div>
            </div>
        })
    }
}
