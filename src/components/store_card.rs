//! Store Card Component
//!
//! Grid card used by the editorial layout.

use leptos::prelude::*;

use crate::components::{ShippingBadge, StoreLogo};
use crate::models::{non_empty, OnlineStore};

#[component]
pub fn StoreCard(
    store: OnlineStore,
    on_select: Callback<OnlineStore>,
) -> impl IntoView {
    let name = store.store_name.clone().unwrap_or_default();
    let description = store.description.clone().unwrap_or_default();
    let category = store.category_label("General").to_string();
    let country = non_empty(&store.country_of_origin).map(str::to_string);
    let international = store.ships_internationally();
    let logo_store = store.clone();

    view! {
        <article class="store-card" on:click=move |_| on_select.run(store.clone())>
            <div class="store-card-media">
                <StoreLogo store=logo_store class="store-card-logo" />
                <ShippingBadge international=international />
            </div>
            <div class="store-card-body">
                <h3 class="store-card-name">{name}</h3>
                {country.map(|c| view! { <span class="store-card-country">"📍 " {c}</span> })}
                <p class="store-card-description">{description}</p>
                <div class="store-card-footer">
                    <span class="store-card-category">{category}</span>
                    <span class="store-card-more">"View details →"</span>
                </div>
            </div>
        </article>
    }
}
