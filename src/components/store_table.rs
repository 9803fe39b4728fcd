//! Store Table Component
//!
//! One row per filtered store; used by the table layout.

use leptos::prelude::*;

use crate::components::{ShippingBadge, StoreLogo};
use crate::context::use_directory_context;

#[component]
pub fn StoreTable() -> impl IntoView {
    let ctx = use_directory_context();

    view! {
        <table class="store-table">
            <thead>
                <tr>
                    <th></th>
                    <th>"Store"</th>
                    <th>"Category"</th>
                    <th>"Country"</th>
                    <th>"Shipping"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || ctx.filtered.get()
                    key=|store| store.id.clone()
                    children=move |store| {
                        let name = store.store_name.clone().unwrap_or_default();
                        let description = store.description.clone().unwrap_or_default();
                        let category = store.category_label("General").to_string();
                        let country = store.origin_label().to_string();
                        let international = store.ships_internationally();
                        let logo_store = store.clone();
                        view! {
                            <tr class="store-row" on:click=move |_| ctx.on_select.run(store.clone())>
                                <td><StoreLogo store=logo_store class="store-row-logo" /></td>
                                <td>
                                    <div class="store-row-name">{name}</div>
                                    <div class="store-row-description">{description}</div>
                                </td>
                                <td>{category}</td>
                                <td>{country}</td>
                                <td>
                                    <ShippingBadge international=international />
                                    {(!international).then(|| view! { <span class="local-label">"Local"</span> })}
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
