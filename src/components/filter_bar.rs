//! Filter Bar Component
//!
//! Search box, category and country selectors, reset button and result count.
//! Every keystroke and selection re-filters immediately.

use leptos::prelude::*;

use crate::context::use_directory_context;
use crate::filter::{FacetChoice, ALL_SELECT_VALUE};
use crate::store::{
    store_reset_filter, store_set_category, store_set_country, store_set_query,
    use_directory_store, DirectoryStateStoreFields,
};

/// One facet `<select>` with a leading "all" option
#[component]
fn FacetSelect(
    #[prop(into)] all_label: String,
    #[prop(into)] options: Signal<Vec<String>>,
    #[prop(into)] selected: Signal<FacetChoice>,
    on_change: Callback<FacetChoice>,
) -> impl IntoView {
    view! {
        <select
            class="facet-select"
            prop:value=move || selected.get().as_select_value().to_string()
            on:change=move |ev| on_change.run(FacetChoice::from_select_value(&event_target_value(&ev)))
        >
            <option value=ALL_SELECT_VALUE selected=move || selected.get().is_all()>
                {all_label}
            </option>
            <For
                each=move || options.get()
                key=|option| option.clone()
                children=move |option| {
                    let label = option.clone();
                    let value = option.clone();
                    view! {
                        <option
                            value=value
                            selected=move || selected.get().as_select_value() == option
                        >
                            {label}
                        </option>
                    }
                }
            />
        </select>
    }
}

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_directory_store();
    let ctx = use_directory_context();

    let categories = Signal::derive(move || ctx.facets.get().categories);
    let countries = Signal::derive(move || ctx.facets.get().countries);
    let category = Signal::derive(move || store.filter().read().category.clone());
    let country = Signal::derive(move || store.filter().read().country.clone());

    view! {
        <div class="filter-bar">
            <div class="search-field">
                <span class="search-icon">"🔍"</span>
                <input
                    type="search"
                    placeholder="Search by name or keyword..."
                    prop:value=move || store.filter().read().query.clone()
                    on:input=move |ev| store_set_query(&store, event_target_value(&ev))
                />
            </div>

            <div class="facet-selects">
                <FacetSelect
                    all_label="All Categories"
                    options=categories
                    selected=category
                    on_change=Callback::new(move |choice: FacetChoice| store_set_category(&store, choice))
                />
                <FacetSelect
                    all_label="All Countries"
                    options=countries
                    selected=country
                    on_change=Callback::new(move |choice: FacetChoice| store_set_country(&store, choice))
                />
                <button
                    class="reset-btn"
                    disabled=move || store.filter().read().is_identity()
                    on:click=move |_| store_reset_filter(&store)
                >
                    "Reset"
                </button>
            </div>

            <p class="results-count">
                {move || {
                    let summary = ctx.summary.get();
                    format!("Showing {} of {} stores", summary.results, summary.total)
                }}
            </p>
        </div>
    }
}
