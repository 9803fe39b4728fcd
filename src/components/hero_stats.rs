//! Hero Stats Component
//!
//! Directory-wide counts. These come from the full set and do not react to filters.

use leptos::prelude::*;

use crate::context::use_directory_context;

#[component]
pub fn HeroStats() -> impl IntoView {
    let ctx = use_directory_context();

    view! {
        <div class="hero-stats">
            <div class="hero-stat">
                <h3>{move || format!("{}+", ctx.summary.get().total)}</h3>
                <p>"Curated Stores"</p>
            </div>
            <div class="hero-stat">
                <h3>{move || ctx.summary.get().countries}</h3>
                <p>"Countries"</p>
            </div>
            <div class="hero-stat">
                <h3>{move || ctx.summary.get().categories}</h3>
                <p>"Categories"</p>
            </div>
        </div>
    }
}
