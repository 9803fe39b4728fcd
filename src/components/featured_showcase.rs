//! Featured Showcase Component
//!
//! Leading records of the full set, unaffected by search and filters.

use leptos::prelude::*;

use crate::components::StoreLogo;
use crate::context::use_directory_context;

#[component]
pub fn FeaturedShowcase() -> impl IntoView {
    let ctx = use_directory_context();

    view! {
        <Show when=move || ctx.featured.with(|featured| !featured.is_empty())>
            <section class="featured-showcase">
                <div class="section-heading">
                    <span class="eyebrow">"Editor's picks"</span>
                    <h2>"Featured Stores"</h2>
                </div>
                <div class="featured-list">
                    <For
                        each=move || ctx.featured.get()
                        key=|store| store.id.clone()
                        children=move |store| {
                            let name = store.store_name.clone().unwrap_or_default();
                            let description = store.description.clone().unwrap_or_default();
                            let logo_store = store.clone();
                            view! {
                                <article
                                    class="featured-card"
                                    on:click=move |_| ctx.on_select.run(store.clone())
                                >
                                    <StoreLogo store=logo_store class="featured-logo" />
                                    <h3>{name}</h3>
                                    <p>{description}</p>
                                </article>
                            }
                        }
                    />
                </div>
            </section>
        </Show>
    }
}
