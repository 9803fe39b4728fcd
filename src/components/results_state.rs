//! Results State Components
//!
//! Loading placeholders, the empty state, and the switch between them and
//! the layout's record list.

use leptos::prelude::*;

use crate::context::use_directory_context;

/// Pulsing placeholders shown while the load is outstanding
#[component]
pub fn LoadingPlaceholder(
    count: usize,
    class: &'static str,
) -> impl IntoView {
    view! {
        <div class="loading-placeholders" aria-busy="true">
            {(0..count).map(|_| view! { <div class=class></div> }).collect_view()}
        </div>
    }
}

/// Shown when nothing passes the filter, including after a failed load
#[component]
pub fn EmptyState() -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state-icon">"🛍"</div>
            <h3>"No stores found"</h3>
            <p>"Try adjusting your filters or search terms."</p>
        </div>
    }
}

/// Placeholders while loading, the empty state when nothing matches,
/// otherwise the children (the record list)
#[component]
pub fn ResultsState(
    placeholder_class: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    let ctx = use_directory_context();

    move || {
        if ctx.loading.get() {
            view! { <LoadingPlaceholder count=6 class=placeholder_class /> }.into_any()
        } else if ctx.filtered.with(|filtered| filtered.is_empty()) {
            view! { <EmptyState /> }.into_any()
        } else {
            children().into_any()
        }
    }
}
