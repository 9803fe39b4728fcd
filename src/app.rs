//! Online Store Directory App
//!
//! Root component: owns the directory store, starts the one-shot load and
//! hands the derived context to the configured layout.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{SiteFooter, SiteHeader, StoreDetail};
use crate::config::DirectoryConfig;
use crate::context::DirectoryContext;
use crate::layout::layout_for;
use crate::loader::{load_once, MountGuard};
use crate::source::build_source;
use crate::store::{store_finish_load, DirectoryState, DirectoryStateStoreFields};

#[component]
pub fn App(config: DirectoryConfig) -> impl IntoView {
    // State
    let store = Store::new(DirectoryState::new());
    provide_context(store);

    let ctx = DirectoryContext::new(store, &config);
    provide_context(ctx);

    // Late responses must not touch a disposed store
    let guard = MountGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.release()
    });

    // Load stores once on mount
    let source = build_source(&config.source);
    let collection = config.collection.clone();
    log::info!("[APP] Loading '{}' from {}", collection, source.describe());
    spawn_local(async move {
        load_once(source.as_ref(), &collection, &guard, |records| {
            store_finish_load(&store, records);
        })
        .await;
    });

    let layout = layout_for(config.layout);
    log::debug!("[APP] Rendering {} layout", layout.name());

    view! {
        <div
            id="top"
            class=format!("directory-page layout-{}", layout.name())
            class:detail-open=move || store.detail().read().is_open()
        >
            <SiteHeader />
            <main class="directory-main">
                {layout.render(ctx)}
            </main>
            <SiteFooter />
            <StoreDetail />
        </div>
    }
}
