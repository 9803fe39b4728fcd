//! Catalog Layouts
//!
//! Two interchangeable presentations of the same directory state. A layout
//! only renders what the [`DirectoryContext`] hands it; it owns no state.

use leptos::prelude::*;

use crate::components::{
    FeaturedShowcase, FilterBar, HeroStats, ResultsState, StoreCard, StoreTable,
};
use crate::config::LayoutKind;
use crate::context::DirectoryContext;

/// Renders a record list given filtered records, facets and a selection callback
pub trait CatalogLayout {
    fn name(&self) -> &'static str;

    fn render(&self, ctx: DirectoryContext) -> AnyView;
}

/// Hero with counts, featured showcase, then a card grid
pub struct EditorialLayout;

impl CatalogLayout for EditorialLayout {
    fn name(&self) -> &'static str {
        "editorial"
    }

    fn render(&self, ctx: DirectoryContext) -> AnyView {
        view! {
            <section class="hero">
                <span class="eyebrow">"The Directory"</span>
                <h1>"Discover exceptional online stores from around the world"</h1>
                <a class="hero-cta" href="#collection">"Explore the collection"</a>
                <HeroStats />
            </section>

            <FeaturedShowcase />

            <section id="collection" class="collection">
                <FilterBar />
                <ResultsState placeholder_class="placeholder-card">
                    <div class="store-grid">
                        <For
                            each=move || ctx.filtered.get()
                            key=|store| store.id.clone()
                            children=move |store| view! { <StoreCard store=store on_select=ctx.on_select /> }
                        />
                    </div>
                </ResultsState>
            </section>
        }
        .into_any()
    }
}

/// Filter bar over a compact table
pub struct TableLayout;

impl CatalogLayout for TableLayout {
    fn name(&self) -> &'static str {
        "table"
    }

    fn render(&self, _ctx: DirectoryContext) -> AnyView {
        view! {
            <section id="collection" class="collection collection-table">
                <h1>"Online Stores"</h1>
                <FilterBar />
                <ResultsState placeholder_class="placeholder-row">
                    <StoreTable />
                </ResultsState>
            </section>
        }
        .into_any()
    }
}

pub fn layout_for(kind: LayoutKind) -> Box<dyn CatalogLayout> {
    match kind {
        LayoutKind::Editorial => Box::new(EditorialLayout),
        LayoutKind::Table => Box::new(TableLayout),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_for_kind() {
        assert_eq!(layout_for(LayoutKind::Editorial).name(), "editorial");
        assert_eq!(layout_for(LayoutKind::Table).name(), "table");
    }
}
