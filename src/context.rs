//! Directory Context
//!
//! Derived views over the directory store, provided via Leptos Context API.
//! This is everything a layout needs to render: filtered records, facets,
//! the featured slice, counts, the loading flag and a selection callback.

use leptos::prelude::*;

use crate::config::DirectoryConfig;
use crate::filter::{featured as featured_slice, DirectorySummary, Facets};
use crate::models::OnlineStore;
use crate::store::{store_open_detail, DirectoryStateStoreFields, DirectoryStore};

#[derive(Clone, Copy)]
pub struct DirectoryContext {
    /// Records passing the current filter, in backend order
    pub filtered: Memo<Vec<OnlineStore>>,
    /// Selector options, always from the full set
    pub facets: Memo<Facets>,
    /// Leading records of the full set
    pub featured: Memo<Vec<OnlineStore>>,
    pub summary: Memo<DirectorySummary>,
    pub loading: Signal<bool>,
    /// Open a store in the detail overlay
    pub on_select: Callback<OnlineStore>,
}

impl DirectoryContext {
    pub fn new(store: DirectoryStore, config: &DirectoryConfig) -> Self {
        let facet_order = config.facet_order;
        let featured_count = config.featured_count;

        let filtered = Memo::new(move |_| {
            let filter = store.filter().read();
            filter.apply(&store.stores().read())
        });
        let facets = Memo::new(move |_| Facets::derive(&store.stores().read(), facet_order));
        let featured =
            Memo::new(move |_| featured_slice(&store.stores().read(), featured_count).to_vec());
        let summary = Memo::new(move |_| {
            DirectorySummary::new(&store.stores().read(), &facets.read(), filtered.read().len())
        });

        Self {
            filtered,
            facets,
            featured,
            summary,
            loading: Signal::derive(move || store.loading().get()),
            on_select: Callback::new(move |selected: OnlineStore| {
                log::debug!("[DETAIL] Opening {}", selected.id);
                store_open_detail(&store, selected);
            }),
        }
    }
}

/// Get the directory context
pub fn use_directory_context() -> DirectoryContext {
    expect_context::<DirectoryContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use reactive_stores::Store;

    use crate::filter::FacetChoice;
    use crate::store::{store_finish_load, store_set_country, store_set_query, DirectoryState};

    fn make_store(id: &str, name: &str, category: &str, country: &str) -> OnlineStore {
        let mut store = OnlineStore::new(id);
        store.store_name = Some(name.to_string());
        store.category = Some(category.to_string());
        store.country_of_origin = Some(country.to_string());
        store
    }

    fn ids(stores: &[OnlineStore]) -> Vec<&str> {
        stores.iter().map(|s| s.id.as_str()).collect()
    }

    fn catalog() -> Vec<OnlineStore> {
        vec![
            make_store("1", "Uji Leaf", "Tea", "Japan"),
            make_store("2", "Maison du Thé", "Tea", "France"),
            make_store("3", "Edo Kiriko", "Glass", "Japan"),
            make_store("4", "Verre Atelier", "Glass", "France"),
            make_store("5", "Nordic Birch", "Wood", "Sweden"),
        ]
    }

    #[test]
    fn test_filters_leave_facets_and_featured_alone() {
        let owner = Owner::new();
        owner.set();

        let store = Store::new(DirectoryState::new());
        let ctx = DirectoryContext::new(store, &DirectoryConfig::default());
        store_finish_load(&store, catalog());

        let categories = ctx.facets.get_untracked().categories;
        let featured = ctx.featured.get_untracked();
        assert_eq!(categories, vec!["Tea", "Glass", "Wood"]);
        assert_eq!(ids(&featured), vec!["1", "2", "3"]);
        assert_eq!(ctx.filtered.get_untracked().len(), 5);

        store_set_country(&store, FacetChoice::Value("Japan".to_string()));
        assert_eq!(ids(&ctx.filtered.get_untracked()), vec!["1", "3"]);
        assert_eq!(ctx.facets.get_untracked().categories, categories);
        assert_eq!(ctx.featured.get_untracked(), featured);

        store_set_query(&store, "kiriko".to_string());
        assert_eq!(ids(&ctx.filtered.get_untracked()), vec!["3"]);
        assert_eq!(ctx.facets.get_untracked().categories, categories);
        assert_eq!(ctx.featured.get_untracked(), featured);

        // Only the results count follows the filter
        let summary = ctx.summary.get_untracked();
        assert_eq!(summary.total, 5);
        assert_eq!(summary.categories, 3);
        assert_eq!(summary.countries, 3);
        assert_eq!(summary.results, 1);
    }

    #[test]
    fn test_on_select_opens_detail() {
        let owner = Owner::new();
        owner.set();

        let store = Store::new(DirectoryState::new());
        let ctx = DirectoryContext::new(store, &DirectoryConfig::default());
        store_finish_load(&store, catalog());

        ctx.on_select.run(make_store("5", "Nordic Birch", "Wood", "Sweden"));

        let opened = store.detail().get_untracked().current().map(|s| s.id.clone());
        assert_eq!(opened, Some("5".to_string()));
    }
}
