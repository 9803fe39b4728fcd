//! Directory State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filter::{FacetChoice, StoreFilter};
use crate::models::OnlineStore;
use crate::selection::DetailSlot;

/// Page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct DirectoryState {
    /// Full record set, exactly as loaded
    pub stores: Vec<OnlineStore>,
    /// True until the one load settles
    pub loading: bool,
    /// Search text and facet selections
    pub filter: StoreFilter,
    /// Store open in the detail overlay
    pub detail: DetailSlot,
}

impl DirectoryState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type DirectoryStore = Store<DirectoryState>;

/// Get the directory store from context
pub fn use_directory_store() -> DirectoryStore {
    expect_context::<DirectoryStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Settle the load; an empty set is what a failed load looks like
pub fn store_finish_load(store: &DirectoryStore, records: Vec<OnlineStore>) {
    store.stores().set(records);
    store.loading().set(false);
}

pub fn store_set_query(store: &DirectoryStore, query: String) {
    store.filter().write().query = query;
}

pub fn store_set_category(store: &DirectoryStore, choice: FacetChoice) {
    store.filter().write().category = choice;
}

pub fn store_set_country(store: &DirectoryStore, choice: FacetChoice) {
    store.filter().write().country = choice;
}

/// Clear search text and both selections
pub fn store_reset_filter(store: &DirectoryStore) {
    store.filter().write().reset();
}

pub fn store_open_detail(store: &DirectoryStore, selected: OnlineStore) {
    store.detail().write().open(selected);
}

pub fn store_close_detail(store: &DirectoryStore) {
    store.detail().write().close();
}
