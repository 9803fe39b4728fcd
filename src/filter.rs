//! Filter Engine
//!
//! Pure derivations over the full record set: the filtered subset, facet
//! values for the selectors, the featured head-slice and summary counts.
//! Nothing here mutates the record set or can fail.

use serde::Deserialize;
use std::collections::HashSet;

use crate::models::{non_empty, OnlineStore};

/// `<select>` option value meaning "no restriction"
pub const ALL_SELECT_VALUE: &str = "all";

/// Selected facet value, or no restriction
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FacetChoice {
    #[default]
    All,
    Value(String),
}

impl FacetChoice {
    /// Map a `<select>` value back to a choice (`"all"` and `""` mean no restriction)
    pub fn from_select_value(value: &str) -> Self {
        if value.is_empty() || value == ALL_SELECT_VALUE {
            FacetChoice::All
        } else {
            FacetChoice::Value(value.to_string())
        }
    }

    pub fn as_select_value(&self) -> &str {
        match self {
            FacetChoice::All => ALL_SELECT_VALUE,
            FacetChoice::Value(value) => value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FacetChoice::All)
    }

    /// Case-sensitive exact match against the record field
    fn admits(&self, field: &Option<String>) -> bool {
        match self {
            FacetChoice::All => true,
            FacetChoice::Value(value) => field.as_deref() == Some(value.as_str()),
        }
    }
}

/// The three user-controlled filter inputs
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StoreFilter {
    pub query: String,
    pub category: FacetChoice,
    pub country: FacetChoice,
}

impl StoreFilter {
    /// True when applying this filter returns the full set
    pub fn is_identity(&self) -> bool {
        self.query.is_empty() && self.category.is_all() && self.country.is_all()
    }

    /// Clear the query and both selections
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Filtered copy of `stores`, in input order
    pub fn apply(&self, stores: &[OnlineStore]) -> Vec<OnlineStore> {
        let needle = self.query.to_lowercase();
        stores
            .iter()
            .filter(|store| self.admits(store, &needle))
            .cloned()
            .collect()
    }

    fn admits(&self, store: &OnlineStore, needle: &str) -> bool {
        let text_ok = self.query.is_empty()
            || contains_folded(&store.store_name, needle)
            || contains_folded(&store.description, needle);
        text_ok
            && self.category.admits(&store.category)
            && self.country.admits(&store.country_of_origin)
    }
}

/// Missing field never matches a non-empty query
fn contains_folded(field: &Option<String>, needle: &str) -> bool {
    field
        .as_deref()
        .is_some_and(|text| text.to_lowercase().contains(needle))
}

// ========================
// Facets
// ========================

/// Ordering of facet values in the selectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacetOrder {
    /// Order in which values first appear in the record set
    #[default]
    FirstSeen,
    Alphabetical,
}

/// Distinct non-empty category and country values
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Facets {
    pub categories: Vec<String>,
    pub countries: Vec<String>,
}

impl Facets {
    /// Always derive from the full set so one selection never hides the other options
    pub fn derive(stores: &[OnlineStore], order: FacetOrder) -> Self {
        Self {
            categories: distinct_values(stores.iter().map(|s| &s.category), order),
            countries: distinct_values(stores.iter().map(|s| &s.country_of_origin), order),
        }
    }
}

fn distinct_values<'a>(
    values: impl Iterator<Item = &'a Option<String>>,
    order: FacetOrder,
) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut distinct: Vec<String> = values
        .filter_map(non_empty)
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect();
    if order == FacetOrder::Alphabetical {
        distinct.sort();
    }
    distinct
}

/// Leading `count` records of the full set, regardless of filters
pub fn featured(stores: &[OnlineStore], count: usize) -> &[OnlineStore] {
    &stores[..count.min(stores.len())]
}

/// Counts shown in the page header and results bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectorySummary {
    pub total: usize,
    pub countries: usize,
    pub categories: usize,
    /// Size of the filtered set; the other counts come from the full set
    pub results: usize,
}

impl DirectorySummary {
    pub fn new(stores: &[OnlineStore], facets: &Facets, results: usize) -> Self {
        Self {
            total: stores.len(),
            countries: facets.countries.len(),
            categories: facets.categories.len(),
            results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_store(
        id: &str,
        name: Option<&str>,
        category: Option<&str>,
        country: Option<&str>,
    ) -> OnlineStore {
        let mut store = OnlineStore::new(id);
        store.store_name = name.map(str::to_string);
        store.category = category.map(str::to_string);
        store.country_of_origin = country.map(str::to_string);
        store
    }

    fn ids(stores: &[OnlineStore]) -> Vec<&str> {
        stores.iter().map(|s| s.id.as_str()).collect()
    }

    /// A/B/C/D: Tea/Glass x Japan/France, D without a name
    fn scenario() -> Vec<OnlineStore> {
        vec![
            make_store("A", Some("Uji Leaf"), Some("Tea"), Some("Japan")),
            make_store("B", Some("Maison du Thé"), Some("Tea"), Some("France")),
            make_store("C", Some("Edo Kiriko"), Some("Glass"), Some("Japan")),
            make_store("D", None, Some("Glass"), Some("France")),
        ]
    }

    fn query(text: &str) -> StoreFilter {
        StoreFilter { query: text.to_string(), ..Default::default() }
    }

    #[test]
    fn test_identity_filter_returns_full_set() {
        let stores = scenario();
        let filter = StoreFilter::default();
        assert!(filter.is_identity());
        assert_eq!(filter.apply(&stores), stores);
    }

    #[test]
    fn test_query_is_case_insensitive_substring() {
        let stores = vec![make_store("k", Some("Kyoto Ceramics"), None, None)];
        for text in ["kyoto", "CERAMICS", "yoto cer"] {
            assert_eq!(ids(&query(text).apply(&stores)), vec!["k"], "query {text:?}");
        }
        assert!(query("kyotoz").apply(&stores).is_empty());
    }

    #[test]
    fn test_query_matches_description() {
        let mut store = make_store("d", Some("Atelier"), None, None);
        store.description = Some("Linen and WOOL blankets".to_string());
        let stores = vec![store];
        assert_eq!(ids(&query("wool").apply(&stores)), vec!["d"]);
        assert!(query("silk").apply(&stores).is_empty());
    }

    #[test]
    fn test_missing_text_fields() {
        let stores = vec![make_store("blank", None, Some("Tea"), None)];
        assert!(query("a").apply(&stores).is_empty());
        assert_eq!(ids(&query("").apply(&stores)), vec!["blank"]);
    }

    #[test]
    fn test_category_is_exact_match() {
        let stores = vec![
            make_store("1", Some("One"), Some("Home Goods"), None),
            make_store("2", Some("Two"), Some("home goods"), None),
            make_store("3", Some("Three"), None, None),
        ];
        let filter = StoreFilter {
            category: FacetChoice::Value("Home Goods".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&stores)), vec!["1"]);
    }

    #[test]
    fn test_scenario_filters_and_reset() {
        let stores = scenario();
        let mut filter = StoreFilter {
            category: FacetChoice::Value("Tea".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&stores)), vec!["A", "B"]);

        filter.country = FacetChoice::Value("Japan".to_string());
        assert_eq!(ids(&filter.apply(&stores)), vec!["A"]);

        filter.reset();
        assert_eq!(ids(&filter.apply(&stores)), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let stores = scenario();
        let mut filter = StoreFilter::default();
        let before = filter.apply(&stores);
        filter.reset();
        filter.reset();
        assert_eq!(filter, StoreFilter::default());
        assert_eq!(filter.apply(&stores), before);
    }

    #[test]
    fn test_query_combines_with_facets() {
        let stores = scenario();
        let filter = StoreFilter {
            query: "e".to_string(),
            category: FacetChoice::All,
            country: FacetChoice::Value("Japan".to_string()),
        };
        // D has no name so only named Japanese stores containing "e" remain
        assert_eq!(ids(&filter.apply(&stores)), vec!["A", "C"]);
    }

    #[test]
    fn test_facets_first_seen_and_non_empty() {
        let mut stores = scenario();
        stores.push(make_store("E", Some("Empty"), Some(""), None));
        stores.insert(0, make_store("Z", Some("Zebra"), Some("Wood"), Some("Sweden")));

        let facets = Facets::derive(&stores, FacetOrder::FirstSeen);
        assert_eq!(facets.categories, vec!["Wood", "Tea", "Glass"]);
        assert_eq!(facets.countries, vec!["Sweden", "Japan", "France"]);

        let sorted = Facets::derive(&stores, FacetOrder::Alphabetical);
        assert_eq!(sorted.categories, vec!["Glass", "Tea", "Wood"]);
        assert_eq!(sorted.countries, vec!["France", "Japan", "Sweden"]);
    }

    #[test]
    fn test_facets_ignore_selection() {
        let stores = scenario();
        let filter = StoreFilter {
            country: FacetChoice::Value("France".to_string()),
            ..Default::default()
        };
        let filtered = filter.apply(&stores);
        assert_eq!(ids(&filtered), vec!["B", "D"]);
        // Facets come from the full set, so both categories remain selectable
        let facets = Facets::derive(&stores, FacetOrder::FirstSeen);
        assert_eq!(facets.categories, vec!["Tea", "Glass"]);
        assert_eq!(facets.countries, vec!["Japan", "France"]);
    }

    #[test]
    fn test_featured_is_head_slice() {
        let stores: Vec<_> = (1..=5)
            .map(|i| make_store(&i.to_string(), Some("Shop"), None, None))
            .collect();
        assert_eq!(ids(featured(&stores, 3)), vec!["1", "2", "3"]);
        assert_eq!(featured(&stores[..2], 3).len(), 2);
        assert!(featured(&[], 3).is_empty());
    }

    #[test]
    fn test_summary_counts() {
        let stores = scenario();
        let facets = Facets::derive(&stores, FacetOrder::FirstSeen);
        let filtered = query("uji").apply(&stores);
        let summary = DirectorySummary::new(&stores, &facets, filtered.len());
        assert_eq!(summary, DirectorySummary { total: 4, countries: 2, categories: 2, results: 1 });
    }

    #[test]
    fn test_select_value_mapping() {
        assert_eq!(FacetChoice::from_select_value("all"), FacetChoice::All);
        assert_eq!(FacetChoice::from_select_value(""), FacetChoice::All);
        assert_eq!(FacetChoice::from_select_value("Tea"), FacetChoice::Value("Tea".to_string()));
        assert_eq!(FacetChoice::Value("Tea".to_string()).as_select_value(), "Tea");
        assert_eq!(FacetChoice::All.as_select_value(), "all");
    }
}
