//! Data Loader
//!
//! One-shot load of the full record set. Failures are logged and degrade to
//! an empty set; results arriving after the view is gone are dropped.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::models::OnlineStore;
use crate::source::RecordSource;

/// Tracks whether the view that started a load is still mounted
#[derive(Clone, Debug)]
pub struct MountGuard(Arc<AtomicBool>);

impl MountGuard {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    /// Called from the view's cleanup hook
    pub fn release(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// What happened to a settled load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Records handed to the view (count may be zero after a failure)
    Applied(usize),
    /// View was torn down before the response arrived
    Discarded,
}

/// Fetch the full collection; any failure becomes an empty set
pub async fn fetch_records(source: &dyn RecordSource, collection: &str) -> Vec<OnlineStore> {
    match source.get_all(collection).await {
        Ok(records) => {
            let records = dedupe_by_id(records);
            log::info!("[LOADER] Loaded {} stores from {}", records.len(), source.describe());
            records
        }
        Err(e) => {
            log::error!("[LOADER] Failed to load stores from {}: {}", source.describe(), e);
            Vec::new()
        }
    }
}

/// Run the load and hand the result to `apply`, unless the guard was released meanwhile
pub async fn load_once<F>(
    source: &dyn RecordSource,
    collection: &str,
    guard: &MountGuard,
    apply: F,
) -> LoadOutcome
where
    F: FnOnce(Vec<OnlineStore>),
{
    let records = fetch_records(source, collection).await;
    if !guard.is_mounted() {
        log::debug!("[LOADER] View unmounted, dropping {} stores", records.len());
        return LoadOutcome::Discarded;
    }
    let count = records.len();
    apply(records);
    LoadOutcome::Applied(count)
}

/// Keep the first record for each backend id
fn dedupe_by_id(records: Vec<OnlineStore>) -> Vec<OnlineStore> {
    let mut seen = HashSet::new();
    let total = records.len();
    let unique: Vec<OnlineStore> = records
        .into_iter()
        .filter(|store| seen.insert(store.id.clone()))
        .collect();
    if unique.len() != total {
        log::warn!("[LOADER] Dropped {} stores with duplicate ids", total - unique.len());
    }
    unique
}
