//! Record Sources
//!
//! Read-only access to the backend collection. Every source answers one
//! question: "give me all records of this collection, in backend order".

mod bridge;
mod http;

use async_trait::async_trait;

use crate::config::SourceConfig;
use crate::error::LoadError;
use crate::models::{CollectionPage, OnlineStore};

pub use bridge::BridgeSource;
pub use http::HttpSource;

/// Backend read contract
#[async_trait(?Send)]
pub trait RecordSource {
    /// Fetch every record of `collection`; no filtering, sorting or paging is sent
    async fn get_all(&self, collection: &str) -> Result<Vec<OnlineStore>, LoadError>;

    /// Short label used in log lines
    fn describe(&self) -> String;
}

/// Records fixed at construction time
pub struct StaticSource {
    records: Vec<OnlineStore>,
}

impl StaticSource {
    pub fn new(records: Vec<OnlineStore>) -> Self {
        Self { records }
    }
}

#[async_trait(?Send)]
impl RecordSource for StaticSource {
    async fn get_all(&self, _collection: &str) -> Result<Vec<OnlineStore>, LoadError> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("inline ({} records)", self.records.len())
    }
}

/// Build the source selected by the page configuration
pub fn build_source(config: &SourceConfig) -> Box<dyn RecordSource> {
    match config {
        SourceConfig::Bridge => Box::new(BridgeSource),
        SourceConfig::Http { base_url } => Box::new(HttpSource::new(base_url.as_str())),
        SourceConfig::Inline { items } => Box::new(StaticSource::new(items.clone())),
    }
}

/// Decode a `{ "items": [...] }` JSON document
pub fn decode_collection(context: &str, body: &str) -> Result<Vec<OnlineStore>, LoadError> {
    serde_json::from_str::<CollectionPage>(body)
        .map(|page| page.items)
        .map_err(|e| LoadError::Decode {
            context: context.to_string(),
            reason: e.to_string(),
        })
}
