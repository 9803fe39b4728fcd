//! HTTP Source
//!
//! Reads the collection from a JSON endpoint:
//! `GET {base_url}/collections/{collection}/items` → `{ "items": [...] }`.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::header::ACCEPT;
use reqwest::Client;

use super::{decode_collection, RecordSource};
use crate::error::LoadError;
use crate::models::OnlineStore;

/// Characters escaped in the collection path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'<')
    .add(b'>');

pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn collection_url(&self, collection: &str) -> String {
        format!(
            "{}/collections/{}/items",
            self.base_url,
            utf8_percent_encode(collection, PATH_SEGMENT)
        )
    }
}

#[async_trait(?Send)]
impl RecordSource for HttpSource {
    async fn get_all(&self, collection: &str) -> Result<Vec<OnlineStore>, LoadError> {
        let url = self.collection_url(collection);
        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        decode_collection(&url, &body)
    }

    fn describe(&self) -> String {
        format!("HTTP {}", self.base_url)
    }
}
