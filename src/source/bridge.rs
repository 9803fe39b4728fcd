//! CMS Bridge Source
//!
//! Reads the collection through the host page's CMS integration,
//! `window.__CMS__.getAll(collection)`, which resolves to `{ items: [...] }`.

use async_trait::async_trait;
use wasm_bindgen::prelude::*;

use super::{decode_collection, RecordSource};
use crate::error::LoadError;
use crate::models::OnlineStore;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "__CMS__"], js_name = getAll)]
    async fn cms_get_all(collection: &str) -> Result<JsValue, JsValue>;
}

pub struct BridgeSource;

#[async_trait(?Send)]
impl RecordSource for BridgeSource {
    async fn get_all(&self, collection: &str) -> Result<Vec<OnlineStore>, LoadError> {
        let result = cms_get_all(collection)
            .await
            .map_err(|e| LoadError::Bridge(format!("{:?}", e)))?;

        // Round-trip through JSON so JS `Date` values arrive as ISO strings
        let json = js_sys::JSON::stringify(&result)
            .map_err(|e| LoadError::Bridge(format!("JSON stringify error: {:?}", e)))?;
        decode_collection("CMS bridge", &String::from(json))
    }

    fn describe(&self) -> String {
        "CMS bridge".to_string()
    }
}
