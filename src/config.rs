//! Directory Configuration
//!
//! Read once at startup from the host page global `window.__DIRECTORY_CONFIG__`.
//! Every field is optional; a missing global means "all defaults".

use serde::Deserialize;
use std::str::FromStr;
use wasm_bindgen::JsValue;

use crate::error::ConfigError;
use crate::filter::FacetOrder;
use crate::models::OnlineStore;

/// Name of the host page global holding the config object
pub const CONFIG_GLOBAL: &str = "__DIRECTORY_CONFIG__";

/// CMS collection holding the store records
pub const DEFAULT_COLLECTION: &str = "onlinestores";

/// Number of leading records shown in the featured showcase
pub const DEFAULT_FEATURED_COUNT: usize = 3;

/// Where the record set is read from
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SourceConfig {
    /// Host page JavaScript integration (`window.__CMS__.getAll`)
    #[default]
    Bridge,
    /// Plain JSON endpoint: `GET {base_url}/collections/{collection}/items`
    Http {
        #[serde(rename = "baseUrl")]
        base_url: String,
    },
    /// Records embedded in the config itself (static builds, demos)
    Inline {
        #[serde(default)]
        items: Vec<OnlineStore>,
    },
}

/// Presentation strategy for the directory page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    /// Hero stats, featured showcase and a card grid
    #[default]
    Editorial,
    /// Compact rows, one store per line
    Table,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DirectoryConfig {
    pub collection: String,
    pub source: SourceConfig,
    pub layout: LayoutKind,
    pub featured_count: usize,
    pub facet_order: FacetOrder,
    pub log_level: String,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            collection: DEFAULT_COLLECTION.to_string(),
            source: SourceConfig::default(),
            layout: LayoutKind::default(),
            featured_count: DEFAULT_FEATURED_COUNT,
            facet_order: FacetOrder::default(),
            log_level: "info".to_string(),
        }
    }
}

impl DirectoryConfig {
    /// Parse a JSON config document
    #[cfg(test)]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Invalid(e.to_string()))?;
        config.validate()
    }

    /// Read the config object from the host page, defaults when it is absent
    pub fn from_window() -> Result<Self, ConfigError> {
        let Some(window) = web_sys::window() else {
            return Ok(Self::default());
        };
        let raw = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
            .map_err(|e| ConfigError::Invalid(format!("{:?}", e)))?;
        if raw.is_undefined() || raw.is_null() {
            return Ok(Self::default());
        }
        let config: Self =
            serde_wasm_bindgen::from_value(raw).map_err(|e| ConfigError::Invalid(e.to_string()))?;
        config.validate()
    }

    /// Unknown level names fall back to `Info`
    pub fn level_filter(&self) -> log::LevelFilter {
        log::LevelFilter::from_str(&self.log_level).unwrap_or(log::LevelFilter::Info)
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.collection.trim().is_empty() {
            return Err(ConfigError::Invalid("collection must not be empty".to_string()));
        }
        if let SourceConfig::Http { base_url } = &self.source {
            if base_url.trim().is_empty() {
                return Err(ConfigError::Invalid("http source needs a baseUrl".to_string()));
            }
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = DirectoryConfig::from_json("{}").unwrap();
        assert_eq!(config, DirectoryConfig::default());
        assert_eq!(config.collection, "onlinestores");
        assert_eq!(config.source, SourceConfig::Bridge);
        assert_eq!(config.layout, LayoutKind::Editorial);
        assert_eq!(config.featured_count, 3);
        assert_eq!(config.facet_order, FacetOrder::FirstSeen);
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_overrides() {
        let json = r#"{
            "source": { "kind": "http", "baseUrl": "https://cms.example/api" },
            "layout": "table",
            "featuredCount": 5,
            "facetOrder": "alphabetical",
            "logLevel": "debug"
        }"#;
        let config = DirectoryConfig::from_json(json).unwrap();
        assert_eq!(
            config.source,
            SourceConfig::Http { base_url: "https://cms.example/api".to_string() }
        );
        assert_eq!(config.layout, LayoutKind::Table);
        assert_eq!(config.featured_count, 5);
        assert_eq!(config.facet_order, FacetOrder::Alphabetical);
        assert_eq!(config.level_filter(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_inline_source() {
        let json = r#"{ "source": { "kind": "inline", "items": [{ "_id": "a", "storeName": "Alpha" }] } }"#;
        let config = DirectoryConfig::from_json(json).unwrap();
        match config.source {
            SourceConfig::Inline { items } => {
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].display_name(), "Alpha");
            }
            other => panic!("unexpected source {:?}", other),
        }
    }

    #[test]
    fn test_unknown_layout_rejected() {
        assert!(DirectoryConfig::from_json(r#"{ "layout": "carousel" }"#).is_err());
    }

    #[test]
    fn test_http_source_needs_base_url() {
        let json = r#"{ "source": { "kind": "http", "baseUrl": " " } }"#;
        assert!(DirectoryConfig::from_json(json).is_err());
    }

    #[test]
    fn test_bad_log_level_falls_back() {
        let config = DirectoryConfig::from_json(r#"{ "logLevel": "chatty" }"#).unwrap();
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }
}
