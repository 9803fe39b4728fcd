//! Frontend Models
//!
//! Online store records as delivered by the CMS `onlinestores` collection.

use chrono::{DateTime, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Online store record (matches the backend collection item)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnlineStore {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(
        rename = "_createdDate",
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        rename = "_updatedDate",
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub store_name: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub store_logo: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub country_of_origin: Option<String>,
    #[serde(default)]
    pub international_shipping: Option<bool>,
}

/// Collection payload returned by every record source: `{ "items": [...] }`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CollectionPage {
    #[serde(default)]
    pub items: Vec<OnlineStore>,
}

#[cfg(test)]
impl OnlineStore {
    /// Bare record with only the backend id set
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            created_at: None,
            updated_at: None,
            store_name: None,
            website_url: None,
            description: None,
            store_logo: None,
            category: None,
            country_of_origin: None,
            international_shipping: None,
        }
    }
}

impl OnlineStore {
    /// Name for alt text and headings
    pub fn display_name(&self) -> &str {
        non_empty(&self.store_name).unwrap_or("Store")
    }

    /// First letter of the store name, shown when there is no logo
    pub fn initial(&self) -> Option<char> {
        non_empty(&self.store_name).and_then(|name| name.chars().next())
    }

    pub fn logo(&self) -> Option<&str> {
        non_empty(&self.store_logo)
    }

    pub fn category_label<'a>(&'a self, fallback: &'a str) -> &'a str {
        non_empty(&self.category).unwrap_or(fallback)
    }

    pub fn origin_label(&self) -> &str {
        non_empty(&self.country_of_origin).unwrap_or("Worldwide")
    }

    /// Missing or `false` both mean the store only ships locally
    pub fn ships_internationally(&self) -> bool {
        self.international_shipping == Some(true)
    }

    /// Outbound link, hidden when the backend has none
    pub fn website(&self) -> Option<&str> {
        non_empty(&self.website_url)
    }
}

/// Treat `None` and `Some("")` the same way
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

// ========================
// Timestamp decoding
// ========================

/// Shapes the CMS uses for dates on the wire
#[derive(Deserialize)]
#[serde(untagged)]
enum WireTimestamp {
    Text(String),
    Wrapped {
        #[serde(rename = "$date")]
        date: String,
    },
    Other(IgnoredAny),
}

impl WireTimestamp {
    fn into_datetime(self) -> Option<DateTime<Utc>> {
        let text = match self {
            WireTimestamp::Text(text) => text,
            WireTimestamp::Wrapped { date } => date,
            WireTimestamp::Other(_) => return None,
        };
        DateTime::parse_from_rfc3339(&text)
            .ok()
            .map(|date| date.with_timezone(&Utc))
    }
}

/// Unparseable metadata dates decode as absent instead of failing the whole load
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<WireTimestamp>::deserialize(deserializer)?;
    Ok(raw.and_then(WireTimestamp::into_datetime))
}
