use std::fmt;

use serde::{Deserialize, Serialize};

/// Product identity key.
///
/// Catalogs hand out numeric ids, older persisted entries sometimes carry
/// them as strings. Identity is type-strict: `Number(1)` and `Text("1")`
/// are distinct ids and never dedup against each other.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum ProductId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{}", n),
            ProductId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for ProductId {
    fn from(n: i64) -> Self {
        ProductId::Number(n)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        ProductId::Text(s.to_string())
    }
}

/// A single price field as it appears in persisted records.
///
/// Heterogeneous by contract: newer entries store raw numbers, legacy ones
/// store pre-formatted strings like "$1,234.56". Absence is `Option<PriceField>`
/// on the record, never a sentinel value here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PriceField {
    Amount(f64),
    Text(String),
}

impl fmt::Display for PriceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceField::Amount(v) => write!(f, "{}", v),
            PriceField::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<f64> for PriceField {
    fn from(v: f64) -> Self {
        PriceField::Amount(v)
    }
}

impl From<&str> for PriceField {
    fn from(s: &str) -> Self {
        PriceField::Text(s.to_string())
    }
}

/// Snapshot of a product's display data taken at view time.
///
/// Not a live reference to catalog data: whatever the page knew about the
/// product when the shopper viewed it is what later renders in the rail.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductRecord {
    pub id: ProductId,
    pub url: String,
    pub title: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compare_at_price: Option<PriceField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_min: Option<PriceField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_max: Option<PriceField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compare_at_price_min: Option<PriceField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compare_at_price_max: Option<PriceField>,
    /// Pre-rendered rating fragment supplied by the host page.
    /// Inserted verbatim by the renderer; same trust domain as the page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
}

impl ProductRecord {
    /// Creates a record with the required display fields and no price data.
    pub fn new(id: impl Into<ProductId>, url: &str, title: &str, image: &str) -> Self {
        Self {
            id: id.into(),
            url: url.to_string(),
            title: title.to_string(),
            image: image.to_string(),
            price: None,
            compare_at_price: None,
            price_min: None,
            price_max: None,
            compare_at_price_min: None,
            compare_at_price_max: None,
            rating: None,
        }
    }
}
