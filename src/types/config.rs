use serde::{Deserialize, Serialize};

use super::product::ProductRecord;
use crate::services::carousel::CarouselOptions;

/// Widget configuration, supplied by the host page at construction.
///
/// Serde-enabled so embedders can pass it as a JSON blob (the data-attribute
/// style hosts already use for the carousel settings). Every field has a
/// default; an empty `{}` yields a working widget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WidgetConfig {
    /// Storage slot name. Different keys give independent lists in the
    /// same storage scope.
    pub storage_key: String,
    /// Upper bound on the recency list length. Oldest entries are evicted
    /// first once exceeded.
    pub max_products: usize,
    /// Container id the product grid renders into.
    pub grid_container: String,
    /// Container id of the "nothing viewed yet" message.
    pub empty_message: String,
    /// Optional wrapping section id, hidden entirely while the list is empty.
    pub section_container: Option<String>,
    /// The current page's product, when on a product page. Recorded on
    /// refresh and excluded from the rendered rail.
    pub current_product: Option<ProductRecord>,
    pub carousel: CarouselOptions,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            storage_key: "recentlyViewedProducts".to_string(),
            max_products: 6,
            grid_container: "recently-viewed-products-grid".to_string(),
            empty_message: "recently-viewed-empty".to_string(),
            section_container: None,
            current_product: None,
            carousel: CarouselOptions::default(),
        }
    }
}
