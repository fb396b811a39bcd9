//! Card and grid markup assembly.
//!
//! Implements `RenderEngineTrait`: turning a list of product records into
//! the markup fragment the host page injects into the grid container.
//! Every record field is HTML-escaped before it reaches the markup, with
//! one exception: `rating` is a pre-rendered fragment supplied by the host
//! page at construction and is inserted verbatim.

use crate::services::price_presenter;
use crate::types::price::PriceVariant;
use crate::types::product::{PriceField, ProductRecord};

/// Trait defining markup assembly operations.
pub trait RenderEngineTrait {
    fn render_grid(&self, records: &[ProductRecord]) -> String;
    fn render_card(&self, record: &ProductRecord) -> String;
    fn render_price(&self, record: &ProductRecord) -> String;
}

/// Escapes the five HTML-significant characters.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Stateless markup assembler.
pub struct RenderEngine;

impl RenderEngine {
    pub fn new() -> Self {
        Self
    }

    /// Escaped display text for an optional price field, empty when absent.
    fn field_text(field: Option<&PriceField>) -> String {
        field.map(|f| escape_html(&f.to_string())).unwrap_or_default()
    }
}

impl Default for RenderEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderEngineTrait for RenderEngine {
    /// Renders the full grid fragment, one card per record in list order.
    fn render_grid(&self, records: &[ProductRecord]) -> String {
        records
            .iter()
            .map(|record| self.render_card(record))
            .collect::<Vec<_>>()
            .join("")
    }

    /// Renders a single product card: link, lazy image with hide-on-error
    /// fallback, title heading, price block, optional rating fragment.
    fn render_card(&self, record: &ProductRecord) -> String {
        let url = escape_html(&record.url);
        let image = escape_html(&record.image);
        let title = escape_html(&record.title);
        let price_block = self.render_price(record);
        let rating_block = record.rating.as_deref().unwrap_or("");

        format!(
            r#"<div class="recently-viewed-product">
  <a href="{}" class="recently-viewed-product__link">
    <img src="{}" alt="{}" class="recently-viewed-product__image" loading="lazy" onerror="this.style.display='none'">
    <h3 class="recently-viewed-product__title">{}</h3>
    {}{}
  </a>
</div>"#,
            url, image, title, price_block, rating_block
        )
    }

    /// Renders the price block for the record's display variant.
    ///
    /// Shown strings are the original pre-formatted fields; classification
    /// alone uses normalized numbers. Absent fields render as empty text,
    /// never as placeholders.
    fn render_price(&self, record: &ProductRecord) -> String {
        let variant = price_presenter::classify(record);

        let price = Self::field_text(record.price.as_ref());
        let compare_at = Self::field_text(record.compare_at_price.as_ref());
        let price_min = Self::field_text(record.price_min.as_ref());
        let price_max = Self::field_text(record.price_max.as_ref());
        let compare_min = Self::field_text(record.compare_at_price_min.as_ref());
        let compare_max = Self::field_text(record.compare_at_price_max.as_ref());

        match variant {
            PriceVariant::SingleRegular => format!(
                r#"<div class="recently-viewed-product__price">{}</div>"#,
                price
            ),
            PriceVariant::SingleOnSale => format!(
                r#"<div class="recently-viewed-product__price price--on-sale"><s class="price__compare-at">{}</s> <span class="price__sale">{}</span></div>"#,
                compare_at, price
            ),
            PriceVariant::RangeRegular => format!(
                r#"<div class="recently-viewed-product__price">{} - {}</div>"#,
                price_min, price_max
            ),
            PriceVariant::RangeOnSale => format!(
                r#"<div class="recently-viewed-product__price price--on-sale"><s class="price__compare-at">{} - {}</s> <span class="price__sale">{} - {}</span></div>"#,
                compare_min, compare_max, price_min, price_max
            ),
        }
    }
}
