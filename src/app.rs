//! Widget core for shoptrail.
//!
//! Central struct wiring the recency manager and the render engine to a
//! host page, managing the page-load lifecycle.

use log::warn;

use crate::managers::recency_manager::{excluding_product, RecencyManager, RecencyManagerTrait};
use crate::services::host_page::HostPage;
use crate::services::render_engine::{RenderEngine, RenderEngineTrait};
use crate::storage::SlotStore;
use crate::types::config::WidgetConfig;
use crate::types::errors::{RenderError, StorageError};

/// What a `refresh` call actually did, for embedders that want to report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshOutcome {
    /// Whether the current product was persisted this refresh.
    pub recorded: bool,
    /// Number of cards rendered into the grid (0 when empty or skipped).
    pub rendered: usize,
}

/// The recently-viewed widget.
///
/// Holds the host-supplied configuration, a recency manager over the
/// injected store, and the render engine. One instance per rail; several
/// instances with distinct `storage_key`s can share a store.
pub struct Widget<'a, S: SlotStore> {
    config: WidgetConfig,
    manager: RecencyManager<'a, S>,
    engine: RenderEngine,
}

impl<'a, S: SlotStore> Widget<'a, S> {
    /// Creates a widget over the provided store.
    pub fn new(config: WidgetConfig, store: &'a S) -> Self {
        let manager = RecencyManager::new(store, &config.storage_key, config.max_products);
        Self {
            config,
            manager,
            engine: RenderEngine::new(),
        }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Page-load lifecycle: record the current product, then render.
    ///
    /// Nothing here interrupts the page. A failed write is warned and
    /// rendering continues with whatever the store still holds; a missing
    /// grid container skips rendering entirely.
    pub fn refresh(&mut self, page: &mut dyn HostPage) -> RefreshOutcome {
        let mut recorded = false;
        if let Some(current) = self.config.current_product.clone() {
            match self.manager.record_view(&current) {
                Ok(()) => recorded = true,
                Err(err) => warn!("Error saving recently viewed product: {}", err),
            }
        }

        let rendered = match self.display(page) {
            Ok(count) => count,
            Err(RenderError::MissingContainer(id)) => {
                warn!("Recently viewed products container not found: {}", id);
                0
            }
        };

        RefreshOutcome { recorded, rendered }
    }

    /// Renders the current list state into the page.
    ///
    /// Empty list shows the empty message and hides the grid (and the
    /// wrapping section when configured); non-empty does the opposite and
    /// fills the grid.
    fn display(&self, page: &mut dyn HostPage) -> Result<usize, RenderError> {
        if !page.has_container(&self.config.grid_container) {
            return Err(RenderError::MissingContainer(
                self.config.grid_container.clone(),
            ));
        }

        let mut products = self.manager.load();
        if let Some(current) = &self.config.current_product {
            products = excluding_product(&products, &current.id);
        }

        if products.is_empty() {
            page.set_visible(&self.config.empty_message, true);
            page.set_visible(&self.config.grid_container, false);
            if let Some(section) = &self.config.section_container {
                page.set_visible(section, false);
            }
            return Ok(0);
        }

        page.set_visible(&self.config.empty_message, false);
        page.set_visible(&self.config.grid_container, true);
        if let Some(section) = &self.config.section_container {
            page.set_visible(section, true);
        }

        let markup = self.engine.render_grid(&products);
        page.set_content(&self.config.grid_container, &markup);
        Ok(products.len())
    }

    /// Clears the persisted list. Callers typically follow with `refresh`.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.manager.clear()
    }
}
