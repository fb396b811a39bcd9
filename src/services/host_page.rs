//! The page-environment port.
//!
//! The widget core never touches a real DOM. Everything it needs from the
//! host page (container lookup, content injection, visibility toggles)
//! goes through `HostPage`, so the same core runs against a real page
//! binding or the in-memory fake below.

use std::collections::HashMap;

/// Trait defining the page operations the widget performs.
pub trait HostPage {
    /// Returns whether a container with the given id exists on the page.
    fn has_container(&self, id: &str) -> bool;

    /// Replaces the inner content of the given container.
    fn set_content(&mut self, id: &str, html: &str);

    /// Shows or hides the given container.
    fn set_visible(&mut self, id: &str, visible: bool);
}

/// In-memory page fake for tests and demos.
///
/// Containers must be registered up front with [`MemoryPage::add_container`];
/// operations against unknown ids are ignored, the way a real page binding
/// would no-op on a missing element.
pub struct MemoryPage {
    containers: HashMap<String, ContainerState>,
}

#[derive(Debug, Clone)]
struct ContainerState {
    content: String,
    visible: bool,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self {
            containers: HashMap::new(),
        }
    }

    /// Registers an empty, visible container under the given id.
    pub fn add_container(&mut self, id: &str) {
        self.containers.insert(
            id.to_string(),
            ContainerState {
                content: String::new(),
                visible: true,
            },
        );
    }

    /// Returns the current content of a container, if it exists.
    pub fn content(&self, id: &str) -> Option<&str> {
        self.containers.get(id).map(|c| c.content.as_str())
    }

    /// Returns the current visibility of a container, if it exists.
    pub fn is_visible(&self, id: &str) -> Option<bool> {
        self.containers.get(id).map(|c| c.visible)
    }
}

impl Default for MemoryPage {
    fn default() -> Self {
        Self::new()
    }
}

impl HostPage for MemoryPage {
    fn has_container(&self, id: &str) -> bool {
        self.containers.contains_key(id)
    }

    fn set_content(&mut self, id: &str, html: &str) {
        if let Some(container) = self.containers.get_mut(id) {
            container.content = html.to_string();
        }
    }

    fn set_visible(&mut self, id: &str, visible: bool) {
        if let Some(container) = self.containers.get_mut(id) {
            container.visible = visible;
        }
    }
}
