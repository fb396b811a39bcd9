//! Carousel configuration derivation.
//!
//! The carousel library itself is an external collaborator; this module
//! only derives its configuration: slide counts from the host page's
//! attribute pair and the per-breakpoint init blob.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Responsive breakpoints, in page width units.
pub const BREAKPOINT_SMALL: u32 = 480;
pub const BREAKPOINT_MEDIUM: u32 = 768;
pub const BREAKPOINT_LARGE: u32 = 1024;

/// Slide counts for the product rail.
///
/// Host pages supply these as the `slides-desktop` / `slides-mobile`
/// attribute pair; absent or unparsable values fall back to defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CarouselOptions {
    pub slides_desktop: u32,
    pub slides_mobile: u32,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            slides_desktop: 4,
            slides_mobile: 2,
        }
    }
}

impl CarouselOptions {
    /// Parses the attribute pair, falling back per-field on missing or
    /// unparsable values.
    pub fn from_attributes(slides_desktop: Option<&str>, slides_mobile: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            slides_desktop: slides_desktop
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.slides_desktop),
            slides_mobile: slides_mobile
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.slides_mobile),
        }
    }

    /// Slide count for a given page width.
    ///
    /// Below 480 the mobile count applies, from 1024 up the desktop count.
    /// The middle bands step between them: one more than mobile under 768
    /// (capped at desktop), one less than desktop under 1024 (floored at
    /// mobile). Monotonic in width when mobile <= desktop.
    pub fn slides_for_width(&self, width: u32) -> u32 {
        if width < BREAKPOINT_SMALL {
            self.slides_mobile
        } else if width < BREAKPOINT_MEDIUM {
            (self.slides_mobile + 1).min(self.slides_desktop.max(self.slides_mobile))
        } else if width < BREAKPOINT_LARGE {
            self.slides_desktop.saturating_sub(1).max(self.slides_mobile)
        } else {
            self.slides_desktop
        }
    }

    /// Builds the init blob handed to the carousel library: cell counts
    /// keyed by breakpoint.
    pub fn init_config(&self) -> Value {
        json!({
            "cellAlign": "left",
            "contain": true,
            "pageDots": false,
            "groupCells": self.slides_desktop,
            "responsive": [
                { "maxWidth": BREAKPOINT_SMALL, "cells": self.slides_for_width(BREAKPOINT_SMALL - 1) },
                { "maxWidth": BREAKPOINT_MEDIUM, "cells": self.slides_for_width(BREAKPOINT_MEDIUM - 1) },
                { "maxWidth": BREAKPOINT_LARGE, "cells": self.slides_for_width(BREAKPOINT_LARGE - 1) },
                { "minWidth": BREAKPOINT_LARGE, "cells": self.slides_for_width(BREAKPOINT_LARGE) },
            ],
        })
    }
}
