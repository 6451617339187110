//! Startup-time layout check for window namespaces.
//!
//! The id constants are laid out so that groups cannot collide, but the
//! layout of a window lives across several declaration sites. Window code
//! therefore registers every widget and range it uses and validates the
//! whole namespace once, before any widget tree is built.

use thiserror::Error;

use crate::widget::{WidgetId, WidgetRange};

/// Two entries of one window namespace share an id.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("widgets '{first}' and '{second}' overlap in window '{window}'")]
pub struct NamespaceError {
    pub window: &'static str,
    pub first: &'static str,
    pub second: &'static str,
}

/// Declared identifier layout of one window class.
#[derive(Debug, Clone)]
pub struct WindowNamespace {
    window: &'static str,
    entries: Vec<(&'static str, WidgetRange)>,
}

impl WindowNamespace {
    /// Start an empty layout for the window called `window`.
    pub fn new(window: &'static str) -> Self {
        WindowNamespace {
            window,
            entries: Vec::new(),
        }
    }

    /// Register a single fixed widget.
    pub fn widget(self, name: &'static str, id: WidgetId) -> Self {
        self.range(name, WidgetRange::new(id, 1))
    }

    /// Register a dynamic widget group.
    pub fn range(mut self, name: &'static str, range: WidgetRange) -> Self {
        self.entries.push((name, range));
        self
    }

    /// Window this layout belongs to.
    pub fn window(&self) -> &'static str {
        self.window
    }

    /// Check that no two registered entries share an id.
    ///
    /// The entry sets are tiny, so a pairwise scan is enough.
    pub fn validate(&self) -> Result<(), NamespaceError> {
        for (i, &(first, a)) in self.entries.iter().enumerate() {
            for &(second, b) in &self.entries[i + 1..] {
                if !a.is_disjoint(b) {
                    return Err(NamespaceError {
                        window: self.window,
                        first,
                        second,
                    });
                }
            }
        }
        log::debug!(
            "window '{}': {} namespace entries, no overlaps",
            self.window,
            self.entries.len()
        );
        Ok(())
    }
}
