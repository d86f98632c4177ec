//! Render context carrying the registry visible to a subtree
//!
//! Instead of an ambient provider/consumer pair, every render call receives a
//! [`RenderContext`]. A host provides its store by deriving a child context;
//! the nearest provided store wins, and a context with no store resolves to
//! [`Registry::global`].

use std::sync::Arc;

use crate::node::Node;
use crate::props::Props;
use crate::registry::Registry;
use crate::slot::Component;

#[derive(Clone, Debug, Default)]
pub struct RenderContext {
    registry: Option<Arc<Registry>>,
}

impl RenderContext {
    /// Context with no provided store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(registry: Arc<Registry>) -> Self {
        Self {
            registry: Some(registry),
        }
    }

    /// Child context whose nearest provided store is `registry`.
    pub fn provide(&self, registry: Arc<Registry>) -> Self {
        Self::with_registry(registry)
    }

    /// The store slots rendered under this context resolve against.
    ///
    /// Shared, not copied: registrations made after the store was provided
    /// are visible to later renders.
    pub fn registry(&self) -> &Arc<Registry> {
        self.registry.as_ref().unwrap_or_else(|| Registry::global())
    }

    pub fn is_provided(&self) -> bool {
        self.registry.is_some()
    }

    pub fn render(&self, component: &dyn Component, props: &Props) -> Node {
        component.render(self, props)
    }
}
