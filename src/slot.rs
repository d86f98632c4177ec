//! Slot binder
//!
//! A base application wraps its default content in a named [`Slot`]. When the
//! slot renders it looks its name up in the store carried by the
//! [`RenderContext`] and either renders the default or hands off to the
//! registered [`Strategy`](crate::registry::Strategy).

use std::fmt;
use std::sync::Arc;

use crate::context::RenderContext;
use crate::node::Node;
use crate::props::Props;

/// Anything that renders props to a node
pub trait Component: Send + Sync {
    fn render(&self, cx: &RenderContext, props: &Props) -> Node;
}

impl<F> Component for F
where
    F: Fn(&RenderContext, &Props) -> Node + Send + Sync,
{
    fn render(&self, cx: &RenderContext, props: &Props) -> Node {
        self(cx, props)
    }
}

/// Override that receives the slot's default content and decides whether,
/// and where, to render it
pub trait Replacement: Send + Sync {
    fn render(&self, cx: &RenderContext, props: &Props, default: &dyn Component) -> Node;
}

impl<F> Replacement for F
where
    F: Fn(&RenderContext, &Props, &dyn Component) -> Node + Send + Sync,
{
    fn render(&self, cx: &RenderContext, props: &Props, default: &dyn Component) -> Node {
        self(cx, props, default)
    }
}

/// A named extension point awaiting its default content
#[derive(Debug, Clone)]
pub struct SlotDeclaration {
    name: String,
}

pub fn declare_slot(name: impl Into<String>) -> SlotDeclaration {
    SlotDeclaration { name: name.into() }
}

impl SlotDeclaration {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bind(self, default: impl Component + 'static) -> Slot {
        self.bind_shared(Arc::new(default))
    }

    pub fn bind_shared(self, default: Arc<dyn Component>) -> Slot {
        Slot {
            name: self.name,
            default,
        }
    }
}

/// Slot name paired with its default content
#[derive(Clone)]
pub struct Slot {
    name: String,
    default: Arc<dyn Component>,
}

impl Slot {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn default_content(&self) -> &dyn Component {
        self.default.as_ref()
    }
}

impl Component for Slot {
    fn render(&self, cx: &RenderContext, props: &Props) -> Node {
        let registry = cx.registry();
        registry.mark_known(&self.name);

        // The strategy is cloned out so the store is unlocked while it renders.
        match registry.lookup(&self.name) {
            None => {
                log::trace!("slot '{}' unbound, rendering default", self.name);
                self.default.render(cx, props)
            }
            Some(strategy) => {
                log::trace!("slot '{}' bound to {} override", self.name, strategy.kind());
                strategy.render(cx, props, self.default.as_ref())
            }
        }
    }
}

impl fmt::Debug for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot").field("name", &self.name).finish()
    }
}
