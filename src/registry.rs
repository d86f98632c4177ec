//! Registry store for slot overrides
//!
//! A [`Registry`] maps slot names to the [`Strategy`] that decides what a slot
//! renders. Its only mutation is [`Registry::claim`], a set-if-absent insert:
//! once a name is claimed it stays claimed for the lifetime of the store.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use crate::context::RenderContext;
use crate::errors::{AnnexError, Result};
use crate::node::Node;
use crate::props::Props;
use crate::slot::{Component, Replacement};

/// How a claimed slot renders
#[derive(Clone)]
pub enum Strategy {
    /// Render the override instead of the default
    Replace(Arc<dyn Component>),
    /// Render the override, handing it the default to place as it sees fit
    Wrap(Arc<dyn Replacement>),
    /// Default first, then the override
    Append(Arc<dyn Component>),
    /// Override first, then the default
    Prepend(Arc<dyn Component>),
    /// Render nothing
    Hide,
}

impl Strategy {
    pub fn render(&self, cx: &RenderContext, props: &Props, default: &dyn Component) -> Node {
        match self {
            Strategy::Replace(component) => component.render(cx, props),
            Strategy::Wrap(replacement) => replacement.render(cx, props, default),
            Strategy::Append(component) => {
                Node::fragment([default.render(cx, props), component.render(cx, props)])
            }
            Strategy::Prepend(component) => {
                Node::fragment([component.render(cx, props), default.render(cx, props)])
            }
            Strategy::Hide => Node::Empty,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Strategy::Replace(_) => "replace",
            Strategy::Wrap(_) => "wrap",
            Strategy::Append(_) => "append",
            Strategy::Prepend(_) => "prepend",
            Strategy::Hide => "hide",
        }
    }
}

impl fmt::Debug for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Strategy::{}", self.kind())
    }
}

#[derive(Default)]
pub struct Registry {
    component_index: RwLock<HashMap<String, Arc<Strategy>>>,
    known_extension_points: RwLock<HashMap<String, bool>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide default store, created on first use and never reset.
    ///
    /// Renders without a provided store resolve here, as does
    /// `init_registry(None)`. Prefer an explicit store.
    pub fn global() -> &'static Arc<Registry> {
        static INSTANCE: OnceLock<Arc<Registry>> = OnceLock::new();
        INSTANCE.get_or_init(|| Arc::new(Registry::new()))
    }

    /// Insert `strategy` under `name` unless the name is already claimed.
    pub fn claim(&self, name: &str, strategy: Strategy) -> Result<()> {
        let mut index = self
            .component_index
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if index.contains_key(name) {
            log::warn!("rejected {} override for already claimed slot '{name}'", strategy.kind());
            return Err(AnnexError::DuplicateRegistration {
                name: name.to_string(),
            });
        }
        log::debug!("slot '{name}' claimed with {} override", strategy.kind());
        index.insert(name.to_string(), Arc::new(strategy));
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<Arc<Strategy>> {
        self.component_index
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    pub fn is_claimed(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Claimed slot names, sorted.
    pub fn claimed_slots(&self) -> Vec<String> {
        let index = self
            .component_index
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        let mut names: Vec<String> = index.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.component_index
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Record that a slot bound to `name` rendered against this store.
    pub(crate) fn mark_known(&self, name: &str) {
        let seen = self
            .known_extension_points
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .copied()
            .unwrap_or(false);
        if seen {
            return;
        }
        self.known_extension_points
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.to_string(), true);
    }

    pub fn is_known(&self, name: &str) -> bool {
        self.known_extension_points
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .copied()
            .unwrap_or(false)
    }

    /// Slot names that have rendered against this store, sorted.
    pub fn known_extension_points(&self) -> Vec<String> {
        let known = self
            .known_extension_points
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        let mut names: Vec<String> = known
            .iter()
            .filter(|(_, seen)| **seen)
            .map(|(name, _)| name.clone())
            .collect();
        names.sort();
        names
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("claimed", &self.claimed_slots())
            .field("known", &self.known_extension_points())
            .finish()
    }
}

/// Registration handle bound to one store.
///
/// Every operation funnels into [`Registry::claim`], so all of them reject a
/// slot name that is already claimed.
#[derive(Clone, Debug)]
pub struct Extensions {
    registry: Arc<Registry>,
}

/// Bind a registration handle to `store`, or to [`Registry::global`] when none
/// is given. Nothing is registered until an operation is called.
pub fn init_registry(store: Option<&Arc<Registry>>) -> Extensions {
    let registry = store.cloned().unwrap_or_else(|| Registry::global().clone());
    Extensions { registry }
}

impl Extensions {
    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    pub fn register(&self, name: &str, strategy: Strategy) -> Result<()> {
        self.registry.claim(name, strategy)
    }

    pub fn replace(&self, name: &str, component: impl Component + 'static) -> Result<()> {
        self.register(name, Strategy::Replace(Arc::new(component)))
    }

    pub fn wrap(&self, name: &str, replacement: impl Replacement + 'static) -> Result<()> {
        self.register(name, Strategy::Wrap(Arc::new(replacement)))
    }

    pub fn append(&self, name: &str, component: impl Component + 'static) -> Result<()> {
        self.register(name, Strategy::Append(Arc::new(component)))
    }

    pub fn prepend(&self, name: &str, component: impl Component + 'static) -> Result<()> {
        self.register(name, Strategy::Prepend(Arc::new(component)))
    }

    pub fn hide(&self, name: &str) -> Result<()> {
        self.register(name, Strategy::Hide)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;

    fn text(s: &'static str) -> impl Component {
        move |_: &RenderContext, _: &Props| Node::text(s)
    }

    #[test]
    fn claim_is_set_if_absent() {
        let store = Arc::new(Registry::new());
        let ext = init_registry(Some(&store));
        ext.replace("x", text("first")).unwrap();

        let err = ext.hide("x").unwrap_err();
        assert!(matches!(err, AnnexError::DuplicateRegistration { ref name } if name == "x"));

        let strategy = store.lookup("x").unwrap();
        assert_eq!(strategy.kind(), "replace");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn every_operation_checks_duplicates() {
        let store = Arc::new(Registry::new());
        let ext = init_registry(Some(&store));
        ext.hide("slot").unwrap();

        assert!(ext.replace("slot", text("a")).is_err());
        assert!(ext.append("slot", text("a")).is_err());
        assert!(ext.prepend("slot", text("a")).is_err());
        assert!(
            ext.wrap("slot", |_: &RenderContext, _: &Props, _: &dyn Component| Node::Empty)
                .is_err()
        );
        assert_eq!(store.lookup("slot").unwrap().kind(), "hide");
    }

    #[test]
    fn duplicate_message_names_the_target() {
        let store = Arc::new(Registry::new());
        store.claim("math", Strategy::Hide).unwrap();
        let err = store.claim("math", Strategy::Hide).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Component already registered for target \"math\", cannot register multiple components for the same extension point in the same extension registry."
        );
    }

    #[test]
    fn stores_are_independent() {
        let a = Arc::new(Registry::new());
        let b = Arc::new(Registry::new());
        init_registry(Some(&a)).hide("x").unwrap();
        assert!(a.is_claimed("x"));
        assert!(!b.is_claimed("x"));
        init_registry(Some(&b)).hide("x").unwrap();
    }

    #[test]
    fn init_without_store_binds_global() {
        let ext = init_registry(None);
        assert!(Arc::ptr_eq(ext.registry(), Registry::global()));
    }

    #[test]
    fn claimed_slots_are_sorted() {
        let store = Registry::new();
        store.claim("b", Strategy::Hide).unwrap();
        store.claim("a", Strategy::Hide).unwrap();
        assert_eq!(store.claimed_slots(), vec!["a", "b"]);
    }

    #[test]
    fn empty_names_are_not_validated() {
        let store = Registry::new();
        store.claim("", Strategy::Hide).unwrap();
        assert!(store.is_claimed(""));
        assert!(!store.is_claimed("X"));
        store.claim("x", Strategy::Hide).unwrap();
        assert!(store.claim("x", Strategy::Hide).is_err());
    }
}
