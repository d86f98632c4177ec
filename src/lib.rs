//! Named extension points for component trees.
//!
//! A base application wraps default content in a [`Slot`]; a host claims the
//! slot in a [`Registry`] to replace, wrap, append to, prepend to or hide it.
//! Slots resolve against the store carried by the [`RenderContext`] they are
//! rendered with.

mod context;
mod errors;
pub mod logging;
pub mod manifest;
mod node;
mod props;
mod registry;
mod slot;

pub use crate::context::RenderContext;
pub use crate::errors::{AnnexError, Result};
pub use crate::manifest::{Manifest, OverrideEntry, OverrideKind};
pub use crate::node::{Element, Node};
pub use crate::props::Props;
pub use crate::registry::{Extensions, Registry, Strategy, init_registry};
pub use crate::slot::{Component, Replacement, Slot, SlotDeclaration, declare_slot};
