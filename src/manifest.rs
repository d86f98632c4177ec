//! Declarative overrides loaded from YAML or JSON
//!
//! Lets a host claim slots with static content without writing code:
//!
//! ```yaml
//! overrides:
//!   - slot: replacement
//!     type: replace
//!     text: This has been replaced
//!   - slot: math
//!     type: hide
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::context::RenderContext;
use crate::errors::{AnnexError, Result};
use crate::node::{Element, Node};
use crate::props::Props;
use crate::registry::{Extensions, Strategy};
use crate::slot::Component;

const DEFAULT_TAG: &str = "p";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    pub overrides: Vec<OverrideEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverrideEntry {
    pub slot: String,
    #[serde(rename = "type")]
    pub kind: OverrideKind,
    #[serde(default)]
    pub text: Option<String>,
    /// Element wrapping `text`; defaults to a paragraph
    #[serde(default)]
    pub tag: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverrideKind {
    Replace,
    Append,
    Prepend,
    Hide,
}

/// Static content declared in a manifest
#[derive(Debug, Clone)]
pub struct StaticContent {
    node: Node,
}

impl StaticContent {
    pub fn new(node: Node) -> Self {
        Self { node }
    }
}

impl Component for StaticContent {
    fn render(&self, _cx: &RenderContext, _props: &Props) -> Node {
        self.node.clone()
    }
}

impl Manifest {
    /// Load from a `.yaml`, `.yml` or `.json` file.
    pub fn load(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&fs::read_to_string(path)?),
            Some("json") => Self::from_json_str(&fs::read_to_string(path)?),
            _ => Err(AnnexError::UnsupportedManifest(path.display().to_string())),
        }
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    /// Register every entry in file order, stopping at the first failure.
    ///
    /// Entries registered before the failure stay registered; the store has no
    /// way to take a claim back.
    pub fn apply(&self, extensions: &Extensions) -> Result<()> {
        for entry in &self.overrides {
            extensions.register(&entry.slot, entry.strategy()?)?;
        }
        log::debug!("applied {} manifest overrides", self.overrides.len());
        Ok(())
    }
}

impl OverrideEntry {
    pub fn strategy(&self) -> Result<Strategy> {
        if self.kind == OverrideKind::Hide {
            return Ok(Strategy::Hide);
        }
        let text = self.text.as_ref().ok_or_else(|| AnnexError::MissingText {
            slot: self.slot.clone(),
        })?;
        let tag = self.tag.as_deref().unwrap_or(DEFAULT_TAG);
        let content: Arc<dyn Component> = Arc::new(StaticContent::new(
            Element::new(tag).child(text.as_str()).into(),
        ));
        Ok(match self.kind {
            OverrideKind::Replace => Strategy::Replace(content),
            OverrideKind::Append => Strategy::Append(content),
            OverrideKind::Prepend => Strategy::Prepend(content),
            OverrideKind::Hide => Strategy::Hide,
        })
    }
}
