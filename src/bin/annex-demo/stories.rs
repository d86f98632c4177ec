use std::sync::Arc;

use anyhow::Result;
use annex::{
    Component, Element, Extensions, Manifest, Node, Props, Registry, RenderContext, Slot,
    declare_slot, init_registry,
};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    Default,
    Replace,
    Props,
    Hide,
    Append,
    Prepend,
}

impl Scenario {
    pub const ALL: [Scenario; 6] = [
        Scenario::Default,
        Scenario::Replace,
        Scenario::Props,
        Scenario::Hide,
        Scenario::Append,
        Scenario::Prepend,
    ];

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Scenario::Default => "default",
            Scenario::Replace => "replace",
            Scenario::Props => "props",
            Scenario::Hide => "hide",
            Scenario::Append => "append",
            Scenario::Prepend => "prepend",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Scenario::Default => "Default content",
            Scenario::Replace => "Replacing components",
            Scenario::Props => "Replacing components that receive props",
            Scenario::Hide => "Hiding components",
            Scenario::Append => "Appending to components",
            Scenario::Prepend => "Prepending to components",
        }
    }

    /// Claim the slots this scenario overrides.
    pub fn register(self, ext: &Extensions) -> Result<()> {
        match self {
            Scenario::Default => {}
            Scenario::Replace => ext.replace("replacement", |_: &RenderContext, _: &Props| {
                Node::from(Element::new("div").child("This has been replaced"))
            })?,
            Scenario::Props => ext.replace("math", multiplication)?,
            Scenario::Hide => {
                ext.hide("math")?;
                ext.hide("replacement")?;
            }
            Scenario::Append => ext.append("replacement", |_: &RenderContext, _: &Props| {
                Node::from(Element::new("p").child("Appended by the host."))
            })?,
            Scenario::Prepend => ext.prepend("math", |_: &RenderContext, props: &Props| {
                let a = props.get::<i64>("a").unwrap_or_default();
                Node::from(Element::new("p").child(format!("Operands start at {a}.")))
            })?,
        }
        Ok(())
    }

    /// Render the demo tree under a fresh store holding this scenario's overrides.
    pub fn render(self) -> Result<Node> {
        let store = Arc::new(Registry::new());
        self.register(&init_registry(Some(&store)))?;
        Ok(render_demo(&RenderContext::with_registry(store)))
    }
}

/// Render the demo tree under a fresh store populated from `manifest`.
pub fn render_manifest(manifest: &Manifest) -> Result<Node> {
    let store = Arc::new(Registry::new());
    manifest.apply(&init_registry(Some(&store)))?;
    Ok(render_demo(&RenderContext::with_registry(store)))
}

#[derive(Debug, Deserialize)]
struct MathProps {
    a: i64,
    b: i64,
}

fn operation(title: &str, props: &Props, symbol: char, f: fn(i64, i64) -> i64) -> Node {
    let body = match props.parse::<MathProps>() {
        Ok(MathProps { a, b }) => format!("{a} {symbol} {b} = {}", f(a, b)),
        Err(e) => format!("invalid props: {e}"),
    };
    Element::new("div")
        .child(Element::new("h1").child(title))
        .child(Element::new("p").child(body))
        .into()
}

fn addition(_cx: &RenderContext, props: &Props) -> Node {
    operation("Addition", props, '+', |a, b| a + b)
}

fn multiplication(_cx: &RenderContext, props: &Props) -> Node {
    operation("Multiplication", props, '*', |a, b| a * b)
}

fn replacement_content(_cx: &RenderContext, _props: &Props) -> Node {
    Element::new("div")
        .child(Element::new("h1").child("Default Content"))
        .child(Element::new("p").child("This is the default content before replacement."))
        .into()
}

pub fn replacement_slot() -> Slot {
    declare_slot("replacement").bind(replacement_content)
}

pub fn math_slot() -> Slot {
    declare_slot("math").bind(addition)
}

pub fn render_demo(cx: &RenderContext) -> Node {
    let math_props = Props::new().with("a", 12).with("b", 3);
    Element::new("div")
        .child(replacement_slot().render(cx, &Props::new()))
        .child(Element::new("hr"))
        .child(math_slot().render(cx, &math_props))
        .into()
}
