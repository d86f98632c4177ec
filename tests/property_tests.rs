use std::sync::Arc;

use annex::{Component, Node, Props, Registry, RenderContext, declare_slot, init_registry};
use proptest::prelude::*;

fn echo_slot(name: &str) -> annex::Slot {
    declare_slot(name).bind(|_: &RenderContext, props: &Props| {
        Node::text(props.get_str("value").unwrap_or_default().to_string())
    })
}

fn shout(_: &RenderContext, props: &Props) -> Node {
    Node::text(props.get_str("value").unwrap_or_default().to_uppercase())
}

proptest! {
    #[test]
    fn unclaimed_slots_render_default(name in ".*", value in ".*") {
        let store = Arc::new(Registry::new());
        let cx = RenderContext::with_registry(store);
        let props = Props::new().with("value", &value);

        let out = echo_slot(&name).render(&cx, &props);
        prop_assert_eq!(out, Node::text(value));
    }

    #[test]
    fn second_claim_always_fails(name in ".*", first in 0usize..4, second in 0usize..4) {
        let store = Arc::new(Registry::new());
        let ext = init_registry(Some(&store));
        let claim = |kind: usize| match kind {
            0 => ext.replace(&name, shout),
            1 => ext.append(&name, shout),
            2 => ext.prepend(&name, shout),
            _ => ext.hide(&name),
        };

        prop_assert!(claim(first).is_ok());
        let kind_before = store.lookup(&name).map(|s| s.kind());
        prop_assert!(claim(second).is_err());
        prop_assert_eq!(store.lookup(&name).map(|s| s.kind()), kind_before);
        prop_assert_eq!(store.len(), 1);
    }

    #[test]
    fn append_and_prepend_order(value in "[a-z]{0,12}") {
        let appended = Arc::new(Registry::new());
        let prepended = Arc::new(Registry::new());
        init_registry(Some(&appended)).append("echo", shout).unwrap();
        init_registry(Some(&prepended)).prepend("echo", shout).unwrap();
        let props = Props::new().with("value", &value);

        let a = echo_slot("echo").render(&RenderContext::with_registry(appended), &props);
        let p = echo_slot("echo").render(&RenderContext::with_registry(prepended), &props);
        prop_assert_eq!(a.text_content(), format!("{}{}", value, value.to_uppercase()));
        prop_assert_eq!(p.text_content(), format!("{}{}", value.to_uppercase(), value));
    }

    #[test]
    fn claims_in_one_store_never_reach_another(names in prop::collection::hash_set("[a-z]{1,8}", 1..10)) {
        let claimed = Arc::new(Registry::new());
        let untouched = Arc::new(Registry::new());
        let ext = init_registry(Some(&claimed));
        for name in &names {
            ext.hide(name).unwrap();
        }

        let cx = RenderContext::with_registry(untouched.clone());
        for name in &names {
            let out = echo_slot(name).render(&cx, &Props::new().with("value", "x"));
            prop_assert_eq!(out.to_markup(), "x");
        }
        prop_assert!(untouched.is_empty());
        prop_assert_eq!(claimed.len(), names.len());
    }
}
