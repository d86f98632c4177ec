use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::sync::Arc;

use annex::{Component, Element, Node, Props, Registry, RenderContext, declare_slot, init_registry};

fn card(_: &RenderContext, props: &Props) -> Node {
    Element::new("div")
        .child(Element::new("h1").child(props.get_str("title").unwrap_or_default()))
        .into()
}

fn bench_slot_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("slot_render");
    let slot = declare_slot("card").bind(card);
    let props = Props::new().with("title", "Benchmark");

    group.bench_function("unbound", |b| {
        let cx = RenderContext::with_registry(Arc::new(Registry::new()));
        b.iter(|| slot.render(black_box(&cx), black_box(&props)));
    });

    group.bench_function("replaced", |b| {
        let store = Arc::new(Registry::new());
        init_registry(Some(&store))
            .replace("card", |_: &RenderContext, _: &Props| Node::text("replaced"))
            .unwrap();
        let cx = RenderContext::with_registry(store);
        b.iter(|| slot.render(black_box(&cx), black_box(&props)));
    });

    group.bench_function("appended", |b| {
        let store = Arc::new(Registry::new());
        init_registry(Some(&store)).append("card", card).unwrap();
        let cx = RenderContext::with_registry(store);
        b.iter(|| slot.render(black_box(&cx), black_box(&props)));
    });

    group.finish();
}

fn bench_lookup_wide_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry_lookup");
    let store = Arc::new(Registry::new());
    let ext = init_registry(Some(&store));
    for i in 0..1000 {
        ext.hide(&format!("slot-{i}")).unwrap();
    }

    group.bench_function("hit_1000", |b| {
        b.iter(|| store.lookup(black_box("slot-500")));
    });

    group.bench_function("miss_1000", |b| {
        b.iter(|| store.lookup(black_box("missing")));
    });

    group.finish();
}

criterion_group!(benches, bench_slot_render, bench_lookup_wide_registry);
criterion_main!(benches);
