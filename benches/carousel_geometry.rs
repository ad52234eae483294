// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the carousel hot path.
//!
//! Measures the performance of:
//! - Step and target computation from raw metrics
//! - Selector matching against a synthetic page
//! - A full arrow click through `Page::dispatch`

use criterion::{criterion_group, criterion_main, Criterion};
use pagewire::app::{DomEvent, Page};
use pagewire::clock::ManualClock;
use pagewire::config::Config;
use pagewire::dom::{Dom, Layout, MemoryDocument, NodeId, Selector};
use pagewire::ui::state::{parse_css_length, ScrollGeometry, StepMetrics};
use std::hint::black_box;
use std::time::Duration;

/// Builds a page with `galleries` galleries of twelve items each. Returns the
/// `(track, right arrow)` pair of every gallery.
fn synthetic_page(galleries: usize) -> (MemoryDocument, Vec<(NodeId, NodeId)>) {
    let mut doc = MemoryDocument::new();
    let root = doc.root();
    let mut controls = Vec::with_capacity(galleries);
    for _ in 0..galleries {
        let wrapper = doc.append(root, "div", &["gallery-wrapper"]);
        doc.append(wrapper, "button", &["arrow", "left"]);
        let track = doc.append(wrapper, "div", &["gallery-track"]);
        let right = doc.append(wrapper, "button", &["arrow", "right"]);
        controls.push((track, right));
        doc.set_layout(
            track,
            Layout {
                offset_width: 620.0,
                client_width: 620.0,
                scroll_width: 2620.0,
                scroll_left: 0.0,
            },
        );
        doc.set_computed_style(track, "gap", "20px");
        for _ in 0..12 {
            let item = doc.append(track, "div", &["gallery-item"]);
            doc.set_layout(
                item,
                Layout {
                    offset_width: 200.0,
                    ..Layout::default()
                },
            );
        }
    }
    (doc, controls)
}

/// Benchmark the pure geometry: gap parsing, step and clamped target.
fn bench_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_geometry");

    group.bench_function("plan_advance", |b| {
        b.iter(|| {
            let metrics = StepMetrics {
                item_width: Some(black_box(200.0)),
                gap: parse_css_length(black_box("20px")),
                wrapper_width: 700.0,
            };
            let step = metrics.step(20.0, 0.8);
            let geometry = ScrollGeometry {
                offset: black_box(440.0),
                max_scroll: 480.0,
            };
            black_box(geometry.plan_advance(step));
        });
    });

    group.finish();
}

/// Benchmark selector matching used during discovery.
fn bench_selector(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_geometry");
    let (doc, _) = synthetic_page(20);
    let selector = Selector::parse(".gallery-wrapper > .gallery-track .gallery-item")
        .expect("valid selector");

    group.bench_function("query_all_items", |b| {
        b.iter(|| {
            let items = doc.query_all(None, &selector).expect("in-memory query");
            black_box(items.len());
        });
    });

    group.finish();
}

/// Benchmark one arrow click routed through the page. The lock is expired and
/// the track rewound each time so every click scrolls.
fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_geometry");
    let (mut doc, controls) = synthetic_page(20);
    let clock = ManualClock::default();
    let mut page = Page::setup(&mut doc, &Config::default(), clock.clone()).expect("setup");
    let (track, arrow) = controls[controls.len() - 1];

    group.bench_function("arrow_click", |b| {
        b.iter(|| {
            clock.advance(Duration::from_secs(1));
            doc.set_scroll_left(track, 0.0);
            black_box(page.dispatch(&mut doc, DomEvent::Click(arrow)));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_geometry, bench_selector, bench_dispatch);
criterion_main!(benches);
