//! Deck pipeline benchmarks
//!
//! Measures outline construction and page rendering across deck sizes, and
//! compares sequential against parallel page dispatch.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use serde_json::{Value, json};
use slidedeck::{DeckBuilder, ExecutorKind, PageSource, build_outline};
use std::hint::black_box;

fn paragraph(text: String) -> Value {
    json!({ "type": "paragraph", "paragraph": text })
}

/// A deck with eight sections per chapter and a two-column body per page.
fn synthetic_deck(pages: usize) -> Vec<PageSource> {
    let raw: Vec<Value> = (0..pages)
        .map(|i| {
            let mut page = json!({
                "chunk": {
                    "type": "node",
                    "direction": "horizontal",
                    "children": [
                        paragraph(format!("<p>Left {}</p>", i)),
                        {
                            "type": "node",
                            "direction": "vertical",
                            "children": [
                                paragraph(format!("<p>Right {}</p>", i)),
                                paragraph("<p>Footnote</p>".to_string())
                            ]
                        }
                    ]
                }
            });
            if i % 64 == 0 {
                page["h1"] = json!(format!("Chapter {}", i / 64));
            }
            if i % 8 == 0 {
                page["h2"] = json!(format!("Section {}", i / 8));
            }
            page
        })
        .collect();
    serde_json::from_value(Value::Array(raw)).expect("synthetic deck is valid")
}

fn benchmark_outline(c: &mut Criterion) {
    let mut group = c.benchmark_group("outline");

    for page_count in [16, 256, 4096] {
        let pages = synthetic_deck(page_count);
        group.throughput(Throughput::Elements(page_count as u64));
        group.bench_with_input(BenchmarkId::new("pages", page_count), &pages, |b, pages| {
            b.iter(|| build_outline(black_box(pages)).expect("outline builds"));
        });
    }

    group.finish();
}

fn benchmark_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_pages");

    for page_count in [16, 256, 4096] {
        let pages = synthetic_deck(page_count);
        group.throughput(Throughput::Elements(page_count as u64));

        for kind in [ExecutorKind::Sync, ExecutorKind::Rayon] {
            let deck = DeckBuilder::new()
                .with_executor(kind)
                .build()
                .expect("Failed to build deck");
            let label = format!("{:?}", kind).to_lowercase();
            group.bench_with_input(BenchmarkId::new(label, page_count), &pages, |b, pages| {
                b.iter(|| deck.render_pages(black_box(pages.clone())));
            });
        }
    }

    group.finish();
}

fn benchmark_html(c: &mut Criterion) {
    let pages = synthetic_deck(256);
    let deck = DeckBuilder::new().build().expect("Failed to build deck");

    c.bench_function("to_html_256_pages", |b| {
        b.iter(|| deck.to_html(black_box(pages.clone())).expect("html renders"));
    });
}

criterion_group!(benches, benchmark_outline, benchmark_render, benchmark_html);
criterion_main!(benches);
