//! Benchmarks for reportkit rendering performance.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use reportkit::model::{dsl::*, row, Cover, Footer, Report, ReportMeta};
use reportkit::render::{generate_styles, HtmlRenderer, PageMargins};
use reportkit::theme::preset;
use serde_json::json;

/// Builds a report with the given number of sections, each holding a
/// paragraph, a 20-row table, a checklist, and a code block.
fn create_test_report(section_count: usize) -> Report {
    let mut builder = Report::builder(
        ReportMeta::new("Benchmark Report")
            .with_author("bench")
            .with_date("2024-01-01"),
    )
    .cover(Cover::new("Benchmark Report").with_subtitle("Synthetic"))
    .footer(Footer::new("Benchmark").with_page_numbers());

    for i in 0..section_count {
        let rows = (0..20)
            .map(|r| {
                row([
                    ("Item", json!(format!("item-{}-{}", i, r))),
                    ("Count", json!(r * 3)),
                    ("Status", json!(if r % 2 == 0 { "ok" } else { "pending" })),
                ])
            })
            .collect();

        builder = builder.push(section(
            format!("Section {}", i + 1),
            vec![
                p("Benchmark content for reportkit rendering <measurement> & escaping."),
                table(["Item", "Count", "Status"], rows).unwrap(),
                checklist(["Draft", "Review", "Publish"], vec![true, true]).unwrap(),
                code("fn main() {\n    println!(\"hello\");\n}", "rust"),
            ],
        ));
    }

    builder.build()
}

fn bench_styles(c: &mut Criterion) {
    let tokens = preset::office();
    let margins = PageMargins::all("2cm");

    c.bench_function("generate_styles", |b| {
        b.iter(|| generate_styles(black_box(&tokens), black_box(&margins), true));
    });
}

/// Benchmark full document rendering at various sizes.
fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_html");
    let renderer = HtmlRenderer::new(preset::vivid());
    let margins = PageMargins::all("2cm");

    for section_count in [1, 10, 50].iter() {
        let report = create_test_report(*section_count);

        group.bench_function(format!("{}_sections", section_count), |b| {
            b.iter(|| renderer.render(black_box(&report), &margins));
        });
    }

    group.finish();
}

fn bench_render_batch(c: &mut Criterion) {
    let renderer = HtmlRenderer::default();
    let margins = PageMargins::default();
    let reports: Vec<Report> = (0..16).map(|_| create_test_report(5)).collect();

    c.bench_function("render_batch_16", |b| {
        b.iter(|| renderer.render_batch(black_box(&reports), &margins));
    });
}

fn bench_json(c: &mut Criterion) {
    let json = serde_json::to_string(&create_test_report(10)).unwrap();

    c.bench_function("report_from_json", |b| {
        b.iter(|| Report::from_json(black_box(&json)).unwrap());
    });
}

criterion_group!(
    benches,
    bench_styles,
    bench_render,
    bench_render_batch,
    bench_json,
);
criterion_main!(benches);
