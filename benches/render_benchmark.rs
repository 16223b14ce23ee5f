//! Benchmarks for pagemark layout and PDF output.
//!
//! Run with: cargo bench

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Creates a synthetic manual with the given number of chapters.
fn create_test_manual(chapters: usize) -> String {
    let mut text = String::new();
    for i in 0..chapters {
        text.push_str(&format!("# Chapter {}\n\n## Overview\n", i + 1));
        text.push_str(&"This paragraph describes the screen and what each field does. ".repeat(4));
        text.push_str("\n\n");
        for step in 1..=5 {
            text.push_str(&format!("{}. Open the menu and select option {}\n", step, step));
        }
        text.push('\n');
        for _ in 0..3 {
            text.push_str("- Remember to save before leaving the screen\n");
        }
        text.push('\n');
    }
    text
}

fn options() -> pagemark::RenderOptions {
    pagemark::RenderOptions::new().with_date(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
}

/// Benchmark line classification.
fn bench_classification(c: &mut Criterion) {
    let doc = pagemark::SourceDocument::from_text(&create_test_manual(20));

    c.bench_function("classify_document", |b| {
        b.iter(|| pagemark::classify_document(black_box(&doc)));
    });
}

/// Benchmark layout into a rendering plan at various sizes.
fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let options = options();

    for chapters in [1, 10, 50].iter() {
        let text = create_test_manual(*chapters);

        group.bench_function(format!("{}_chapters", chapters), |b| {
            b.iter(|| pagemark::plan_str(black_box(&text), &options));
        });
    }

    group.finish();
}

/// Benchmark full PDF generation.
fn bench_pdf_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("pdf_output");
    let text = create_test_manual(10);

    group.bench_function("compressed", |b| {
        let options = options();
        b.iter(|| pagemark::render_str(black_box(&text), &options).unwrap());
    });

    group.bench_function("uncompressed", |b| {
        let options = options().with_compression(false);
        b.iter(|| pagemark::render_str(black_box(&text), &options).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_classification, bench_layout, bench_pdf_output);
criterion_main!(benches);
