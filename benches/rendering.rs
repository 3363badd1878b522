//! Benchmarks for measuring entry rendering performance.
//!
//! Run with: `cargo bench`

use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use cvtemplater::config::{Document, InputFormat, RenderOptions, TemplateSet};
use cvtemplater::entry::Entry;
use cvtemplater::format::Locale;
use cvtemplater::renderer::{render_document, EntryRenderer, TemplateRenderer};
use cvtemplater::template::elision::clean_trailing_parts;
use std::hint::black_box;

fn options() -> RenderOptions {
    RenderOptions::new(true, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
}

fn sample_entries() -> Vec<Entry> {
    serde_yaml::from_str(
        r#"
- company: Acme
  position: Engineer
  location: Oslo
  start_date: 2020-06
  end_date: present
  highlights:
    - Led team of 5 engineers
    - Reduced costs - Server optimization - Database indexing
- title: Fast Parsers
  authors: [Ada Lovelace, Alan Turing]
  doi: 10.1000/xyz123
  journal: Journal of Parsing
  date: 2023-07
- institution: MIT
  area: Physics
  degree: BS
  start_date: 2014-09
  end_date: 2018-06
  summary: Thesis on optics
- label: Languages
  details: Rust, Python
- A plain line of text
"#,
    )
    .unwrap()
}

/// Benchmark: rendering single entries of each kind
fn bench_single_entries(c: &mut Criterion) {
    let templates = TemplateSet::default();
    let locale = Locale::default();
    let renderer = TemplateRenderer::new(&templates, &locale, options());
    let mut group = c.benchmark_group("entry");

    for entry in sample_entries() {
        let name = entry
            .kind()
            .map(|kind| kind.to_string())
            .unwrap_or_else(|| "Text".into());
        group.bench_with_input(BenchmarkId::from_parameter(name), &entry, |b, entry| {
            b.iter(|| renderer.render(black_box(entry)).unwrap());
        });
    }
    group.finish();
}

/// Benchmark: rendering documents of growing size
fn bench_documents(c: &mut Criterion) {
    let entries = sample_entries();
    let mut group = c.benchmark_group("document");

    for sections in [1usize, 10, 50] {
        let mut document = Document::from_str_with_format("cv: {}", InputFormat::Yaml).unwrap();
        for index in 0..sections {
            document.cv.sections.insert(format!("section_{index}"), entries.clone());
        }
        group.throughput(Throughput::Elements((sections * entries.len()) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(sections), &document, |b, document| {
            b.iter(|| render_document(black_box(document), options()).unwrap());
        });
    }
    group.finish();
}

/// Benchmark: trailing-part cleanup on elided templates
fn bench_cleanup(c: &mut Criterion) {
    let text = "**COMPANY**, \nLOCATION: \n, \nDATE -- \n".repeat(20);
    c.bench_function("clean_trailing_parts", |b| {
        b.iter(|| clean_trailing_parts(black_box(&text)));
    });
}

criterion_group!(benches, bench_single_entries, bench_documents, bench_cleanup);
criterion_main!(benches);
