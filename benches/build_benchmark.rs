//! Benchmarks for unlayout reconstruction performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks rebuild synthetic analysis results of increasing size.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use unlayout::{AnalyzeResult, BuildOptions, ParagraphRole, RawCell, RawParagraph, RawSection, RawTable};

/// Creates a synthetic analysis result with the given number of sections.
///
/// Each section has a heading, three body paragraphs, a footnote, a page
/// number and a 3x4 table, and hangs off a single root section.
fn create_test_result(section_count: usize) -> AnalyzeResult {
    let mut result = AnalyzeResult::new();
    let mut children = Vec::with_capacity(section_count);

    // Root section is /sections/0; children follow
    result.add_section(RawSection::default());

    for i in 0..section_count {
        let page = (i / 4 + 1) as u32;
        let mut elements = vec![result.add_paragraph(
            RawParagraph::with_role(ParagraphRole::SectionHeading, format!("Section {}", i + 1))
                .on_page(page),
        )];
        for j in 0..3 {
            elements.push(result.add_paragraph(
                RawParagraph::body(format!(
                    "Paragraph {} of section {}: benchmark content for unlayout.",
                    j + 1,
                    i + 1
                ))
                .on_page(page),
            ));
        }
        elements.push(result.add_paragraph(RawParagraph::with_role(
            ParagraphRole::Footnote,
            format!("Note {}", i + 1),
        )));
        elements.push(result.add_paragraph(RawParagraph::with_role(
            ParagraphRole::PageNumber,
            page.to_string(),
        )));

        let mut table = RawTable::new(3, 4);
        for col in 0..4 {
            table.add_cell(RawCell::header(0, col, format!("Column {}", col)));
            for row in 1..3 {
                table.add_cell(RawCell::new(row, col, format!("{}-{}", row, col)));
            }
        }
        elements.push(result.add_table(table));

        children.push(result.add_section(RawSection::new(elements)));
    }

    result.sections[0] = RawSection::new(children);
    result
}

/// Benchmark payload detection.
fn bench_format_detection(c: &mut Criterion) {
    let envelope = br#"{"status": "succeeded", "analyzeResult": {"paragraphs": []}}"#;
    let other = b"Not an analysis payload, just random text content";

    c.bench_function("detect_envelope", |b| {
        b.iter(|| unlayout::detect_format_from_bytes(black_box(envelope)).unwrap());
    });

    c.bench_function("detect_unknown", |b| {
        b.iter(|| unlayout::detect_format_from_bytes(black_box(other)).is_err());
    });
}

/// Benchmark tree building at various sizes.
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_page");
    let options = BuildOptions::new();

    for section_count in [10, 100, 1000].iter() {
        let result = create_test_result(*section_count);

        group.bench_function(format!("{}_sections", section_count), |b| {
            b.iter(|| unlayout::build_page(black_box(&result), &options).unwrap());
        });
    }

    group.finish();
}

/// Benchmark parallel against sequential batch building.
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_pages");
    let results: Vec<AnalyzeResult> = (0..32).map(|_| create_test_result(50)).collect();

    group.bench_function("parallel", |b| {
        let options = BuildOptions::new();
        b.iter(|| unlayout::build_pages(black_box(&results), &options));
    });

    group.bench_function("sequential", |b| {
        let options = BuildOptions::new().sequential();
        b.iter(|| unlayout::build_pages(black_box(&results), &options));
    });

    group.finish();
}

/// Benchmark Markdown rendering of a rebuilt document.
fn bench_markdown(c: &mut Criterion) {
    let result = create_test_result(100);
    let page = unlayout::build_page(&result, &BuildOptions::new())
        .unwrap()
        .unwrap();
    let options = unlayout::RenderOptions::default();

    c.bench_function("markdown_100_sections", |b| {
        b.iter(|| unlayout::render::to_markdown(black_box(&page), &options).unwrap());
    });
}

/// Benchmark builder pattern overhead.
fn bench_builder_creation(c: &mut Criterion) {
    c.bench_function("builder_creation", |b| {
        b.iter(|| {
            let _builder = unlayout::Unlayout::new()
                .lenient()
                .strict_headers()
                .with_max_heading(3);
        });
    });
}

criterion_group!(
    benches,
    bench_format_detection,
    bench_build,
    bench_batch,
    bench_markdown,
    bench_builder_creation,
);
criterion_main!(benches);
