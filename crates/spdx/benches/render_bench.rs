//! tag-value 렌더러 벤치마크
//!
//! 파일 수에 따른 문서 렌더링과 텍스트 블록 변환 성능을 측정합니다.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kspdx_spdx::builder::{FixedClock, build_creation_info, kernel_package_name};
use kspdx_spdx::model::{Checksums, CreatorType, Document, File, Package, Relationship};
use kspdx_spdx::tvsaver::{render_document, textify};

/// 커널 트리 스캔 결과와 비슷한 문서 생성 (count개 파일)
fn generate_document(count: usize) -> Document {
    let clock = FixedClock::parse("2019-01-01T00:00:00Z").unwrap();
    let ci = build_creation_info(
        &kernel_package_name("4.19"),
        "NONE",
        "https://example.org/bench-",
        CreatorType::Tool,
        "bench",
        &clock,
    )
    .unwrap();

    let files = (0..count)
        .map(|i| File {
            checksums: Checksums::sha1(format!("{i:040x}")),
            license_concluded: "NOASSERTION".to_owned(),
            license_info_in_file: vec!["GPL-2.0-only".to_owned()],
            copyright_text: "NOASSERTION".to_owned(),
            ..File::new(format!("./drivers/dir{}/file{i}.c", i % 100), format!("SPDXRef-File{i}"))
        })
        .collect();

    let mut doc = Document::new(ci);
    doc.packages.push(Package::unpackaged(files));
    doc.relationships.push(Relationship::new(
        "SPDXRef-DOCUMENT",
        "DESCRIBES",
        "SPDXRef-File0",
    ));
    doc
}

fn bench_render_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_document");

    for count in [10usize, 1_000, 10_000] {
        let doc = generate_document(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("files", count), &doc, |b, doc| {
            b.iter(|| {
                let mut buf = Vec::with_capacity(count * 200);
                render_document(black_box(doc), &mut buf).unwrap();
                buf
            })
        });
    }

    group.finish();
}

fn bench_textify(c: &mut Criterion) {
    let single = "Copyright (c) 2018 The Linux Foundation";
    let multi = "Copyright (c) 2001 A\nCopyright (c) 2002 B\nCopyright (c) 2003 C";

    let mut group = c.benchmark_group("textify");

    // 한 줄 (할당 없음)
    group.bench_function("single_line", |b| b.iter(|| textify(black_box(single))));

    // 여러 줄 (감싸기)
    group.bench_function("multi_line", |b| b.iter(|| textify(black_box(multi))));

    group.finish();
}

criterion_group!(benches, bench_render_document, bench_textify);
criterion_main!(benches);
