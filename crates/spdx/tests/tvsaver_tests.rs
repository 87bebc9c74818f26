//! tag-value 렌더러 통합 테스트
//!
//! 빌더 -> 문서 조립 -> 렌더링 전체 흐름과 출력 싱크 실패 처리를 검증합니다.

use std::io::{self, Write};

use kspdx_spdx::builder::{BUILDER_TOOL, FixedClock, build_creation_info, kernel_package_name};
use kspdx_spdx::model::{
    Actor, Annotation, Checksums, CreationInfo, CreatorType, Document, File, FilesAnalyzed,
    Identity, OtherLicense, Package, Relationship, Review, Snippet, SnippetRange,
    VerificationCode,
};
use kspdx_spdx::{SpdxError, render_document, render_to_string};

/// 지정한 바이트 수까지만 받고 이후 쓰기는 실패하는 싱크
struct FailingWriter {
    written: Vec<u8>,
    limit: usize,
}

impl FailingWriter {
    fn new(limit: usize) -> Self {
        Self {
            written: Vec::new(),
            limit,
        }
    }
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let room = self.limit - self.written.len();
        if room == 0 {
            return Err(io::Error::new(io::ErrorKind::StorageFull, "sink full"));
        }
        let n = room.min(buf.len());
        self.written.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn scenario_document() -> Document {
    let ci = CreationInfo {
        spdx_version: "SPDX-2.1".to_owned(),
        document_name: "linux-4.19".to_owned(),
        document_namespace: "https://example.org/ns-linux-4.19-NONE".to_owned(),
        creator_tools: vec!["builder-tool".to_owned()],
        created: "2019-01-01T00:00:00Z".to_owned(),
        ..CreationInfo::default()
    };

    let file = File {
        spdx_identifier: "SPDXRef-File-a".to_owned(),
        checksums: Checksums::sha1("abc123"),
        license_concluded: "GPL-2.0-only".to_owned(),
        ..File::default()
    };

    let mut doc = Document::new(ci);
    doc.packages.push(Package::unpackaged(vec![file]));
    doc
}

/// 모든 섹션이 채워진 문서
fn full_document() -> Document {
    let clock = FixedClock::parse("2018-10-19T04:38:00Z").unwrap();
    let ci = build_creation_info(
        &kernel_package_name("4.19"),
        "d6a770ba38583ed4bb4525bd96e50461655d2759",
        "https://example.org/kernel-",
        CreatorType::Organization,
        "Example Org",
        &clock,
    )
    .unwrap();

    let mut file = File {
        file_types: vec!["SOURCE".to_owned()],
        checksums: Checksums::sha1("6c92dc8bc462b6889d9b1c0bc16c54d19a2cbdd3"),
        license_concluded: "GPL-2.0-only".to_owned(),
        license_info_in_file: vec!["GPL-2.0-only".to_owned()],
        copyright_text: "Copyright (C) 1991, 1992  Linus Torvalds".to_owned(),
        ..File::new("./kernel/fork.c", "SPDXRef-File-fork")
    };
    file.snippets.push(Snippet {
        spdx_identifier: "SPDXRef-Snippet-1".to_owned(),
        from_file_spdx_identifier: "SPDXRef-File-fork".to_owned(),
        byte_range: Some(SnippetRange::new(100, 400)),
        license_concluded: "MIT".to_owned(),
        ..Snippet::default()
    });

    let mut pkg = Package {
        version: "4.19".to_owned(),
        supplier: Some(Actor::Organization("Example Org".to_owned())),
        download_location: "NOASSERTION".to_owned(),
        files_analyzed: FilesAnalyzed::AnalyzedDeclared,
        verification_code: Some(VerificationCode::new("d6a770ba38583ed4bb4525bd96e50461655d2759")),
        license_concluded: "GPL-2.0-only".to_owned(),
        license_info_from_files: vec!["GPL-2.0-only".to_owned(), "MIT".to_owned()],
        license_declared: "GPL-2.0-only".to_owned(),
        copyright_text: "NOASSERTION".to_owned(),
        ..Package::named("linux-4.19", "SPDXRef-Package-linux")
    };
    pkg.files.push(file);

    let mut doc = Document::new(ci);
    doc.packages.push(pkg);
    doc.other_licenses.push(OtherLicense::new(
        "LicenseRef-Linux-syscall-note",
        "NOTE! This copyright does *not* cover user programs\nthat use kernel services by normal system calls.",
    ));
    doc.relationships.push(Relationship::new(
        "SPDXRef-DOCUMENT",
        "DESCRIBES",
        "SPDXRef-Package-linux",
    ));
    doc.relationships.push(Relationship::new(
        "SPDXRef-Package-linux",
        "CONTAINS",
        "SPDXRef-File-fork",
    ));
    doc.annotations.push(Annotation {
        annotator: Some(Identity::new(CreatorType::Tool, "idsearcher")),
        date: "2018-10-19T04:38:00Z".to_owned(),
        annotation_type: "OTHER".to_owned(),
        spdx_identifier: "SPDXRef-File-fork".to_owned(),
        comment: "found by short-form identifier".to_owned(),
    });
    doc.reviews.push(Review {
        reviewer: Some(Identity::new(CreatorType::Person, "Jane Doe")),
        date: "2018-10-20T00:00:00Z".to_owned(),
        comment: String::new(),
    });
    doc
}

/// 단일 unpackaged 파일 문서의 정확한 출력
#[test]
fn test_e2e_unpackaged_kernel_scenario() {
    let want = "SPDXVersion: SPDX-2.1
DocumentName: linux-4.19
DocumentNamespace: https://example.org/ns-linux-4.19-NONE
Creator: Tool: builder-tool
Created: 2019-01-01T00:00:00Z

##### Unpackaged files

SPDXID: SPDXRef-File-a
FileChecksum: SHA1: abc123
LicenseConcluded: GPL-2.0-only

";
    let out = render_to_string(&scenario_document()).unwrap();
    assert_eq!(out, want);
    assert!(!out.contains("PackageName"));
    assert!(!out.contains("FilesAnalyzed"));
}

/// 전체 섹션 문서의 정확한 출력
#[test]
fn test_e2e_full_document() {
    let want = format!(
        "SPDXVersion: SPDX-2.1
DataLicense: CC0-1.0
SPDXID: SPDXRef-DOCUMENT
DocumentName: linux-4.19
DocumentNamespace: https://example.org/kernel-linux-4.19-d6a770ba38583ed4bb4525bd96e50461655d2759
Creator: Organization: Example Org
Creator: Tool: {BUILDER_TOOL}
Created: 2018-10-19T04:38:00Z

##### Package: linux-4.19

PackageName: linux-4.19
SPDXID: SPDXRef-Package-linux
PackageVersion: 4.19
PackageSupplier: Organization: Example Org
PackageDownloadLocation: NOASSERTION
FilesAnalyzed: true
PackageVerificationCode: d6a770ba38583ed4bb4525bd96e50461655d2759
PackageLicenseConcluded: GPL-2.0-only
PackageLicenseInfoFromFiles: GPL-2.0-only
PackageLicenseInfoFromFiles: MIT
PackageLicenseDeclared: GPL-2.0-only
PackageCopyrightText: NOASSERTION

FileName: ./kernel/fork.c
SPDXID: SPDXRef-File-fork
FileType: SOURCE
FileChecksum: SHA1: 6c92dc8bc462b6889d9b1c0bc16c54d19a2cbdd3
LicenseConcluded: GPL-2.0-only
LicenseInfoInFile: GPL-2.0-only
FileCopyrightText: Copyright (C) 1991, 1992  Linus Torvalds

SnippetSPDXIdentifier: SPDXRef-Snippet-1
SnippetFromFileSPDXID: SPDXRef-File-fork
SnippetByteRange: 100:400
SnippetLicenseConcluded: MIT

##### Other Licenses

LicenseID: LicenseRef-Linux-syscall-note
ExtractedText: <text>NOTE! This copyright does *not* cover user programs
that use kernel services by normal system calls.</text>

##### Relationships

Relationship: SPDXRef-DOCUMENT DESCRIBES SPDXRef-Package-linux
Relationship: SPDXRef-Package-linux CONTAINS SPDXRef-File-fork

##### Annotations

Annotator: Tool: idsearcher
AnnotationDate: 2018-10-19T04:38:00Z
AnnotationType: OTHER
SPDXREF: SPDXRef-File-fork
AnnotationComment: found by short-form identifier

##### Reviews

Reviewer: Person: Jane Doe
ReviewDate: 2018-10-20T00:00:00Z

"
    );
    assert_eq!(render_to_string(&full_document()).unwrap(), want);
}

/// 같은 문서를 두 번 렌더링하면 바이트 단위로 같아야 함
#[test]
fn test_render_is_deterministic() {
    let doc = full_document();
    let mut first = Vec::new();
    let mut second = Vec::new();
    render_document(&doc, &mut first).unwrap();
    render_document(&doc, &mut second).unwrap();
    assert_eq!(first, second);
}

/// 렌더링은 문서를 변경하지 않음
#[test]
fn test_render_does_not_mutate_document() {
    let doc = full_document();
    let before = doc.clone();
    render_to_string(&doc).unwrap();
    assert_eq!(doc, before);
}

/// 독립된 싱크로 동시에 렌더링해도 결과가 같아야 함
#[test]
fn test_concurrent_renders_of_shared_document() {
    let doc = full_document();
    let expected = render_to_string(&doc).unwrap();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| render_to_string(&doc).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

/// 저장 순서를 그대로 따르고 정렬하지 않음
#[test]
fn test_storage_order_is_preserved() {
    let mut doc = scenario_document();
    doc.packages.clear();
    let mut pkg = Package::named("p", "SPDXRef-p");
    for name in ["./z.c", "./a.c", "./m.c"] {
        pkg.files.push(File::new(name, format!("SPDXRef-File-{name}")));
    }
    doc.packages.push(pkg);

    let out = render_to_string(&doc).unwrap();
    let z = out.find("FileName: ./z.c").unwrap();
    let a = out.find("FileName: ./a.c").unwrap();
    let m = out.find("FileName: ./m.c").unwrap();
    assert!(z < a && a < m);
}

/// 여러 패키지가 각각 헤더를 가짐
#[test]
fn test_each_package_gets_its_own_header() {
    let mut doc = scenario_document();
    doc.packages.push(Package::named("second", "SPDXRef-second"));

    let out = render_to_string(&doc).unwrap();
    let unpackaged = out.find("##### Unpackaged files\n\n").unwrap();
    let second = out.find("##### Package: second\n\nPackageName: second\n").unwrap();
    assert!(unpackaged < second);
}

#[test]
fn test_missing_creation_info_is_an_error() {
    let mut doc = scenario_document();
    doc.creation_info = None;

    let mut buf = Vec::new();
    let err = render_document(&doc, &mut buf).unwrap_err();
    assert!(matches!(err, SpdxError::MissingCreationInfo));
    assert!(buf.is_empty(), "nothing should be written");
}

/// JSON에서 creation_info가 null이면 기본값 문서가 아니라 에러
#[test]
fn test_null_creation_info_from_json_is_an_error() {
    let doc: Document =
        serde_json::from_str(r#"{ "creation_info": null, "packages": [] }"#).unwrap();
    assert!(matches!(
        render_to_string(&doc),
        Err(SpdxError::MissingCreationInfo)
    ));
}

/// 싱크 실패는 에러로 전파되고, 실패 전까지 쓴 내용은 남아 있음
#[test]
fn test_sink_failure_propagates() {
    let doc = full_document();
    let full = render_to_string(&doc).unwrap();

    let mut sink = FailingWriter::new(64);
    let err = render_document(&doc, &mut sink).unwrap_err();
    match err {
        SpdxError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::StorageFull),
        other => panic!("expected Io error, got {other:?}"),
    }
    assert_eq!(sink.written.len(), 64);
    assert!(full.as_bytes().starts_with(&sink.written));
}

/// 패키지 섹션 중간에서 실패해도 동일하게 전파
#[test]
fn test_sink_failure_mid_package() {
    let doc = full_document();
    let full = render_to_string(&doc).unwrap();
    let limit = full.find("FilesAnalyzed").unwrap() + 3;

    let mut sink = FailingWriter::new(limit);
    assert!(matches!(
        render_document(&doc, &mut sink),
        Err(SpdxError::Io(_))
    ));
    assert_eq!(sink.written, &full.as_bytes()[..limit]);
}

/// FilesAnalyzed 세 가지 상태에 따른 출력 차이
#[test]
fn test_files_analyzed_states() {
    let render_with = |state: FilesAnalyzed| {
        let mut doc = full_document();
        doc.packages[0].files_analyzed = state;
        render_to_string(&doc).unwrap()
    };

    let declared = render_with(FilesAnalyzed::AnalyzedDeclared);
    assert!(declared.contains("FilesAnalyzed: true\n"));
    assert!(declared.contains("PackageVerificationCode:"));
    assert!(declared.contains("PackageLicenseInfoFromFiles:"));

    let implicit = render_with(FilesAnalyzed::AnalyzedImplicit);
    assert!(!implicit.contains("FilesAnalyzed:"));
    assert!(implicit.contains("PackageVerificationCode:"));
    assert!(implicit.contains("PackageLicenseInfoFromFiles:"));

    let not_analyzed = render_with(FilesAnalyzed::NotAnalyzed);
    assert!(not_analyzed.contains("FilesAnalyzed: false\n"));
    assert!(!not_analyzed.contains("PackageVerificationCode:"));
    assert!(!not_analyzed.contains("PackageLicenseInfoFromFiles:"));
    // 파일은 분석 여부와 관계없이 출력
    assert!(not_analyzed.contains("FileName: ./kernel/fork.c\n"));
}

/// JSON으로 저장한 문서를 다시 읽어도 같은 출력
#[test]
fn test_json_document_renders_identically() {
    let doc = full_document();
    let json = serde_json::to_string(&doc).unwrap();
    let restored: Document = serde_json::from_str(&json).unwrap();
    assert_eq!(
        render_to_string(&restored).unwrap(),
        render_to_string(&doc).unwrap()
    );
}
