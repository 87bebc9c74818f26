//! SPDX 2.1 tag-value 렌더러
//!
//! [`render_document`]가 문서 전체를 정해진 섹션 순서로 출력합니다.
//! 섹션별 렌더러도 공개되어 있어 부분 출력에 쓸 수 있습니다.
//!
//! # 섹션 순서
//!
//! 1. CreationInfo
//! 2. 패키지마다 `##### Package: <name>` 또는 `##### Unpackaged files` 헤더, 패키지, 파일, 스니펫
//! 3. `##### Other Licenses`
//! 4. `##### Relationships` (그룹 전체 뒤에 빈 행 하나)
//! 5. `##### Annotations` (항목마다 뒤에 빈 행 하나)
//! 6. `##### Reviews`
//!
//! 비어 있는 그룹은 헤더까지 생략합니다. 렌더러는 입력을 변경하지 않고
//! 정렬하지 않으므로 같은 문서는 항상 같은 바이트열로 출력됩니다.

mod annotation;
mod creation_info;
mod file;
mod other_license;
mod package;
mod relationship;
mod review;
mod snippet;
mod util;

use std::io::Write;

use crate::error::SpdxError;
use crate::model::Document;

pub use annotation::render_annotation;
pub use creation_info::render_creation_info;
pub use file::render_file;
pub use other_license::render_other_license;
pub use package::render_package;
pub use relationship::render_relationship;
pub use review::render_review;
pub use snippet::render_snippet;
pub use util::{TEXT_END, TEXT_START, textify};

/// 문서 전체를 tag-value 형식으로 출력합니다.
///
/// # Errors
///
/// - [`SpdxError::MissingCreationInfo`]: CreationInfo가 없음. 이 경우 아무것도 쓰지 않습니다.
/// - [`SpdxError::Io`]: 출력 실패. 이미 쓰인 부분은 되돌리지 않습니다.
pub fn render_document<W: Write + ?Sized>(doc: &Document, w: &mut W) -> Result<(), SpdxError> {
    let ci = doc
        .creation_info
        .as_ref()
        .ok_or(SpdxError::MissingCreationInfo)?;

    render_creation_info(ci, w)?;

    for pkg in &doc.packages {
        if pkg.is_unpackaged {
            write!(w, "##### Unpackaged files\n\n")?;
        } else {
            write!(w, "##### Package: {}\n\n", pkg.name)?;
        }
        render_package(pkg, w)?;
    }

    if !doc.other_licenses.is_empty() {
        write!(w, "##### Other Licenses\n\n")?;
        for ol in &doc.other_licenses {
            render_other_license(ol, w)?;
        }
    }

    if !doc.relationships.is_empty() {
        write!(w, "##### Relationships\n\n")?;
        for rln in &doc.relationships {
            render_relationship(rln, w)?;
        }
        writeln!(w)?;
    }

    if !doc.annotations.is_empty() {
        write!(w, "##### Annotations\n\n")?;
        for ann in &doc.annotations {
            render_annotation(ann, w)?;
            writeln!(w)?;
        }
    }

    if !doc.reviews.is_empty() {
        write!(w, "##### Reviews\n\n")?;
        for rev in &doc.reviews {
            render_review(rev, w)?;
        }
    }

    Ok(())
}

/// 문서를 문자열로 렌더링합니다.
pub fn render_to_string(doc: &Document) -> Result<String, SpdxError> {
    let mut buf = Vec::new();
    render_document(doc, &mut buf)?;
    // 모든 입력이 &str이므로 출력도 항상 UTF-8입니다
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
