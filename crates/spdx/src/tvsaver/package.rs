//! Package 섹션 렌더러

use std::io::{self, Write};

use super::file::render_file;
use super::util::{write_blank, write_field, write_repeated, write_text_field};
use crate::model::{FilesAnalyzed, Package};

/// Package 섹션과 그 파일들을 출력합니다.
///
/// "Unpackaged files" 컨테이너는 식별 필드와 섹션 끝 빈 행 없이 바로
/// 파일을 출력합니다. 섹션 헤더는 문서 렌더러가 씁니다.
pub fn render_package<W: Write + ?Sized>(pkg: &Package, w: &mut W) -> io::Result<()> {
    if !pkg.is_unpackaged {
        render_package_identity(pkg, w)?;
    }

    for file in &pkg.files {
        render_file(file, w)?;
    }

    Ok(())
}

fn render_package_identity<W: Write + ?Sized>(pkg: &Package, w: &mut W) -> io::Result<()> {
    write_field(w, "PackageName", &pkg.name)?;
    write_field(w, "SPDXID", &pkg.spdx_identifier)?;
    write_field(w, "PackageVersion", &pkg.version)?;
    write_field(w, "PackageFileName", &pkg.file_name)?;
    if let Some(supplier) = pkg.supplier.as_ref().filter(|a| !a.is_empty()) {
        writeln!(w, "PackageSupplier: {supplier}")?;
    }
    if let Some(originator) = pkg.originator.as_ref().filter(|a| !a.is_empty()) {
        writeln!(w, "PackageOriginator: {originator}")?;
    }
    write_field(w, "PackageDownloadLocation", &pkg.download_location)?;

    match pkg.files_analyzed {
        FilesAnalyzed::NotAnalyzed => writeln!(w, "FilesAnalyzed: false")?,
        FilesAnalyzed::AnalyzedDeclared => writeln!(w, "FilesAnalyzed: true")?,
        FilesAnalyzed::AnalyzedImplicit => {}
    }

    if pkg.files_analyzed.is_analyzed() {
        if let Some(code) = pkg.verification_code.as_ref().filter(|c| !c.value.is_empty()) {
            match &code.excluded_file {
                Some(excluded) if !excluded.is_empty() => writeln!(
                    w,
                    "PackageVerificationCode: {} (excludes {excluded})",
                    code.value
                )?,
                _ => writeln!(w, "PackageVerificationCode: {}", code.value)?,
            }
        }
    }

    for (algorithm, value) in pkg.checksums.iter() {
        writeln!(w, "PackageChecksum: {algorithm}: {value}")?;
    }
    write_field(w, "PackageHomePage", &pkg.home_page)?;
    write_text_field(w, "PackageSourceInfo", &pkg.source_info)?;
    write_field(w, "PackageLicenseConcluded", &pkg.license_concluded)?;
    if pkg.files_analyzed.is_analyzed() {
        write_repeated(w, "PackageLicenseInfoFromFiles", &pkg.license_info_from_files)?;
    }
    write_field(w, "PackageLicenseDeclared", &pkg.license_declared)?;
    write_text_field(w, "PackageLicenseComments", &pkg.license_comments)?;
    write_text_field(w, "PackageCopyrightText", &pkg.copyright_text)?;
    write_text_field(w, "PackageSummary", &pkg.summary)?;
    write_text_field(w, "PackageDescription", &pkg.description)?;
    write_text_field(w, "PackageComment", &pkg.comment)?;
    for ext in &pkg.external_references {
        writeln!(
            w,
            "ExternalRef: {} {} {}",
            ext.category, ext.ref_type, ext.locator
        )?;
        write_text_field(w, "ExternalRefComment", &ext.comment)?;
    }

    write_blank(w)
}
