//! File 섹션 렌더러

use std::io::{self, Write};

use super::snippet::render_snippet;
use super::util::{write_blank, write_field, write_repeated, write_text_field};
use crate::model::File;

/// File 섹션을 출력하고, 빈 행 뒤에 이 파일의 스니펫을 순서대로 출력합니다.
pub fn render_file<W: Write + ?Sized>(file: &File, w: &mut W) -> io::Result<()> {
    write_field(w, "FileName", &file.name)?;
    write_field(w, "SPDXID", &file.spdx_identifier)?;
    write_repeated(w, "FileType", &file.file_types)?;
    for (algorithm, value) in file.checksums.iter() {
        writeln!(w, "FileChecksum: {algorithm}: {value}")?;
    }
    write_field(w, "LicenseConcluded", &file.license_concluded)?;
    write_repeated(w, "LicenseInfoInFile", &file.license_info_in_file)?;
    write_text_field(w, "LicenseComments", &file.license_comments)?;
    write_text_field(w, "FileCopyrightText", &file.copyright_text)?;
    for artifact in &file.artifact_of_projects {
        write_field(w, "ArtifactOfProjectName", &artifact.name)?;
        write_field(w, "ArtifactOfProjectHomePage", &artifact.home_page)?;
        write_field(w, "ArtifactOfProjectURI", &artifact.uri)?;
    }
    write_text_field(w, "FileComment", &file.comment)?;
    write_text_field(w, "FileNotice", &file.notice)?;
    write_repeated(w, "FileContributor", &file.contributors)?;
    write_repeated(w, "FileDependency", &file.dependencies)?;

    write_blank(w)?;

    for snippet in &file.snippets {
        render_snippet(snippet, w)?;
    }

    Ok(())
}
