//! Snippet 섹션 렌더러

use std::io::{self, Write};

use super::util::{write_blank, write_field, write_repeated, write_text_field};
use crate::model::{Snippet, SnippetRange};

pub fn render_snippet<W: Write + ?Sized>(snippet: &Snippet, w: &mut W) -> io::Result<()> {
    write_field(w, "SnippetSPDXIdentifier", &snippet.spdx_identifier)?;
    write_field(w, "SnippetFromFileSPDXID", &snippet.from_file_spdx_identifier)?;
    if let Some(range) = snippet.byte_range.filter(SnippetRange::is_set) {
        writeln!(w, "SnippetByteRange: {range}")?;
    }
    if let Some(range) = snippet.line_range.filter(SnippetRange::is_set) {
        writeln!(w, "SnippetLineRange: {range}")?;
    }
    write_field(w, "SnippetLicenseConcluded", &snippet.license_concluded)?;
    write_repeated(w, "LicenseInfoInSnippet", &snippet.license_info_in_snippet)?;
    write_text_field(w, "SnippetLicenseComments", &snippet.license_comments)?;
    write_text_field(w, "SnippetCopyrightText", &snippet.copyright_text)?;
    write_text_field(w, "SnippetComment", &snippet.comment)?;
    write_field(w, "SnippetName", &snippet.name)?;

    write_blank(w)
}
