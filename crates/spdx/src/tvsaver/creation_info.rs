//! CreationInfo 섹션 렌더러

use std::io::{self, Write};

use super::util::{write_blank, write_field, write_text_field};
use crate::model::CreationInfo;

/// CreationInfo 섹션을 출력합니다. 마지막에 빈 행 하나로 섹션을 닫습니다.
pub fn render_creation_info<W: Write + ?Sized>(ci: &CreationInfo, w: &mut W) -> io::Result<()> {
    write_field(w, "SPDXVersion", &ci.spdx_version)?;
    write_field(w, "DataLicense", &ci.data_license)?;
    write_field(w, "SPDXID", &ci.spdx_identifier)?;
    write_field(w, "DocumentName", &ci.document_name)?;
    write_field(w, "DocumentNamespace", &ci.document_namespace)?;
    for ext in &ci.external_document_references {
        writeln!(
            w,
            "ExternalDocumentRef: {} {} {}",
            ext.document_ref_id, ext.uri, ext.checksum
        )?;
    }
    write_field(w, "LicenseListVersion", &ci.license_list_version)?;
    for person in &ci.creator_persons {
        writeln!(w, "Creator: Person: {person}")?;
    }
    for org in &ci.creator_organizations {
        writeln!(w, "Creator: Organization: {org}")?;
    }
    for tool in &ci.creator_tools {
        writeln!(w, "Creator: Tool: {tool}")?;
    }
    write_field(w, "Created", &ci.created)?;
    write_text_field(w, "CreatorComment", &ci.creator_comment)?;
    write_text_field(w, "DocumentComment", &ci.document_comment)?;

    write_blank(w)
}
