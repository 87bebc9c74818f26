//! Other Licensing Information 섹션 렌더러

use std::io::{self, Write};

use super::util::{write_blank, write_field, write_repeated, write_text_field};
use crate::model::OtherLicense;

/// 라이선스 정의 하나를 출력합니다. 각 항목은 빈 행으로 끝납니다.
pub fn render_other_license<W: Write + ?Sized>(ol: &OtherLicense, w: &mut W) -> io::Result<()> {
    write_field(w, "LicenseID", &ol.license_identifier)?;
    write_text_field(w, "ExtractedText", &ol.extracted_text)?;
    write_field(w, "LicenseName", &ol.license_name)?;
    write_repeated(w, "LicenseCrossReference", &ol.license_cross_references)?;
    write_text_field(w, "LicenseComment", &ol.license_comment)?;

    write_blank(w)
}
