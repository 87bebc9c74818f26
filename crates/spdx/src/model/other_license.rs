//! Other Licensing Information 섹션

use serde::{Deserialize, Serialize};

/// SPDX 라이선스 목록에 없는 라이선스 정의
///
/// `license_identifier`와 `extracted_text`만 필수입니다.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OtherLicense {
    /// `LicenseRef-` 형식의 식별자
    pub license_identifier: String,
    pub extracted_text: String,
    pub license_name: String,
    pub license_cross_references: Vec<String>,
    pub license_comment: String,
}

impl OtherLicense {
    pub fn new(
        license_identifier: impl Into<String>,
        extracted_text: impl Into<String>,
    ) -> Self {
        Self {
            license_identifier: license_identifier.into(),
            extracted_text: extracted_text.into(),
            ..Self::default()
        }
    }
}
