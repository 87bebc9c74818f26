//! Package 섹션

use serde::{Deserialize, Serialize};

use super::common::{Actor, Checksums};
use super::file::File;

/// 패키지의 파일 분석 여부
///
/// 기본값으로 true인 경우와 태그로 명시된 true를 구분합니다. 의미는 같지만
/// 명시된 경우에만 `FilesAnalyzed: true` 행을 다시 출력합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilesAnalyzed {
    /// `FilesAnalyzed: false`
    NotAnalyzed,
    /// 태그 없이 기본값으로 분석됨
    #[default]
    AnalyzedImplicit,
    /// `FilesAnalyzed: true` 태그로 명시됨
    AnalyzedDeclared,
}

impl FilesAnalyzed {
    /// 파일이 분석되었으면 true (명시 여부와 무관)
    pub fn is_analyzed(self) -> bool {
        !matches!(self, Self::NotAnalyzed)
    }
}

/// 패키지 검증 코드
///
/// 외부에서 미리 계산된 값을 그대로 보관합니다.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationCode {
    pub value: String,
    /// 계산에서 제외된 파일 (`(excludes <file>)`로 출력)
    pub excluded_file: Option<String>,
}

impl VerificationCode {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            excluded_file: None,
        }
    }
}

/// 패키지 외부 참조 (예: purl)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalRef {
    /// 참조 범주 (SECURITY, PACKAGE-MANAGER, OTHER)
    pub category: String,
    pub ref_type: String,
    pub locator: String,
    pub comment: String,
}

/// SPDX 패키지
///
/// `is_unpackaged`가 true이면 이름 있는 패키지가 아니라 "Unpackaged files"
/// 컨테이너로 취급되어 식별 필드를 전혀 출력하지 않고 파일만 출력합니다.
///
/// 선택 텍스트 필드는 빈 문자열이면 출력하지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Package {
    pub is_unpackaged: bool,
    pub name: String,
    pub spdx_identifier: String,
    pub version: String,
    pub file_name: String,
    pub supplier: Option<Actor>,
    pub originator: Option<Actor>,
    pub download_location: String,
    pub files_analyzed: FilesAnalyzed,
    /// `files_analyzed`가 분석 상태일 때만 출력됩니다.
    pub verification_code: Option<VerificationCode>,
    pub checksums: Checksums,
    pub home_page: String,
    pub source_info: String,
    pub license_concluded: String,
    /// `files_analyzed`가 분석 상태일 때만 출력됩니다.
    pub license_info_from_files: Vec<String>,
    pub license_declared: String,
    pub license_comments: String,
    pub copyright_text: String,
    pub summary: String,
    pub description: String,
    pub comment: String,
    pub external_references: Vec<ExternalRef>,
    /// 패키징 여부와 관계없이 항상 출력되는 파일 목록
    pub files: Vec<File>,
}

impl Package {
    /// 이름과 SPDX 식별자를 가진 패키지를 생성합니다.
    pub fn named(name: impl Into<String>, spdx_identifier: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            spdx_identifier: spdx_identifier.into(),
            ..Self::default()
        }
    }

    /// "Unpackaged files" 컨테이너를 생성합니다.
    pub fn unpackaged(files: Vec<File>) -> Self {
        Self {
            is_unpackaged: true,
            files,
            ..Self::default()
        }
    }
}
