//! SPDX 2.1 문서 모델
//!
//! [`Document`]가 유일한 집합 루트이며 하위 엔티티를 모두 값으로 소유합니다.
//! 모델은 동작 없이 데이터만 담고, 렌더러는 어떤 엔티티도 변경하지 않습니다.
//!
//! # 필드 규칙
//!
//! - 선택 텍스트 필드는 `String`이며 빈 문자열이면 출력하지 않습니다.
//! - 구조가 있는 선택 필드(공급자, 검증 코드, 스니펫 구간 등)는 `Option`입니다.
//! - 반복 필드는 모두 `Vec`이며 삽입 순서가 곧 출력 순서입니다.
//!   렌더러는 어떤 목록도 정렬하지 않습니다.

pub mod annotation;
pub mod common;
pub mod creation_info;
pub mod file;
pub mod other_license;
pub mod package;
pub mod relationship;
pub mod review;
pub mod snippet;

use serde::{Deserialize, Serialize};

pub use annotation::Annotation;
pub use common::{Actor, Checksum, ChecksumAlgorithm, Checksums, CreatorType, Identity};
pub use creation_info::{CreationInfo, ExternalDocumentRef};
pub use file::{ArtifactOfProject, File};
pub use other_license::OtherLicense;
pub use package::{ExternalRef, FilesAnalyzed, Package, VerificationCode};
pub use relationship::Relationship;
pub use review::Review;
pub use snippet::{Snippet, SnippetRange};

/// SPDX 문서
///
/// `creation_info`는 필수이며, 없으면 렌더링이 실패합니다.
/// 패키지는 이름 있는 패키지 또는 "Unpackaged files" 컨테이너입니다.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    pub creation_info: Option<CreationInfo>,
    pub packages: Vec<Package>,
    pub other_licenses: Vec<OtherLicense>,
    pub relationships: Vec<Relationship>,
    pub annotations: Vec<Annotation>,
    pub reviews: Vec<Review>,
}

impl Document {
    /// CreationInfo만 채운 빈 문서를 생성합니다.
    pub fn new(creation_info: CreationInfo) -> Self {
        Self {
            creation_info: Some(creation_info),
            ..Self::default()
        }
    }

    /// 모든 패키지에 걸친 파일 수
    pub fn file_count(&self) -> usize {
        self.packages.iter().map(|p| p.files.len()).sum()
    }
}
