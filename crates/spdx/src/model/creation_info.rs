//! Document Creation Information 섹션

use serde::{Deserialize, Serialize};

use super::common::Checksum;

/// 문서 식별 및 출처 정보
///
/// 문서마다 정확히 하나 존재해야 합니다. 생성자는 세 범주 중 최소 하나에
/// 있어야 하며, 각 목록은 저장된 순서대로 출력됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreationInfo {
    /// SPDX 버전 (예: "SPDX-2.1")
    pub spdx_version: String,
    /// 데이터 라이선스 (관례상 "CC0-1.0")
    pub data_license: String,
    /// 문서 SPDX 식별자 (관례상 "SPDXRef-DOCUMENT")
    pub spdx_identifier: String,
    pub document_name: String,
    /// 전역적으로 고유해야 하는 문서 네임스페이스
    pub document_namespace: String,
    pub external_document_references: Vec<ExternalDocumentRef>,
    pub license_list_version: String,
    pub creator_persons: Vec<String>,
    pub creator_organizations: Vec<String>,
    pub creator_tools: Vec<String>,
    /// 생성 시각 (`YYYY-MM-DDThh:mm:ssZ`, UTC)
    pub created: String,
    pub creator_comment: String,
    pub document_comment: String,
}

impl CreationInfo {
    /// 세 범주를 합친 생성자 수
    pub fn creator_count(&self) -> usize {
        self.creator_persons.len() + self.creator_organizations.len() + self.creator_tools.len()
    }
}

/// 외부 SPDX 문서 참조
///
/// `ExternalDocumentRef: DocumentRef-x https://... SHA1: abc` 형식으로 출력됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalDocumentRef {
    /// `DocumentRef-` 로 시작하는 참조 식별자
    pub document_ref_id: String,
    /// 참조 대상 문서의 네임스페이스 URI
    pub uri: String,
    pub checksum: Checksum,
}
