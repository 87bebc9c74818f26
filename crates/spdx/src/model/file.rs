//! File 섹션

use serde::{Deserialize, Serialize};

use super::common::Checksums;
use super::snippet::Snippet;

/// 파일이 속한 외부 프로젝트 (ArtifactOf)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactOfProject {
    pub name: String,
    pub home_page: String,
    pub uri: String,
}

/// 파일 단위 라이선스/저작권 검색 결과
///
/// 하나의 패키지에 소속됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct File {
    pub name: String,
    pub spdx_identifier: String,
    pub file_types: Vec<String>,
    pub checksums: Checksums,
    pub license_concluded: String,
    pub license_info_in_file: Vec<String>,
    pub license_comments: String,
    pub copyright_text: String,
    pub artifact_of_projects: Vec<ArtifactOfProject>,
    pub comment: String,
    pub notice: String,
    pub contributors: Vec<String>,
    pub dependencies: Vec<String>,
    /// 이 파일의 일부 구간에 대한 스니펫 (파일 섹션 뒤에 순서대로 출력)
    pub snippets: Vec<Snippet>,
}

impl File {
    pub fn new(name: impl Into<String>, spdx_identifier: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            spdx_identifier: spdx_identifier.into(),
            ..Self::default()
        }
    }

    /// SPDX 식별자로 스니펫을 찾습니다.
    pub fn snippet(&self, spdx_identifier: &str) -> Option<&Snippet> {
        self.snippets
            .iter()
            .find(|s| s.spdx_identifier == spdx_identifier)
    }
}
