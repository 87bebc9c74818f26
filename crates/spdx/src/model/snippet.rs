//! Snippet 섹션

use std::fmt;

use serde::{Deserialize, Serialize};

/// 스니펫 구간 (바이트 또는 행)
///
/// 시작과 끝이 항상 함께 존재하도록 하나의 값으로 묶습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetRange {
    pub start: u64,
    pub end: u64,
}

impl SnippetRange {
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// 양 끝이 모두 0이 아닐 때만 출력 대상입니다.
    pub fn is_set(&self) -> bool {
        self.start != 0 && self.end != 0
    }
}

impl fmt::Display for SnippetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

/// 파일의 일부 구간에 대한 라이선스/저작권 정보
///
/// 구간이 파일 범위 안에 있는지는 호출자가 보장합니다.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Snippet {
    pub spdx_identifier: String,
    /// 스니펫이 속한 파일의 SPDX 식별자
    pub from_file_spdx_identifier: String,
    pub byte_range: Option<SnippetRange>,
    pub line_range: Option<SnippetRange>,
    pub license_concluded: String,
    pub license_info_in_snippet: Vec<String>,
    pub license_comments: String,
    pub copyright_text: String,
    pub comment: String,
    pub name: String,
}
