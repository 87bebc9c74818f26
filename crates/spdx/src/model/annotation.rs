//! Annotation 섹션

use serde::{Deserialize, Serialize};

use super::common::Identity;

/// 요소에 붙는 자유 형식 메모
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Annotation {
    pub annotator: Option<Identity>,
    pub date: String,
    /// 주석 유형 (REVIEW, OTHER)
    pub annotation_type: String,
    /// 주석 대상 요소의 SPDX 식별자
    pub spdx_identifier: String,
    pub comment: String,
}
