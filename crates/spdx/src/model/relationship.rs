//! Relationship 섹션

use serde::{Deserialize, Serialize};

/// 두 SPDX 요소 사이의 유형 있는 관계
///
/// 같은 요소 쌍 사이에 유형이 다른 관계가 여럿 있어도 됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Relationship {
    pub ref_a: String,
    /// 관계 유형 (예: DESCRIBES, CONTAINS)
    pub relationship: String,
    pub ref_b: String,
    pub comment: String,
}

impl Relationship {
    pub fn new(
        ref_a: impl Into<String>,
        relationship: impl Into<String>,
        ref_b: impl Into<String>,
    ) -> Self {
        Self {
            ref_a: ref_a.into(),
            relationship: relationship.into(),
            ref_b: ref_b.into(),
            comment: String::new(),
        }
    }
}
