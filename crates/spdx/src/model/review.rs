//! Review 섹션
//!
//! 이후 SPDX 버전에서는 Annotation으로 대체되었지만 2.1 문서에서는 지원합니다.

use serde::{Deserialize, Serialize};

use super::common::Identity;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Review {
    pub reviewer: Option<Identity>,
    pub date: String,
    pub comment: String,
}
