//! 여러 섹션이 공유하는 값 타입
//!
//! 생성자 유형, 공급자/원작자 선택지, 체크섬처럼 둘 이상의 엔티티에서
//! 쓰이는 타입을 정의합니다.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// 생성자(및 주석자, 검토자)의 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CreatorType {
    /// 개인
    #[default]
    Person,
    /// 조직
    Organization,
    /// 도구
    Tool,
}

impl fmt::Display for CreatorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Person => write!(f, "Person"),
            Self::Organization => write!(f, "Organization"),
            Self::Tool => write!(f, "Tool"),
        }
    }
}

impl CreatorType {
    /// 문자열에서 생성자 유형을 파싱합니다 (대소문자 구분 없음).
    ///
    /// 알 수 없는 값은 에러가 아니라 `Person`으로 처리됩니다.
    pub fn from_str_loose(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "person" => Self::Person,
            "organization" | "organisation" => Self::Organization,
            "tool" => Self::Tool,
            other => {
                debug!(creator_type = other, "unrecognized creator type, treating as Person");
                Self::Person
            }
        }
    }
}

/// 유형이 붙은 식별자 (Annotator, Reviewer)
///
/// `Annotator: Person: Jane Doe` 형식으로 출력됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Identity {
    /// 식별자 유형
    pub kind: CreatorType,
    /// 이름 또는 도구 식별 문자열
    pub name: String,
}

impl Identity {
    /// 새 식별자를 생성합니다.
    pub fn new(kind: CreatorType, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.name)
    }
}

/// 패키지 공급자/원작자
///
/// 세 가지 중 하나만 활성화됩니다. 값이 없으면 `Option::None`으로 표현합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Actor {
    /// 개인
    Person(String),
    /// 조직
    Organization(String),
    /// 주장하지 않음 (`NOASSERTION`)
    NoAssertion,
}

impl Actor {
    /// 이름이 빈 Person/Organization은 값이 없는 것으로 봅니다.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Person(name) | Self::Organization(name) => name.is_empty(),
            Self::NoAssertion => false,
        }
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Person(name) => write!(f, "Person: {name}"),
            Self::Organization(name) => write!(f, "Organization: {name}"),
            Self::NoAssertion => write!(f, "NOASSERTION"),
        }
    }
}

/// 체크섬 알고리즘
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChecksumAlgorithm {
    Sha1,
    Sha256,
    Md5,
}

impl fmt::Display for ChecksumAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sha1 => write!(f, "SHA1"),
            Self::Sha256 => write!(f, "SHA256"),
            Self::Md5 => write!(f, "MD5"),
        }
    }
}

/// 단일 체크섬 값
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checksum {
    pub algorithm: ChecksumAlgorithm,
    pub value: String,
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.algorithm, self.value)
    }
}

/// 패키지/파일의 체크섬 묶음
///
/// 알고리즘마다 최대 하나씩 보관하며, 빈 문자열은 값 없음을 뜻합니다.
/// 미리 계산된 값을 그대로 담을 뿐 여기서 해시를 계산하지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Checksums {
    pub sha1: String,
    pub sha256: String,
    pub md5: String,
}

impl Checksums {
    /// SHA1 값만 가진 체크섬 묶음을 생성합니다.
    pub fn sha1(value: impl Into<String>) -> Self {
        Self {
            sha1: value.into(),
            ..Self::default()
        }
    }

    /// 설정된 체크섬을 SHA1, SHA256, MD5 순서로 반환합니다.
    pub fn iter(&self) -> impl Iterator<Item = (ChecksumAlgorithm, &str)> {
        [
            (ChecksumAlgorithm::Sha1, self.sha1.as_str()),
            (ChecksumAlgorithm::Sha256, self.sha256.as_str()),
            (ChecksumAlgorithm::Md5, self.md5.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
    }

    /// 설정된 체크섬이 없으면 true
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}
