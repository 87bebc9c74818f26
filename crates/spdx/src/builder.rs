//! CreationInfo 빌더
//!
//! 패키지 이름, 검증 코드, 네임스페이스 접두사, 생성자 정보로 문서의 필수
//! 식별 섹션을 만듭니다. 생성 시각은 [`Clock`]에서 가져오므로 테스트에서는
//! [`FixedClock`]으로 결정론적인 출력을 얻을 수 있습니다.
//!
//! # 사용 예시
//!
//! ```
//! use kspdx_spdx::builder::{FixedClock, build_creation_info};
//! use kspdx_spdx::model::CreatorType;
//!
//! let clock = FixedClock::parse("2019-01-01T00:00:00Z").unwrap();
//! let ci = build_creation_info(
//!     "linux-4.19",
//!     "NONE",
//!     "https://example.org/ns-",
//!     CreatorType::Person,
//!     "Jane Doe",
//!     &clock,
//! )
//! .unwrap();
//!
//! assert_eq!(ci.document_namespace, "https://example.org/ns-linux-4.19-NONE");
//! assert_eq!(ci.created, "2019-01-01T00:00:00Z");
//! ```

use chrono::{DateTime, Utc};

use crate::error::SpdxError;
use crate::model::{CreationInfo, CreatorType};

/// 생성되는 문서의 SPDX 버전
pub const SPDX_VERSION: &str = "SPDX-2.1";
/// 문서 데이터 라이선스
pub const DATA_LICENSE: &str = "CC0-1.0";
/// 문서 자체의 SPDX 식별자
pub const DOCUMENT_SPDX_ID: &str = "SPDXRef-DOCUMENT";
/// 항상 Tool 생성자로 추가되는 빌더 식별자
pub const BUILDER_TOOL: &str = concat!("kspdx-spdx/builder-", env!("CARGO_PKG_VERSION"));

/// `Created` 필드 형식 (초 단위, UTC)
const CREATED_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// 현재 시각 공급자
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// 시스템 벽시계
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// 항상 같은 시각을 반환하는 시계 (테스트용)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// RFC 3339 문자열로 고정 시계를 생성합니다.
    pub fn parse(rfc3339: &str) -> Result<Self, chrono::ParseError> {
        let at = DateTime::parse_from_rfc3339(rfc3339)?;
        Ok(Self(at.with_timezone(&Utc)))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// 시각을 `Created` 필드 형식으로 변환합니다. 초 미만은 버립니다.
pub fn format_created(at: DateTime<Utc>) -> String {
    at.format(CREATED_FORMAT).to_string()
}

/// CreationInfo 섹션을 생성합니다.
///
/// # Arguments
///
/// - `package_name`: 패키지(디렉토리) 이름. DocumentName으로도 쓰입니다.
/// - `code`: 패키지 검증 코드
/// - `namespace_prefix`: DocumentNamespace 접두사. 이미 네임스페이스로 안전한
///   문자열이어야 하며 여기서 이스케이프하지 않습니다.
/// - `creator_type`: `creator`가 들어갈 생성자 목록
/// - `creator`: 생성자 식별 문자열
/// - `clock`: 생성 시각 공급자
///
/// [`BUILDER_TOOL`]은 항상 Tool 생성자 목록의 첫 항목으로 들어가므로
/// 생성자 목록이 비는 일은 없습니다.
///
/// # Errors
///
/// 현재는 실패하지 않습니다. 접두사 검증 등을 위해 `Result`를 반환합니다.
pub fn build_creation_info<C: Clock + ?Sized>(
    package_name: &str,
    code: &str,
    namespace_prefix: &str,
    creator_type: CreatorType,
    creator: &str,
    clock: &C,
) -> Result<CreationInfo, SpdxError> {
    let mut ci = CreationInfo {
        spdx_version: SPDX_VERSION.to_owned(),
        data_license: DATA_LICENSE.to_owned(),
        spdx_identifier: DOCUMENT_SPDX_ID.to_owned(),
        document_name: package_name.to_owned(),
        document_namespace: format!("{namespace_prefix}{package_name}-{code}"),
        creator_tools: vec![BUILDER_TOOL.to_owned()],
        created: format_created(clock.now()),
        ..CreationInfo::default()
    };

    match creator_type {
        CreatorType::Person => ci.creator_persons.push(creator.to_owned()),
        CreatorType::Organization => ci.creator_organizations.push(creator.to_owned()),
        CreatorType::Tool => ci.creator_tools.push(creator.to_owned()),
    }

    Ok(ci)
}

/// 커널 버전에 대응하는 패키지 이름 (`linux-<version>`)
pub fn kernel_package_name(version: &str) -> String {
    format!("linux-{version}")
}
