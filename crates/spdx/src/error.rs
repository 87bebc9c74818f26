//! SPDX 크레이트 에러 타입
//!
//! [`SpdxError`]는 문서 렌더링과 CreationInfo 생성 중 발생할 수 있는 에러를 나타냅니다.
//! `From<SpdxError> for KspdxError` 구현을 통해 `?` 연산자로
//! 상위 에러 타입으로 자연스럽게 전파됩니다.
//!
//! # 에러 카테고리
//!
//! - **구조적 전제 조건 위반**: `MissingCreationInfo`
//! - **출력 싱크 실패**: `Io`
//!
//! 호출자가 보장해야 하는 불변식(스니펫 구간 범위 등)은 검사하지 않습니다.

use kspdx_core::error::KspdxError;

/// SPDX 도메인 에러
#[derive(Debug, thiserror::Error)]
pub enum SpdxError {
    /// 문서에 CreationInfo 섹션이 없음
    #[error("document had no creation info section")]
    MissingCreationInfo,

    /// 출력 싱크 쓰기 실패
    ///
    /// 실패 지점까지 이미 쓰인 출력은 되돌리지 않습니다.
    #[error("write to output failed: {0}")]
    Io(#[from] std::io::Error),
}

impl From<SpdxError> for KspdxError {
    fn from(err: SpdxError) -> Self {
        match err {
            SpdxError::MissingCreationInfo => KspdxError::Render(err.to_string()),
            SpdxError::Io(source) => KspdxError::Io(source),
        }
    }
}
