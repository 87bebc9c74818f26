//! kspdx 공통 크레이트
//!
//! 워크스페이스 전체에서 공유하는 에러 타입과 `kspdx.toml` 설정을 제공합니다.
//!
//! - [`error`]: 최상위 에러 (`KspdxError`, `ConfigError`)
//! - [`config`]: 설정 로딩 (`KspdxConfig`, 환경변수 오버라이드)

pub mod config;
pub mod error;

// --- 주요 타입 re-export ---

// 에러
pub use error::{ConfigError, KspdxError};

// 설정
pub use config::{DocumentConfig, GeneralConfig, KspdxConfig};
