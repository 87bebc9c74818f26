//! 설정 관리: kspdx.toml 파싱 및 런타임 설정
//!
//! [`KspdxConfig`]는 로깅 설정과 SPDX 문서 생성 기본값을 담는 최상위 구조체입니다.
//!
//! # 설정 로딩 우선순위
//! 1. CLI 인자 (최고 우선)
//! 2. 환경변수 (`KSPDX_DOCUMENT_CREATOR=alice` 형식)
//! 3. 설정 파일 (`kspdx.toml`)
//! 4. 기본값 (`Default` 구현)
//!
//! # 사용 예시
//! ```no_run
//! # async fn example() -> Result<(), kspdx_core::error::KspdxError> {
//! use kspdx_core::config::KspdxConfig;
//!
//! // 파일에서 로드 + 환경변수 오버라이드
//! let config = KspdxConfig::load("kspdx.toml").await?;
//!
//! // TOML 문자열에서 직접 파싱
//! let config = KspdxConfig::parse("[general]\nlog_level = \"debug\"")?;
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ConfigError, KspdxError};

/// 기본 DocumentNamespace 접두사
///
/// 패키지 이름과 검증 코드가 뒤에 붙어 네임스페이스가 완성됩니다.
pub const DEFAULT_NAMESPACE_PREFIX: &str =
    "https://github.com/swinslow/kernel-spdx-ids/idsearcher-results-for-";

/// kspdx 통합 설정
///
/// `kspdx.toml` 파일의 최상위 구조를 나타냅니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KspdxConfig {
    /// 일반 설정 (로깅)
    #[serde(default)]
    pub general: GeneralConfig,
    /// 문서 생성 설정
    #[serde(default)]
    pub document: DocumentConfig,
}

impl KspdxConfig {
    /// TOML 파일에서 설정을 로드하고 환경변수 오버라이드를 적용합니다.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, KspdxError> {
        let mut config = Self::from_file(path).await?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// 설정 파일이 없으면 기본값을 사용하여 로드합니다.
    ///
    /// 파일이 존재하지만 파싱에 실패하면 에러를 반환합니다.
    pub async fn load_or_default(path: impl AsRef<Path>) -> Result<Self, KspdxError> {
        let path = path.as_ref();
        match Self::load(path).await {
            Err(KspdxError::Config(ConfigError::FileNotFound { .. })) => {
                debug!(path = %path.display(), "config file not found, using defaults");
                let mut config = Self::default();
                config.apply_env_overrides();
                config.validate()?;
                Ok(config)
            }
            other => other,
        }
    }

    /// TOML 파일에서 설정을 로드합니다 (환경변수 오버라이드 없음).
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, KspdxError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                KspdxError::Config(ConfigError::FileNotFound {
                    path: path.display().to_string(),
                })
            } else {
                KspdxError::Io(e)
            }
        })?;
        Self::parse(&content)
    }

    /// TOML 문자열에서 설정을 파싱합니다.
    pub fn parse(toml_str: &str) -> Result<Self, KspdxError> {
        toml::from_str(toml_str).map_err(|e| {
            KspdxError::Config(ConfigError::ParseFailed {
                reason: e.to_string(),
            })
        })
    }

    /// 환경변수로 설정값을 오버라이드합니다.
    ///
    /// 환경변수 네이밍 규칙: `KSPDX_{SECTION}_{FIELD}`
    /// 예: `KSPDX_DOCUMENT_NAMESPACE_PREFIX=https://example.org/ns-`
    pub fn apply_env_overrides(&mut self) {
        // General
        override_string(&mut self.general.log_level, "KSPDX_GENERAL_LOG_LEVEL");
        override_string(&mut self.general.log_format, "KSPDX_GENERAL_LOG_FORMAT");

        // Document
        override_string(
            &mut self.document.namespace_prefix,
            "KSPDX_DOCUMENT_NAMESPACE_PREFIX",
        );
        override_string(&mut self.document.creator_type, "KSPDX_DOCUMENT_CREATOR_TYPE");
        override_string(&mut self.document.creator, "KSPDX_DOCUMENT_CREATOR");
        override_csv(
            &mut self.document.extra_creator_tools,
            "KSPDX_DOCUMENT_EXTRA_CREATOR_TOOLS",
        );
        override_string(
            &mut self.document.license_list_version,
            "KSPDX_DOCUMENT_LICENSE_LIST_VERSION",
        );
    }

    /// 설정값의 유효성을 검증합니다.
    ///
    /// `document.creator_type`은 검증하지 않습니다. 알 수 없는 값은
    /// 빌더에서 Person으로 처리됩니다.
    pub fn validate(&self) -> Result<(), KspdxError> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.general.log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "general.log_level".to_owned(),
                reason: format!("must be one of: {}", valid_levels.join(", ")),
            }
            .into());
        }

        let valid_formats = ["json", "pretty"];
        if !valid_formats.contains(&self.general.log_format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "general.log_format".to_owned(),
                reason: format!("must be one of: {}", valid_formats.join(", ")),
            }
            .into());
        }

        if self.document.namespace_prefix.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "document.namespace_prefix".to_owned(),
                reason: "namespace prefix must not be empty".to_owned(),
            }
            .into());
        }

        Ok(())
    }
}

/// 일반 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// 로그 레벨 (trace, debug, info, warn, error)
    pub log_level: String,
    /// 로그 형식 (json, pretty)
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            log_format: "pretty".to_owned(),
        }
    }
}

/// 문서 생성 설정
///
/// CreationInfo 섹션을 만들 때 CLI 인자가 없으면 이 값을 사용합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// DocumentNamespace 접두사 (이미 네임스페이스로 안전한 문자열이어야 함)
    pub namespace_prefix: String,
    /// 생성자 유형 (Person, Organization, Tool)
    pub creator_type: String,
    /// 생성자 식별 문자열
    pub creator: String,
    /// 빌드 후 Tool 생성자 목록에 덧붙일 도구 식별자
    pub extra_creator_tools: Vec<String>,
    /// LicenseListVersion (비어 있으면 출력하지 않음)
    pub license_list_version: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            namespace_prefix: DEFAULT_NAMESPACE_PREFIX.to_owned(),
            creator_type: "Tool".to_owned(),
            creator: "kspdx".to_owned(),
            extra_creator_tools: Vec::new(),
            license_list_version: String::new(),
        }
    }
}

// --- 환경변수 오버라이드 헬퍼 ---

fn override_string(target: &mut String, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        *target = val;
    }
}

fn override_csv(target: &mut Vec<String>, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        let items: Vec<String> = val
            .split(',')
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect();
        if items.is_empty() && !val.trim().is_empty() {
            warn!(env_key, value = val.as_str(), "no usable items in env var, ignoring");
            return;
        }
        *target = items;
    }
}
