//! SPDX 2.1 문서 모델과 tag-value 렌더러
//!
//! 라이선스 식별자 스캔 결과를 SPDX 2.1 tag-value 문서로 내보내기 위한 크레이트입니다.
//! 파싱, 검증, 다른 SPDX 버전이나 직렬화 형식은 다루지 않습니다.
//!
//! # Module Structure
//!
//! - [`model`]: 문서 모델 (`Document`, `CreationInfo`, `Package`, `File`, `Snippet` 등)
//! - [`builder`]: CreationInfo 생성 (`build_creation_info`, `Clock`)
//! - [`tvsaver`]: tag-value 렌더러 (`render_document`, 섹션별 렌더러, `textify`)
//! - [`error`]: 도메인 에러 (`SpdxError`)
//!
//! # Architecture
//!
//! ```text
//! package name + code + creator --> build_creation_info --> CreationInfo
//!                                                               |
//!                             scan results --> Document <-------+
//!                                                 |
//!                                           render_document --> io::Write
//! ```
//!
//! # 사용 예시
//!
//! ```
//! use kspdx_spdx::builder::{FixedClock, build_creation_info, kernel_package_name};
//! use kspdx_spdx::model::{CreatorType, Document, File, Package};
//! use kspdx_spdx::tvsaver::render_to_string;
//!
//! let clock = FixedClock::parse("2019-01-01T00:00:00Z").unwrap();
//! let ci = build_creation_info(
//!     &kernel_package_name("4.19"),
//!     "NONE",
//!     "https://example.org/ns-",
//!     CreatorType::Tool,
//!     "idsearcher",
//!     &clock,
//! )
//! .unwrap();
//!
//! let mut doc = Document::new(ci);
//! doc.packages.push(Package::unpackaged(vec![File::new("./Makefile", "SPDXRef-File1")]));
//!
//! let out = render_to_string(&doc).unwrap();
//! assert!(out.starts_with("SPDXVersion: SPDX-2.1\n"));
//! assert!(out.contains("##### Unpackaged files\n\nFileName: ./Makefile\n"));
//! ```

pub mod builder;
pub mod error;
pub mod model;
pub mod tvsaver;

// --- Public API Re-exports ---

// Builder
pub use builder::{Clock, FixedClock, SystemClock, build_creation_info, kernel_package_name};

// Error
pub use error::SpdxError;

// Model
pub use model::Document;

// Renderer
pub use tvsaver::{render_document, render_to_string};
