//! CLI-specific error types and exit code mapping

use kspdx_core::error::KspdxError;
use kspdx_spdx::SpdxError;

/// CLI-specific error type.
///
/// Each variant carries enough context for a user-friendly message.
/// The `exit_code()` method maps errors to process exit codes.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration loading or validation failure.
    #[error("configuration error: {0}")]
    Config(String),

    /// A subcommand-specific operation failed.
    #[error("{0}")]
    Command(String),

    /// The input document could not be read as a document model or cannot be rendered.
    #[error("invalid document: {0}")]
    InvalidDocument(String),

    /// JSON (de)serialisation failed during output rendering.
    #[error("json output error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    /// IO error (file read, stdout write, etc.).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map the error to a process exit code.
    ///
    /// | Code | Meaning                   |
    /// |------|---------------------------|
    /// | 0    | Success                   |
    /// | 1    | General / command error   |
    /// | 2    | Configuration error       |
    /// | 3    | Invalid input document    |
    /// | 10   | IO error                  |
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 2,
            Self::InvalidDocument(_) => 3,
            Self::Io(_) => 10,
            Self::JsonSerialize(_) | Self::Command(_) => 1,
        }
    }
}

impl From<KspdxError> for CliError {
    fn from(e: KspdxError) -> Self {
        match e {
            KspdxError::Config(inner) => Self::Config(inner.to_string()),
            KspdxError::Io(io) => Self::Io(io),
            KspdxError::Render(msg) => Self::InvalidDocument(msg),
        }
    }
}

impl From<SpdxError> for CliError {
    fn from(e: SpdxError) -> Self {
        match e {
            SpdxError::MissingCreationInfo => Self::InvalidDocument(e.to_string()),
            SpdxError::Io(io) => Self::Io(io),
        }
    }
}
