//! Error types for the intelligence dashboard.
//!
//! Source-level failures (transport, status, decoding, filesystem) are wrapped
//! by the two component-level kinds the dashboard reports to the user:
//! `IndexLoad` and `ReportLoad`.

use std::path::PathBuf;

/// The main error type for dashboard operations.
#[derive(Debug, thiserror::Error)]
pub enum IntelError {
    /// The report index could not be loaded
    #[error("report index unavailable: {source}")]
    IndexLoad {
        #[source]
        source: Box<IntelError>,
    },

    /// A single report could not be loaded
    #[error("report {identifier} unavailable: {source}")]
    ReportLoad {
        identifier: String,
        #[source]
        source: Box<IntelError>,
    },

    /// Network-level failure talking to the API
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-2xx status
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// Response body was not the expected JSON shape
    #[error("JSON error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Requested report does not exist in a local source
    #[error("report {identifier} not found")]
    NotFound { identifier: String },

    /// I/O error (report directory, snapshot output)
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    /// API base URL could not be parsed or extended
    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Generic error for external library errors
    #[error("{context}: {message}")]
    External { context: String, message: String },
}

/// Result type alias using IntelError
pub type IntelResult<T> = Result<T, IntelError>;

impl IntelError {
    /// Wrap a source failure as an index load failure
    pub fn index_load(source: IntelError) -> Self {
        Self::IndexLoad {
            source: Box::new(source),
        }
    }

    /// Wrap a source failure as a load failure for `identifier`
    pub fn report_load(identifier: impl Into<String>, source: IntelError) -> Self {
        Self::ReportLoad {
            identifier: identifier.into(),
            source: Box::new(source),
        }
    }

    /// Create an I/O error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<PathBuf>>) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an external error with context
    pub fn external(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::External {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Identifier of the report whose load failed, if this is a report failure.
    pub fn failed_identifier(&self) -> Option<&str> {
        match self {
            Self::ReportLoad { identifier, .. } => Some(identifier),
            _ => None,
        }
    }
}

/// Convert from raw I/O errors (without path context)
impl From<std::io::Error> for IntelError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { path: None, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = IntelError::Status {
            url: "http://localhost/api/reports/2024-01-01".to_string(),
            status: 404,
        };
        assert!(err.to_string().contains("HTTP 404"));
        assert!(err.to_string().contains("2024-01-01"));
    }

    #[test]
    fn test_report_load_names_identifier() {
        let err = IntelError::report_load(
            "2024-01-01",
            IntelError::NotFound {
                identifier: "2024-01-01".to_string(),
            },
        );
        assert_eq!(err.failed_identifier(), Some("2024-01-01"));
        assert!(err.to_string().starts_with("report 2024-01-01 unavailable"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_index_load_has_no_identifier() {
        let err = IntelError::index_load(IntelError::external("fixture", "boom"));
        assert_eq!(err.failed_identifier(), None);
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: IntelError = io_err.into();
        assert!(matches!(err, IntelError::Io { path: None, .. }));
    }
}
