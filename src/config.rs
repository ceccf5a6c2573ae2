//! Runtime configuration assembled from command-line flags and environment.

use clap::ValueEnum;
use std::path::PathBuf;
use std::time::Duration;

use crate::api::{DirectorySource, HttpReportSource, ReportSource};
use crate::cli::Args;
use crate::errors::IntelResult;

pub const DEFAULT_API: &str = "http://127.0.0.1:8001";

/// Resolution of overlapping selections.
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ResponseOrdering {
    /// Responses to superseded selections are discarded
    #[default]
    #[value(name = "latest-selection")]
    LatestSelectionWins,
    /// Whichever response completes last is shown
    #[value(name = "last-response")]
    LastResponseWins,
}

impl std::fmt::Display for ResponseOrdering {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResponseOrdering::LatestSelectionWins => write!(f, "latest-selection"),
            ResponseOrdering::LastResponseWins => write!(f, "last-response"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceKind {
    Api(String),
    Directory(PathBuf),
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub source: SourceKind,
    pub timeout: Option<Duration>,
    pub ordering: ResponseOrdering,
}

impl ClientConfig {
    /// A reports directory, when given, wins over the API URL.
    pub fn from_args(args: &Args) -> Self {
        let source = match &args.reports_dir {
            Some(dir) => SourceKind::Directory(dir.clone()),
            None => SourceKind::Api(args.api.clone()),
        };

        Self {
            source,
            timeout: args.timeout.map(Duration::from_secs),
            ordering: args.ordering,
        }
    }

    pub fn build_source(&self) -> IntelResult<Box<dyn ReportSource>> {
        let source: Box<dyn ReportSource> = match &self.source {
            SourceKind::Api(base) => Box::new(HttpReportSource::new(base, self.timeout)?),
            SourceKind::Directory(dir) => Box::new(DirectorySource::new(dir.clone())),
        };
        log::info!("Using report source {}", source.describe());
        Ok(source)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::Api(DEFAULT_API.to_string()),
            timeout: None,
            ordering: ResponseOrdering::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_reports_dir_takes_precedence() {
        let args = Args::try_parse_from([
            "intelboard",
            "--reports-dir",
            "/srv/reports",
            "--api",
            "http://elsewhere",
            "--timeout",
            "5",
            "list",
        ])
        .unwrap();
        let config = ClientConfig::from_args(&args);
        assert_eq!(config.source, SourceKind::Directory(PathBuf::from("/srv/reports")));
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_build_source_rejects_bad_url() {
        let config = ClientConfig {
            source: SourceKind::Api("::nope::".to_string()),
            ..ClientConfig::default()
        };
        assert!(config.build_source().is_err());
        assert!(ClientConfig::default().build_source().is_ok());
    }

    #[test]
    fn test_ordering_display_matches_flag_values() {
        for ordering in [ResponseOrdering::LatestSelectionWins, ResponseOrdering::LastResponseWins] {
            let parsed = ResponseOrdering::from_str(&ordering.to_string(), false).unwrap();
            assert_eq!(parsed, ordering);
        }
    }
}
