//! Report sources.
//!
//! The dashboard consumes two read-only endpoints, plus the `latest` alias:
//! - `GET /api/reports` returns the index of identifiers
//! - `GET /api/reports/{identifier}` returns one report
//! - `GET /api/latest` returns the most recent report
//!
//! `HttpReportSource` talks to the API; `DirectorySource` reads the same data
//! from a local reports directory laid out the way the backend stores it.

mod directory;
mod http;
#[cfg(test)]
pub(crate) mod stub;

pub use directory::DirectorySource;
pub use http::HttpReportSource;

use async_trait::async_trait;

use crate::errors::IntelResult;
use crate::models::{ReportDetail, ReportIndex};

#[async_trait]
pub trait ReportSource: Send + Sync {
    async fn list_reports(&self) -> IntelResult<ReportIndex>;
    async fn fetch_report(&self, identifier: &str) -> IntelResult<ReportDetail>;
    async fn fetch_latest(&self) -> IntelResult<ReportDetail>;

    /// Human-readable origin used in log lines.
    fn describe(&self) -> String;
}
