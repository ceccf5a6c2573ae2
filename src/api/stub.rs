//! In-memory source for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::ReportSource;
use crate::errors::{IntelError, IntelResult};
use crate::models::{ReportDetail, ReportIndex};

#[derive(Default)]
pub(crate) struct StubSource {
    pub index: Option<ReportIndex>,
    pub reports: HashMap<String, ReportDetail>,
    pub fetched: Mutex<Vec<String>>,
}

impl StubSource {
    pub fn with_index(ids: &[&str]) -> Self {
        Self {
            index: Some(ReportIndex::new(ids.iter().map(|s| s.to_string()).collect())),
            ..Self::default()
        }
    }

    pub fn report(mut self, id: &str, json: &str) -> Self {
        self.reports.insert(id.to_string(), serde_json::from_str(json).unwrap());
        self
    }

    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReportSource for StubSource {
    async fn list_reports(&self) -> IntelResult<ReportIndex> {
        self.index
            .clone()
            .ok_or_else(|| IntelError::external("stub", "connection refused"))
    }

    async fn fetch_report(&self, identifier: &str) -> IntelResult<ReportDetail> {
        self.fetched.lock().unwrap().push(identifier.to_string());
        self.reports.get(identifier).cloned().ok_or_else(|| IntelError::Status {
            url: format!("stub:///api/reports/{}", identifier),
            status: 404,
        })
    }

    async fn fetch_latest(&self) -> IntelResult<ReportDetail> {
        self.fetch_report("latest").await
    }

    fn describe(&self) -> String {
        "stub".to_string()
    }
}
