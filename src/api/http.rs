use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use super::ReportSource;
use crate::errors::{IntelError, IntelResult};
use crate::models::{ReportDetail, ReportIndex};

/// Report source backed by the dashboard's JSON API.
pub struct HttpReportSource {
    client: Client,
    base: Url,
}

impl HttpReportSource {
    /// `timeout` of `None` leaves requests bounded only by the transport.
    pub fn new(base: &str, timeout: Option<Duration>) -> IntelResult<Self> {
        let base = Url::parse(base)?;
        if base.cannot_be_a_base() {
            return Err(IntelError::external("API base URL", format!("{} cannot carry a path", base)));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base,
        })
    }

    /// Appends `segments` to the base path, percent-encoding each one.
    pub fn endpoint(&self, segments: &[&str]) -> IntelResult<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| IntelError::external("API base URL", "cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> IntelResult<T> {
        log::debug!("GET {}", url);
        let resp = self.client.get(url.clone()).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(IntelError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = resp.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl ReportSource for HttpReportSource {
    async fn list_reports(&self) -> IntelResult<ReportIndex> {
        let url = self.endpoint(&["api", "reports"])?;
        self.get_json(url).await
    }

    async fn fetch_report(&self, identifier: &str) -> IntelResult<ReportDetail> {
        let url = self.endpoint(&["api", "reports", identifier])?;
        self.get_json(url).await
    }

    async fn fetch_latest(&self) -> IntelResult<ReportDetail> {
        let url = self.endpoint(&["api", "latest"])?;
        self.get_json(url).await
    }

    fn describe(&self) -> String {
        self.base.to_string()
    }
}
