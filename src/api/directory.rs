use std::path::PathBuf;

use async_trait::async_trait;

use super::ReportSource;
use crate::errors::{IntelError, IntelResult};
use crate::models::{ReportDetail, ReportIndex};

const LATEST_FILE: &str = "latest.json";
const DATED_FILE_LEN: usize = "YYYY-MM-DD.json".len();

/// Reads reports straight from the directory the generator writes into.
///
/// Only `YYYY-MM-DD.json`-length files are listed, newest name first, and the
/// `latest.json` alias is never part of the index.
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn is_listed(name: &str) -> bool {
        !name.eq_ignore_ascii_case(LATEST_FILE)
            && name.ends_with(".json")
            && name.len() == DATED_FILE_LEN
    }

    /// Identifiers naming anything but a plain file in `root` are treated as missing.
    fn report_path(&self, identifier: &str) -> Option<PathBuf> {
        let escapes = identifier.is_empty()
            || identifier.contains(['/', '\\'])
            || identifier == "."
            || identifier == "..";
        if escapes {
            None
        } else {
            Some(self.root.join(format!("{}.json", identifier)))
        }
    }

    async fn read_report(&self, identifier: &str, path: PathBuf) -> IntelResult<ReportDetail> {
        log::debug!("Reading report {:?}", path);
        let raw = match tokio::fs::read(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(IntelError::NotFound {
                    identifier: identifier.to_string(),
                })
            }
            Err(e) => return Err(IntelError::io(e, path)),
        };
        Ok(serde_json::from_slice(&raw)?)
    }
}

#[async_trait]
impl ReportSource for DirectorySource {
    async fn list_reports(&self) -> IntelResult<ReportIndex> {
        let mut entries = tokio::fs::read_dir(&self.root)
            .await
            .map_err(|e| IntelError::io(e, self.root.clone()))?;

        let mut names = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| IntelError::io(e, self.root.clone()))?
        {
            let name = entry.file_name().to_string_lossy().into_owned();
            if Self::is_listed(&name) {
                names.push(name);
            }
        }

        names.sort_unstable_by(|a, b| b.cmp(a));
        let reports = names
            .into_iter()
            .map(|name| name.trim_end_matches(".json").to_string())
            .collect();

        Ok(ReportIndex::new(reports))
    }

    async fn fetch_report(&self, identifier: &str) -> IntelResult<ReportDetail> {
        match self.report_path(identifier) {
            Some(path) => self.read_report(identifier, path).await,
            None => Err(IntelError::NotFound {
                identifier: identifier.to_string(),
            }),
        }
    }

    async fn fetch_latest(&self) -> IntelResult<ReportDetail> {
        self.read_report("latest", self.root.join(LATEST_FILE)).await
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn reports_dir(files: &[(&str, &str)]) -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (name, body) in files {
            std::fs::write(dir.path().join(name), body).unwrap();
        }
        dir
    }

    #[tokio::test]
    async fn test_listing_rules() {
        let dir = reports_dir(&[
            ("2024-05-30.json", "{}"),
            ("2024-06-01.json", "{}"),
            ("LATEST.json", "{}"),
            ("latest.json", "{}"),
            ("2024-06-01-draft.json", "{}"),
            ("2024-06-02.txt", "{}"),
        ]);
        let source = DirectorySource::new(dir.path());

        let index = source.list_reports().await.unwrap();
        assert_eq!(index.reports, vec!["2024-06-01", "2024-05-30"]);
    }

    #[tokio::test]
    async fn test_fetch_report_and_latest() {
        let dir = reports_dir(&[
            ("2024-06-01.json", r#"{"top_10_attacks":[{"rank":1,"title":"SQLi Wave"}]}"#),
            ("latest.json", r#"{"lessons":[{"title":"Patch fast"}]}"#),
        ]);
        let source = DirectorySource::new(dir.path());

        let detail = source.fetch_report("2024-06-01").await.unwrap();
        assert_eq!(detail.attacks[0].title.as_deref(), Some("SQLi Wave"));

        let latest = source.fetch_latest().await.unwrap();
        assert_eq!(latest.lessons.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_and_escaping_identifiers_are_not_found() {
        let dir = reports_dir(&[]);
        let source = DirectorySource::new(dir.path());

        for id in ["2024-01-01", "../secrets", "..", ""] {
            let err = source.fetch_report(id).await.unwrap_err();
            assert!(matches!(err, IntelError::NotFound { .. }), "{} -> {:?}", id, err);
        }
    }

    #[tokio::test]
    async fn test_missing_directory_is_io_error() {
        let source = DirectorySource::new("/definitely/not/a/reports/dir");
        assert!(matches!(source.list_reports().await, Err(IntelError::Io { .. })));
    }

    #[tokio::test]
    async fn test_corrupt_report_is_decode_error() {
        let dir = reports_dir(&[("2024-06-01.json", "{not json")]);
        let source = DirectorySource::new(dir.path());
        assert!(matches!(
            source.fetch_report("2024-06-01").await,
            Err(IntelError::Decode(_))
        ));
    }
}
