//! Report renderer.
//!
//! A render is split in two halves around the fetch so that overlapping
//! selections can be expressed: `begin_selection` marks the active entry and
//! shows the content view, `complete_selection` applies whatever the fetch
//! produced. Under `ResponseOrdering::LatestSelectionWins` a completion whose
//! ticket has been superseded leaves the view untouched.

use crate::api::ReportSource;
use crate::config::ResponseOrdering;
use crate::errors::{IntelError, IntelResult};
use crate::models::ReportDetail;
use crate::view::{Dashboard, EntryId};

const LATEST_IDENTIFIER: &str = "latest";

/// An in-flight selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    ticket: u64,
    identifier: String,
}

impl Selection {
    pub fn ticket(&self) -> u64 {
        self.ticket
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Rendered,
    /// A newer selection was made before this response arrived
    Discarded,
}

/// Marks `control` as the sole active entry (clearing all when `None`) and
/// switches to the content view before anything is fetched.
pub fn begin_selection(dash: &mut Dashboard, identifier: &str, control: Option<EntryId>) -> Selection {
    dash.list_mut().set_active(control);
    dash.show_content();
    Selection {
        ticket: dash.issue_ticket(),
        identifier: identifier.to_string(),
    }
}

/// Applies a fetch result. Failures are rendered into the placeholder and
/// returned as `ReportLoad` for diagnostics.
pub fn complete_selection(
    dash: &mut Dashboard,
    selection: Selection,
    fetched: IntelResult<ReportDetail>,
) -> IntelResult<Completion> {
    if dash.ordering() == ResponseOrdering::LatestSelectionWins && !dash.is_latest_ticket(selection.ticket) {
        log::debug!(
            "Discarding response for {} (ticket {} superseded)",
            selection.identifier,
            selection.ticket
        );
        return Ok(Completion::Discarded);
    }

    match fetched {
        Ok(detail) => {
            dash.set_title(&selection.identifier);
            dash.render_attacks(&detail.attacks);
            dash.render_lessons(&detail.lessons);
            log::debug!(
                "Rendered {} with {} attacks and {} lessons",
                selection.identifier,
                detail.attacks.len(),
                detail.lessons.len()
            );
            Ok(Completion::Rendered)
        }
        Err(e) => {
            log::error!("Failed to load report {}: {}", selection.identifier, e);
            dash.show_load_error(&selection.identifier);
            Err(IntelError::report_load(selection.identifier, e))
        }
    }
}

pub async fn render_report<S: ReportSource + ?Sized>(
    source: &S,
    dash: &mut Dashboard,
    identifier: &str,
    control: Option<EntryId>,
) -> IntelResult<Completion> {
    let selection = begin_selection(dash, identifier, control);
    let fetched = source.fetch_report(identifier).await;
    complete_selection(dash, selection, fetched)
}

/// Click on a list entry.
pub async fn select_entry<S: ReportSource + ?Sized>(
    source: &S,
    dash: &mut Dashboard,
    entry: EntryId,
) -> IntelResult<Completion> {
    let identifier = match dash.list().get(entry) {
        Some(e) => e.identifier.clone(),
        None => return Err(IntelError::external("selection", "list entry no longer exists")),
    };
    render_report(source, dash, &identifier, Some(entry)).await
}

/// Renders the report published under the `latest` alias. No list entry is
/// marked active.
pub async fn render_latest<S: ReportSource + ?Sized>(source: &S, dash: &mut Dashboard) -> IntelResult<Completion> {
    let selection = begin_selection(dash, LATEST_IDENTIFIER, None);
    let fetched = source.fetch_latest().await;
    complete_selection(dash, selection, fetched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::stub::StubSource;
    use crate::defaults::Severity;
    use crate::view::AttacksGrid;

    const SQLI: &str = r#"{"top_10_attacks":[{"rank":1,"title":"SQLi Wave","source":"X"}],"lessons":[]}"#;
    const PHISH: &str = r#"{"top_10_attacks":[{"rank":5,"title":"Phish Kit"}],"lessons":[{"title":"Train staff"}]}"#;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_single_attack_report() {
        let source = StubSource::default().report("2024-06-01", SQLI);
        let mut dash = Dashboard::default();

        let done = render_report(&source, &mut dash, "2024-06-01", None).await.unwrap();
        assert_eq!(done, Completion::Rendered);

        let content = dash.content();
        assert!(content.visible);
        assert!(!dash.placeholder().visible);
        assert_eq!(content.title, "Intelligence: Saturday, June 1, 2024");

        let cards = content.attacks.cards();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].title, "SQLi Wave");
        assert_eq!(cards[0].rank_badge, "1");
        assert_eq!(cards[0].severity, Severity::Critical);
        assert_eq!(cards[0].summary, "No summary available.");
        assert!(!content.lessons.visible);
    }

    #[tokio::test]
    async fn test_not_found_shows_error_naming_identifier() {
        let source = StubSource::default();
        let mut dash = Dashboard::default();

        let err = render_report(&source, &mut dash, "2024-01-01", None).await.unwrap_err();
        assert_eq!(err.failed_identifier(), Some("2024-01-01"));
        assert!(!dash.content().visible);
        assert!(dash.placeholder().visible);
        assert!(dash.placeholder().text().contains("2024-01-01"));
    }

    #[tokio::test]
    async fn test_rerender_replaces_previous_content() {
        let source = StubSource::default().report("a", PHISH).report("b", SQLI);
        let mut dash = Dashboard::default();

        render_report(&source, &mut dash, "a", None).await.unwrap();
        assert!(dash.content().lessons.visible);
        render_report(&source, &mut dash, "b", None).await.unwrap();
        render_report(&source, &mut dash, "b", None).await.unwrap();

        assert_eq!(dash.content().attacks.cards().len(), 1);
        assert_eq!(dash.content().attacks.cards()[0].title, "SQLi Wave");
        assert!(!dash.content().lessons.visible);
        assert!(dash.content().lessons.panels.is_empty());
        assert_eq!(source.fetched(), vec!["a", "b", "b"]);
    }

    #[tokio::test]
    async fn test_success_after_failure_clears_error() {
        let source = StubSource::default().report("b", SQLI);
        let mut dash = Dashboard::default();

        assert!(render_report(&source, &mut dash, "missing", None).await.is_err());
        assert!(dash.placeholder().is_error());
        render_report(&source, &mut dash, "b", None).await.unwrap();
        assert!(dash.content().visible);
        assert!(!dash.placeholder().visible);
        assert!(!dash.placeholder().is_error());
    }

    #[tokio::test]
    async fn test_select_entry_marks_it_active() {
        let source = StubSource::default().report("a", PHISH).report("b", SQLI);
        let mut dash = Dashboard::default();
        let handles = dash.list_mut().populate(&ids(&["a", "b"]));

        select_entry(&source, &mut dash, handles[1]).await.unwrap();
        assert_eq!(dash.list().active().map(|e| e.identifier.as_str()), Some("b"));

        render_report(&source, &mut dash, "a", None).await.unwrap();
        assert!(dash.list().active().is_none());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut dash = Dashboard::new(ResponseOrdering::LatestSelectionWins);
        let first = begin_selection(&mut dash, "a", None);
        let second = begin_selection(&mut dash, "b", None);

        let sqli: ReportDetail = serde_json::from_str(SQLI).unwrap();
        let phish: ReportDetail = serde_json::from_str(PHISH).unwrap();

        assert_eq!(complete_selection(&mut dash, second, Ok(sqli)).unwrap(), Completion::Rendered);
        assert_eq!(complete_selection(&mut dash, first, Ok(phish)).unwrap(), Completion::Discarded);
        assert_eq!(dash.content().attacks.cards()[0].title, "SQLi Wave");
        assert_eq!(dash.content().title, "Intelligence: b");
    }

    #[test]
    fn test_stale_failure_is_discarded() {
        let mut dash = Dashboard::default();
        let first = begin_selection(&mut dash, "a", None);
        let second = begin_selection(&mut dash, "b", None);

        let failed = Err(IntelError::NotFound { identifier: "a".to_string() });
        assert_eq!(complete_selection(&mut dash, first, failed).unwrap(), Completion::Discarded);
        assert!(dash.content().visible);

        let sqli: ReportDetail = serde_json::from_str(SQLI).unwrap();
        complete_selection(&mut dash, second, Ok(sqli)).unwrap();
        assert!(!dash.placeholder().is_error());
    }

    #[test]
    fn test_last_response_wins_when_configured() {
        let mut dash = Dashboard::new(ResponseOrdering::LastResponseWins);
        let first = begin_selection(&mut dash, "a", None);
        let second = begin_selection(&mut dash, "b", None);
        assert!(second.ticket() > first.ticket());

        let sqli: ReportDetail = serde_json::from_str(SQLI).unwrap();
        let phish: ReportDetail = serde_json::from_str(PHISH).unwrap();

        complete_selection(&mut dash, second, Ok(sqli)).unwrap();
        assert_eq!(complete_selection(&mut dash, first, Ok(phish)).unwrap(), Completion::Rendered);
        assert_eq!(dash.content().attacks.cards()[0].title, "Phish Kit");
        assert_eq!(dash.content().title, "Intelligence: a");
    }

    #[tokio::test]
    async fn test_render_latest() {
        let source = StubSource::default().report("latest", PHISH);
        let mut dash = Dashboard::default();

        render_latest(&source, &mut dash).await.unwrap();
        assert_eq!(dash.content().title, "Intelligence: latest");
        assert!(matches!(dash.content().attacks, AttacksGrid::Cards(_)));
        assert_eq!(dash.content().lessons.panels.len(), 1);
    }
}
