//! Fallback policies for report fields.
//!
//! Every placeholder the dashboard can show lives here so the render contract
//! can be tested in one place. Text fields treat an empty string the same as a
//! missing one.

use std::time::Duration;

pub const RANK_PLACEHOLDER: &str = "-";
pub const UNKNOWN_SOURCE: &str = "Unknown";
pub const UNTITLED_ATTACK: &str = "Untitled Attack";
pub const NO_SUMMARY: &str = "No summary available.";
pub const UNTITLED_LESSON: &str = "Untitled Lesson";
pub const NO_IMPACT: &str = "No impact analysis provided.";
pub const NO_ATTACKS: &str = "No attacks recorded for this date.";
pub const NO_REPORTS: &str = "No reports generated yet.";
pub const INDEX_UNAVAILABLE: &str = "Error connecting to API.";
pub const NO_SELECTION: &str = "Select a report date to view its briefing.";
pub const TITLE_PREFIX: &str = "Intelligence";

/// Highest rank still shown as critical.
pub const CRITICAL_RANK_CEILING: i64 = 3;

const ATTACK_STAGGER_MS: u64 = 50;
const LESSON_STAGGER_BASE_MS: u64 = 300;
const LESSON_STAGGER_MS: u64 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Critical,
    High,
}

impl Severity {
    /// A missing rank is never critical.
    pub fn for_rank(rank: Option<i64>) -> Self {
        match rank {
            Some(r) if r <= CRITICAL_RANK_CEILING => Severity::Critical,
            _ => Severity::High,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.css_class())
    }
}

pub fn rank_label(rank: Option<i64>) -> String {
    rank.map(|r| r.to_string())
        .unwrap_or_else(|| RANK_PLACEHOLDER.to_string())
}

pub fn text_or<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => fallback,
    }
}

pub fn report_error(identifier: &str) -> String {
    format!("Error loading report for {}", identifier)
}

pub fn report_title(display_date: &str) -> String {
    format!("{}: {}", TITLE_PREFIX, display_date)
}

pub fn attack_delay(index: usize) -> Duration {
    Duration::from_millis(index as u64 * ATTACK_STAGGER_MS)
}

pub fn lesson_delay(index: usize) -> Duration {
    Duration::from_millis(LESSON_STAGGER_BASE_MS + index as u64 * LESSON_STAGGER_MS)
}
