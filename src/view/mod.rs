//! Render context for the dashboard.
//!
//! `Dashboard` owns every region the loader and renderer write to: the date
//! list, the "no report selected" placeholder and the main content view. All
//! regions are replaced wholesale on each render; nothing accumulates.

mod cards;
pub mod page;

pub use cards::{AttackCard, LessonPanel};

use cards::escape_html;

use crate::config::ResponseOrdering;
use crate::dates;
use crate::defaults;
use crate::models::{Attack, Lesson};

/// Handle to one entry of the date list. Only valid until the list is repopulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(usize);

#[derive(Debug, Clone, PartialEq)]
pub struct DateEntry {
    pub identifier: String,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListNotice {
    Empty,
    Unavailable,
}

impl ListNotice {
    pub fn message(&self) -> &'static str {
        match self {
            ListNotice::Empty => defaults::NO_REPORTS,
            ListNotice::Unavailable => defaults::INDEX_UNAVAILABLE,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DateList {
    entries: Vec<DateEntry>,
    notice: Option<ListNotice>,
}

impl DateList {
    /// Replaces the list with one entry per identifier, duplicates included.
    pub fn populate(&mut self, identifiers: &[String]) -> Vec<EntryId> {
        self.notice = None;
        self.entries = identifiers
            .iter()
            .map(|id| DateEntry {
                identifier: id.clone(),
                label: dates::list_label(id),
                active: false,
            })
            .collect();
        (0..self.entries.len()).map(EntryId).collect()
    }

    pub fn show_notice(&mut self, notice: ListNotice) {
        self.entries.clear();
        self.notice = Some(notice);
    }

    /// Marks `entry` as the sole active entry. `None` only clears.
    pub fn set_active(&mut self, entry: Option<EntryId>) {
        for e in &mut self.entries {
            e.active = false;
        }
        if let Some(EntryId(idx)) = entry {
            match self.entries.get_mut(idx) {
                Some(e) => e.active = true,
                None => log::debug!("Ignoring stale list handle {}", idx),
            }
        }
    }

    pub fn entries(&self) -> &[DateEntry] {
        &self.entries
    }

    pub fn notice(&self) -> Option<ListNotice> {
        self.notice
    }

    pub fn get(&self, entry: EntryId) -> Option<&DateEntry> {
        self.entries.get(entry.0)
    }

    pub fn active(&self) -> Option<&DateEntry> {
        self.entries.iter().find(|e| e.active)
    }

    /// First entry bound to `identifier`.
    pub fn find(&self, identifier: &str) -> Option<EntryId> {
        self.entries
            .iter()
            .position(|e| e.identifier == identifier)
            .map(EntryId)
    }

    pub fn to_html(&self) -> String {
        if let Some(notice) = self.notice {
            let class = match notice {
                ListNotice::Empty => "list-notice",
                ListNotice::Unavailable => "list-notice error",
            };
            return format!(r#"<p class="{}">{}</p>"#, class, escape_html(notice.message()));
        }

        self.entries
            .iter()
            .map(|e| {
                format!(
                    r#"<button class="date-btn{}" data-report="{}"><span>🗓️</span> {}</button>"#,
                    if e.active { " active" } else { "" },
                    escape_html(&e.identifier),
                    escape_html(&e.label)
                )
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceholderMessage {
    NoSelection,
    LoadError(String),
}

#[derive(Debug, Clone)]
pub struct Placeholder {
    pub visible: bool,
    pub message: PlaceholderMessage,
}

impl Placeholder {
    pub fn text(&self) -> String {
        match &self.message {
            PlaceholderMessage::NoSelection => defaults::NO_SELECTION.to_string(),
            PlaceholderMessage::LoadError(id) => defaults::report_error(id),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.message, PlaceholderMessage::LoadError(_))
    }
}

impl Default for Placeholder {
    fn default() -> Self {
        Self {
            visible: true,
            message: PlaceholderMessage::NoSelection,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttacksGrid {
    NoAttacks,
    Cards(Vec<AttackCard>),
}

impl AttacksGrid {
    pub fn cards(&self) -> &[AttackCard] {
        match self {
            AttacksGrid::NoAttacks => &[],
            AttacksGrid::Cards(cards) => cards,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LessonsSection {
    pub visible: bool,
    pub panels: Vec<LessonPanel>,
}

#[derive(Debug, Clone)]
pub struct ContentView {
    pub visible: bool,
    pub title: String,
    pub attacks: AttacksGrid,
    pub lessons: LessonsSection,
}

impl Default for ContentView {
    fn default() -> Self {
        Self {
            visible: false,
            title: String::new(),
            attacks: AttacksGrid::NoAttacks,
            lessons: LessonsSection::default(),
        }
    }
}

/// The single owning render context.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    list: DateList,
    placeholder: Placeholder,
    content: ContentView,
    ordering: ResponseOrdering,
    next_ticket: u64,
}

impl Dashboard {
    pub fn new(ordering: ResponseOrdering) -> Self {
        Self {
            ordering,
            ..Self::default()
        }
    }

    pub fn list(&self) -> &DateList {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut DateList {
        &mut self.list
    }

    pub fn placeholder(&self) -> &Placeholder {
        &self.placeholder
    }

    pub fn content(&self) -> &ContentView {
        &self.content
    }

    pub fn ordering(&self) -> ResponseOrdering {
        self.ordering
    }

    /// Hands out the next selection ticket; tickets only ever increase.
    pub(crate) fn issue_ticket(&mut self) -> u64 {
        self.next_ticket += 1;
        self.next_ticket
    }

    pub(crate) fn is_latest_ticket(&self, ticket: u64) -> bool {
        ticket == self.next_ticket
    }

    /// Selection in progress: main view shown before any data arrives.
    /// Hides the placeholder and drops any earlier load error with it.
    pub fn show_content(&mut self) {
        self.placeholder.visible = false;
        self.placeholder.message = PlaceholderMessage::NoSelection;
        self.content.visible = true;
    }

    pub fn show_load_error(&mut self, identifier: &str) {
        self.content.visible = false;
        self.placeholder.visible = true;
        self.placeholder.message = PlaceholderMessage::LoadError(identifier.to_string());
    }

    pub fn set_title(&mut self, identifier: &str) {
        self.content.title = defaults::report_title(&dates::title_label(identifier));
    }

    pub fn render_attacks(&mut self, attacks: &[Attack]) {
        self.content.attacks = if attacks.is_empty() {
            AttacksGrid::NoAttacks
        } else {
            AttacksGrid::Cards(
                attacks
                    .iter()
                    .enumerate()
                    .map(|(i, a)| AttackCard::from_attack(i, a))
                    .collect(),
            )
        };
    }

    pub fn render_lessons(&mut self, lessons: &[Lesson]) {
        self.content.lessons = LessonsSection {
            visible: !lessons.is_empty(),
            panels: lessons
                .iter()
                .enumerate()
                .map(|(i, l)| LessonPanel::from_lesson(i, l))
                .collect(),
        };
    }

    pub fn sidebar_html(&self) -> String {
        format!(r#"<nav id="date-list" class="date-list">{}</nav>"#, self.list.to_html())
    }

    pub fn main_html(&self) -> String {
        let hidden = |visible: bool| if visible { "" } else { " hidden" };

        let placeholder = format!(
            r#"<div id="empty-state" class="empty-state{}">{}<p>{}</p></div>"#,
            hidden(self.placeholder.visible),
            if self.placeholder.is_error() { r#"<div class="icon-large">❌</div>"# } else { "" },
            escape_html(&self.placeholder.text())
        );

        let grid = match &self.content.attacks {
            AttacksGrid::NoAttacks => format!(r#"<p class="subtitle">{}</p>"#, defaults::NO_ATTACKS),
            AttacksGrid::Cards(cards) => cards.iter().map(AttackCard::to_html).collect::<String>(),
        };
        let panels: String = self.content.lessons.panels.iter().map(LessonPanel::to_html).collect();

        format!(r#"{}
        <div id="dashboard-content" class="dashboard-content{}">
            <h1 id="report-title" class="report-title">{}</h1>
            <section class="attacks-section">
                <h2 class="section-title">Top Attacks</h2>
                <div id="attacks-grid" class="attacks-grid">{}</div>
            </section>
            <section class="lessons-section{}">
                <h2 class="section-title">Lessons</h2>
                <div id="lessons-container" class="lessons-container">{}</div>
            </section>
        </div>"#,
            placeholder,
            hidden(self.content.visible),
            escape_html(&self.content.title),
            grid,
            hidden(self.content.lessons.visible),
            panels
        )
    }
}
