use std::time::Duration;

use crate::defaults::{self, Severity};
use crate::models::{Attack, Lesson};

/// One entry of the attacks grid, with every fallback already applied.
#[derive(Debug, Clone, PartialEq)]
pub struct AttackCard {
    pub severity: Severity,
    pub rank_badge: String,
    pub source: String,
    pub title: String,
    pub link: Option<String>,
    pub summary: String,
    pub delay: Duration,
}

impl AttackCard {
    pub fn from_attack(index: usize, attack: &Attack) -> Self {
        Self {
            severity: Severity::for_rank(attack.rank),
            rank_badge: defaults::rank_label(attack.rank),
            source: defaults::text_or(attack.source.as_deref(), defaults::UNKNOWN_SOURCE).to_string(),
            title: defaults::text_or(attack.title.as_deref(), defaults::UNTITLED_ATTACK).to_string(),
            link: attack.link.clone().filter(|l| !l.is_empty()),
            summary: defaults::text_or(attack.summary.as_deref(), defaults::NO_SUMMARY).to_string(),
            delay: defaults::attack_delay(index),
        }
    }

    pub fn to_html(&self) -> String {
        let title = match &self.link {
            Some(link) => format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
                escape_html(link),
                escape_html(&self.title)
            ),
            None => escape_html(&self.title),
        };

        format!(r#"
            <div class="attack-card {}" style="animation-delay: {}ms">
                <div class="card-header">
                    <span class="rank-badge">#{}</span>
                    <span class="card-source">{}</span>
                </div>
                <h3 class="card-title">{}</h3>
                <p class="card-summary">{}</p>
            </div>"#,
            self.severity.css_class(),
            self.delay.as_millis(),
            escape_html(&self.rank_badge),
            escape_html(&self.source),
            title,
            escape_html(&self.summary),
        )
    }
}

/// One deep-dive lesson panel.
#[derive(Debug, Clone, PartialEq)]
pub struct LessonPanel {
    pub rank_label: String,
    pub title: String,
    pub impact: String,
    pub objectives: Vec<String>,
    pub mitigations: Vec<String>,
    pub questions: Vec<String>,
    pub delay: Duration,
}

impl LessonPanel {
    pub fn from_lesson(index: usize, lesson: &Lesson) -> Self {
        Self {
            rank_label: defaults::rank_label(lesson.rank),
            title: defaults::text_or(lesson.title.as_deref(), defaults::UNTITLED_LESSON).to_string(),
            impact: defaults::text_or(lesson.real_world_impact.as_deref(), defaults::NO_IMPACT).to_string(),
            objectives: lesson.learning_objectives.clone(),
            mitigations: lesson.mitigation_strategies.clone(),
            questions: lesson.discussion_questions.clone(),
            delay: defaults::lesson_delay(index),
        }
    }

    pub fn to_html(&self) -> String {
        format!(r#"
            <div class="lesson-panel" style="animation-delay: {}ms">
                <div class="lesson-title-area">
                    <span class="lesson-rank">Deep Dive Focus #{}</span>
                    <h3>{}</h3>
                </div>
                <div class="lesson-content">
                    <div class="lesson-left">
                        <div class="lesson-block">
                            <h4>Real-World Impact</h4>
                            <p>{}</p>
                        </div>
                        <div class="lesson-block">
                            <h4>Learning Objectives</h4>
                            <ul>{}</ul>
                        </div>
                    </div>
                    <div class="lesson-right">
                        <div class="lesson-block">
                            <h4>Mitigation Strategies</h4>
                            <ul>{}</ul>
                        </div>
                        <div class="lesson-block">
                            <h4>Classroom Discussion</h4>
                            <ul>{}</ul>
                        </div>
                    </div>
                </div>
            </div>"#,
            self.delay.as_millis(),
            escape_html(&self.rank_label),
            escape_html(&self.title),
            escape_html(&self.impact),
            list_items(&self.objectives),
            list_items(&self.mitigations),
            list_items(&self.questions),
        )
    }
}

fn list_items(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect()
}

pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
     .replace('<', "&lt;")
     .replace('>', "&gt;")
     .replace('"', "&quot;")
     .replace('\'', "&#x27;")
}
