//! Terminal presentation of the render context for the command-line client.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::defaults::{self, Severity};
use crate::view::{AttacksGrid, Dashboard};

/// Spinner shown while a fetch is in flight; hidden when `quiet`.
pub fn spinner(message: &str, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        bar.set_style(spinner_style.tick_strings(&["▰▱▱", "▰▰▱", "▰▰▰", "▱▰▰", "▱▱▰", "✓"]));
    }
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

pub fn index_lines(dash: &Dashboard) -> Vec<String> {
    if let Some(notice) = dash.list().notice() {
        return vec![style(notice.message()).dim().to_string()];
    }

    dash.list()
        .entries()
        .iter()
        .map(|e| {
            let marker = if e.active { style("▶").green().to_string() } else { " ".to_string() };
            format!("{} {:<14} {}", marker, e.label, style(&e.identifier).dim())
        })
        .collect()
}

pub fn report_lines(dash: &Dashboard) -> Vec<String> {
    let mut lines = Vec::new();

    let placeholder = dash.placeholder();
    if placeholder.visible {
        let text = placeholder.text();
        lines.push(if placeholder.is_error() {
            format!("❌ {}", style(text).red().bold())
        } else {
            style(text).dim().to_string()
        });
        return lines;
    }

    let content = dash.content();
    lines.push(style(&content.title).bold().cyan().to_string());
    lines.push(String::new());

    match &content.attacks {
        AttacksGrid::NoAttacks => lines.push(style(defaults::NO_ATTACKS).dim().to_string()),
        AttacksGrid::Cards(cards) => {
            for card in cards {
                let badge = format!("#{}", card.rank_badge);
                let badge = match card.severity {
                    Severity::Critical => style(badge).red().bold(),
                    Severity::High => style(badge).yellow().bold(),
                };
                lines.push(format!("{} {} {}", badge, style(&card.title).bold(), style(format!("({})", card.source)).dim()));
                if let Some(link) = &card.link {
                    lines.push(format!("    {}", style(link).underlined().blue()));
                }
                lines.push(format!("    {}", card.summary));
            }
        }
    }

    if content.lessons.visible {
        for panel in &content.lessons.panels {
            lines.push(String::new());
            lines.push(format!(
                "{} {}",
                style(format!("Deep Dive Focus #{}", panel.rank_label)).magenta(),
                style(&panel.title).bold()
            ));
            lines.push(format!("  {}", panel.impact));
            for (heading, items) in [
                ("Learning Objectives", &panel.objectives),
                ("Mitigation Strategies", &panel.mitigations),
                ("Classroom Discussion", &panel.questions),
            ] {
                lines.push(format!("  {}", style(heading).underlined()));
                lines.extend(items.iter().map(|item| format!("    • {}", item)));
            }
        }
    }

    lines
}
