//! Subcommand dispatch for the command-line client.
//!
//! `execute` drives one `Command` against a source and a render context and
//! hands back the lines to print plus the exit status, so the binary only has
//! to print and exit.

use std::path::Path;

use crate::api::ReportSource;
use crate::cli::Command;
use crate::errors::{IntelError, IntelResult};
use crate::view::{page, Dashboard};
use crate::{loader, renderer, terminal};

/// What a finished command wants printed, and whether it succeeded.
#[derive(Debug)]
pub struct Outcome {
    pub lines: Vec<String>,
    pub status: IntelResult<()>,
}

pub async fn execute<S: ReportSource + ?Sized>(
    source: &S,
    dash: &mut Dashboard,
    command: Command,
    quiet: bool,
) -> Outcome {
    match command {
        Command::List => {
            let bar = terminal::spinner("Fetching report index", quiet);
            let loaded = loader::load_index(source, dash).await;
            bar.finish_and_clear();
            Outcome {
                lines: terminal::index_lines(dash),
                status: loaded.map(|_| ()),
            }
        }
        Command::Show { identifier } => {
            let bar = terminal::spinner("Fetching report", quiet);
            let shown = match identifier {
                Some(id) => show_selected(source, dash, &id).await,
                None => loader::load_index(source, dash).await.map(|_| ()),
            };
            bar.finish_and_clear();
            let lines = if dash.list().notice().is_some() {
                terminal::index_lines(dash)
            } else {
                terminal::report_lines(dash)
            };
            Outcome {
                lines,
                status: shown.and_then(|_| selection_status(dash)),
            }
        }
        Command::Latest => {
            let bar = terminal::spinner("Fetching latest report", quiet);
            let shown = renderer::render_latest(source, dash).await;
            bar.finish_and_clear();
            Outcome {
                lines: terminal::report_lines(dash),
                status: shown.map(|_| ()),
            }
        }
        Command::Snapshot { output, report } => {
            let bar = terminal::spinner("Building dashboard snapshot", quiet);
            let mut built = loader::load_index(source, dash).await.map(|_| ());
            if let (true, Some(id)) = (built.is_ok(), report) {
                built = show_selected(source, dash, &id).await;
            }
            bar.finish_and_clear();

            match write_snapshot(dash, &output) {
                Ok(()) => Outcome {
                    lines: vec![format!("📄 Dashboard snapshot written: {}", output.display())],
                    status: built.and_then(|_| selection_status(dash)),
                },
                Err(e) => Outcome {
                    lines: Vec::new(),
                    status: Err(e),
                },
            }
        }
    }
}

/// Selects `identifier` through its list entry when the index has one.
async fn show_selected<S: ReportSource + ?Sized>(source: &S, dash: &mut Dashboard, identifier: &str) -> IntelResult<()> {
    let entry = dash.list().find(identifier);
    renderer::render_report(source, dash, identifier, entry).await.map(|_| ())
}

/// The report currently on screen failed to load.
///
/// Only a visible error counts: the auto-selected report may fail and a later
/// explicit selection still succeed.
fn selection_status(dash: &Dashboard) -> IntelResult<()> {
    let placeholder = dash.placeholder();
    if placeholder.visible && placeholder.is_error() {
        Err(IntelError::external("report", placeholder.text()))
    } else {
        Ok(())
    }
}

fn write_snapshot(dash: &Dashboard, output: &Path) -> IntelResult<()> {
    let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let html = page::render_page(dash, &generated_at);
    log::debug!("Writing {} byte snapshot to {:?}", html.len(), output);
    std::fs::write(output, html).map_err(|e| IntelError::io(e, output.to_path_buf()))?;
    Ok(())
}
