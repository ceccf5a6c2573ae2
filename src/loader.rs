//! Report index loader: fills the date list once and auto-selects the newest
//! report.

use crate::api::ReportSource;
use crate::errors::{IntelError, IntelResult};
use crate::models::ReportIndex;
use crate::renderer;
use crate::view::{Dashboard, ListNotice};

/// Loads the index into `dash`. The list is always replaced; on failure it
/// shows the unavailable notice and no report is rendered.
pub async fn load_index<S: ReportSource + ?Sized>(source: &S, dash: &mut Dashboard) -> IntelResult<ReportIndex> {
    let index = match source.list_reports().await {
        Ok(index) => index,
        Err(e) => {
            log::error!("Failed to fetch report index from {}: {}", source.describe(), e);
            dash.list_mut().show_notice(ListNotice::Unavailable);
            return Err(IntelError::index_load(e));
        }
    };

    if index.is_empty() {
        log::info!("No reports available from {}", source.describe());
        dash.list_mut().show_notice(ListNotice::Empty);
        return Ok(index);
    }

    let handles = dash.list_mut().populate(&index.reports);
    log::info!("Loaded {} reports from {}", handles.len(), source.describe());

    if let (Some(newest), Some(&entry)) = (index.first(), handles.first()) {
        // failure is already visible in the placeholder
        if let Err(e) = renderer::render_report(source, dash, newest, Some(entry)).await {
            log::debug!("Auto-selection did not render: {}", e);
        }
    }

    Ok(index)
}
