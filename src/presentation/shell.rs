// Presentation shell - Holds what the page currently shows
use crate::application::dashboard_service::{CycleOutcome, CycleReport};
use crate::application::visual_builder::placeholder_frame;
use crate::infrastructure::plotly_mapper::{Region, frame_to_regions};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::watch;

pub const STALE_STATUS: &str = "data source unavailable, showing previous data";

/// Contents of the timer element and the six chart regions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShellView {
    pub cycle: u64,
    pub frame_time: Option<DateTime<Utc>>,
    pub status: Option<String>,
    pub regions: Vec<Region>,
}

impl ShellView {
    fn initial() -> Self {
        Self {
            cycle: 0,
            frame_time: None,
            status: None,
            regions: frame_to_regions(&placeholder_frame()),
        }
    }
}

/// Owns the published view. Every cycle replaces the whole view in one
/// swap, so subscribers never see a partly updated page. Dropping the shell
/// ends all subscriptions.
pub struct DashboardShell {
    tx: watch::Sender<ShellView>,
}

impl Default for DashboardShell {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardShell {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(ShellView::initial());
        Self { tx }
    }

    pub fn subscribe(&self) -> watch::Receiver<ShellView> {
        self.tx.subscribe()
    }

    pub fn apply(&self, report: CycleReport) {
        self.tx.send_modify(|view| {
            view.cycle = report.cycle;
            match report.outcome {
                CycleOutcome::Frame(frame) => {
                    view.regions = frame_to_regions(&frame);
                    view.frame_time = Some(report.finished_at);
                    view.status = None;
                }
                CycleOutcome::Empty => {
                    view.regions = frame_to_regions(&placeholder_frame());
                    view.frame_time = Some(report.finished_at);
                    view.status = None;
                }
                CycleOutcome::Failed(_) => {
                    view.status = Some(STALE_STATUS.to_string());
                }
            }
        });
    }
}
