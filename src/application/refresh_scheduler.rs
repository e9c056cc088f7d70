// Refresh scheduler - Drives one poll cycle per tick
use crate::application::dashboard_service::{CycleOutcome, CycleReport, DashboardService};
use std::future::Future;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

pub struct RefreshScheduler {
    service: DashboardService,
    period: Duration,
}

impl RefreshScheduler {
    pub fn new(service: DashboardService, period: Duration) -> Self {
        Self { service, period }
    }

    /// Tick until `shutdown` resolves, handing every finished cycle to `sink`.
    ///
    /// The first tick fires immediately. A cycle is awaited before the next
    /// tick is taken, so fetches never overlap; ticks that elapse while a
    /// cycle is in flight are skipped rather than queued. Shutdown is only
    /// observed between cycles.
    pub async fn run<S, F>(self, mut sink: S, shutdown: F)
    where
        S: FnMut(CycleReport) + Send,
        F: Future<Output = ()> + Send,
    {
        let mut ticker = tokio::time::interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        tokio::pin!(shutdown);

        let mut cycle: u64 = 0;
        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    tracing::info!("Refresh scheduler stopping after {} cycles", cycle);
                    break;
                }
                _ = ticker.tick() => {}
            }

            cycle += 1;
            let outcome = self.service.run_cycle().await;
            match &outcome {
                CycleOutcome::Frame(_) => tracing::debug!(cycle, "Dashboard frame built"),
                CycleOutcome::Empty => tracing::info!(cycle, "No sensor records available"),
                CycleOutcome::Failed(e) => {
                    tracing::warn!(cycle, error = %e, "Skipping cycle, data source unavailable")
                }
            }

            sink(CycleReport {
                cycle,
                finished_at: chrono::Utc::now(),
                outcome,
            });
        }
    }
}
