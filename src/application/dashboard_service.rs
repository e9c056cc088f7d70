// Dashboard service - One fetch, group and build pass
use crate::application::reading_source::{DataSourceError, ReadingSource};
use crate::application::visual_builder::build_frame;
use crate::domain::dashboard::DashboardFrame;
use crate::domain::series::SeriesSet;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Result of one poll cycle.
#[derive(Debug)]
pub enum CycleOutcome {
    Frame(DashboardFrame),
    Empty,
    Failed(DataSourceError),
}

/// A finished cycle, stamped for the timer element.
#[derive(Debug)]
pub struct CycleReport {
    pub cycle: u64,
    pub finished_at: DateTime<Utc>,
    pub outcome: CycleOutcome,
}

#[derive(Clone)]
pub struct DashboardService {
    source: Arc<dyn ReadingSource>,
}

impl DashboardService {
    pub fn new(source: Arc<dyn ReadingSource>) -> Self {
        Self { source }
    }

    pub async fn run_cycle(&self) -> CycleOutcome {
        let records = match self.source.fetch().await {
            Ok(records) => records,
            Err(e) => return CycleOutcome::Failed(e),
        };

        let set = SeriesSet::group(&records);
        tracing::debug!(
            records = records.len(),
            temperature = set.temperature.len(),
            rssi = set.rssi.len(),
            humidity = set.humidity.len(),
            "Grouped records into series"
        );

        // Records for unknown fields alone still count as an empty cycle.
        if set.is_empty() {
            return CycleOutcome::Empty;
        }

        CycleOutcome::Frame(build_frame(&set))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::reading::Record;
    use async_trait::async_trait;
    use chrono::TimeZone;
    use std::sync::Mutex;

    /// Serves queued responses in order, then empty results.
    pub(crate) struct ScriptedSource {
        responses: Mutex<Vec<Result<Vec<Record>, DataSourceError>>>,
    }

    impl ScriptedSource {
        pub(crate) fn new(mut responses: Vec<Result<Vec<Record>, DataSourceError>>) -> Self {
            responses.reverse();
            Self {
                responses: Mutex::new(responses),
            }
        }
    }

    #[async_trait]
    impl ReadingSource for ScriptedSource {
        async fn fetch(&self) -> Result<Vec<Record>, DataSourceError> {
            self.responses.lock().unwrap().pop().unwrap_or(Ok(Vec::new()))
        }
    }

    fn t(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    fn service(responses: Vec<Result<Vec<Record>, DataSourceError>>) -> DashboardService {
        DashboardService::new(Arc::new(ScriptedSource::new(responses)))
    }

    #[tokio::test]
    async fn test_cycle_builds_frame() {
        let svc = service(vec![Ok(vec![
            Record::new(t(1), "temperature", 22.5),
            Record::new(t(2), "temperature", 23.1),
            Record::new(t(1), "rssi", -60.0),
        ])]);

        match svc.run_cycle().await {
            CycleOutcome::Frame(frame) => {
                assert_eq!(frame.temperature.gauge.value, 23.1);
                assert_eq!(frame.rssi.chart.y, vec![-60.0]);
                assert!(frame.humidity.chart.x.is_empty());
            }
            other => panic!("expected frame, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_cycle_empty_result() {
        let svc = service(vec![Ok(Vec::new())]);
        assert!(matches!(svc.run_cycle().await, CycleOutcome::Empty));
    }

    #[tokio::test]
    async fn test_cycle_with_only_unknown_fields_is_empty() {
        let svc = service(vec![Ok(vec![Record::new(t(1), "pressure", 1013.0)])]);
        assert!(matches!(svc.run_cycle().await, CycleOutcome::Empty));
    }

    #[tokio::test]
    async fn test_cycle_failure_is_reported() {
        let svc = service(vec![Err(DataSourceError::Status {
            status: 401,
            body: "unauthorized".to_string(),
        })]);
        assert!(matches!(
            svc.run_cycle().await,
            CycleOutcome::Failed(DataSourceError::Status { status: 401, .. })
        ));
    }
}
