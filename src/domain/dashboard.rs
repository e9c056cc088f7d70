// Dashboard domain model
use super::reading::Field;
use chrono::{DateTime, Utc};

/// Line chart for one field. `x` and `y` always have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub field: Field,
    pub title: String,
    pub trace_name: String,
    pub x_title: String,
    pub y_title: String,
    pub x: Vec<DateTime<Utc>>,
    pub y: Vec<f64>,
}

/// Single-value dial for the most recent sample of one field.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeSpec {
    pub field: Field,
    pub title: String,
    pub value: f64,
    pub range: (f64, f64),
    pub color: String,
}

/// One row of the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub chart: ChartSpec,
    pub gauge: GaugeSpec,
}

/// Everything one poll cycle renders: a panel per field, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardFrame {
    pub temperature: Panel,
    pub rssi: Panel,
    pub humidity: Panel,
}

impl DashboardFrame {
    pub fn panels(&self) -> [&Panel; 3] {
        [&self.temperature, &self.rssi, &self.humidity]
    }
}
