// Visual builder - Turns per-field series into chart and gauge specs
use crate::domain::dashboard::{ChartSpec, DashboardFrame, GaugeSpec, Panel};
use crate::domain::reading::Field;
use crate::domain::series::{Series, SeriesSet};

/// Gauge value shown when a field has no samples this cycle.
pub const EMPTY_GAUGE_VALUE: f64 = 0.0;

const X_AXIS_TITLE: &str = "Time";

pub fn build_chart(field: Field, series: &Series) -> ChartSpec {
    let profile = field.profile();
    ChartSpec {
        field,
        title: profile.chart_title.to_string(),
        trace_name: profile.label.to_string(),
        x_title: X_AXIS_TITLE.to_string(),
        y_title: profile.unit.to_string(),
        x: series.times(),
        y: series.values(),
    }
}

/// The range and color come from the field profile, never from the data,
/// and the value is not clamped to the range.
pub fn build_gauge(field: Field, series: &Series) -> GaugeSpec {
    let profile = field.profile();
    GaugeSpec {
        field,
        title: profile.label.to_string(),
        value: series.latest_value().unwrap_or(EMPTY_GAUGE_VALUE),
        range: profile.gauge_range,
        color: profile.gauge_color.to_string(),
    }
}

fn build_panel(field: Field, series: &Series) -> Panel {
    Panel {
        chart: build_chart(field, series),
        gauge: build_gauge(field, series),
    }
}

pub fn build_frame(set: &SeriesSet) -> DashboardFrame {
    DashboardFrame {
        temperature: build_panel(Field::Temperature, &set.temperature),
        rssi: build_panel(Field::Rssi, &set.rssi),
        humidity: build_panel(Field::Humidity, &set.humidity),
    }
}

/// Frame shown when there is nothing to plot: no points, gauges at the
/// sentinel value.
pub fn placeholder_frame() -> DashboardFrame {
    build_frame(&SeriesSet::default())
}
