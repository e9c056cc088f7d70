// Mapper to convert dashboard specs to Plotly figure JSON
use crate::domain::dashboard::{ChartSpec, DashboardFrame, GaugeSpec};
use serde::Serialize;
use serde_json::{Value, json};

/// One placeholder on the page and the figure to draw in it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    pub id: String,
    pub figure: Value,
}

pub fn frame_to_regions(frame: &DashboardFrame) -> Vec<Region> {
    frame
        .panels()
        .into_iter()
        .flat_map(|panel| {
            [
                Region {
                    id: format!("{}-graph", panel.chart.field.name()),
                    figure: chart_to_figure(&panel.chart),
                },
                Region {
                    id: format!("{}-gauge", panel.gauge.field.name()),
                    figure: gauge_to_figure(&panel.gauge),
                },
            ]
        })
        .collect()
}

fn chart_to_figure(chart: &ChartSpec) -> Value {
    let x: Vec<String> = chart.x.iter().map(|t| t.to_rfc3339()).collect();
    json!({
        "data": [{
            "type": "scatter",
            "mode": "lines+markers",
            "name": chart.trace_name,
            "x": x,
            "y": chart.y,
        }],
        "layout": {
            "title": { "text": chart.title },
            "xaxis": { "title": { "text": chart.x_title } },
            "yaxis": { "title": { "text": chart.y_title } },
        },
    })
}

fn gauge_to_figure(gauge: &GaugeSpec) -> Value {
    json!({
        "data": [{
            "type": "indicator",
            "mode": "gauge+number",
            "value": gauge.value,
            "title": { "text": gauge.title },
            "gauge": {
                "axis": { "range": [gauge.range.0, gauge.range.1] },
                "bar": { "color": gauge.color },
            },
        }],
        "layout": {},
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::visual_builder::{build_frame, placeholder_frame};
    use crate::domain::reading::Record;
    use crate::domain::series::SeriesSet;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_regions_in_layout_order() {
        let ids: Vec<String> = frame_to_regions(&placeholder_frame())
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(
            ids,
            vec![
                "temperature-graph",
                "temperature-gauge",
                "rssi-graph",
                "rssi-gauge",
                "humidity-graph",
                "humidity-gauge",
            ]
        );
    }

    #[test]
    fn test_chart_and_gauge_figures() {
        let t = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        let frame = build_frame(&SeriesSet::group(&[Record::new(t, "rssi", -60.0)]));
        let regions = frame_to_regions(&frame);

        let chart = &regions[2].figure;
        assert_eq!(chart["data"][0]["mode"], "lines+markers");
        assert_eq!(chart["data"][0]["name"], "RSSI (dBm)");
        assert_eq!(chart["data"][0]["x"][0], "2024-05-01T10:00:00+00:00");
        assert_eq!(chart["data"][0]["y"][0], -60.0);
        assert_eq!(chart["layout"]["yaxis"]["title"]["text"], "dBm");

        let gauge = &regions[3].figure;
        assert_eq!(gauge["data"][0]["value"], -60.0);
        assert_eq!(gauge["data"][0]["gauge"]["axis"]["range"], json!([-120.0, 0.0]));
        assert_eq!(gauge["data"][0]["gauge"]["bar"]["color"], "blue");
    }
}
