// Sensor reading domain models
use chrono::{DateTime, Utc};

/// A measurement channel the dashboard knows how to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Temperature,
    Rssi,
    Humidity,
}

impl Field {
    /// Display order of the dashboard rows.
    pub const ALL: [Field; 3] = [Field::Temperature, Field::Rssi, Field::Humidity];

    /// Parse a stored field name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "temperature" => Some(Field::Temperature),
            "rssi" => Some(Field::Rssi),
            "humidity" => Some(Field::Humidity),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::Temperature => "temperature",
            Field::Rssi => "rssi",
            Field::Humidity => "humidity",
        }
    }

    pub fn profile(self) -> &'static FieldProfile {
        match self {
            Field::Temperature => &TEMPERATURE,
            Field::Rssi => &RSSI,
            Field::Humidity => &HUMIDITY,
        }
    }
}

/// Fixed presentation constants for one field.
#[derive(Debug, PartialEq)]
pub struct FieldProfile {
    pub unit: &'static str,
    pub chart_title: &'static str,
    pub label: &'static str,
    pub gauge_range: (f64, f64),
    pub gauge_color: &'static str,
}

const TEMPERATURE: FieldProfile = FieldProfile {
    unit: "°C",
    chart_title: "Temperature vs Time",
    label: "Temperature (°C)",
    gauge_range: (0.0, 100.0),
    gauge_color: "red",
};

const RSSI: FieldProfile = FieldProfile {
    unit: "dBm",
    chart_title: "Signal Strength vs Time",
    label: "RSSI (dBm)",
    gauge_range: (-120.0, 0.0),
    gauge_color: "blue",
};

const HUMIDITY: FieldProfile = FieldProfile {
    unit: "%",
    chart_title: "Humidity vs Time",
    label: "Humidity (%)",
    gauge_range: (0.0, 100.0),
    gauge_color: "green",
};

/// One raw sample as returned by the data store. The field name is kept
/// verbatim so that unknown channels can be dropped downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub time: DateTime<Utc>,
    pub field: String,
    pub value: f64,
}

impl Record {
    pub fn new(time: DateTime<Utc>, field: impl Into<String>, value: f64) -> Self {
        Self {
            time,
            field: field.into(),
            value,
        }
    }
}
