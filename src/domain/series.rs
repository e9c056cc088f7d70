// Per-field time series built from raw records
use super::reading::{Field, Record};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesPoint {
    pub time: DateTime<Utc>,
    pub value: f64,
}

impl TimeSeriesPoint {
    pub fn new(time: DateTime<Utc>, value: f64) -> Self {
        Self { time, value }
    }
}

/// Samples for one field, in the order the data store returned them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    pub points: Vec<TimeSeriesPoint>,
}

impl Series {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn latest_value(&self) -> Option<f64> {
        self.points.last().map(|p| p.value)
    }

    pub fn times(&self) -> Vec<DateTime<Utc>> {
        self.points.iter().map(|p| p.time).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesSet {
    pub temperature: Series,
    pub rssi: Series,
    pub humidity: Series,
}

impl SeriesSet {
    /// Partition records by field name. Records for unknown fields are
    /// dropped; no sorting is applied.
    pub fn group(records: &[Record]) -> Self {
        let mut set = SeriesSet::default();
        for record in records {
            if let Some(field) = Field::from_name(&record.field) {
                set.get_mut(field)
                    .points
                    .push(TimeSeriesPoint::new(record.time, record.value));
            }
        }
        set
    }

    pub fn get(&self, field: Field) -> &Series {
        match field {
            Field::Temperature => &self.temperature,
            Field::Rssi => &self.rssi,
            Field::Humidity => &self.humidity,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut Series {
        match field {
            Field::Temperature => &mut self.temperature,
            Field::Rssi => &mut self.rssi,
            Field::Humidity => &mut self.humidity,
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}
