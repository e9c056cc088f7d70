// InfluxDB reading source implementation
use crate::application::reading_source::{DataSourceError, ReadingSource};
use crate::domain::reading::{Field, Record};
use crate::infrastructure::config::InfluxSettings;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Long-lived handle to the data store. Built once at startup and only
/// read afterwards; the pooled connections close when it is dropped.
#[derive(Debug, Clone)]
pub struct InfluxRepository {
    client: reqwest::Client,
    host: String,
    token: String,
    database: String,
    retention_policy: String,
    query: String,
}

#[derive(Debug, Deserialize)]
struct InfluxQLResponse {
    #[serde(default)]
    results: Vec<InfluxQLResult>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct InfluxQLResult {
    #[serde(default)]
    series: Option<Vec<InfluxQLSeries>>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct InfluxQLSeries {
    #[allow(dead_code)]
    name: String,
    columns: Vec<String>,
    #[serde(default)]
    values: Vec<Vec<serde_json::Value>>,
}

impl InfluxRepository {
    pub fn new(settings: &InfluxSettings) -> Result<Self, DataSourceError> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout())
            .build()?;

        Ok(Self {
            client,
            host: settings.host.trim_end_matches('/').to_string(),
            token: settings.token.clone(),
            database: settings.database.clone(),
            retention_policy: settings.retention_policy.clone(),
            query: build_readings_query(&settings.measurement),
        })
    }

    fn build_query_url(&self) -> String {
        format!(
            "{}/query?db={}&rp={}&q={}",
            self.host,
            urlencoding::encode(&self.database),
            urlencoding::encode(&self.retention_policy),
            urlencoding::encode(&self.query)
        )
    }

    async fn execute_query(&self) -> Result<InfluxQLResponse, DataSourceError> {
        let response = self
            .client
            .get(self.build_query_url())
            .header("Authorization", format!("Token {}", self.token))
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(DataSourceError::Status { status, body });
        }

        let body = response.bytes().await?;
        serde_json::from_slice::<InfluxQLResponse>(&body)
            .map_err(|e| DataSourceError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ReadingSource for InfluxRepository {
    async fn fetch(&self) -> Result<Vec<Record>, DataSourceError> {
        tracing::debug!("Executing readings query: {}", self.query);
        let response = self.execute_query().await?;
        let records = records_from_response(response)?;
        tracing::debug!("Fetched {} records from InfluxDB", records.len());
        Ok(records)
    }
}

/// Whole retained range of the known fields for one measurement.
fn build_readings_query(measurement: &str) -> String {
    let fields = Field::ALL
        .iter()
        .map(|f| format!("\"{}\"", f.name()))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "SELECT {} FROM \"{}\" WHERE time >= 0",
        fields,
        measurement.replace('"', "\\\"")
    )
}

/// Unpivot InfluxQL rows into tagged records, row by row and column by
/// column. Null or non-numeric cells and rows with an unparseable time
/// are skipped.
fn records_from_response(response: InfluxQLResponse) -> Result<Vec<Record>, DataSourceError> {
    if let Some(error) = response.error {
        return Err(DataSourceError::Query(error));
    }

    let mut records = Vec::new();
    for result in response.results {
        if let Some(error) = result.error {
            return Err(DataSourceError::Query(error));
        }

        for series in result.series.unwrap_or_default() {
            let time_idx = series.columns.iter().position(|c| c == "time").unwrap_or(0);

            for row in &series.values {
                let Some(time) = row.get(time_idx).and_then(parse_time) else {
                    continue;
                };

                for (idx, column) in series.columns.iter().enumerate() {
                    if idx == time_idx {
                        continue;
                    }
                    if let Some(value) = row.get(idx).and_then(|v| v.as_f64()) {
                        records.push(Record::new(time, column.as_str(), value));
                    }
                }
            }
        }
    }

    Ok(records)
}

fn parse_time(value: &serde_json::Value) -> Option<DateTime<Utc>> {
    let text = value.as_str()?;
    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> InfluxSettings {
        InfluxSettings {
            host: "http://influx.local:8086/".to_string(),
            token: "token".to_string(),
            database: "Temp_data".to_string(),
            retention_policy: "autogen".to_string(),
            measurement: "Sensor_Data".to_string(),
            timeout_secs: 5,
        }
    }

    fn parse(json: &str) -> Result<Vec<Record>, DataSourceError> {
        records_from_response(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn test_build_readings_query() {
        assert_eq!(
            build_readings_query("Sensor_Data"),
            "SELECT \"temperature\", \"rssi\", \"humidity\" FROM \"Sensor_Data\" WHERE time >= 0"
        );
    }

    #[test]
    fn test_build_query_url() {
        let repo = InfluxRepository::new(&settings()).unwrap();
        let url = repo.build_query_url();
        assert!(url.starts_with("http://influx.local:8086/query?db=Temp_data&rp=autogen&q="));
        assert!(url.contains("SELECT%20%22temperature%22"));
    }

    #[test]
    fn test_unpivots_rows_in_order() {
        let records = parse(
            r#"{"results":[{"statement_id":0,"series":[{"name":"Sensor_Data",
                "columns":["time","temperature","rssi","humidity"],
                "values":[
                    ["2024-05-01T10:00:00Z",22.5,-60,null],
                    ["2024-05-01T10:00:10Z",23.1,null,41.5]
                ]}]}]}"#,
        )
        .unwrap();

        let got: Vec<(&str, f64)> = records.iter().map(|r| (r.field.as_str(), r.value)).collect();
        assert_eq!(
            got,
            vec![("temperature", 22.5), ("rssi", -60.0), ("temperature", 23.1), ("humidity", 41.5)]
        );
        assert_eq!(records[0].time.to_rfc3339(), "2024-05-01T10:00:00+00:00");
        assert_eq!(records[2].time.to_rfc3339(), "2024-05-01T10:00:10+00:00");
    }

    #[test]
    fn test_skips_bad_rows_and_cells() {
        let records = parse(
            r#"{"results":[{"series":[{"name":"Sensor_Data",
                "columns":["time","temperature"],
                "values":[
                    ["not a time",20.0],
                    ["2024-05-01T10:00:00Z","warm"],
                    ["2024-05-01T10:00:20Z",21.0]
                ]}]}]}"#,
        )
        .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].value, 21.0);
    }

    #[test]
    fn test_empty_result_is_not_an_error() {
        assert!(parse(r#"{"results":[{"statement_id":0}]}"#).unwrap().is_empty());
        assert!(parse(r#"{"results":[]}"#).unwrap().is_empty());
    }

    #[test]
    fn test_query_errors_are_reported() {
        let err = parse(r#"{"results":[{"error":"database not found: Temp_data"}]}"#).unwrap_err();
        assert!(matches!(err, DataSourceError::Query(msg) if msg.contains("database not found")));

        let err = parse(r#"{"error":"error parsing query"}"#).unwrap_err();
        assert!(matches!(err, DataSourceError::Query(_)));
    }
}
