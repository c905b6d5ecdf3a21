use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::Settings;

pub const METADATA_COLUMNS: [&str; 10] = [
    "id",
    "strain",
    "birthdate",
    "startBodyWeight",
    "endBodyWeight",
    "ambientTemperature",
    "experimentId",
    "startTimestamp",
    "endTimestamp",
    "genotype",
];

pub const TIMESERIES_COLUMNS: [&str; 9] = [
    "id",
    "genotype",
    "time",
    "datetime",
    "vo2",
    "rq",
    "vco2",
    "vo2Baseline",
    "vo2BaselineAdjusted",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MouseMetadataRow {
    pub id: String,
    pub strain: String,
    pub birthdate: NaiveDate,
    pub start_body_weight: Option<f64>,
    pub end_body_weight: Option<f64>,
    pub ambient_temperature: Option<f64>,
    pub experiment_id: String,
    pub start_timestamp: String,
    pub end_timestamp: String,
    pub genotype: String,
}

/// One subject at one tick. `time` is minutes since the first tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesRow {
    pub id: String,
    pub genotype: String,
    pub time: u32,
    pub datetime: String,
    pub vo2: Option<f64>,
    pub rq: Option<f64>,
    pub vco2: Option<f64>,
    pub vo2_baseline: Option<f64>,
    pub vo2_baseline_adjusted: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummaryV1 {
    pub tool: ToolMeta,
    pub groups: Vec<String>,
    pub subjects: usize,
    pub timeseries_rows: usize,
    pub genotypes: BTreeMap<String, usize>,
    pub subjects_without_timeseries: Vec<String>,
    pub subjects_without_baseline: Vec<String>,
    pub settings: Settings,
}
