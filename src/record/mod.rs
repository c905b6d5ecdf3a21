mod decode;

use std::path::PathBuf;

use chrono::NaiveDate;

pub use decode::{decode_record, parse_birthdate, read_record};

/// One sampled tick. Any quantity may be missing in the raw table.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub datetime: String,
    pub vo2: Option<f64>,
    pub rq: Option<f64>,
    pub vco2: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawSubjectRecord {
    pub id: String,
    pub strain: String,
    pub birthdate: NaiveDate,
    pub start_body_weight: Option<f64>,
    pub end_body_weight: Option<f64>,
    pub ambient_temperature: Option<f64>,
    pub experiment_id: String,
    pub start_timestamp: String,
    pub end_timestamp: String,
    pub measurements: Vec<Measurement>,
}

/// A decoded record together with the experiment group it was loaded from.
#[derive(Debug, Clone, PartialEq)]
pub struct SourcedRecord {
    pub source_group: String,
    pub path: PathBuf,
    pub record: RawSubjectRecord,
}
