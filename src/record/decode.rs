use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::{Map, Value};

use crate::error::DecodeError;
use crate::io::open_maybe_gz;
use crate::record::{Measurement, RawSubjectRecord};

const EXP_INFO: &str = "exp.info";
const MOUSE_INFO: &str = "mouse.info";
const FINAL_DF: &str = "final.df";

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

pub fn read_record(path: &Path) -> Result<RawSubjectRecord> {
    let mut content = String::new();
    open_maybe_gz(path)
        .with_context(|| format!("failed to open {}", path.display()))?
        .read_to_string(&mut content)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;
    let record =
        decode_record(&value).with_context(|| format!("failed to decode {}", path.display()))?;
    Ok(record)
}

/// Validates the raw layout and pulls out the fields the conversion keeps.
/// Every other key (`position`, `survival`, device flags, ...) is dropped.
pub fn decode_record(value: &Value) -> Result<RawSubjectRecord, DecodeError> {
    let root = Block::root(value)?;
    let exp = root.block(EXP_INFO)?;
    let mouse = root.block(MOUSE_INFO)?;
    let table = root.array(FINAL_DF)?;

    let id = mouse.id("id")?;
    let strain = mouse.string("strain")?;
    if strain.trim().is_empty() {
        return Err(DecodeError::EmptyField(mouse.path("strain")));
    }
    let birthday = mouse.string("birthday")?;
    let birthdate = parse_birthdate(&birthday).ok_or_else(|| DecodeError::InvalidDate {
        field: mouse.path("birthday"),
        value: birthday.clone(),
    })?;

    let mut measurements = Vec::with_capacity(table.len());
    for (idx, entry) in table.iter().enumerate() {
        let row = Block::new(entry, format!("{}[{}]", FINAL_DF, idx))?;
        measurements.push(Measurement {
            datetime: row.string("datetime")?,
            vo2: row.number("vo2")?,
            rq: row.number("rq")?,
            vco2: row.number("vco2")?,
        });
    }

    Ok(RawSubjectRecord {
        id,
        strain,
        birthdate,
        start_body_weight: mouse.number("start.bw")?,
        end_body_weight: mouse.number("end.bw")?,
        ambient_temperature: exp.number("ambient.temp")?,
        experiment_id: exp.string("exp.id")?,
        start_timestamp: exp.string("start")?,
        end_timestamp: exp.string("end")?,
        measurements,
    })
}

/// Accepts `YYYY-MM-DD` style dates, or a datetime whose date part is kept.
pub fn parse_birthdate(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
        })
}

struct Block<'a> {
    map: &'a Map<String, Value>,
    prefix: String,
}

impl<'a> Block<'a> {
    fn root(value: &'a Value) -> Result<Self, DecodeError> {
        match value {
            Value::Object(map) => Ok(Self {
                map,
                prefix: String::new(),
            }),
            _ => Err(DecodeError::WrongType {
                field: "<root>".to_string(),
                expected: "an object",
            }),
        }
    }

    fn new(value: &'a Value, prefix: String) -> Result<Self, DecodeError> {
        match value {
            Value::Object(map) => Ok(Self { map, prefix }),
            _ => Err(DecodeError::WrongType {
                field: prefix,
                expected: "an object",
            }),
        }
    }

    fn path(&self, key: &str) -> String {
        if self.prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.prefix, key)
        }
    }

    fn get(&self, key: &str) -> Result<&'a Value, DecodeError> {
        self.map
            .get(key)
            .ok_or_else(|| DecodeError::MissingField(self.path(key)))
    }

    fn block(&self, key: &str) -> Result<Block<'a>, DecodeError> {
        Block::new(self.get(key)?, self.path(key))
    }

    fn array(&self, key: &str) -> Result<&'a Vec<Value>, DecodeError> {
        self.get(key)?
            .as_array()
            .ok_or_else(|| DecodeError::WrongType {
                field: self.path(key),
                expected: "an array",
            })
    }

    fn string(&self, key: &str) -> Result<String, DecodeError> {
        match self.get(key)? {
            Value::String(s) => self.single_line(key, s.clone()),
            Value::Null => Err(DecodeError::MissingField(self.path(key))),
            _ => Err(DecodeError::WrongType {
                field: self.path(key),
                expected: "a string",
            }),
        }
    }

    // Subject ids are sometimes exported as bare integers.
    fn id(&self, key: &str) -> Result<String, DecodeError> {
        let id = match self.get(key)? {
            Value::String(s) => s.trim().to_string(),
            Value::Number(n) => n.to_string(),
            Value::Null => return Err(DecodeError::MissingField(self.path(key))),
            _ => {
                return Err(DecodeError::WrongType {
                    field: self.path(key),
                    expected: "a string or integer",
                });
            }
        };
        if id.is_empty() {
            return Err(DecodeError::EmptyField(self.path(key)));
        }
        self.single_line(key, id)
    }

    // Text fields end up in tab-separated tables.
    fn single_line(&self, key: &str, value: String) -> Result<String, DecodeError> {
        if value.contains(['\t', '\r', '\n']) {
            return Err(DecodeError::LineBreak(self.path(key)));
        }
        Ok(value)
    }

    /// `null` is a missing value; the key itself must be present.
    fn number(&self, key: &str) -> Result<Option<f64>, DecodeError> {
        match self.get(key)? {
            Value::Null => Ok(None),
            Value::Number(n) => Ok(n.as_f64()),
            _ => Err(DecodeError::WrongType {
                field: self.path(key),
                expected: "a number or null",
            }),
        }
    }
}
