use std::collections::HashSet;
use std::path::PathBuf;

use crate::config::Settings;
use crate::input::SourceFile;
use crate::record::SourcedRecord;
use crate::schema::v1::{MouseMetadataRow, TimeSeriesRow};

pub const METADATA_FILE: &str = "mouse_metadata.tsv";
pub const TIMESERIES_FILE: &str = "timeseries.tsv";
pub const ALLOWLIST_FILE: &str = "genotype_allowlist.txt";
pub const SUMMARY_FILE: &str = "run_summary.json";

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub metadata_path: PathBuf,
    pub timeseries_path: PathBuf,
    pub allowlist_path: PathBuf,
    pub summary_path: PathBuf,
}

impl OutputPaths {
    pub fn new(out_dir: PathBuf) -> Self {
        Self {
            metadata_path: out_dir.join(METADATA_FILE),
            timeseries_path: out_dir.join(TIMESERIES_FILE),
            allowlist_path: out_dir.join(ALLOWLIST_FILE),
            summary_path: out_dir.join(SUMMARY_FILE),
            out_dir,
        }
    }
}

#[derive(Debug)]
pub struct Ctx {
    pub raw_dir: PathBuf,
    pub settings_path: Option<PathBuf>,
    pub settings: Settings,
    pub write_json: bool,
    pub tool_version: String,
    pub sources: Vec<SourceFile>,
    pub records: Vec<SourcedRecord>,
    pub metadata: Vec<MouseMetadataRow>,
    pub timeseries: Vec<TimeSeriesRow>,
    pub warnings: Vec<String>,
    pub written: Vec<PathBuf>,
    pub output: OutputPaths,
}

impl Ctx {
    pub fn new(
        raw_dir: PathBuf,
        out_dir: PathBuf,
        settings_path: Option<PathBuf>,
        write_json: bool,
        tool_version: &str,
    ) -> Self {
        Self {
            raw_dir,
            settings_path,
            settings: Settings::default(),
            write_json,
            tool_version: tool_version.to_string(),
            sources: Vec::new(),
            records: Vec::new(),
            metadata: Vec::new(),
            timeseries: Vec::new(),
            warnings: Vec::new(),
            written: Vec::new(),
            output: OutputPaths::new(out_dir),
        }
    }

    /// Ids with a metadata row but no time-series rows, in metadata order.
    pub fn subjects_without_timeseries(&self) -> Vec<String> {
        let present: HashSet<&str> = self.timeseries.iter().map(|r| r.id.as_str()).collect();
        self.metadata
            .iter()
            .filter(|m| !present.contains(m.id.as_str()))
            .map(|m| m.id.clone())
            .collect()
    }

    /// Ids that have time-series rows but no baseline, in metadata order.
    pub fn subjects_without_baseline(&self) -> Vec<String> {
        let missing: HashSet<&str> = self
            .timeseries
            .iter()
            .filter(|r| r.vo2_baseline.is_none())
            .map(|r| r.id.as_str())
            .collect();
        self.metadata
            .iter()
            .filter(|m| missing.contains(m.id.as_str()))
            .map(|m| m.id.clone())
            .collect()
    }
}
