use anyhow::{Result, bail};

use crate::record::SourcedRecord;
use crate::schema::v1::{MouseMetadataRow, TimeSeriesRow};
use crate::transform::TICK_MINUTES;

/// Long-format series for every subject, subjects in record order and ticks
/// in increasing time. Baseline columns are left empty for `normalize`.
///
/// `metadata` must be the output of `extract` over the same records.
pub fn assemble(
    records: &[SourcedRecord],
    metadata: &[MouseMetadataRow],
) -> Result<Vec<TimeSeriesRow>> {
    if records.len() != metadata.len() {
        bail!(
            "metadata length mismatch: {} != {}",
            metadata.len(),
            records.len()
        );
    }

    let total: usize = records.iter().map(|r| r.record.measurements.len()).sum();
    let mut rows = Vec::with_capacity(total);

    for (sourced, meta) in records.iter().zip(metadata) {
        let raw = &sourced.record;
        if raw.id != meta.id {
            bail!("metadata row '{}' does not match subject '{}'", meta.id, raw.id);
        }
        for (k, m) in raw.measurements.iter().enumerate() {
            let Some(time) = tick_time(k) else {
                bail!("subject '{}' has too many ticks", raw.id);
            };
            rows.push(TimeSeriesRow {
                id: raw.id.clone(),
                genotype: meta.genotype.clone(),
                time,
                datetime: m.datetime.clone(),
                vo2: m.vo2,
                rq: m.rq,
                vco2: m.vco2,
                vo2_baseline: None,
                vo2_baseline_adjusted: None,
            });
        }
    }

    Ok(rows)
}

/// Keeps rows with `time < limit`; relative order is preserved.
pub fn truncate(mut rows: Vec<TimeSeriesRow>, limit: u32) -> Vec<TimeSeriesRow> {
    rows.retain(|row| row.time < limit);
    rows
}

fn tick_time(k: usize) -> Option<u32> {
    u32::try_from(k).ok()?.checked_mul(TICK_MINUTES)
}
