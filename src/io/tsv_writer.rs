use std::io::Write;

use anyhow::{Result, bail};

use crate::schema::v1::{METADATA_COLUMNS, MouseMetadataRow, TIMESERIES_COLUMNS, TimeSeriesRow};

pub const MISSING: &str = "NA";

pub fn write_metadata(w: &mut dyn Write, rows: &[MouseMetadataRow]) -> Result<()> {
    writeln!(w, "{}", METADATA_COLUMNS.join("\t"))?;
    for row in rows {
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            text("id", &row.id)?,
            text("strain", &row.strain)?,
            row.birthdate.format("%Y-%m-%d"),
            number(row.start_body_weight),
            number(row.end_body_weight),
            number(row.ambient_temperature),
            text("experimentId", &row.experiment_id)?,
            text("startTimestamp", &row.start_timestamp)?,
            text("endTimestamp", &row.end_timestamp)?,
            text("genotype", &row.genotype)?
        )?;
    }
    Ok(())
}

pub fn write_timeseries(w: &mut dyn Write, rows: &[TimeSeriesRow]) -> Result<()> {
    writeln!(w, "{}", TIMESERIES_COLUMNS.join("\t"))?;
    for row in rows {
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            text("id", &row.id)?,
            text("genotype", &row.genotype)?,
            row.time,
            text("datetime", &row.datetime)?,
            number(row.vo2),
            number(row.rq),
            number(row.vco2),
            number(row.vo2_baseline),
            number(row.vo2_baseline_adjusted)
        )?;
    }
    Ok(())
}

// Shortest representation that parses back to the same f64.
fn number(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => v.to_string(),
        _ => MISSING.to_string(),
    }
}

fn text<'a>(column: &str, value: &'a str) -> Result<&'a str> {
    if value.contains(['\t', '\r', '\n']) {
        bail!("{} value {:?} contains a tab or line break", column, value);
    }
    Ok(value)
}
