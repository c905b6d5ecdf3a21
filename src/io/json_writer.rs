use std::collections::BTreeMap;
use std::io::Write;

use anyhow::Result;

use crate::ctx::Ctx;
use crate::input;
use crate::schema::v1::{RunSummaryV1, ToolMeta};

pub const TOOL_NAME: &str = "kira-calorimetry";

pub fn build_summary(ctx: &Ctx) -> RunSummaryV1 {
    let mut genotypes: BTreeMap<String, usize> = BTreeMap::new();
    for row in &ctx.metadata {
        *genotypes.entry(row.genotype.clone()).or_insert(0) += 1;
    }

    RunSummaryV1 {
        tool: ToolMeta {
            name: TOOL_NAME.to_string(),
            version: ctx.tool_version.clone(),
        },
        groups: input::groups(&ctx.sources),
        subjects: ctx.metadata.len(),
        timeseries_rows: ctx.timeseries.len(),
        genotypes,
        subjects_without_timeseries: ctx.subjects_without_timeseries(),
        subjects_without_baseline: ctx.subjects_without_baseline(),
        settings: ctx.settings.clone(),
    }
}

pub fn write_summary(w: &mut dyn Write, summary: &RunSummaryV1) -> Result<()> {
    serde_json::to_writer_pretty(&mut *w, summary)?;
    writeln!(w)?;
    Ok(())
}
