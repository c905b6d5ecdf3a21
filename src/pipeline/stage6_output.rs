use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::io::allowlist::write_allowlist;
use crate::io::json_writer::{build_summary, write_summary};
use crate::io::tsv_writer::{write_metadata, write_timeseries};
use crate::io::StagedOutputs;
use crate::pipeline::Stage;

pub struct Stage6Output;

impl Stage6Output {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage6Output {
    fn name(&self) -> &'static str {
        "stage6_output"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let paths = ctx.output.clone();
        let mut staged = StagedOutputs::new(&paths.out_dir)?;
        info!(out_dir = %paths.out_dir.display(), "output_dir_ready");

        staged.stage(&paths.metadata_path, |w| write_metadata(w, &ctx.metadata))?;
        staged.stage(&paths.timeseries_path, |w| {
            write_timeseries(w, &ctx.timeseries)
        })?;
        staged.stage(&paths.allowlist_path, write_allowlist)?;
        if ctx.write_json {
            let summary = build_summary(ctx);
            staged.stage(&paths.summary_path, |w| write_summary(w, &summary))?;
        }

        ctx.written = staged.commit()?;
        info!(files = ctx.written.len(), "stage6_output_ready");
        Ok(())
    }
}
