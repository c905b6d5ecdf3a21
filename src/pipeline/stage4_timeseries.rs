use anyhow::Result;
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::transform::{self, SERIES_WINDOW_MINUTES};

pub struct Stage4Timeseries;

impl Stage4Timeseries {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Timeseries {
    fn name(&self) -> &'static str {
        "stage4_timeseries"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let rows = transform::assemble(&ctx.records, &ctx.metadata)?;
        let assembled = rows.len();
        ctx.timeseries = transform::truncate(rows, SERIES_WINDOW_MINUTES);

        for id in ctx.subjects_without_timeseries() {
            warn!(id = %id, "subject has no measurements");
            ctx.warnings
                .push(format!("subject '{}' has no measurements", id));
        }

        info!(
            assembled,
            kept = ctx.timeseries.len(),
            window_minutes = SERIES_WINDOW_MINUTES,
            "timeseries_ready"
        );
        Ok(())
    }
}
