use anyhow::Result;
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::transform::{self, BASELINE_WINDOW_MINUTES};

pub struct Stage5Baseline;

impl Stage5Baseline {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage5Baseline {
    fn name(&self) -> &'static str {
        "stage5_baseline"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        transform::normalize(&mut ctx.timeseries);

        for id in ctx.subjects_without_baseline() {
            warn!(id = %id, "no vo2 values in the first day; baseline undefined");
            ctx.warnings.push(format!(
                "subject '{}' has no vo2 values before {} min; baseline is NA",
                id, BASELINE_WINDOW_MINUTES
            ));
        }

        info!("baseline_ready");
        Ok(())
    }
}
