use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::transform;

pub struct Stage3Metadata;

impl Stage3Metadata {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Metadata {
    fn name(&self) -> &'static str {
        "stage3_metadata"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let metadata = transform::extract(&ctx.records)?;
        info!(rows = metadata.len(), "metadata_ready");
        ctx.metadata = metadata;
        Ok(())
    }
}
