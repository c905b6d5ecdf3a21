use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::input;
use crate::pipeline::Stage;

pub struct Stage1Discover;

impl Stage1Discover {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Discover {
    fn name(&self) -> &'static str {
        "stage1_discover"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let sources = input::discover(&ctx.raw_dir)?;
        let groups = input::groups(&sources);
        info!(
            raw_dir = %ctx.raw_dir.display(),
            groups = %groups.join(","),
            files = sources.len(),
            "raw_files_discovered"
        );
        ctx.sources = sources;
        Ok(())
    }
}
