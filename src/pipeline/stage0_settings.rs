use anyhow::Result;
use tracing::info;

use crate::config::Settings;
use crate::ctx::Ctx;
use crate::pipeline::Stage;

pub struct Stage0Settings;

impl Stage0Settings {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage0Settings {
    fn name(&self) -> &'static str {
        "stage0_settings"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if let Some(path) = &ctx.settings_path {
            ctx.settings = Settings::load(path)?;
            info!(settings = %path.display(), "settings_loaded");
        }
        info!(
            output_figure = ctx.settings.output_figure,
            output_report = ctx.settings.output_report,
            parallel_chains = ctx.settings.parallel_chains,
            "settings_ready"
        );
        Ok(())
    }
}
