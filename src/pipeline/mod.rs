use anyhow::Result;
use std::time::Instant;
use tracing::{info, warn};

use crate::ctx::Ctx;

pub mod stage0_settings;
pub mod stage1_discover;
pub mod stage2_decode;
pub mod stage3_metadata;
pub mod stage4_timeseries;
pub mod stage5_baseline;
pub mod stage6_output;

pub trait Stage {
    fn name(&self) -> &'static str;
    fn run(&self, ctx: &mut Ctx) -> Result<()>;
}

pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    /// Settings through baseline; nothing is written.
    pub fn convert() -> Self {
        Self::new(vec![
            Box::new(stage0_settings::Stage0Settings::new()),
            Box::new(stage1_discover::Stage1Discover::new()),
            Box::new(stage2_decode::Stage2Decode::new()),
            Box::new(stage3_metadata::Stage3Metadata::new()),
            Box::new(stage4_timeseries::Stage4Timeseries::new()),
            Box::new(stage5_baseline::Stage5Baseline::new()),
        ])
    }

    pub fn full() -> Self {
        let mut pipeline = Self::convert();
        pipeline
            .stages
            .push(Box::new(stage6_output::Stage6Output::new()));
        pipeline
    }

    pub fn run(&self, ctx: &mut Ctx) -> Result<()> {
        for stage in &self.stages {
            let start = Instant::now();
            info!(stage = stage.name(), "stage started");
            if let Err(err) = stage.run(ctx) {
                let elapsed_ms = start.elapsed().as_millis();
                warn!(
                    stage = stage.name(),
                    elapsed_ms = elapsed_ms as u64,
                    "stage failed"
                );
                return Err(err);
            }
            let elapsed_ms = start.elapsed().as_millis();
            info!(
                stage = stage.name(),
                elapsed_ms = elapsed_ms as u64,
                "stage finished"
            );
        }
        Ok(())
    }
}
