use anyhow::Result;
use tracing::{debug, info};

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::record::{SourcedRecord, read_record};

pub struct Stage2Decode;

impl Stage2Decode {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Decode {
    fn name(&self) -> &'static str {
        "stage2_decode"
    }

    // Every file is decoded before anything else runs; one bad file fails
    // the whole run.
    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let mut records = Vec::with_capacity(ctx.sources.len());
        for source in &ctx.sources {
            let record = read_record(&source.path)?;
            debug!(
                path = %source.path.display(),
                id = %record.id,
                ticks = record.measurements.len(),
                "record_decoded"
            );
            records.push(SourcedRecord {
                source_group: source.group.clone(),
                path: source.path.clone(),
                record,
            });
        }
        info!(subjects = records.len(), "records_decoded");
        ctx.records = records;
        Ok(())
    }
}
