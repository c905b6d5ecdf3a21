use std::collections::HashMap;

use anyhow::{Result, bail};

use crate::genotype::genotype_label;
use crate::record::SourcedRecord;
use crate::schema::v1::MouseMetadataRow;

/// One metadata row per record, in record order.
pub fn extract(records: &[SourcedRecord]) -> Result<Vec<MouseMetadataRow>> {
    let mut seen: HashMap<&str, &SourcedRecord> = HashMap::new();
    let mut rows = Vec::with_capacity(records.len());

    for sourced in records {
        let raw = &sourced.record;
        if raw.strain.trim().is_empty() {
            bail!("{}: subject '{}' has an empty strain", sourced.path.display(), raw.id);
        }
        if let Some(first) = seen.insert(raw.id.as_str(), sourced) {
            bail!(
                "duplicate subject id '{}' in {} (first seen in {})",
                raw.id,
                sourced.path.display(),
                first.path.display()
            );
        }

        rows.push(MouseMetadataRow {
            id: raw.id.clone(),
            strain: raw.strain.clone(),
            birthdate: raw.birthdate,
            start_body_weight: raw.start_body_weight,
            end_body_weight: raw.end_body_weight,
            ambient_temperature: raw.ambient_temperature,
            experiment_id: raw.experiment_id.clone(),
            start_timestamp: raw.start_timestamp.clone(),
            end_timestamp: raw.end_timestamp.clone(),
            genotype: genotype_label(&sourced.source_group, &raw.strain),
        });
    }

    Ok(rows)
}
