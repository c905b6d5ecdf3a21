use std::io::Write;

use anyhow::Result;

use crate::genotype::ALLOW_LIST;

pub fn write_allowlist(w: &mut dyn Write) -> Result<()> {
    for label in ALLOW_LIST {
        writeln!(w, "{}", label)?;
    }
    Ok(())
}
