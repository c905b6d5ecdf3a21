use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use tempfile::{Builder, NamedTempFile};

pub mod allowlist;
pub mod json_writer;
pub mod summary;
pub mod tsv_writer;

const IO_BUF_CAPACITY: usize = 1 << 16;

pub(crate) fn open_maybe_gz(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path)?;
    if path.extension().and_then(|s| s.to_str()) == Some("gz") {
        let decoder = GzDecoder::new(file);
        Ok(Box::new(decoder))
    } else {
        Ok(Box::new(file))
    }
}

/// Output files staged next to their destination and renamed into place only
/// once every file of the run has been written in full.
pub struct StagedOutputs {
    dir: PathBuf,
    staged: Vec<(NamedTempFile, PathBuf)>,
}

impl StagedOutputs {
    pub fn new(dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
        Ok(Self {
            dir: dir.to_path_buf(),
            staged: Vec::new(),
        })
    }

    pub fn stage<F>(&mut self, dest: &Path, write: F) -> Result<()>
    where
        F: FnOnce(&mut dyn Write) -> Result<()>,
    {
        let tmp = staging_file(&self.dir, dest)
            .with_context(|| format!("failed to create temp file in {}", self.dir.display()))?;
        {
            let mut w = BufWriter::with_capacity(IO_BUF_CAPACITY, tmp.as_file());
            write(&mut w).with_context(|| format!("failed to write {}", dest.display()))?;
            w.flush()
                .with_context(|| format!("failed to flush {}", dest.display()))?;
        }
        tmp.as_file()
            .sync_all()
            .with_context(|| format!("failed to sync {}", dest.display()))?;
        self.staged.push((tmp, dest.to_path_buf()));
        Ok(())
    }

    /// Renames every staged file over its destination, replacing old outputs.
    pub fn commit(self) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(self.staged.len());
        for (tmp, dest) in self.staged {
            tmp.persist(&dest)
                .with_context(|| format!("failed to replace {}", dest.display()))?;
            written.push(dest);
        }
        Ok(written)
    }
}

// Staged files get the mode `File::create` would give them, or the mode of
// the file they replace.
fn staging_file(dir: &Path, dest: &Path) -> std::io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let tmp = builder.tempfile_in(dir)?;
    if let Ok(existing) = std::fs::metadata(dest) {
        tmp.as_file().set_permissions(existing.permissions())?;
    }
    Ok(tmp)
}
