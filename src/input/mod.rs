use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

/// A subject file and the experiment group directory it sits in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub group: String,
    pub path: PathBuf,
}

pub fn is_record_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
        return false;
    };
    name.ends_with(".json") || name.ends_with(".json.gz")
}

/// Scans `<raw_dir>/<group>/<file>` in name order. The returned order is the
/// discovery order used for every output table.
pub fn discover(raw_dir: &Path) -> Result<Vec<SourceFile>> {
    if !raw_dir.is_dir() {
        bail!("raw data directory {} does not exist", raw_dir.display());
    }

    let mut sources = Vec::new();
    for group_dir in sorted_entries(raw_dir)? {
        if !group_dir.is_dir() {
            continue;
        }
        let group = group_dir
            .file_name()
            .and_then(|s| s.to_str())
            .with_context(|| format!("group directory {} is not UTF-8", group_dir.display()))?
            .to_string();
        for path in sorted_entries(&group_dir)? {
            if path.is_file() && is_record_file(&path) {
                sources.push(SourceFile {
                    group: group.clone(),
                    path,
                });
            }
        }
    }

    if sources.is_empty() {
        bail!("no subject files (*.json, *.json.gz) under {}", raw_dir.display());
    }
    Ok(sources)
}

pub fn groups(sources: &[SourceFile]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for source in sources {
        if out.last() != Some(&source.group) {
            out.push(source.group.clone());
        }
    }
    out
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = Vec::new();
    for entry in
        std::fs::read_dir(dir).with_context(|| format!("failed to list {}", dir.display()))?
    {
        let entry = entry.with_context(|| format!("failed to list {}", dir.display()))?;
        entries.push(entry.path());
    }
    entries.sort();
    Ok(entries)
}
