use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Serialize `value` as pretty JSON (2-space indent, non-ASCII kept as-is)
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output")
}

/// A fully serialized document sitting in a temp file next to its destination
pub struct StagedFile {
    tmp: NamedTempFile,
    dest: PathBuf,
}

impl StagedFile {
    pub fn dest(&self) -> &Path {
        &self.dest
    }
}

/// Serialize `value` and write it to a temp file in the directory of `path`.
/// Nothing at `path` itself is touched until [`commit_all`].
pub fn stage_json<T: Serialize>(path: &Path, value: &T) -> Result<StagedFile> {
    let text = to_pretty_json(value)?;

    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {:?}", dir))?;

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temp file in: {:?}", dir))?;
    tmp.write_all(text.as_bytes())
        .with_context(|| format!("Failed to write: {:?}", tmp.path()))?;
    tmp.flush()?;

    Ok(StagedFile {
        tmp,
        dest: path.to_path_buf(),
    })
}

/// Move every staged file into place. If one fails, the files already moved
/// by this call are removed again and the remaining temp files are dropped.
pub fn commit_all(staged: Vec<StagedFile>) -> Result<()> {
    let mut committed: Vec<PathBuf> = Vec::with_capacity(staged.len());

    for file in staged {
        let dest = file.dest;
        if let Err(err) = file.tmp.persist(&dest) {
            for path in &committed {
                fs::remove_file(path).ok();
            }
            return Err(err.error)
                .with_context(|| format!("Failed to move output into place: {:?}", dest));
        }
        committed.push(dest);
    }

    Ok(())
}

/// Write `value` to `path` as pretty JSON through a temp file and rename, so
/// readers never see a partial file.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    commit_all(vec![stage_json(path, value)?])
}
