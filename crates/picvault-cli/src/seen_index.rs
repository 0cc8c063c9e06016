//! Local record of already-uploaded filenames.
//!
//! One empty marker file per uploaded filename, so repeated invocations on
//! the same target print the existing URL instead of re-uploading. The index
//! is advisory; `--force` bypasses it.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub struct SeenIndex {
    dir: PathBuf,
}

impl SeenIndex {
    /// Resolve the index directory: `PICVAULT_SEEN_INDEX` if set, otherwise
    /// `$XDG_DATA_HOME/picvault_seen`, otherwise `~/.local/share/picvault_seen`.
    pub fn from_env() -> Result<Self> {
        if let Ok(dir) = std::env::var("PICVAULT_SEEN_INDEX") {
            return Ok(Self::at(dir));
        }
        if let Ok(data_home) = std::env::var("XDG_DATA_HOME") {
            return Ok(Self::at(Path::new(&data_home).join("picvault_seen")));
        }
        let home = std::env::var("HOME").context("HOME is not set")?;
        Ok(Self::at(
            Path::new(&home).join(".local/share/picvault_seen"),
        ))
    }

    pub fn at(dir: impl Into<PathBuf>) -> Self {
        SeenIndex { dir: dir.into() }
    }

    pub fn contains(&self, filename: &str) -> bool {
        self.marker_path(filename).is_file()
    }

    pub fn mark(&self, filename: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating seen index at {}", self.dir.display()))?;
        std::fs::write(self.marker_path(filename), b"")
            .with_context(|| format!("marking '{}' as seen", filename))?;
        Ok(())
    }

    /// Slashes in the filename would escape the index directory.
    fn marker_path(&self, filename: &str) -> PathBuf {
        self.dir.join(filename.replace(['/', '\\'], "_"))
    }
}
