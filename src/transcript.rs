//! Per-session transcript audit log: every submitted answer is appended as
//! one line to `<dir>/<session_id>.txt`. Write-only; nothing reads it back.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct TranscriptLog {
    dir: PathBuf,
}

impl TranscriptLog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File that holds the transcript lines for one session.
    pub fn path_for(&self, session_id: &str) -> PathBuf {
        self.dir.join(format!("{session_id}.txt"))
    }

    /// Append one transcript line, creating the directory and file on
    /// demand.
    pub fn append(&self, session_id: &str, line: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create transcript dir {}", self.dir.display()))?;

        let path = self.path_for(session_id);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open transcript file {}", path.display()))?;

        writeln!(file, "{line}")
            .with_context(|| format!("Failed to write transcript line to {}", path.display()))?;

        Ok(())
    }
}
