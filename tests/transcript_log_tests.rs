// Tests for the per-session transcript audit log

use anyhow::Result;
use case_interviewer::TranscriptLog;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_append_creates_directory_and_file() -> Result<()> {
    let tmp = TempDir::new()?;
    let dir = tmp.path().join("transcripts");
    let log = TranscriptLog::new(&dir);

    log.append("s1", "first answer")?;

    assert!(dir.is_dir(), "Directory should be created on demand");
    let path = log.path_for("s1");
    assert!(path.ends_with("s1.txt"));
    assert_eq!(fs::read_to_string(path)?, "first answer\n");

    Ok(())
}

#[test]
fn test_append_accumulates_lines() -> Result<()> {
    let tmp = TempDir::new()?;
    let log = TranscriptLog::new(tmp.path());

    log.append("s1", "first answer")?;
    log.append("s1", "second answer")?;

    let content = fs::read_to_string(log.path_for("s1"))?;
    assert_eq!(content, "first answer\nsecond answer\n");

    Ok(())
}

#[test]
fn test_sessions_are_logged_to_separate_files() -> Result<()> {
    let tmp = TempDir::new()?;
    let log = TranscriptLog::new(tmp.path());

    log.append("s1", "from s1")?;
    log.append("s2", "from s2")?;

    assert_eq!(fs::read_to_string(log.path_for("s1"))?, "from s1\n");
    assert_eq!(fs::read_to_string(log.path_for("s2"))?, "from s2\n");

    Ok(())
}
