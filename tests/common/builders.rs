//! Test builders — ergonomic constructors for `LogEntry` values and
//! temp-directory log stores.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use chrono::{NaiveDate, NaiveDateTime};
use runlog_core::config::Config;
use runlog_core::format;
use runlog_core::{LogEntry, LogStore, SourceInfo};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// LogEntryBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`LogEntry`] test fixtures.
///
/// # Example
///
/// ```rust
/// let entry = LogEntryBuilder::new(12)
///     .source("pdf.py")
///     .at("2025-10-08", "14:30:25")
///     .build();
/// ```
pub struct LogEntryBuilder {
    sequence: u64,
    date: String,
    time: String,
    source_name: String,
    source_path: String,
}

impl LogEntryBuilder {
    pub fn new(sequence: u64) -> Self {
        Self {
            sequence,
            date: "2025-10-08".to_string(),
            time: "12:00:00".to_string(),
            source_name: "main.py".to_string(),
            source_path: "/home/ada/neurogames/main.py".to_string(),
        }
    }

    /// Set the source name; the path becomes `/home/ada/neurogames/<name>`.
    pub fn source(mut self, name: impl Into<String>) -> Self {
        self.source_name = name.into();
        self.source_path = format!("/home/ada/neurogames/{}", self.source_name);
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.source_path = path.into();
        self
    }

    pub fn at(mut self, date: impl Into<String>, time: impl Into<String>) -> Self {
        self.date = date.into();
        self.time = time.into();
        self
    }

    pub fn build(self) -> LogEntry {
        LogEntry {
            sequence: self.sequence,
            date: self.date,
            time: self.time,
            source_name: self.source_name,
            source_path: self.source_path,
        }
    }

    /// The entry as a newline-terminated data line.
    pub fn line(self) -> String {
        format::format_line(&self.build())
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Entry `sequence` from `name`, stamped at second `sequence % 60`.
pub fn entry(sequence: u64, name: &str) -> LogEntry {
    LogEntryBuilder::new(sequence)
        .source(name)
        .at("2025-10-08", format!("12:00:{:02}", sequence % 60))
        .build()
}

/// A data line for `entry(sequence, name)`.
pub fn line(sequence: u64, name: &str) -> String {
    format::format_line(&entry(sequence, name))
}

pub fn source(name: &str) -> SourceInfo {
    SourceInfo {
        name: name.to_string(),
        path: format!("/home/ada/neurogames/{name}"),
    }
}

/// A fixed local timestamp, `second` seconds past 2025-10-08 12:00:00.
pub fn at(second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 10, 8)
        .unwrap()
        .and_hms_opt(12, 0, second % 60)
        .unwrap()
}

// ---------------------------------------------------------------------------
// TestStore
// ---------------------------------------------------------------------------

/// A [`LogStore`] using the default location list, rooted in a temp dir.
///
/// Layout (relative to the temp dir):
///
/// | location | path | role |
/// |----------|------|------|
/// | `current` | `logs/program_log.txt` | primary |
/// | `root` | `program_log.txt` | legacy |
/// | `sub` | `sub/program_log.txt` | legacy |
pub struct TestStore {
    pub dir: TempDir,
    pub config: Config,
    pub store: LogStore,
}

impl TestStore {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = Config::rooted_at(dir.path());
        let store = LogStore::from_config(&config).expect("default locations are valid");
        Self { dir, config, store }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    pub fn primary(&self) -> &Path {
        self.store.primary_path()
    }

    /// Write `contents` to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, contents: &str) -> &Self {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dir");
        }
        std::fs::write(&path, contents).expect("write fixture file");
        self
    }

    /// Write a legacy file at `program_log.txt`.
    pub fn root_legacy(&self, contents: &str) -> &Self {
        self.write("program_log.txt", contents)
    }

    /// Write a legacy file at `sub/program_log.txt`.
    pub fn sub_legacy(&self, contents: &str) -> &Self {
        self.write("sub/program_log.txt", contents)
    }

    /// Write the primary file at `logs/program_log.txt`.
    pub fn primary_file(&self, contents: &str) -> &Self {
        self.write("logs/program_log.txt", contents)
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative)).expect("read log file")
    }

    pub fn read_primary(&self) -> String {
        std::fs::read_to_string(self.primary()).expect("read primary log file")
    }

    /// Record a run of `name` at second `second`.
    pub fn record(&self, name: &str, second: u32) -> LogEntry {
        self.store
            .record_run_at(&source(name), at(second))
            .expect("record run")
    }
}
