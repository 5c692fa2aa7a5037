//! Core types for runlog-core.
//!
//! This module defines the record shared by every layer: the [`LogEntry`]
//! written once per program run, the [`SourceInfo`] identifying who ran, and
//! the [`EntryKey`] used to reconcile physical copies of the same entry.

use chrono::NaiveDateTime;
use serde::Serialize;

/// Date format written to the second column of a log line.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Time format written to the third column of a log line.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// One recorded program run.
///
/// `date` and `time` are kept as the text found on disk so that entries read
/// back from legacy files compare exactly as they were written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    /// Globally unique run number, strictly increasing in assignment order.
    pub sequence: u64,
    /// Local calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Local wall-clock time, `HH:MM:SS`.
    pub time: String,
    /// Short name of the program that ran (file base name).
    pub source_name: String,
    /// Full path of the program that ran. Empty when unknown.
    pub source_path: String,
}

impl LogEntry {
    /// Build an entry for `source`, stamped with `at`.
    pub fn stamped(sequence: u64, source: &SourceInfo, at: NaiveDateTime) -> Self {
        Self {
            sequence,
            date: at.format(DATE_FORMAT).to_string(),
            time: at.format(TIME_FORMAT).to_string(),
            source_name: source.name.clone(),
            source_path: source.path.clone(),
        }
    }

    /// Identity used when merging locations.
    pub fn key(&self) -> EntryKey {
        EntryKey {
            sequence: self.sequence,
            date: self.date.clone(),
            time: self.time.clone(),
            source_name: self.source_name.clone(),
        }
    }
}

/// Deduplication identity of a logical entry. `source_path` is not part of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryKey {
    pub sequence: u64,
    pub date: String,
    pub time: String,
    pub source_name: String,
}

/// Name and path of the unit that asked for a run to be recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceInfo {
    pub name: String,
    pub path: String,
}

impl std::fmt::Display for SourceInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.path.is_empty() || self.path == self.name {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} ({})", self.name, self.path)
        }
    }
}
