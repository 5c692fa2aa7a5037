//! Store — numbered run log spread over one primary and several legacy files.
//!
//! Every operation is a blocking pass over the files named by
//! [`Locations`]; nothing is cached between calls.
//!
//! - [`LogStore::next_sequence`] takes the maximum over *all* locations.
//! - [`LogStore::record`] inserts at the top of the primary file, below its
//!   comment header, by rewriting the whole file through a temp file.
//! - [`LogStore::merged_view`] reads all locations, drops physical duplicates
//!   of the same logical entry and sorts newest first.
//!
//! Malformed lines and unreadable locations are skipped, never reported as
//! errors. There is no locking: two processes recording at the same moment
//! can lose one of the two inserts.

use crate::config::Config;
use crate::error::{ScanIssue, StoreError};
use crate::format::{self, LineKind};
use crate::location::{LocationRole, Locations, LogLocation};
use crate::stats::{Statistics, DEFAULT_TOP_SOURCES};
use crate::types::{LogEntry, SourceInfo};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// What a scan found in one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationReport {
    pub name: String,
    pub path: PathBuf,
    pub role: LocationRole,
    pub readable: bool,
    /// Lines that parse as complete entries.
    pub entries: usize,
    /// Data lines that do not.
    pub skipped: usize,
    /// Highest sequence this location contributes to numbering.
    pub max_sequence: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct LogStore {
    locations: Locations,
    banner: String,
    top_sources: usize,
}

impl LogStore {
    pub fn new(locations: Locations, banner: impl Into<String>) -> Self {
        Self {
            locations,
            banner: banner.into(),
            top_sources: DEFAULT_TOP_SOURCES,
        }
    }

    /// Build a store from the `[store]` and `[report]` sections.
    pub fn from_config(config: &Config) -> Result<Self, StoreError> {
        Ok(Self::new(config.store.locations()?, config.store.banner.clone())
            .with_top_sources(config.report.top_sources))
    }

    /// Number of sources ranked by [`LogStore::statistics`].
    pub fn with_top_sources(mut self, n: usize) -> Self {
        self.top_sources = n;
        self
    }

    pub fn locations(&self) -> &Locations {
        &self.locations
    }

    pub fn primary_path(&self) -> &Path {
        &self.locations.primary().path
    }

    // -----------------------------------------------------------------------
    // Numbering
    // -----------------------------------------------------------------------

    /// `1 + ` the highest sequence found in any location, or `1` when none
    /// holds a numbered line. Only the first field of each line is read.
    ///
    /// Sequences above [`format::MAX_SEQUENCE`] are skipped, so the result
    /// never wraps; it is `u64::MAX` only when the numbering is exhausted.
    pub fn next_sequence(&self) -> u64 {
        let mut max: u64 = 0;
        for location in self.locations.iter() {
            let Some(text) = read_location(location) else {
                continue;
            };
            for (line_no, line) in data_lines(&text) {
                match format::parse_sequence(line) {
                    Ok(seq) => max = max.max(seq),
                    Err(reason) => skip(location, line_no, reason),
                }
            }
        }
        max.saturating_add(1)
    }

    // -----------------------------------------------------------------------
    // Writing
    // -----------------------------------------------------------------------

    /// Record a run of `source` now.
    pub fn record_run(&self, source: &SourceInfo) -> Result<LogEntry, StoreError> {
        self.record_run_at(source, chrono::Local::now().naive_local())
    }

    /// Record a run of `source` stamped with `at`.
    pub fn record_run_at(
        &self,
        source: &SourceInfo,
        at: NaiveDateTime,
    ) -> Result<LogEntry, StoreError> {
        let entry = LogEntry::stamped(self.next_sequence(), source, at);
        self.record(&entry)?;
        Ok(entry)
    }

    /// Insert `entry` as the first data line of the primary file.
    ///
    /// Creates the file with its header when missing. Comment lines keep
    /// their relative order above the data block; existing data lines keep
    /// theirs below the new line.
    ///
    /// An entry whose sequence a scan would skip is refused with
    /// [`StoreError::SequenceOutOfRange`] before any file is touched.
    pub fn record(&self, entry: &LogEntry) -> Result<(), StoreError> {
        if entry.sequence == 0 || entry.sequence > format::MAX_SEQUENCE {
            return Err(StoreError::SequenceOutOfRange(entry.sequence));
        }
        let path = self.primary_path();
        let fail = |source| StoreError::write_failure(path, source);

        if !path.exists() {
            ensure_parent_dir(path);
            self.create_with_header(path).map_err(fail)?;
        }

        let existing = fs::read_to_string(path).map_err(fail)?;
        let (header, data) = partition(&existing);

        let mut contents = String::with_capacity(existing.len() + 128);
        for line in header {
            push_line(&mut contents, line);
        }
        contents.push_str(&format::format_line(entry));
        for line in data {
            push_line(&mut contents, line);
        }

        rewrite(path, &contents).map_err(fail)?;
        tracing::debug!(
            sequence = entry.sequence,
            source = %entry.source_name,
            path = %path.display(),
            "run recorded"
        );
        Ok(())
    }

    fn create_with_header(&self, path: &Path) -> io::Result<()> {
        let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(file) => file,
            // someone else created it between the check and the open
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(()),
            Err(e) => return Err(e),
        };
        for line in format::header_lines(&self.banner) {
            writeln!(file, "{line}")?;
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Reading
    // -----------------------------------------------------------------------

    /// All logical entries across every location, newest first.
    pub fn merged_view(&self) -> Vec<LogEntry> {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();
        for location in self.locations.iter() {
            let Some(text) = read_location(location) else {
                continue;
            };
            for (line_no, line) in data_lines(&text) {
                match format::parse_entry(line) {
                    Ok(entry) => {
                        if seen.insert(entry.key()) {
                            entries.push(entry);
                        }
                    }
                    Err(reason) => skip(location, line_no, reason),
                }
            }
        }
        entries.sort_by(|a, b| b.sequence.cmp(&a.sequence));
        entries
    }

    /// Summary of the merged view. `None` when no location holds an entry.
    pub fn statistics(&self) -> Option<Statistics> {
        Statistics::from_view(&self.merged_view(), self.top_sources)
    }

    /// Per-location scan results, in scan order.
    pub fn inspect_locations(&self) -> Vec<LocationReport> {
        self.locations
            .iter()
            .map(|location| {
                let mut report = LocationReport {
                    name: location.name.clone(),
                    path: location.path.clone(),
                    role: location.role,
                    readable: false,
                    entries: 0,
                    skipped: 0,
                    max_sequence: None,
                };
                if let Some(text) = read_location(location) {
                    report.readable = true;
                    for (_, line) in data_lines(&text) {
                        // the maximum follows numbering, which reads only the first field
                        if let Ok(seq) = format::parse_sequence(line) {
                            report.max_sequence = report.max_sequence.max(Some(seq));
                        }
                        match format::parse_entry(line) {
                            Ok(_) => report.entries += 1,
                            Err(_) => report.skipped += 1,
                        }
                    }
                }
                report
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Scan helpers
// ---------------------------------------------------------------------------

fn read_location(location: &LogLocation) -> Option<String> {
    match fs::read_to_string(&location.path) {
        Ok(text) => Some(text),
        Err(source) => {
            let issue = ScanIssue::LocationUnavailable {
                path: location.path.clone(),
                source,
            };
            tracing::debug!(location = %location.name, "skipping location: {issue}");
            None
        }
    }
}

/// Data lines with their 1-based line numbers.
fn data_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .filter_map(|(i, line)| match format::classify(line) {
            LineKind::Data(line) => Some((i + 1, line)),
            LineKind::Blank | LineKind::Comment => None,
        })
}

fn skip(location: &LogLocation, line: usize, reason: &'static str) {
    let issue = ScanIssue::ParseSkip { line, reason };
    tracing::trace!(location = %location.name, "skipping line: {issue}");
}

// ---------------------------------------------------------------------------
// Write helpers
// ---------------------------------------------------------------------------

/// Split raw file text into comment lines and everything else, each group in
/// file order. Lines keep their original terminators.
fn partition(text: &str) -> (Vec<&str>, Vec<&str>) {
    text.split_inclusive('\n')
        .partition(|line| line.starts_with(format::COMMENT_MARKER))
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    if !line.ends_with('\n') {
        out.push('\n');
    }
}

fn ensure_parent_dir(path: &Path) {
    let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return;
    };
    if let Err(err) = fs::create_dir_all(parent) {
        tracing::warn!(dir = %parent.display(), error = %err, "could not create log directory");
    }
}

/// Replace `path` with `contents` via a temp file in the same directory.
fn rewrite(path: &Path, contents: &str) -> io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    if let Ok(meta) = fs::metadata(path) {
        tmp.as_file().set_permissions(meta.permissions())?;
    }
    tmp.write_all(contents.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
