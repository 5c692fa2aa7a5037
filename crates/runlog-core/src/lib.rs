//! runlog-core — numbered execution log merged across current and legacy files.
//!
//! A program calls [`LogStore::record_run`] once at startup. The store
//! numbers the run one past the highest number found in *any* known log file,
//! then inserts it at the top of the primary file. Readers get a merged,
//! deduplicated, newest-first view over every file.
//!
//! # Architecture
//!
//! ```text
//! source::identify ──► LogStore::record_run ──► primary file
//!                                                    │
//!                      legacy files ─────────────────┤
//!                                                    ▼
//!                      LogStore::merged_view ──► stats / report
//! ```
//!
//! Everything is synchronous and file-backed; no state is kept between calls.

pub mod config;
pub mod error;
pub mod format;
pub mod location;
pub mod report;
pub mod source;
pub mod stats;
pub mod store;
pub mod types;

pub use error::{ConfigError, ScanIssue, StoreError};
pub use location::{LocationRole, Locations, LogLocation};
pub use stats::Statistics;
pub use store::{LocationReport, LogStore};
pub use types::{EntryKey, LogEntry, SourceInfo};
