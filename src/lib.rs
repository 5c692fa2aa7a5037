//! runlog — numbered execution log merged across current and legacy files.
//!
//! The binary records its own run on every invocation and then prints the
//! merged log, statistics, or a per-location summary. The store itself lives
//! in [`runlog_core`]; this crate holds the command-line surface so that
//! integration tests can drive it without spawning a process.
//!
//! # Architecture
//!
//! ```text
//! cli ──► runlog_core::LogStore ──► primary + legacy log files
//!  │
//!  └──► runlog_core::report ──► stdout
//! ```

pub mod cli;

pub use runlog_core::{LogEntry, LogStore, SourceInfo, Statistics};
