//! Domain-specific assertion macros for runlog harnesses.
//!
//! These add context-rich failure messages that make it clear *which* log
//! invariant was violated and show the offending file or view.

use runlog_core::LogEntry;

// ---------------------------------------------------------------------------
// View assertions
// ---------------------------------------------------------------------------

/// Assert that a view is sorted by sequence, highest first, with no repeats.
///
/// ```rust
/// assert_newest_first!(store.merged_view());
/// ```
#[macro_export]
macro_rules! assert_newest_first {
    ($view:expr) => {{
        let view: &[runlog_core::LogEntry] = &$view;
        let seqs: Vec<u64> = view.iter().map(|e| e.sequence).collect();
        if !seqs.windows(2).all(|w| w[0] >= w[1]) {
            panic!(
                "assert_newest_first! failed: view is not sorted newest first.\n  sequences: {:?}",
                seqs
            );
        }
    }};
}

/// Assert the sequence numbers of a view, in order.
///
/// ```rust
/// assert_sequences!(store.merged_view(), [3, 2, 1]);
/// ```
#[macro_export]
macro_rules! assert_sequences {
    ($view:expr, $expected:expr) => {{
        let view: &[runlog_core::LogEntry] = &$view;
        let actual: Vec<u64> = view.iter().map(|e| e.sequence).collect();
        let expected: Vec<u64> = $expected.iter().copied().collect();
        pretty_assertions::assert_eq!(actual, expected, "assert_sequences! failed");
    }};
}

// ---------------------------------------------------------------------------
// File layout assertions
// ---------------------------------------------------------------------------

/// Assert that no comment line in `text` appears after a non-comment line.
#[macro_export]
macro_rules! assert_header_on_top {
    ($text:expr) => {{
        let text: &str = &$text;
        let mut seen_data = false;
        for (i, line) in text.lines().enumerate() {
            if line.starts_with('#') {
                if seen_data {
                    panic!(
                        "assert_header_on_top! failed: comment on line {} follows data.\n---\n{}---",
                        i + 1,
                        text
                    );
                }
            } else {
                seen_data = true;
            }
        }
    }};
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Sequence numbers of the data lines of a log file, top to bottom.
pub fn file_sequences(text: &str) -> Vec<u64> {
    text.lines()
        .filter(|l| !l.starts_with('#') && !l.trim().is_empty())
        .filter_map(|l| l.split('\t').next()?.trim().parse().ok())
        .collect()
}

/// First data line of a log file, if any.
pub fn top_data_line(text: &str) -> Option<&str> {
    text.lines()
        .find(|l| !l.starts_with('#') && !l.trim().is_empty())
}

/// Source names of a view, in order.
pub fn source_names(view: &[LogEntry]) -> Vec<&str> {
    view.iter().map(|e| e.source_name.as_str()).collect()
}
