//! Human-readable and JSON rendering of the merged view and statistics.
//!
//! Every renderer writes to any [`io::Write`]; the `print_*` helpers bind
//! them to stdout for callers that only want the table on screen.

use crate::stats::Statistics;
use crate::store::{LocationReport, LogStore};
use crate::types::LogEntry;
use serde::Serialize;
use std::io::{self, Write};

pub const NO_ENTRIES: &str = "No log entries found.";

const RULE_WIDTH: usize = 60;

/// Presentation switches for the merged view table.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewOptions {
    /// Add the full source path as a last column.
    pub show_paths: bool,
    /// Show at most this many rows. The total line still counts every entry.
    pub limit: Option<usize>,
}

/// Render the merged view as a table, newest first.
pub fn render_view<W: Write + ?Sized>(
    out: &mut W,
    view: &[LogEntry],
    opts: ViewOptions,
) -> io::Result<()> {
    writeln!(out, "=== Program execution log ===")?;
    if view.is_empty() {
        return writeln!(out, "{NO_ENTRIES}");
    }

    let header = format!("{:<6} {:<12} {:<10} {:<20}", "Seq", "Date", "Time", "Source");
    if opts.show_paths {
        writeln!(out, "{header} Path")?;
    } else {
        writeln!(out, "{}", header.trim_end())?;
    }
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;

    let shown = opts.limit.unwrap_or(view.len());
    for entry in view.iter().take(shown) {
        let row = format!(
            "{:<6} {:<12} {:<10} {:<20}",
            entry.sequence, entry.date, entry.time, entry.source_name
        );
        if opts.show_paths {
            writeln!(out, "{row} {}", entry.source_path)?;
        } else {
            writeln!(out, "{}", row.trim_end())?;
        }
    }
    if shown < view.len() {
        writeln!(out, "... {} older runs not shown", view.len() - shown)?;
    }

    writeln!(out)?;
    writeln!(out, "Total: {} runs", view.len())
}

/// Render the statistics summary. `None` renders the "no data" message.
pub fn render_statistics<W: Write + ?Sized>(
    out: &mut W,
    stats: Option<&Statistics>,
) -> io::Result<()> {
    writeln!(out, "=== Log statistics ===")?;
    let Some(stats) = stats else {
        return writeln!(out, "{NO_ENTRIES}");
    };

    writeln!(out, "Runs recorded: {}", stats.count)?;
    writeln!(out, "Newest run:    {}", stamp(&stats.newest))?;
    writeln!(out, "Oldest run:    {}", stamp(&stats.oldest))?;

    if !stats.top_sources.is_empty() {
        writeln!(out)?;
        writeln!(out, "Most frequent sources:")?;
        for (name, count) in &stats.top_sources {
            writeln!(out, "  {name}: {count}x")?;
        }
    }
    Ok(())
}

/// Render one row per known location.
pub fn render_locations<W: Write + ?Sized>(
    out: &mut W,
    reports: &[LocationReport],
) -> io::Result<()> {
    writeln!(
        out,
        "{:<12} {:<8} {:>7} {:>7} {:>7}  Path",
        "Name", "Role", "Entries", "Skipped", "Max"
    )?;
    for r in reports {
        if r.readable {
            let max = r.max_sequence.map_or_else(|| "-".to_string(), |m| m.to_string());
            writeln!(
                out,
                "{:<12} {:<8} {:>7} {:>7} {:>7}  {}",
                r.name,
                r.role.to_string(),
                r.entries,
                r.skipped,
                max,
                r.path.display()
            )?;
        } else {
            writeln!(
                out,
                "{:<12} {:<8} {:>7} {:>7} {:>7}  {} (unavailable)",
                r.name,
                r.role.to_string(),
                "-",
                "-",
                "-",
                r.path.display()
            )?;
        }
    }
    Ok(())
}

/// Pretty-printed JSON followed by a newline.
pub fn render_json<W: Write + ?Sized, T: Serialize + ?Sized>(
    out: &mut W,
    value: &T,
) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

fn stamp(entry: &LogEntry) -> String {
    format!("{} {} (#{} {})", entry.date, entry.time, entry.sequence, entry.source_name)
}

// ---------------------------------------------------------------------------
// Stdout entry points
// ---------------------------------------------------------------------------

/// Print the merged view of `store` to stdout.
pub fn print_merged_view(store: &LogStore, opts: ViewOptions) {
    let view = store.merged_view();
    if let Err(err) = render_view(&mut io::stdout().lock(), &view, opts) {
        tracing::warn!(error = %err, "could not print log view");
    }
}

/// Print the statistics of `store` to stdout.
pub fn print_statistics(store: &LogStore) {
    let stats = store.statistics();
    if let Err(err) = render_statistics(&mut io::stdout().lock(), stats.as_ref()) {
        tracing::warn!(error = %err, "could not print log statistics");
    }
}
