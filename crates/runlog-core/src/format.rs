//! Line codec for the tab-delimited log file format.
//!
//! ```text
//! # <banner>
//! # Sequence<TAB>Date<TAB>Time<TAB>SourceName<TAB>SourcePath
//! #================================================================================
//! <seq>\t<date>\t<time>\t<sourceName>\t<sourcePath>
//! ```
//!
//! Comment lines start with `#` in the first column. Data lines carry four or
//! five fields; the fifth (source path) is optional.

use crate::types::LogEntry;

pub const COMMENT_MARKER: char = '#';
pub const FIELD_SEPARATOR: char = '\t';

/// Fields a data line needs before it can be read back as an entry.
pub const MIN_ENTRY_FIELDS: usize = 4;

/// Largest sequence a data line may carry; one past it is never written.
pub const MAX_SEQUENCE: u64 = u64::MAX - 1;

const SEPARATOR_WIDTH: usize = 80;
const RESERVED: &[char] = &['\t', '\n', '\r'];

/// How a raw line of a log file is treated by scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    Comment,
    Data(&'a str),
}

/// Classify one line (with or without its trailing newline).
pub fn classify(line: &str) -> LineKind<'_> {
    if line.starts_with(COMMENT_MARKER) {
        LineKind::Comment
    } else if line.trim().is_empty() {
        LineKind::Blank
    } else {
        LineKind::Data(line)
    }
}

/// The fixed three-line header written when a primary file is created.
pub fn header_lines(banner: &str) -> [String; 3] {
    [
        format!("{COMMENT_MARKER} {banner}"),
        format!("{COMMENT_MARKER} Sequence\tDate\tTime\tSourceName\tSourcePath"),
        format!("{COMMENT_MARKER}{}", "=".repeat(SEPARATOR_WIDTH)),
    ]
}

/// Parse only the sequence number of a data line.
///
/// Numbering needs nothing else, so a line with a valid first field counts
/// towards the running maximum even if the rest of it is unreadable.
pub fn parse_sequence(line: &str) -> Result<u64, &'static str> {
    let first = line.split(FIELD_SEPARATOR).next().unwrap_or_default();
    parse_positive(first)
}

/// Parse a full data line into a [`LogEntry`].
pub fn parse_entry(line: &str) -> Result<LogEntry, &'static str> {
    let fields: Vec<&str> = line.trim().split(FIELD_SEPARATOR).collect();
    if fields.len() < MIN_ENTRY_FIELDS {
        return Err("expected at least 4 tab-separated fields");
    }
    Ok(LogEntry {
        sequence: parse_positive(fields[0])?,
        date: fields[1].to_string(),
        time: fields[2].to_string(),
        source_name: fields[3].to_string(),
        source_path: fields.get(4).map(|s| s.to_string()).unwrap_or_default(),
    })
}

/// Render an entry as one newline-terminated data line.
pub fn format_line(entry: &LogEntry) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}\n",
        entry.sequence,
        field(&entry.date),
        field(&entry.time),
        field(&entry.source_name),
        field(&entry.source_path),
    )
}

fn parse_positive(field: &str) -> Result<u64, &'static str> {
    match field.trim().parse::<u64>() {
        Ok(0) | Err(_) => Err("sequence is not a positive integer"),
        Ok(n) if n > MAX_SEQUENCE => Err("sequence out of range"),
        Ok(n) => Ok(n),
    }
}

// Separators inside a value would split it into extra columns on read-back.
fn field(value: &str) -> std::borrow::Cow<'_, str> {
    if value.contains(RESERVED) {
        value.replace(RESERVED, " ").into()
    } else {
        value.into()
    }
}
