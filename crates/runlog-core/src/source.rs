//! Source resolution — who is asking for a run to be recorded.
//!
//! The invoking program names itself. [`identify`] turns that (or, failing
//! that, the running executable) into a [`SourceInfo`]. It never fails: when
//! nothing usable is available the sentinel `("Unknown", "Unknown")` is
//! returned.

use crate::types::SourceInfo;
use std::path::Path;

pub const UNKNOWN: &str = "Unknown";

/// Resolve the identity of the recording program.
///
/// `explicit` is the path the program reports for itself. When it is `None`
/// the current executable is used.
pub fn identify(explicit: Option<&Path>) -> SourceInfo {
    match explicit {
        Some(path) => from_path(path),
        None => std::env::current_exe()
            .map(|exe| from_path(&exe))
            .unwrap_or_else(|err| {
                tracing::debug!(error = %err, "current executable unavailable");
                unknown()
            }),
    }
}

/// Identity derived from a path: base name plus the path as given.
pub fn from_path(path: &Path) -> SourceInfo {
    match path.file_name() {
        Some(name) if !name.is_empty() => SourceInfo {
            name: name.to_string_lossy().into_owned(),
            path: path.to_string_lossy().into_owned(),
        },
        _ => unknown(),
    }
}

/// The sentinel identity used when the caller cannot be determined.
pub fn unknown() -> SourceInfo {
    SourceInfo {
        name: UNKNOWN.to_string(),
        path: UNKNOWN.to_string(),
    }
}
