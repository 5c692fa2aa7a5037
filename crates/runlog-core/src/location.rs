//! Log locations — the ordered set of files the store knows about.
//!
//! Exactly one location is the primary (read-write, newest-first, owns the
//! header). Every other location is legacy: consulted for numbering and for
//! the merged view, never written.

use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Whether a location receives new entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationRole {
    Primary,
    Legacy,
}

impl std::fmt::Display for LocationRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationRole::Primary => write!(f, "primary"),
            LocationRole::Legacy => write!(f, "legacy"),
        }
    }
}

/// One named candidate file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogLocation {
    pub name: String,
    pub path: PathBuf,
    pub role: LocationRole,
}

impl LogLocation {
    pub fn primary(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            role: LocationRole::Primary,
        }
    }

    pub fn legacy(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            role: LocationRole::Legacy,
        }
    }
}

/// Validated, ordered location list.
///
/// Scans visit locations in this order. Paths are compared component-wise;
/// a path listed more than once is kept only at its first position.
#[derive(Debug, Clone)]
pub struct Locations {
    all: Vec<LogLocation>,
    primary: usize,
}

impl Locations {
    /// Validate `locations`, resolving relative paths against `base_dir`.
    pub fn new(
        locations: impl IntoIterator<Item = LogLocation>,
        base_dir: Option<&Path>,
    ) -> Result<Self, StoreError> {
        let mut all: Vec<LogLocation> = Vec::new();
        for mut loc in locations {
            if let Some(base) = base_dir {
                if loc.path.is_relative() {
                    loc.path = base.join(&loc.path);
                }
            }
            match all.iter_mut().find(|known| known.path == loc.path) {
                Some(known) => {
                    if loc.role == LocationRole::Primary {
                        known.role = LocationRole::Primary;
                    }
                    tracing::debug!(
                        name = %loc.name,
                        path = %loc.path.display(),
                        "duplicate log location ignored"
                    );
                }
                None => all.push(loc),
            }
        }

        let primaries: Vec<usize> = all
            .iter()
            .enumerate()
            .filter(|(_, l)| l.role == LocationRole::Primary)
            .map(|(i, _)| i)
            .collect();
        match primaries.as_slice() {
            [one] => Ok(Self { primary: *one, all }),
            [] => Err(StoreError::invalid_locations("no primary location configured")),
            many => Err(StoreError::invalid_locations(format!(
                "{} primary locations configured, expected exactly one",
                many.len()
            ))),
        }
    }

    pub fn primary(&self) -> &LogLocation {
        &self.all[self.primary]
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogLocation> {
        self.all.iter()
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}
