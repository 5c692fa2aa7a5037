//! Aggregate statistics over the merged view.

use crate::types::LogEntry;
use serde::Serialize;
use std::collections::HashMap;

/// Number of sources ranked when no other limit is configured.
pub const DEFAULT_TOP_SOURCES: usize = 5;

/// Summary of every run the store knows about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub count: usize,
    pub newest: LogEntry,
    pub oldest: LogEntry,
    /// `(source_name, runs)`, most frequent first.
    pub top_sources: Vec<(String, usize)>,
}

impl Statistics {
    /// Summarise a newest-first view. `None` when the view is empty.
    ///
    /// Sources with equal counts keep the order in which they first appear
    /// in `view`.
    pub fn from_view(view: &[LogEntry], limit: usize) -> Option<Self> {
        let (newest, oldest) = (view.first()?, view.last()?);
        Some(Self {
            count: view.len(),
            newest: newest.clone(),
            oldest: oldest.clone(),
            top_sources: rank_sources(view, limit),
        })
    }
}

fn rank_sources(view: &[LogEntry], limit: usize) -> Vec<(String, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();
    for entry in view {
        match index.get(entry.source_name.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(&entry.source_name, counts.len());
                counts.push((entry.source_name.clone(), 1));
            }
        }
    }
    // stable: ties stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);
    counts
}
