//! Label lookups built once per segment list.

use std::collections::HashMap;

use hc_core::PathId;

use crate::graph::Segment;

/// Maps node labels to the segments touching them.
///
/// `by_end` holds only the first segment seen for each end label; duplicates
/// are reported by validation before the index is used for adjacency.
#[derive(Debug, Clone, Default)]
pub struct LabelIndex {
    by_end: HashMap<String, PathId>,
    by_start: HashMap<String, Vec<PathId>>,
}

impl LabelIndex {
    pub fn build(segments: &[Segment]) -> Self {
        let mut index = Self::default();
        for seg in segments {
            index
                .by_start
                .entry(seg.start.clone())
                .or_default()
                .push(seg.id);
            if let Some(end) = &seg.end {
                index.by_end.entry(end.clone()).or_insert(seg.id);
            }
        }
        index
    }

    /// Segment ending at `label`.
    pub fn ending_at(&self, label: &str) -> Option<PathId> {
        self.by_end.get(label).copied()
    }

    /// Segments starting at `label`, in declaration order.
    pub fn starting_at(&self, label: &str) -> &[PathId] {
        self.by_start.get(label).map_or(&[], Vec::as_slice)
    }
}
