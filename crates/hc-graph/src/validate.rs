//! Structural checks on a segment list.

use std::collections::HashMap;

use hc_core::PathId;

use crate::error::{GraphError, GraphResult};
use crate::graph::Segment;

/// Exactly one segment must start at the source label.
pub(crate) fn single_source(segments: &[Segment], source_label: &str) -> GraphResult<PathId> {
    let mut sources = segments.iter().filter(|s| s.start == source_label);
    let first = sources.next().ok_or_else(|| GraphError::NoSource {
        label: source_label.to_string(),
    })?;
    let extra = sources.count();
    if extra > 0 {
        return Err(GraphError::MultipleSources {
            label: source_label.to_string(),
            count: extra + 1,
        });
    }
    Ok(first.id)
}

/// No self-loops and no node entered by two segments.
pub(crate) fn unique_end_labels(segments: &[Segment]) -> GraphResult<()> {
    let mut seen: HashMap<&str, PathId> = HashMap::new();
    for seg in segments {
        let Some(end) = seg.end.as_deref() else {
            continue;
        };
        if end == seg.start {
            return Err(GraphError::SelfLoop {
                path: seg.id,
                label: end.to_string(),
            });
        }
        if let Some(&first) = seen.get(end) {
            return Err(GraphError::DuplicateEndLabel {
                label: end.to_string(),
                first,
                second: seg.id,
            });
        }
        seen.insert(end, seg.id);
    }
    Ok(())
}

/// Every segment must be reached from the source. Called after parents are
/// known; anything unreached while having a parent sits on a loop.
pub(crate) fn all_reached(
    segments: &[Segment],
    parent: &[Option<PathId>],
    reached: &[bool],
    source: PathId,
) -> GraphResult<()> {
    let unreached = || segments.iter().filter(|s| !reached[s.id.slot()]);
    if let Some(seg) = unreached().find(|s| s.id != source && parent[s.id.slot()].is_none()) {
        return Err(GraphError::DanglingPath {
            path: seg.id,
            start: seg.start.clone(),
        });
    }
    if let Some(seg) = unreached().next() {
        return Err(GraphError::Cycle { path: seg.id });
    }
    Ok(())
}
