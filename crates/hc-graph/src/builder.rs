//! Incremental tree builder.

use hc_core::PathId;

use crate::error::{GraphError, GraphResult};
use crate::graph::{PathTree, Segment};
use crate::indexing::LabelIndex;
use crate::validate;

/// Collects labelled segments, then validates and freezes them into a
/// [`PathTree`].
#[derive(Debug)]
pub struct PathTreeBuilder {
    source_label: String,
    segments: Vec<Segment>,
}

impl PathTreeBuilder {
    pub fn new(source_label: impl Into<String>) -> Self {
        Self {
            source_label: source_label.into(),
            segments: Vec::new(),
        }
    }

    /// Add a segment; ids follow insertion order.
    pub fn add_segment(&mut self, start: impl Into<String>, end: Option<&str>) -> PathId {
        let id = PathId::from_index(self.segments.len() as u32);
        self.segments.push(Segment {
            id,
            start: start.into(),
            end: end.map(str::to_string),
        });
        id
    }

    pub fn build(self) -> GraphResult<PathTree> {
        if self.segments.is_empty() {
            return Err(GraphError::Empty);
        }
        let source = validate::single_source(&self.segments, &self.source_label)?;
        validate::unique_end_labels(&self.segments)?;

        let index = LabelIndex::build(&self.segments);
        let n = self.segments.len();

        let parent: Vec<Option<PathId>> = self
            .segments
            .iter()
            .map(|seg| {
                if seg.id == source {
                    None
                } else {
                    index.ending_at(&seg.start)
                }
            })
            .collect();

        let mut child_offsets = Vec::with_capacity(n + 1);
        let mut children = Vec::new();
        child_offsets.push(0);
        for seg in &self.segments {
            if let Some(end) = &seg.end {
                children.extend(
                    index
                        .starting_at(end)
                        .iter()
                        .copied()
                        .filter(|&c| c != source),
                );
            }
            child_offsets.push(children.len());
        }

        // Iterative DFS from the source; a segment may only be visited once.
        let mut reached = vec![false; n];
        let mut pre_order = Vec::with_capacity(n);
        let mut stack = vec![source];
        while let Some(id) = stack.pop() {
            if reached[id.slot()] {
                return Err(GraphError::Cycle { path: id });
            }
            reached[id.slot()] = true;
            pre_order.push(id);
            let kids = &children[child_offsets[id.slot()]..child_offsets[id.slot() + 1]];
            stack.extend(kids.iter().rev().copied());
        }
        validate::all_reached(&self.segments, &parent, &reached, source)?;

        Ok(PathTree {
            segments: self.segments,
            source,
            parent,
            child_offsets,
            children,
            pre_order,
        })
    }
}
