//! Frozen path tree.

use hc_core::PathId;

/// One labelled pipe run as entered by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub id: PathId,
    pub start: String,
    /// `None` for segments terminating at a fixture.
    pub end: Option<String>,
}

/// Immutable tree of segments rooted at the single source segment.
///
/// Children are stored in CSR form (`child_offsets`/`children`) in
/// declaration order, so traversals are deterministic.
#[derive(Debug, Clone)]
pub struct PathTree {
    pub(crate) segments: Vec<Segment>,
    pub(crate) source: PathId,
    pub(crate) parent: Vec<Option<PathId>>,
    pub(crate) child_offsets: Vec<usize>,
    pub(crate) children: Vec<PathId>,
    pub(crate) pre_order: Vec<PathId>,
}

impl PathTree {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segment(&self, id: PathId) -> Option<&Segment> {
        self.segments.get(id.slot())
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The segment leaving the source node.
    pub fn source(&self) -> PathId {
        self.source
    }

    /// Segment whose end feeds this one.
    pub fn parent(&self, id: PathId) -> Option<PathId> {
        self.parent.get(id.slot()).copied().flatten()
    }

    /// Segments fed by this one, in declaration order.
    pub fn children(&self, id: PathId) -> &[PathId] {
        let idx = id.slot();
        match (self.child_offsets.get(idx), self.child_offsets.get(idx + 1)) {
            (Some(&start), Some(&end)) => &self.children[start..end],
            _ => &[],
        }
    }

    pub fn fan_out(&self, id: PathId) -> usize {
        self.children(id).len()
    }

    pub fn is_leaf(&self, id: PathId) -> bool {
        self.fan_out(id) == 0
    }

    /// Source first, every parent before its children.
    pub fn pre_order(&self) -> &[PathId] {
        &self.pre_order
    }

    /// Every child before its parent, source last.
    pub fn post_order(&self) -> impl Iterator<Item = PathId> + '_ {
        self.pre_order.iter().rev().copied()
    }

    /// Walk from `id` up to the source, both inclusive.
    pub fn ancestors(&self, id: PathId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: Some(id),
        }
    }

    /// Number of segments between `id` and the source.
    pub fn depth(&self, id: PathId) -> usize {
        self.ancestors(id).count().saturating_sub(1)
    }

    /// Segment ids in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = PathId> + '_ {
        self.segments.iter().map(|s| s.id)
    }
}

pub struct Ancestors<'a> {
    tree: &'a PathTree,
    next: Option<PathId>,
}

impl Iterator for Ancestors<'_> {
    type Item = PathId;

    fn next(&mut self) -> Option<PathId> {
        let current = self.next?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use crate::PathTreeBuilder;

    #[test]
    fn post_order_visits_children_first() {
        let mut b = PathTreeBuilder::new("RES");
        let a = b.add_segment("RES", Some("A"));
        let x = b.add_segment("A", Some("X"));
        let y = b.add_segment("X", None);
        let tree = b.build().unwrap();

        let order: Vec<_> = tree.post_order().collect();
        assert_eq!(order, vec![y, x, a]);
        assert_eq!(tree.depth(y), 2);
        assert_eq!(tree.ancestors(y).collect::<Vec<_>>(), vec![y, x, a]);
    }
}
