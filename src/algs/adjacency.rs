//! Element-to-element adjacency through shared nodes.
//!
//! Two elements are adjacent when they share at least one vertex node. The
//! [`AdjacencyOracle`] derives this on demand from a [`MeshIndex`]; nothing is
//! precomputed beyond the node buckets.
//!
//! [`ConnectivityTable`] is the explicit record of which element pairs were
//! seen to be directly connected. It is produced by the local-maximum pass and
//! consumed by plateau reduction.
//!
//! Determinism:
//! - `star` and `neighbors` lists are always sorted and deduplicated.

use hashbrown::HashSet;

use crate::debug_invariants::DebugInvariants;
use crate::mesh_error::ViewSpotError;
use crate::topology::ids::ElementId;
use crate::topology::mesh_index::MeshIndex;

/// Answers "which elements touch this one" for a borrowed [`MeshIndex`].
#[derive(Debug, Clone, Copy)]
pub struct AdjacencyOracle<'a> {
    index: &'a MeshIndex,
}

impl<'a> AdjacencyOracle<'a> {
    pub fn new(index: &'a MeshIndex) -> Self {
        Self { index }
    }

    /// The index this oracle reads from.
    pub fn index(&self) -> &'a MeshIndex {
        self.index
    }

    /// All elements sharing a node with `element`, **including `element`
    /// itself** when it has at least one vertex.
    pub fn star(&self, element: ElementId) -> Vec<ElementId> {
        let mut out: Vec<ElementId> = self
            .index
            .vertices(element)
            .iter()
            .flat_map(|&node| self.index.elements_at(node).iter().copied())
            .collect();
        out.sort_unstable();
        out.dedup();
        out
    }

    /// Elements sharing a node with `element`, excluding `element`.
    pub fn neighbors(&self, element: ElementId) -> Vec<ElementId> {
        let mut out = self.star(element);
        if let Ok(pos) = out.binary_search(&element) {
            out.remove(pos);
        }
        out
    }

    /// True iff `a != b` and the two elements share a node.
    pub fn is_adjacent(&self, a: ElementId, b: ElementId) -> bool {
        if a == b {
            return false;
        }
        let other = self.index.vertices(b);
        self.index
            .vertices(a)
            .iter()
            .any(|node| other.contains(node))
    }
}

/// Set of unordered, directly-connected element pairs.
///
/// Pairs are stored normalized (smaller ID first), so lookups are symmetric
/// and a pair reached through several shared nodes is stored once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectivityTable {
    pairs: HashSet<(ElementId, ElementId)>,
}

impl ConnectivityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `a` and `b` share a node. Self-pairs are ignored.
    pub fn mark_adjacent(&mut self, a: ElementId, b: ElementId) {
        if a != b {
            self.pairs.insert(ElementId::ordered_pair(a, b));
        }
    }

    /// Symmetric lookup; always false for `a == b`.
    pub fn is_adjacent(&self, a: ElementId, b: ElementId) -> bool {
        a != b && self.pairs.contains(&ElementId::ordered_pair(a, b))
    }

    /// Normalized pairs, in no particular order.
    pub fn pairs(&self) -> impl Iterator<Item = (ElementId, ElementId)> + '_ {
        self.pairs.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Records each pair as by [`ConnectivityTable::mark_adjacent`].
impl Extend<(ElementId, ElementId)> for ConnectivityTable {
    fn extend<T: IntoIterator<Item = (ElementId, ElementId)>>(&mut self, iter: T) {
        for (a, b) in iter {
            self.mark_adjacent(a, b);
        }
    }
}

impl DebugInvariants for ConnectivityTable {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "ConnectivityTable");
    }

    fn validate_invariants(&self) -> Result<(), ViewSpotError> {
        for &(a, b) in &self.pairs {
            if a >= b {
                return Err(ViewSpotError::InvariantViolation(format!(
                    "connectivity pair ({a}, {b}) is not normalized"
                )));
            }
        }
        Ok(())
    }
}
