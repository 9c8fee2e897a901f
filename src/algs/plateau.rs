//! Plateau reduction and top-N selection.
//!
//! After sorting the local maxima by value, equal-valued maxima that are
//! directly connected belong to one plateau and must be reported once.
//! Connectivity is transitive: if A touches B and B touches C, then A, B and C
//! form one plateau even when A and C share no node. Grouping is a union-find
//! over positions in the sorted candidate list, so the outcome does not depend
//! on where plateau members land after sorting.
//!
//! Each plateau is represented by its first member in sorted order.

use hashbrown::HashMap;

use crate::algs::adjacency::ConnectivityTable;
use crate::algs::local_maxima::ViewSpot;
use crate::topology::ids::ElementId;

/// Union-find over positions `0..len` of a sorted candidate list.
///
/// The root of every class is its smallest position, i.e. the plateau member
/// that sorts first.
#[derive(Debug, Clone)]
struct Plateaus {
    parent: Vec<usize>,
}

impl Plateaus {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
        }
    }

    fn root(&mut self, mut pos: usize) -> usize {
        while self.parent[pos] != pos {
            // path halving
            self.parent[pos] = self.parent[self.parent[pos]];
            pos = self.parent[pos];
        }
        pos
    }

    fn merge(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.root(a), self.root(b));
        if ra < rb {
            self.parent[rb] = ra;
        } else if rb < ra {
            self.parent[ra] = rb;
        }
    }
}

/// Sort by value, highest first.
///
/// The sort is stable: candidates with equal value keep their relative
/// order, which for [`find_local_maxima`](crate::algs::local_maxima::find_local_maxima)
/// output is mesh input order. Values are compared with [`f64::total_cmp`].
pub fn sort_descending(spots: &mut [ViewSpot]) {
    spots.sort_by(|a, b| b.value.total_cmp(&a.value));
}

/// Collapse every connected group of equal-valued candidates into its first
/// member. `sorted` must already be in [`sort_descending`] order.
pub fn reduce_plateaus(sorted: &[ViewSpot], connectivity: &ConnectivityTable) -> Vec<ViewSpot> {
    let pos_of: HashMap<ElementId, usize> = sorted
        .iter()
        .enumerate()
        .map(|(pos, spot)| (spot.element_id, pos))
        .collect();

    let mut plateaus = Plateaus::new(sorted.len());
    for (a, b) in connectivity.pairs() {
        if let (Some(&pa), Some(&pb)) = (pos_of.get(&a), pos_of.get(&b)) {
            if sorted[pa].value == sorted[pb].value {
                plateaus.merge(pa, pb);
            }
        }
    }

    let mut out = Vec::with_capacity(sorted.len());
    for (pos, spot) in sorted.iter().enumerate() {
        let root = plateaus.root(pos);
        if root == pos {
            out.push(*spot);
        } else {
            log::trace!(
                "Element {} merged into plateau of element {}",
                spot.element_id,
                sorted[root].element_id
            );
        }
    }
    out
}

/// Keep the first `n` entries.
pub fn select_top(mut reduced: Vec<ViewSpot>, n: usize) -> Vec<ViewSpot> {
    reduced.truncate(n);
    reduced
}
