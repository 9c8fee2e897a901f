//! Top-N view spot computation.
//!
//! Wires the pipeline together:
//! mesh → [`MeshIndex`] → [`AdjacencyOracle`] → [`find_local_maxima`] →
//! [`sort_descending`] → [`reduce_plateaus`] → [`select_top`].
//!
//! Every intermediate structure is built for this call only and dropped on
//! return. Either the full result is produced or an error is returned.

use crate::algs::adjacency::AdjacencyOracle;
use crate::algs::local_maxima::{MissingValuePolicy, ViewSpot, find_local_maxima};
use crate::algs::plateau::{reduce_plateaus, select_top, sort_descending};
use crate::debug_invariants::DebugInvariants;
use crate::mesh_error::ViewSpotError;
use crate::topology::mesh::Mesh;
use crate::topology::mesh_index::MeshIndex;

/// Options for [`compute_top_view_spots_with`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ViewSpotOpts {
    /// Handling of elements that have no value record.
    pub missing_value: MissingValuePolicy,
}

/// The `n` highest view spots of `mesh`, highest first, one per plateau.
///
/// Uses [`ViewSpotOpts::default`]: an element without a value is an error.
pub fn compute_top_view_spots(mesh: &Mesh, n: usize) -> Result<Vec<ViewSpot>, ViewSpotError> {
    compute_top_view_spots_with(mesh, n, ViewSpotOpts::default())
}

/// Same as [`compute_top_view_spots`] with explicit options.
pub fn compute_top_view_spots_with(
    mesh: &Mesh,
    n: usize,
    opts: ViewSpotOpts,
) -> Result<Vec<ViewSpot>, ViewSpotError> {
    let spots = all_view_spots(mesh, opts)?;
    Ok(select_top(spots, n))
}

/// Every view spot of `mesh`, highest first, one per plateau.
pub fn all_view_spots(mesh: &Mesh, opts: ViewSpotOpts) -> Result<Vec<ViewSpot>, ViewSpotError> {
    if mesh.is_empty() {
        return Ok(Vec::new());
    }

    let index = MeshIndex::build(mesh);
    index.debug_assert_invariants();

    let oracle = AdjacencyOracle::new(&index);
    let maxima = find_local_maxima(&oracle, opts.missing_value)?;
    maxima.connectivity.debug_assert_invariants();

    let mut candidates = maxima.candidates;
    sort_descending(&mut candidates);
    let reduced = reduce_plateaus(&candidates, &maxima.connectivity);

    log::info!(
        "{} view spots ({} local maxima before plateau reduction)",
        reduced.len(),
        candidates.len()
    );
    Ok(reduced)
}
