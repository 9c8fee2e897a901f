//! # mesh-viewspots
//!
//! mesh-viewspots finds the *view spots* of a triangulated terrain mesh: the
//! elements whose height value is not exceeded by any element sharing a node
//! with them. Given a mesh and a count `n`, it returns the `n` highest view
//! spots, highest first, reporting each connected plateau of equal-valued
//! maxima only once.
//!
//! ## Pipeline
//! - [`topology::MeshIndex`] buckets elements by node and maps elements to values.
//! - [`algs::AdjacencyOracle`] derives element neighbors from shared nodes.
//! - [`algs::find_local_maxima`] keeps elements with no strictly higher
//!   neighbor and returns the [`algs::ConnectivityTable`] it observed.
//! - [`algs::reduce_plateaus`] merges connected equal-valued maxima, and
//!   [`algs::select_top`] truncates to `n`.
//!
//! ## Usage
//! ```rust
//! use mesh_viewspots::prelude::*;
//!
//! let mut mesh = Mesh::new();
//! mesh.push_element(0, [0, 1, 2])
//!     .push_element(1, [1, 2, 3])
//!     .push_value(0, 4.0)
//!     .push_value(1, 9.0);
//! let spots = compute_top_view_spots(&mesh, 1).unwrap();
//! assert_eq!(spots, vec![ViewSpot::new(1u64, 9.0)]);
//! ```
//!
//! ## Determinism
//!
//! Candidates with equal value are ordered by mesh input order, and every
//! plateau is represented by its first member in that order, so repeated runs
//! on the same input give identical output.
//!
//! The library logs through the `log` facade and never installs a logger.

pub mod algs;
pub mod debug_invariants;
pub mod io;
pub mod mesh_error;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::adjacency::{AdjacencyOracle, ConnectivityTable};
    pub use crate::algs::local_maxima::{MissingValuePolicy, ViewSpot, find_local_maxima};
    pub use crate::algs::plateau::{reduce_plateaus, select_top, sort_descending};
    pub use crate::algs::view_spots::{
        ViewSpotOpts, compute_top_view_spots, compute_top_view_spots_with,
    };
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::io::{JsonMeshReader, JsonViewSpotWriter, MeshReader, ViewSpotWriter};
    pub use crate::mesh_error::ViewSpotError;
    pub use crate::topology::{ElementId, Mesh, MeshIndex, NodeId};
}
