//! Re-export public algorithms.

pub mod adjacency;
pub mod local_maxima;
pub mod plateau;
pub mod view_spots;

pub use adjacency::{AdjacencyOracle, ConnectivityTable};
pub use local_maxima::{LocalMaxima, MissingValuePolicy, ViewSpot, find_local_maxima};
pub use plateau::{reduce_plateaus, select_top, sort_descending};
pub use view_spots::{
    ViewSpotOpts, all_view_spots, compute_top_view_spots, compute_top_view_spots_with,
};
