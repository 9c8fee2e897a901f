//! Top-level module for mesh topology.
//!
//! This module provides the core types for representing a terrain mesh and
//! querying which elements touch which nodes.
//! It includes:
//! - Strongly typed node and element identifiers
//! - Raw mesh records (`Mesh`, `Element`, `ValueRecord`)
//! - The `MeshIndex` incidence/value index built once per computation
//!
//! Most users only build a `Mesh` and hand it to
//! [`compute_top_view_spots`](crate::algs::view_spots::compute_top_view_spots).

pub mod ids;
pub mod mesh;
pub mod mesh_index;

pub use ids::{ElementId, NodeId};
pub use mesh::{Element, Mesh, Node, ValueRecord};
pub use mesh_index::MeshIndex;
