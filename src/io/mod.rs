//! Mesh input and view spot output.
//!
//! This module provides trait-based readers and writers so the core never
//! sees a file or a byte stream: it takes a parsed [`Mesh`] and hands back a
//! list of [`ViewSpot`]s.

pub mod json;

use crate::algs::local_maxima::ViewSpot;
use crate::mesh_error::ViewSpotError;
use crate::topology::mesh::Mesh;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

pub use json::{JsonMeshReader, JsonViewSpotWriter};

/// Trait for mesh readers.
pub trait MeshReader {
    /// Parse a mesh from a reader.
    fn read<R: Read>(&self, reader: R) -> Result<Mesh, ViewSpotError>;
}

/// Trait for writers that serialize a view spot list.
pub trait ViewSpotWriter {
    /// Write `spots` to `writer`.
    fn write<W: Write>(&self, writer: W, spots: &[ViewSpot]) -> Result<(), ViewSpotError>;
}

/// Open `path` and decode it as a JSON mesh.
pub fn read_mesh_file(path: impl AsRef<Path>) -> Result<Mesh, ViewSpotError> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| ViewSpotError::Io(format!("{}: {e}", path.display())))?;
    let mesh = JsonMeshReader.read(BufReader::new(file))?;
    log::info!(
        "Loaded {} elements, {} values from {}",
        mesh.elements.len(),
        mesh.values.len(),
        path.display()
    );
    Ok(mesh)
}
