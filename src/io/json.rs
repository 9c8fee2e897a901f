//! JSON mesh reader and view spot writer.
//!
//! # Supported format
//! ```json
//! {
//!   "nodes":    [{"id": 0, "x": 0.0, "y": 0.0}, ...],
//!   "elements": [{"id": 0, "nodes": [0, 1, 2]}, ...],
//!   "values":   [{"element_id": 0, "value": 0.35}, ...]
//! }
//! ```
//! `nodes` may be omitted. Unknown top-level keys are ignored.
//!
//! Results are written as `[{"element_id": 0, "value": 0.35}, ...]`.

use std::io::{Read, Write};

use crate::algs::local_maxima::ViewSpot;
use crate::io::{MeshReader, ViewSpotWriter};
use crate::mesh_error::ViewSpotError;
use crate::topology::mesh::Mesh;

/// Reads a [`Mesh`] from a JSON document.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonMeshReader;

impl MeshReader for JsonMeshReader {
    fn read<R: Read>(&self, reader: R) -> Result<Mesh, ViewSpotError> {
        let mesh: Mesh = serde_json::from_reader(reader)?;
        Ok(mesh)
    }
}

/// Writes view spots as a JSON array.
#[derive(Debug, Clone, Copy)]
pub struct JsonViewSpotWriter {
    /// Indent the output for humans.
    pub pretty: bool,
}

impl Default for JsonViewSpotWriter {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl ViewSpotWriter for JsonViewSpotWriter {
    fn write<W: Write>(&self, mut writer: W, spots: &[ViewSpot]) -> Result<(), ViewSpotError> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, spots)?;
        } else {
            serde_json::to_writer(&mut writer, spots)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}
