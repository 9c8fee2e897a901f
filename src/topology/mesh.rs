//! Raw mesh records as they arrive from a loader.
//!
//! A [`Mesh`] is a plain bag of nodes, elements and per-element values. It is
//! never mutated once the pipeline starts; every derived structure
//! ([`MeshIndex`](crate::topology::mesh_index::MeshIndex), adjacency,
//! candidates) borrows from it.

use serde::{Deserialize, Serialize};

use crate::topology::ids::{ElementId, NodeId};

/// A mesh vertex. Coordinates are carried for completeness only; view spot
/// detection is purely topological.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

/// A mesh element: an ID and its ordered vertex list.
///
/// Triangles are the common case but any vertex count is accepted,
/// including zero (such an element has no neighbors at all).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    #[serde(default)]
    pub nodes: Vec<NodeId>,
}

impl Element {
    pub fn new(id: impl Into<ElementId>, nodes: impl IntoIterator<Item = u64>) -> Self {
        Self {
            id: id.into(),
            nodes: nodes.into_iter().map(NodeId::new).collect(),
        }
    }
}

/// Height value assigned to one element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRecord {
    pub element_id: ElementId,
    pub value: f64,
}

/// Elements, nodes and values of a terrain mesh.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub elements: Vec<Element>,
    #[serde(default)]
    pub values: Vec<ValueRecord>,
}

impl Mesh {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a mesh from elements and values (no node coordinates).
    pub fn from_parts(elements: Vec<Element>, values: Vec<ValueRecord>) -> Self {
        Self {
            nodes: Vec::new(),
            elements,
            values,
        }
    }

    /// Append an element with the given vertices.
    pub fn push_element(&mut self, id: u64, nodes: impl IntoIterator<Item = u64>) -> &mut Self {
        self.elements.push(Element::new(id, nodes));
        self
    }

    /// Append a value record.
    pub fn push_value(&mut self, element_id: u64, value: f64) -> &mut Self {
        self.values.push(ValueRecord {
            element_id: ElementId::new(element_id),
            value,
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
