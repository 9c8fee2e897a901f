//! Node → element incidence and element → value lookup.
//!
//! [`MeshIndex::build`] makes one pass over the elements and one over the
//! value records. Afterwards every adjacency query is a handful of hash
//! lookups: the neighbors of an element are the union of the buckets of its
//! vertices.
//!
//! Anomalies handled here:
//! - a value record for an element that does not exist (*orphan value*) is
//!   skipped and remembered in [`MeshIndex::orphan_values`];
//! - a repeated value record for the same element overwrites the earlier one;
//! - an element listing the same node twice lands in that node's bucket once;
//! - an element ID that appears twice has its vertex lists merged.

use hashbrown::HashMap;

use crate::debug_invariants::DebugInvariants;
use crate::mesh_error::ViewSpotError;
use crate::topology::ids::{ElementId, NodeId};
use crate::topology::mesh::Mesh;

/// Incidence and value index over an immutable [`Mesh`].
#[derive(Debug, Clone, Default)]
pub struct MeshIndex {
    /// Element IDs in first-seen input order.
    order: Vec<ElementId>,
    vertices: HashMap<ElementId, Vec<NodeId>>,
    node_elements: HashMap<NodeId, Vec<ElementId>>,
    values: HashMap<ElementId, f64>,
    orphan_values: Vec<ElementId>,
}

impl MeshIndex {
    /// Build the node buckets and value map for `mesh`.
    pub fn build(mesh: &Mesh) -> Self {
        let mut index = MeshIndex {
            order: Vec::with_capacity(mesh.elements.len()),
            vertices: HashMap::with_capacity(mesh.elements.len()),
            node_elements: HashMap::with_capacity(mesh.nodes.len().max(mesh.elements.len())),
            values: HashMap::with_capacity(mesh.values.len()),
            orphan_values: Vec::new(),
        };

        for element in &mesh.elements {
            let verts = match index.vertices.entry(element.id) {
                hashbrown::hash_map::Entry::Occupied(e) => e.into_mut(),
                hashbrown::hash_map::Entry::Vacant(e) => {
                    index.order.push(element.id);
                    e.insert(Vec::with_capacity(element.nodes.len()))
                }
            };
            verts.extend(element.nodes.iter().copied());

            for &node in &element.nodes {
                let bucket = index.node_elements.entry(node).or_default();
                // an element ID may be listed twice with other elements in between
                if !bucket.contains(&element.id) {
                    bucket.push(element.id);
                }
            }
        }

        for record in &mesh.values {
            if !index.vertices.contains_key(&record.element_id) {
                log::warn!(
                    "Ignoring value {} for unknown element {}",
                    record.value,
                    record.element_id
                );
                index.orphan_values.push(record.element_id);
                continue;
            }
            if let Some(previous) = index.values.insert(record.element_id, record.value) {
                log::debug!(
                    "Element {} has repeated value records; {} replaces {}",
                    record.element_id,
                    record.value,
                    previous
                );
            }
        }

        log::debug!(
            "Indexed {} elements over {} nodes ({} values, {} orphans)",
            index.order.len(),
            index.node_elements.len(),
            index.values.len(),
            index.orphan_values.len()
        );
        index
    }

    /// Element IDs in input order.
    pub fn elements(&self) -> &[ElementId] {
        &self.order
    }

    /// Vertex list of `element`; empty for unknown elements.
    pub fn vertices(&self, element: ElementId) -> &[NodeId] {
        self.vertices.get(&element).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Elements that use `node` as a vertex.
    pub fn elements_at(&self, node: NodeId) -> &[ElementId] {
        self.node_elements
            .get(&node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Height value of `element`, if one was supplied.
    #[inline]
    pub fn value(&self, element: ElementId) -> Option<f64> {
        self.values.get(&element).copied()
    }

    pub fn contains(&self, element: ElementId) -> bool {
        self.vertices.contains_key(&element)
    }

    /// Value records that referenced unknown elements, in input order.
    pub fn orphan_values(&self) -> &[ElementId] {
        &self.orphan_values
    }

    /// Number of distinct nodes that carry at least one element.
    pub fn node_count(&self) -> usize {
        self.node_elements.len()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl DebugInvariants for MeshIndex {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "MeshIndex");
    }

    fn validate_invariants(&self) -> Result<(), ViewSpotError> {
        if self.order.len() != self.vertices.len() {
            return Err(ViewSpotError::InvariantViolation(format!(
                "order lists {} elements but {} have vertex lists",
                self.order.len(),
                self.vertices.len()
            )));
        }
        // bucket(n) contains e  =>  n is a vertex of e, and no repeats
        for (node, bucket) in &self.node_elements {
            for (i, element) in bucket.iter().enumerate() {
                if bucket[..i].contains(element) {
                    return Err(ViewSpotError::InvariantViolation(format!(
                        "element {element} listed twice under node {node}"
                    )));
                }
                if !self.vertices(*element).contains(node) {
                    return Err(ViewSpotError::InvariantViolation(format!(
                        "element {element} listed under node {node} it does not use"
                    )));
                }
            }
        }
        // n is a vertex of e  =>  bucket(n) contains e
        for (element, verts) in &self.vertices {
            for node in verts {
                if !self.elements_at(*node).contains(element) {
                    return Err(ViewSpotError::InvariantViolation(format!(
                        "node {node} of element {element} has no back-reference"
                    )));
                }
            }
        }
        for element in self.values.keys() {
            if !self.contains(*element) {
                return Err(ViewSpotError::InvariantViolation(format!(
                    "value stored for unknown element {element}"
                )));
            }
        }
        Ok(())
    }
}
