#![allow(dead_code)]
use mesh_viewspots::{
    algs::ViewSpot,
    topology::{ElementId, Mesh},
};

pub fn eid(u: u64) -> ElementId {
    ElementId::new(u)
}

/// Build a mesh from `(element, vertices)` and `(element, value)` lists.
pub fn mesh_from(elements: &[(u64, &[u64])], values: &[(u64, f64)]) -> Mesh {
    let mut mesh = Mesh::new();
    for &(id, nodes) in elements {
        mesh.push_element(id, nodes.iter().copied());
    }
    for &(id, value) in values {
        mesh.push_value(id, value);
    }
    mesh
}

/// Elements 1..=k in a chain where consecutive elements share exactly one
/// vertex and non-consecutive ones share none.
pub fn vertex_chain(values: &[f64]) -> Mesh {
    let mut mesh = Mesh::new();
    for (i, &value) in values.iter().enumerate() {
        let id = i as u64 + 1;
        let first = 2 * i as u64 + 1;
        mesh.push_element(id, [first, first + 1, first + 2])
            .push_value(id, value);
    }
    mesh
}

/// `cols` x `rows` grid of unit cells, each split into two triangles.
/// Element `2 * (row * cols + col)` is the lower-left triangle of a cell.
pub fn triangle_grid(cols: usize, rows: usize, values: &[f64]) -> Mesh {
    assert_eq!(values.len(), 2 * cols * rows, "one value per triangle");
    let node = |i: usize, j: usize| (j * (cols + 1) + i) as u64;
    let mut mesh = Mesh::new();
    for j in 0..rows {
        for i in 0..cols {
            let base = (2 * (j * cols + i)) as u64;
            mesh.push_element(base, [node(i, j), node(i + 1, j), node(i, j + 1)]);
            mesh.push_element(
                base + 1,
                [node(i + 1, j), node(i + 1, j + 1), node(i, j + 1)],
            );
        }
    }
    for (id, &value) in values.iter().enumerate() {
        mesh.push_value(id as u64, value);
    }
    mesh
}

pub fn ids(spots: &[ViewSpot]) -> Vec<u64> {
    spots.iter().map(|s| s.element_id.get()).collect()
}

/// Assert vec is a permutation of another vec (order-agnostic).
pub fn assert_permutation<T: Ord + Copy + std::fmt::Debug>(got: &[T], want: &[T]) {
    let mut a = got.to_vec();
    a.sort_unstable();
    let mut b = want.to_vec();
    b.sort_unstable();
    assert_eq!(a, b, "not a permutation\n got={:?}\nwant={:?}", got, want);
}
