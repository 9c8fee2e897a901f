//! Local-maximum detection over node adjacency.
//!
//! An element is a local maximum when none of its neighbors is strictly
//! higher. Ties never disqualify: equal-valued neighbors are resolved later by
//! plateau reduction, not here.
//!
//! The pass returns the candidates together with the [`ConnectivityTable`] of
//! every pair it inspected. Both are plain return values.
//!
//! Missing data:
//! - a *neighbor* without a value compares as −∞, so it never blocks a
//!   maximum;
//! - an element without a value of its own is handled per
//!   [`MissingValuePolicy`].

use serde::{Deserialize, Serialize};

use crate::algs::adjacency::{AdjacencyOracle, ConnectivityTable};
use crate::mesh_error::ViewSpotError;
use crate::topology::ids::ElementId;

/// An element together with its height value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewSpot {
    pub element_id: ElementId,
    pub value: f64,
}

impl ViewSpot {
    pub fn new(element_id: impl Into<ElementId>, value: f64) -> Self {
        Self {
            element_id: element_id.into(),
            value,
        }
    }
}

/// What to do with an element that has no value record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MissingValuePolicy {
    /// Fail the whole computation with [`ViewSpotError::MissingValue`].
    #[default]
    Error,
    /// Leave the element out of maximum consideration and carry on.
    Exclude,
}

/// Output of [`find_local_maxima`].
#[derive(Debug, Clone, Default)]
pub struct LocalMaxima {
    /// Qualifying elements in mesh input order.
    pub candidates: Vec<ViewSpot>,
    /// Every directly-connected pair visited during the scan.
    pub connectivity: ConnectivityTable,
}

/// Test every element of the oracle's mesh and collect the local maxima.
pub fn find_local_maxima(
    oracle: &AdjacencyOracle<'_>,
    policy: MissingValuePolicy,
) -> Result<LocalMaxima, ViewSpotError> {
    let index = oracle.index();
    let mut out = LocalMaxima::default();

    for &element in index.elements() {
        let neighbors = oracle.neighbors(element);
        out.connectivity
            .extend(neighbors.iter().map(|&other| (element, other)));

        let Some(value) = index.value(element) else {
            match policy {
                MissingValuePolicy::Error => {
                    return Err(ViewSpotError::MissingValue { element });
                }
                MissingValuePolicy::Exclude => {
                    log::warn!("Element {element} has no value; excluded from view spots");
                    continue;
                }
            }
        };

        let mut unvalued = 0usize;
        let mut higher = None;
        for &other in &neighbors {
            match index.value(other) {
                Some(v) if v > value => {
                    higher = Some(other);
                    break;
                }
                Some(_) => {}
                None => unvalued += 1,
            }
        }
        if unvalued > 0 {
            log::debug!(
                "Element {element}: {unvalued} neighbor(s) without a value treated as -inf"
            );
        }

        match higher {
            Some(other) => {
                log::trace!("Element {element} ({value}) is topped by neighbor {other}");
            }
            None => out.candidates.push(ViewSpot {
                element_id: element,
                value,
            }),
        }
    }

    log::debug!(
        "Found {} local maxima among {} elements ({} connected pairs)",
        out.candidates.len(),
        index.len(),
        out.connectivity.len()
    );
    Ok(out)
}
