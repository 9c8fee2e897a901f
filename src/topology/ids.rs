//! `NodeId` and `ElementId`: strong, zero-cost handles for mesh entities
//!
//! Nodes (vertices) and elements (triangles, or any polygon) live in
//! separate ID spaces in mesh files, so each gets its own newtype over a
//! plain `u64`. Mixing them up is a compile error rather than a silent
//! lookup miss.
//!
//! Unlike sentinel-style handles, `0` is a perfectly valid ID here: terrain
//! mesh exports conventionally number both nodes and elements from zero.
//!
//! Both types are `repr(transparent)` and serialize as bare integers, so the
//! JSON shape `{"id": 3, "nodes": [0, 1, 2]}` decodes directly.

use std::fmt;

macro_rules! mesh_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        #[repr(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw ID as read from a mesh file.
            #[inline]
            pub const fn new(raw: u64) -> Self {
                $name(raw)
            }

            /// Returns the inner `u64` value.
            #[inline]
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            #[inline]
            fn from(raw: u64) -> Self {
                $name(raw)
            }
        }

        /// Displays as `Name(raw_value)`.
        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.0).finish()
            }
        }

        /// Prints only the raw integer.
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

mesh_id! {
    /// Identifier of a mesh vertex.
    NodeId
}

mesh_id! {
    /// Identifier of a mesh element (triangle or polygon).
    ElementId
}

impl ElementId {
    /// Order a pair of element IDs so that `(a, b)` and `(b, a)` share a key.
    #[inline]
    pub fn ordered_pair(a: ElementId, b: ElementId) -> (ElementId, ElementId) {
        if a <= b { (a, b) } else { (b, a) }
    }
}

#[cfg(test)]
mod layout_tests {
    use super::*;
    use static_assertions::{assert_eq_align, assert_eq_size};

    assert_eq_size!(NodeId, u64);
    assert_eq_size!(ElementId, u64);
    assert_eq_align!(ElementId, u64);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_a_valid_id() {
        let e = ElementId::new(0);
        assert_eq!(e.get(), 0);
    }

    #[test]
    fn debug_and_display() {
        let n = NodeId::new(7);
        let e = ElementId::new(9);
        assert_eq!(format!("{:?}", n), "NodeId(7)");
        assert_eq!(format!("{:?}", e), "ElementId(9)");
        assert_eq!(format!("{}", e), "9");
    }

    #[test]
    fn ordered_pair_is_symmetric() {
        let a = ElementId::new(4);
        let b = ElementId::new(2);
        assert_eq!(ElementId::ordered_pair(a, b), ElementId::ordered_pair(b, a));
        assert_eq!(ElementId::ordered_pair(a, b), (b, a));
    }

    #[test]
    fn serializes_as_bare_integer() {
        let e = ElementId::new(123);
        assert_eq!(serde_json::to_string(&e).unwrap(), "123");
        let back: NodeId = serde_json::from_str("5").unwrap();
        assert_eq!(back, NodeId::new(5));
    }
}
