use std::fmt::{Debug, Display};

use crate::Node;

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// An undirected edge `{u, v}` carrying a capacity.
///
/// In the input graph this is the capacity of a (possibly parallel) edge, in a
/// [`CutTree`](crate::repr::CutTree) it is the value of the minimum cut represented by the
/// tree edge `(child, parent)`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CapacitatedEdge<C>(pub Node, pub Node, pub C);

impl<C: Copy> CapacitatedEdge<C> {
    /// Returns the capacity of the edge
    pub fn capacity(&self) -> C {
        self.2
    }
}

impl<C: Display> Display for CapacitatedEdge<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{};{})", self.0, self.1, self.2)
    }
}

impl<C: Display> Debug for CapacitatedEdge<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl<C> From<(Node, Node, C)> for CapacitatedEdge<C> {
    fn from(value: (Node, Node, C)) -> Self {
        CapacitatedEdge(value.0, value.1, value.2)
    }
}

impl<C: Copy> From<&(Node, Node, C)> for CapacitatedEdge<C> {
    fn from(value: &(Node, Node, C)) -> Self {
        CapacitatedEdge(value.0, value.1, value.2)
    }
}

impl<C: Copy> From<&CapacitatedEdge<C>> for CapacitatedEdge<C> {
    fn from(value: &CapacitatedEdge<C>) -> Self {
        *value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_and_formatting() {
        let e = CapacitatedEdge(4, 2, 7i64);
        assert_eq!(e.capacity(), 7);
        assert_eq!(format!("{e}"), "(4,2;7)");
        assert_eq!(format!("{e:?}"), "(4,2;7)");

        assert_eq!(CapacitatedEdge::from((4, 2, 7i64)), e);
        assert_eq!(CapacitatedEdge::from(&(4, 2, 7i64)), e);
        assert_eq!(CapacitatedEdge::from(&e), e);
    }
}
