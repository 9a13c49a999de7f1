/*!
`cuttree` computes **Gomory-Hu cut trees** of undirected, capacitated graphs.

A cut tree is a weighted spanning tree on the nodes of the graph such that for every pair
of nodes `(u, v)`, the minimum edge weight on the tree path between `u` and `v` equals the value
of a minimum `u`-`v` cut in the graph. Removing that tree edge splits the nodes into the two
sides of such a cut. Hence, `n - 1` maximum flow computations answer all `n(n-1)/2` pairwise
minimum cut queries.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
Undirected **capacitated edges** are simple tuple-structs `CapacitatedEdge(u, v, c)`, where the
capacity `c` is any signed primitive integer (see [`Capacity`], `i64` by default).

See the [`repr`] module for the two central data structures:

- [`ResidualNetwork`](crate::repr::ResidualNetwork): dense capacity and flow matrices,
- [`CutTree`](crate::repr::CutTree): parent and weight array with pairwise queries.

# Design

All algorithms are provided as configurable structs that one can alter to their needs using
either the *Builder* / *Setter* pattern before calling the configured algorithm on a network.
Alternatively, the common entry points are implemented via traits on the network itself.

All arithmetic on capacities is checked; fallible operations return [`Result`] with a
[`CutTreeError`].

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, capacities, basic graph operations, and the
  representations,
- [`algo`] includes Edmonds-Karp maximum flow and Gusfield's cut-tree algorithm,
- [`gens`] includes random and deterministic generators for capacitated graphs,
- [`io`] includes readers for capacitated edge lists and writers for cut trees.

[`repr::digest`] enables computing a `Sha256`-hash for a given cut tree.

```rust
use cuttree::{prelude::*, algo::*};

// a triangle with unit capacities and a pendant node
let edges = [(0, 1, 1i64), (1, 2, 1), (2, 0, 1), (2, 3, 5)];
let mut network = ResidualNetwork::try_from_edges(4, edges).unwrap();
let tree = network.gomory_hu_tree().unwrap();

assert_eq!(tree.min_cut_value(0, 1), Some(2));
assert_eq!(tree.min_cut_value(2, 3), Some(5));
assert_eq!(tree.min_cut_value(0, 3), Some(2));
```
*/

pub mod algo;
pub mod capacity;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;

pub use capacity::Capacity;
pub use edge::*;
pub use error::{CutTreeError, Result};
pub use node::*;

/// `cuttree::prelude` includes definitions for nodes, edges and capacities, all basic graph
/// operation traits as well as both representations.
pub mod prelude {
    pub use super::{
        capacity::Capacity, edge::*, error::CutTreeError, node::*, ops::*, repr::*,
    };
}
