/*!
# Substructure Generators

Deterministic capacitated motifs:

- **Paths**
- **Cycles**
- **Cliques**

Each function returns the edges of the motif with a uniform capacity, ready to be combined
with other edge lists (parallel edges simply accumulate in a
[`ResidualNetwork`](crate::repr::ResidualNetwork)).

# Example

```rust
use cuttree::{prelude::*, gens::*};

let mut edges = capacitated_path([0, 1, 2], 2i64);
edges.extend(capacitated_cycle([2, 3, 4], 1i64));

assert_eq!(
    edges,
    vec![
        CapacitatedEdge(0, 1, 2),
        CapacitatedEdge(1, 2, 2),
        CapacitatedEdge(2, 3, 1),
        CapacitatedEdge(3, 4, 1),
        CapacitatedEdge(4, 2, 1),
    ]
);
```
*/

use itertools::Itertools;

use super::*;

/// Connects the given nodes in order with a **simple path**.
pub fn capacitated_path<P, C>(nodes_on_path: P, capacity: C) -> Vec<CapacitatedEdge<C>>
where
    P: IntoIterator<Item = Node>,
    C: Capacity,
{
    nodes_on_path
        .into_iter()
        .tuple_windows()
        .map(|(u, v)| CapacitatedEdge(u, v, capacity))
        .collect()
}

/// Connects the given nodes with a **cycle**: consecutive nodes are connected and the last
/// node is connected back to the first.
///
/// Fewer than three nodes do not form a cycle and are connected as a path instead.
pub fn capacitated_cycle<I, C>(nodes_in_cycle: I, capacity: C) -> Vec<CapacitatedEdge<C>>
where
    I: IntoIterator<Item = Node>,
    C: Capacity,
{
    let nodes = nodes_in_cycle.into_iter().collect_vec();
    let mut edges = capacitated_path(nodes.iter().copied(), capacity);
    if nodes.len() > 2 {
        edges.push(CapacitatedEdge(nodes[nodes.len() - 1], nodes[0], capacity));
    }
    edges
}

/// Connects all given nodes into a **clique**.
pub fn capacitated_clique<I, C>(nodes: I, capacity: C) -> Vec<CapacitatedEdge<C>>
where
    I: IntoIterator<Item = Node>,
    C: Capacity,
{
    nodes
        .into_iter()
        .collect_vec()
        .into_iter()
        .tuple_combinations()
        .map(|(u, v)| CapacitatedEdge(u, v, capacity))
        .collect()
}
