/*!
# Maximum Flow / Minimum Cut

Implementation of the Edmonds–Karp algorithm (Ford–Fulkerson with shortest augmenting paths)
on a [`ResidualNetwork`]. Choosing augmenting paths by breadth-first search bounds the number
of augmentations by `O(n * m)` independent of the capacity values.

Besides the flow value, every computation returns the **source side of a minimum cut**: the
set of nodes still reachable from the source in the residual network once no augmenting path
remains. This partition is part of the result and does not have to be recovered from
leftover traversal state.

The BFS visits neighbors in increasing index order, so the augmenting paths (and hence the
flow and the reported cut) are fully deterministic.
*/

use std::collections::VecDeque;

use log::trace;

use super::*;

/// Result of a single maximum flow computation
#[derive(Debug, Clone)]
pub struct MaxFlow<C> {
    value: C,
    source_side: NodeBitSet,
    augmentations: usize,
}

impl<C: Capacity> MaxFlow<C> {
    /// Value of the maximum flow, which equals the capacity of a minimum cut
    pub fn value(&self) -> C {
        self.value
    }

    /// Nodes reachable from the source in the final residual network.
    /// Contains the source but never the sink.
    pub fn source_side(&self) -> &NodeBitSet {
        &self.source_side
    }

    /// Returns *true* if `u` lies on the source side of the minimum cut
    pub fn is_on_source_side(&self, u: Node) -> bool {
        self.source_side.get_bit(u)
    }

    /// Number of augmenting paths used
    pub fn augmentations(&self) -> usize {
        self.augmentations
    }

    /// Consumes the result and returns the flow value and the source side
    pub fn into_parts(self) -> (C, NodeBitSet) {
        (self.value, self.source_side)
    }
}

/// Edmonds–Karp solver.
///
/// Owns the BFS state (queue, visited set and predecessor array) so that it can be reused for
/// several computations on networks with the same number of nodes without reallocating. The
/// network itself is passed to every call and its flow matrix is mutated destructively: call
/// [`ResidualNetwork::reset_flow`] before a computation that should start from the zero flow.
#[derive(Debug, Clone)]
pub struct EdmondsKarp {
    predecessor: Vec<Node>,
    visited: NodeBitSet,
    queue: VecDeque<Node>,
}

impl EdmondsKarp {
    /// Creates a new solver for networks with `n` nodes
    pub fn new(n: NumNodes) -> Self {
        Self {
            predecessor: vec![INVALID_NODE; n as usize],
            visited: NodeBitSet::new(n),
            queue: VecDeque::with_capacity(n as usize),
        }
    }

    /// Computes a maximum flow from `source` to `sink`, starting from the flow currently
    /// stored in `network`.
    ///
    /// # Panics
    /// Panics if `source == sink`, if either is not a node of the network or if the network
    /// has a different number of nodes than the solver was created for.
    ///
    /// # Errors
    /// Fails with [`CutTreeError::Overflow`] if the flow on a pair or the flow value exceeds
    /// the capacity type.
    ///
    /// # Example
    /// ```
    /// use cuttree::{prelude::*, algo::*};
    ///
    /// let mut network = ResidualNetwork::try_from_edges(
    ///     4,
    ///     [
    ///         CapacitatedEdge(0, 1, 3i64),
    ///         CapacitatedEdge(0, 2, 2),
    ///         CapacitatedEdge(1, 3, 2),
    ///         CapacitatedEdge(2, 3, 3),
    ///     ],
    /// )
    /// .unwrap();
    ///
    /// let flow = EdmondsKarp::new(4).compute(&mut network, 0, 3).unwrap();
    /// assert_eq!(flow.value(), 4);
    /// assert!(flow.is_on_source_side(0));
    /// assert!(!flow.is_on_source_side(3));
    /// ```
    pub fn compute<C: Capacity>(
        &mut self,
        network: &mut ResidualNetwork<C>,
        source: Node,
        sink: Node,
    ) -> Result<MaxFlow<C>> {
        assert_eq!(
            network.len(),
            self.predecessor.len(),
            "Solver was created for a different number of nodes"
        );
        assert!(
            network.has_node(source) && network.has_node(sink),
            "Source and sink must be nodes of the network"
        );
        assert_ne!(source, sink, "Source and sink must differ");

        let mut value = C::zero();
        let mut augmentations = 0;

        while self.bfs(network, source, sink) {
            let increment = self.augment(network, source, sink)?;
            value = value.try_add(increment)?;
            augmentations += 1;
        }

        trace!("Max-flow {source} -> {sink}: value {value} after {augmentations} augmentations");

        Ok(MaxFlow {
            value,
            source_side: self.visited.clone(),
            augmentations,
        })
    }

    /// Performs a complete BFS from `source` over arcs with positive residual capacity and
    /// records the discovery predecessor of every reached node. Does not stop at the sink,
    /// so that after the last (unsuccessful) search `self.visited` is the source side of a
    /// minimum cut.
    ///
    /// Returns *true* if the sink was reached.
    fn bfs<C: Capacity>(&mut self, network: &ResidualNetwork<C>, source: Node, sink: Node) -> bool {
        self.visited.clear_all();
        self.queue.clear();

        self.visited.set_bit(source);
        self.queue.push_back(source);

        while let Some(u) = self.queue.pop_front() {
            for v in network.vertices() {
                if !self.visited.get_bit(v) && network.has_residual_capacity(u, v) {
                    self.visited.set_bit(v);
                    self.predecessor[v as usize] = u;
                    self.queue.push_back(v);
                }
            }
        }

        self.visited.get_bit(sink)
    }

    /// Pushes the bottleneck capacity along the augmenting path found by the last BFS and
    /// returns the amount pushed.
    fn augment<C: Capacity>(
        &self,
        network: &mut ResidualNetwork<C>,
        source: Node,
        sink: Node,
    ) -> Result<C> {
        let mut increment = C::max_value();
        let mut v = sink;
        while v != source {
            let u = self.predecessor[v as usize];
            increment = increment.min(network.residual_capacity(u, v));
            v = u;
        }

        let mut v = sink;
        while v != source {
            let u = self.predecessor[v as usize];
            network.try_push_flow(u, v, increment)?;
            v = u;
        }

        Ok(increment)
    }
}

/// Maximum flow computations directly on a network.
pub trait MaxFlowAlgo<C: Capacity> {
    /// Resets the flow and computes a maximum flow from `source` to `sink` with a fresh
    /// [`EdmondsKarp`] solver.
    fn max_flow(&mut self, source: Node, sink: Node) -> Result<MaxFlow<C>>;

    /// Returns the value of a minimum `source`-`sink` cut
    fn min_cut_value(&mut self, source: Node, sink: Node) -> Result<C> {
        Ok(self.max_flow(source, sink)?.value())
    }
}

impl<C: Capacity> MaxFlowAlgo<C> for ResidualNetwork<C> {
    fn max_flow(&mut self, source: Node, sink: Node) -> Result<MaxFlow<C>> {
        self.reset_flow();
        EdmondsKarp::new(self.number_of_nodes()).compute(self, source, sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    const EDGES: [(Node, Node, i64); 9] = [
        (0, 1, 16),
        (0, 2, 13),
        (1, 2, 4),
        (1, 3, 12),
        (2, 4, 14),
        (3, 2, 9),
        (3, 5, 20),
        (4, 3, 7),
        (4, 5, 4),
    ];

    fn network() -> ResidualNetwork<i64> {
        ResidualNetwork::try_from_edges(6, EDGES.iter()).unwrap()
    }

    #[test]
    fn edmonds_karp() {
        let mut network = network();
        let flow = EdmondsKarp::new(6).compute(&mut network, 0, 5).unwrap();

        // undirected: the cut {3, 5} | {0, 1, 2, 4} has capacity 12 + 9 + 7 + 4 = 32,
        // the cut around the sink only 20 + 4 = 24
        assert_eq!(flow.value(), 24);
        assert_eq!(
            flow.source_side().iter_set_bits().collect_vec(),
            vec![0, 1, 2, 3, 4]
        );
        assert_eq!(network.cut_value(flow.source_side()).unwrap(), 24);
        assert!(flow.augmentations() > 0);
    }

    #[test]
    fn flow_is_feasible() {
        let mut network = network();
        let flow = EdmondsKarp::new(6).compute(&mut network, 1, 4).unwrap();

        for (u, v) in network.vertices().cartesian_product(network.vertices()) {
            assert_eq!(network.flow(u, v), -network.flow(v, u));
            assert!(network.flow(u, v) <= network.capacity(u, v));
        }

        for u in network.vertices().filter(|&u| u != 1 && u != 4) {
            let excess: i64 = network.vertices().map(|v| network.flow(u, v)).sum();
            assert_eq!(excess, 0, "flow conservation violated at {u}");
        }

        let out_of_source: i64 = network.vertices().map(|v| network.flow(1, v)).sum();
        assert_eq!(out_of_source, flow.value());
    }

    #[test]
    fn disconnected_source_and_sink() {
        let mut network = ResidualNetwork::try_from_edges(
            4,
            [CapacitatedEdge(0, 1, 3i64), CapacitatedEdge(2, 3, 5)],
        )
        .unwrap();

        let flow = network.max_flow(0, 3).unwrap();
        assert_eq!(flow.value(), 0);
        assert_eq!(flow.augmentations(), 0);
        assert_eq!(flow.source_side().iter_set_bits().collect_vec(), vec![0, 1]);
    }

    #[test]
    fn flow_must_be_reset_between_runs() {
        let mut network = network();
        let mut solver = EdmondsKarp::new(6);

        let first = solver.compute(&mut network, 0, 5).unwrap();
        // no augmenting path is left in the saturated network
        let second = solver.compute(&mut network, 0, 5).unwrap();
        assert_eq!(second.value(), 0);
        assert_eq!(first.source_side(), second.source_side());

        network.reset_flow();
        let third = solver.compute(&mut network, 0, 5).unwrap();
        assert_eq!(first.value(), third.value());
        assert_eq!(first.augmentations(), third.augmentations());
        assert_eq!(first.source_side(), third.source_side());
    }

    #[test]
    fn overflow_is_reported() {
        let mut network = ResidualNetwork::try_from_edges(
            3,
            [
                CapacitatedEdge(0, 2, i64::MAX),
                CapacitatedEdge(0, 1, i64::MAX),
                CapacitatedEdge(1, 2, i64::MAX),
            ],
        )
        .unwrap();

        assert!(network.max_flow(0, 2).unwrap_err().is_overflow());
    }

    #[test]
    fn huge_reverse_residual_is_not_an_overflow() {
        // (4, 3) carries i64::MAX: once flow crosses it, the residual capacity of the
        // reverse arc (3, 4) exceeds the capacity type, yet the flow value stays small
        let mut network = ResidualNetwork::try_from_edges(
            8,
            [
                CapacitatedEdge(0, 4, 1i64),
                CapacitatedEdge(4, 3, i64::MAX),
                CapacitatedEdge(3, 7, 1),
                CapacitatedEdge(0, 1, 1),
                CapacitatedEdge(1, 2, 1),
                CapacitatedEdge(2, 3, 1),
                CapacitatedEdge(4, 5, 1),
                CapacitatedEdge(5, 6, 1),
                CapacitatedEdge(6, 7, 1),
            ],
        )
        .unwrap();

        let flow = network.max_flow(0, 7).unwrap();
        assert_eq!(flow.value(), 2);
        assert_eq!(network.cut_value(flow.source_side()).unwrap(), 2);
    }

    #[test]
    #[should_panic]
    fn source_equals_sink() {
        let mut network = network();
        let _ = network.max_flow(2, 2);
    }

    #[test]
    fn matches_brute_force() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for n in 2..=7 {
            for _ in 0..10 {
                let edges = random_instance(rng, n);
                let mut network = ResidualNetwork::try_from_edges(n, edges.iter()).unwrap();
                let mut solver = EdmondsKarp::new(n);

                for (s, t) in (0..n).tuple_combinations() {
                    network.reset_flow();
                    let flow = solver.compute(&mut network, s, t).unwrap();
                    assert_eq!(flow.value(), brute_force_min_cut(n, &edges, s, t));
                    assert_eq!(network.cut_value(flow.source_side()).unwrap(), flow.value());
                    assert!(flow.is_on_source_side(s));
                    assert!(!flow.is_on_source_side(t));
                }
            }
        }
    }
}
