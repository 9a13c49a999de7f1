use log::warn;

use super::*;

/// Dense residual network of an undirected capacitated graph.
///
/// Stores:
/// - the number of nodes,
/// - a symmetric `n x n` capacity matrix where parallel input edges are summed up,
/// - an antisymmetric `n x n` flow matrix (`F[u][v] = -F[v][u]`).
///
/// Both matrices are stored row-major in a flat vector sized to the actual number of nodes.
/// The capacity matrix never changes after construction, while the flow matrix is owned by
/// whichever max-flow computation currently runs. It is **not** reset implicitly: call
/// [`ResidualNetwork::reset_flow`] before every independent computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidualNetwork<C = i64> {
    n: NumNodes,
    capacity: Vec<C>,
    flow: Vec<C>,
}

impl<C: Capacity> ResidualNetwork<C> {
    /// Creates a network with `n` nodes and no capacity between any pair of nodes
    pub fn new(n: NumNodes) -> Self {
        let size = n as usize * n as usize;
        Self {
            n,
            capacity: vec![C::zero(); size],
            flow: vec![C::zero(); size],
        }
    }

    /// Builds the network from a list of undirected capacitated edges.
    ///
    /// Parallel edges between the same pair accumulate. Self-loops never cross a cut and are
    /// ignored.
    ///
    /// # Errors
    /// - [`CutTreeError::NodeOutOfRange`] if an endpoint is not in `0..n`,
    /// - [`CutTreeError::NegativeCapacity`] if a capacity is negative,
    /// - [`CutTreeError::Overflow`] if the summed capacity of a pair exceeds `C`.
    ///
    /// # Example
    /// ```
    /// use cuttree::prelude::*;
    ///
    /// let edges = [CapacitatedEdge(0, 1, 2i64), CapacitatedEdge(1, 0, 3)];
    /// let network = ResidualNetwork::try_from_edges(2, edges).unwrap();
    /// assert_eq!(network.capacity(0, 1), 5);
    /// assert_eq!(network.capacity(1, 0), 5);
    /// ```
    pub fn try_from_edges<I, E>(n: NumNodes, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<CapacitatedEdge<C>>,
    {
        let mut network = Self::new(n);
        for edge in edges {
            let CapacitatedEdge(u, v, c) = edge.into();
            network.try_add_capacity(u, v, c)?;
        }
        Ok(network)
    }

    /// Row-major index of the pair `(u, v)`
    #[inline(always)]
    fn index(&self, u: Node, v: Node) -> usize {
        u as usize * self.n as usize + v as usize
    }

    /// Fails with [`CutTreeError::NodeOutOfRange`] if `u` is not a node of the network
    fn check_node(&self, u: Node) -> Result<()> {
        if self.has_node(u) {
            Ok(())
        } else {
            Err(CutTreeError::NodeOutOfRange { node: u, n: self.n })
        }
    }

    /// Adds `c` to the capacity between `u` and `v` (in both directions).
    ///
    /// # Errors
    /// See [`ResidualNetwork::try_from_edges`].
    pub fn try_add_capacity(&mut self, u: Node, v: Node, c: C) -> Result<()> {
        self.check_node(u)?;
        self.check_node(v)?;

        if c.is_negative() {
            return Err(CutTreeError::NegativeCapacity {
                u,
                v,
                capacity: c.to_string(),
            });
        }

        if u == v {
            warn!("Ignoring self-loop at node {u} with capacity {c}");
            return Ok(());
        }

        let uv = self.index(u, v);
        let vu = self.index(v, u);
        let sum = self.capacity[uv].try_add(c)?;
        self.capacity[uv] = sum;
        self.capacity[vu] = sum;
        Ok(())
    }

    /// Returns the capacity between `u` and `v`
    pub fn capacity(&self, u: Node, v: Node) -> C {
        self.capacity[self.index(u, v)]
    }

    /// Returns the current flow from `u` to `v` (negative if flow goes from `v` to `u`)
    pub fn flow(&self, u: Node, v: Node) -> C {
        self.flow[self.index(u, v)]
    }

    /// Returns *true* if more flow can be routed from `u` to `v`, ie. `C[u][v] > F[u][v]`
    #[inline(always)]
    pub fn has_residual_capacity(&self, u: Node, v: Node) -> bool {
        let idx = self.index(u, v);
        self.capacity[idx] > self.flow[idx]
    }

    /// Returns the residual capacity `C[u][v] - F[u][v]`.
    ///
    /// On a reverse arc this may be up to twice the capacity. Values beyond `C::max_value()`
    /// are clamped to it: they can never be the bottleneck of an augmenting path since the
    /// flow value itself must fit into `C`.
    pub fn residual_capacity(&self, u: Node, v: Node) -> C {
        let idx = self.index(u, v);
        self.capacity[idx]
            .checked_sub(&self.flow[idx])
            .unwrap_or_else(C::max_value)
    }

    /// Routes `delta` additional units of flow from `u` to `v`, keeping the flow matrix
    /// antisymmetric.
    pub fn try_push_flow(&mut self, u: Node, v: Node, delta: C) -> Result<()> {
        let uv = self.index(u, v);
        let vu = self.index(v, u);
        self.flow[uv] = self.flow[uv].try_add(delta)?;
        self.flow[vu] = self.flow[vu].try_sub(delta)?;
        Ok(())
    }

    /// Sets the flow on every pair back to zero
    pub fn reset_flow(&mut self) {
        self.flow.fill(C::zero());
    }

    /// Returns *true* if no flow is routed anywhere
    pub fn is_flow_free(&self) -> bool {
        self.flow.iter().all(|f| f.is_zero())
    }

    /// Iterates over all pairs `u < v` with positive capacity in lexicographic order.
    /// Parallel input edges appear as a single summed edge.
    pub fn capacitated_edges(&self) -> impl Iterator<Item = CapacitatedEdge<C>> + '_ {
        self.vertices().flat_map(move |u| {
            (u + 1..self.n)
                .map(move |v| CapacitatedEdge(u, v, self.capacity(u, v)))
                .filter(|e| e.capacity() > C::zero())
        })
    }

    /// Returns the total capacity of all edges incident to `u`
    pub fn weighted_degree(&self, u: Node) -> Result<C> {
        self.vertices()
            .try_fold(C::zero(), |acc, v| acc.try_add(self.capacity(u, v)))
    }

    /// Returns the total capacity of all pairs with exactly one endpoint in `side`
    pub fn cut_value(&self, side: &NodeBitSet) -> Result<C> {
        let mut value = C::zero();
        for u in side.iter_set_bits() {
            for v in self.vertices().filter(|&v| !side.get_bit(v)) {
                value = value.try_add(self.capacity(u, v))?;
            }
        }
        Ok(value)
    }
}

impl<C> GraphNodeOrder for ResidualNetwork<C> {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }
}

impl<C: Capacity> GraphEdgeOrder for ResidualNetwork<C> {
    /// Number of node pairs with positive capacity
    fn number_of_edges(&self) -> NumEdges {
        self.capacitated_edges().count() as NumEdges
    }
}
