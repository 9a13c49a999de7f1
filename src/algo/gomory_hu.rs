/*!
# Gomory-Hu Trees (Gusfield)

Computes a Gomory-Hu cut tree with Gusfield's simplification: `n - 1` maximum flow
computations directly on the input graph (no contraction), while the tree is maintained as a
parent/weight array that is re-wired after every cut.

Starting with every node attached to the root `0`, iteration `s = 1, ..., n - 1`
1. computes a minimum cut between `s` and its current parent `t`,
2. stores the cut value as the weight of the edge `(s, t)`,
3. moves every other node attached to `t` that lies on `s`'s side of the cut over to `s`,
4. and, if `t`'s own parent also lies on `s`'s side, swaps `s` into `t`'s position.

Every iteration depends on the parent array left behind by all previous iterations, so the
loop is inherently sequential.
*/

use log::{debug, info};

use super::*;

/// Maximum number of nodes accepted by default.
///
/// Both the capacity and the flow matrix need `n^2` entries, so this bounds the memory of a
/// single run.
pub const DEFAULT_MAX_NODES: NumNodes = 3000;

/// Configurable builder for Gomory-Hu trees.
///
/// # Example
/// ```
/// use cuttree::{prelude::*, algo::*};
///
/// let edges = [CapacitatedEdge(0, 1, 5i64), CapacitatedEdge(1, 2, 3)];
/// let tree = GomoryHu::new().max_nodes(10).compute_from_edges(3, edges).unwrap();
///
/// assert_eq!(tree.parent_of(1), Some(0));
/// assert_eq!(tree.weight_of(1), Some(5));
/// assert_eq!(tree.parent_of(2), Some(1));
/// assert_eq!(tree.weight_of(2), Some(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GomoryHu {
    max_nodes: NumNodes,
}

impl Default for GomoryHu {
    fn default() -> Self {
        Self {
            max_nodes: DEFAULT_MAX_NODES,
        }
    }
}

impl GomoryHu {
    /// Creates a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the maximum number of nodes a graph may have
    pub fn set_max_nodes(&mut self, max_nodes: NumNodes) {
        self.max_nodes = max_nodes;
    }

    /// Chainable version of [`Self::set_max_nodes`]
    pub fn max_nodes(mut self, max_nodes: NumNodes) -> Self {
        self.set_max_nodes(max_nodes);
        self
    }

    /// Returns the maximum number of nodes a graph may have
    pub fn get_max_nodes(&self) -> NumNodes {
        self.max_nodes
    }

    /// Fails with an input error if a graph with `n` nodes cannot be processed
    pub fn check_number_of_nodes(&self, n: NumNodes) -> Result<()> {
        if n == 0 {
            return Err(CutTreeError::EmptyGraph);
        }
        if n > self.max_nodes {
            return Err(CutTreeError::TooManyNodes {
                n,
                max: self.max_nodes,
            });
        }
        Ok(())
    }

    /// Validates `n`, builds the residual network from `edges` and computes its cut tree.
    ///
    /// # Errors
    /// Any input or overflow error of [`ResidualNetwork::try_from_edges`] and
    /// [`GomoryHu::compute`]. `n` is validated before any matrix is allocated.
    pub fn compute_from_edges<C, I, E>(&self, n: NumNodes, edges: I) -> Result<CutTree<C>>
    where
        C: Capacity,
        I: IntoIterator<Item = E>,
        E: Into<CapacitatedEdge<C>>,
    {
        self.check_number_of_nodes(n)?;
        let mut network = ResidualNetwork::try_from_edges(n, edges)?;
        self.compute(&mut network)
    }

    /// Computes the cut tree of `network` with Gusfield's algorithm.
    ///
    /// The flow matrix of `network` is overwritten; its capacities are left untouched.
    ///
    /// # Errors
    /// - [`CutTreeError::EmptyGraph`] / [`CutTreeError::TooManyNodes`] if the network size is
    ///   not accepted by this builder,
    /// - [`CutTreeError::Overflow`] if a flow value exceeds the capacity type.
    pub fn compute<C: Capacity>(&self, network: &mut ResidualNetwork<C>) -> Result<CutTree<C>> {
        let n = network.number_of_nodes();
        self.check_number_of_nodes(n)?;

        let mut state = TreeState::new(n);
        let mut solver = EdmondsKarp::new(n);

        for s in 1..n {
            let t = state.parent_of(s);

            network.reset_flow();
            let cut = solver.compute(network, s, t)?;
            let swapped = state.apply_cut(s, &cut);

            debug!(
                "Gusfield iteration {s}: cut to {t} has value {}{}",
                cut.value(),
                if swapped { " (swapped with parent)" } else { "" }
            );
        }

        let tree = state.into_tree();
        info!(
            "Computed cut tree with {} nodes and {} edges",
            tree.number_of_nodes(),
            tree.number_of_edges()
        );
        Ok(tree)
    }
}

/// Tree-in-progress of Gusfield's algorithm.
///
/// At the start of iteration `s`, the edges `(i, parent[i])` for `1 <= i < s` already carry
/// their final weights relative to the nodes processed so far; nodes `>= s` still hang off the
/// tree wherever the previous cuts placed them.
struct TreeState<C> {
    parent: Vec<Node>,
    weight: Vec<C>,
}

impl<C: Capacity> TreeState<C> {
    /// Every node starts attached to the root `0` with weight `0`
    fn new(n: NumNodes) -> Self {
        Self {
            parent: vec![ROOT; n as usize],
            weight: vec![C::zero(); n as usize],
        }
    }

    fn parent_of(&self, u: Node) -> Node {
        self.parent[u as usize]
    }

    /// Incorporates the minimum cut between `s` and `t = parent[s]` into the tree.
    /// Returns *true* if `s` and `t` swapped positions.
    fn apply_cut(&mut self, s: Node, cut: &MaxFlow<C>) -> bool {
        let t = self.parent[s as usize];
        let cut_value = cut.value();
        self.weight[s as usize] = cut_value;

        // nodes hanging off t that ended up on s's side now hang off s
        for (i, p) in self.parent.iter_mut().enumerate() {
            if i != s as usize && *p == t && cut.is_on_source_side(i as Node) {
                *p = s;
            }
        }

        // t's parent is on s's side: s takes over t's edge and t hangs off s.
        // Never happens for t = ROOT since parent[ROOT] = ROOT is the sink.
        let grandparent = self.parent[t as usize];
        if !cut.is_on_source_side(grandparent) {
            return false;
        }

        self.parent[s as usize] = grandparent;
        self.parent[t as usize] = s;
        self.weight[s as usize] = self.weight[t as usize];
        self.weight[t as usize] = cut_value;
        true
    }

    fn into_tree(self) -> CutTree<C> {
        CutTree::from_parts(self.parent, self.weight)
    }
}

/// Cut-tree computation directly on a network using the default [`GomoryHu`] settings.
pub trait CutTreeAlgo<C: Capacity> {
    /// Computes the Gomory-Hu tree of the network
    fn gomory_hu_tree(&mut self) -> Result<CutTree<C>>;
}

impl<C: Capacity> CutTreeAlgo<C> for ResidualNetwork<C> {
    fn gomory_hu_tree(&mut self) -> Result<CutTree<C>> {
        GomoryHu::new().compute(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{gens::*, repr::digest::CutTreeDigest, testing::*};
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    /// Checks the Gomory-Hu property for every pair against an independent brute-force
    fn assert_is_gomory_hu_tree(n: NumNodes, edges: &[CapacitatedEdge<i64>], tree: &CutTree<i64>) {
        assert!(tree.is_spanning_tree());
        assert_eq!(tree.edges().count(), n as usize - 1);

        for (u, v) in (0..n).tuple_combinations() {
            let expected = brute_force_min_cut(n, edges, u, v);
            assert_eq!(tree.min_cut_value(u, v), Some(expected), "pair ({u},{v})");
            assert_eq!(tree.min_cut_value(v, u), Some(expected), "pair ({v},{u})");

            // the tree also yields an actual minimum cut
            let side = tree.min_cut_side(u, v).unwrap();
            assert!(side.get_bit(u) && !side.get_bit(v));
            let network = ResidualNetwork::try_from_edges(n, edges.iter()).unwrap();
            assert_eq!(network.cut_value(&side).unwrap(), expected);
        }
    }

    #[test]
    fn already_a_tree() {
        let edges = [CapacitatedEdge(0, 1, 5i64), CapacitatedEdge(1, 2, 3)];
        let tree = GomoryHu::new().compute_from_edges(3, edges).unwrap();

        assert_eq!(tree.parents(), &[0, 0, 1]);
        assert_eq!(tree.weights(), &[0, 5, 3]);
        assert_eq!(
            tree.edges().collect_vec(),
            vec![CapacitatedEdge(1, 0, 5), CapacitatedEdge(2, 1, 3)]
        );
    }

    #[test]
    fn triangle() {
        let edges = [
            CapacitatedEdge(0, 1, 4i64),
            CapacitatedEdge(1, 2, 4),
            CapacitatedEdge(0, 2, 4),
        ];
        let tree = GomoryHu::new().compute_from_edges(3, edges).unwrap();

        // separating a single node cuts two edges of capacity 4
        assert!(tree.is_spanning_tree());
        assert_eq!(tree.edges().map(|e| e.capacity()).collect_vec(), vec![8, 8]);
        assert_is_gomory_hu_tree(3, &edges, &tree);
    }

    #[test]
    fn swap_with_parent() {
        // 1 is only loosely attached, 2 is strongly attached to 0 and 1 is attached to 2:
        // the cut between 2 and its parent 1 has 0 on 2's side.
        let edges = [
            CapacitatedEdge(0, 1, 1i64),
            CapacitatedEdge(0, 2, 10),
            CapacitatedEdge(1, 2, 2),
            CapacitatedEdge(1, 3, 1),
            CapacitatedEdge(2, 3, 1),
        ];
        let tree = GomoryHu::new().compute_from_edges(4, edges).unwrap();
        assert_is_gomory_hu_tree(4, &edges, &tree);
    }

    #[test]
    fn single_node() {
        let tree = GomoryHu::new()
            .compute_from_edges::<i64, _, CapacitatedEdge<i64>>(1, [])
            .unwrap();
        assert_eq!(tree.number_of_nodes(), 1);
        assert_eq!(tree.edges().count(), 0);
        assert!(tree.is_spanning_tree());
    }

    #[test]
    fn rejects_invalid_sizes() {
        let err = GomoryHu::new()
            .compute_from_edges::<i64, _, CapacitatedEdge<i64>>(0, [])
            .unwrap_err();
        assert!(matches!(err, CutTreeError::EmptyGraph));

        let err = GomoryHu::new()
            .max_nodes(4)
            .compute_from_edges::<i64, _, CapacitatedEdge<i64>>(5, [])
            .unwrap_err();
        assert!(matches!(err, CutTreeError::TooManyNodes { n: 5, max: 4 }));
        assert!(err.is_input_error());

        let mut network = ResidualNetwork::<i64>::new(5);
        assert!(GomoryHu::new().max_nodes(4).compute(&mut network).is_err());
        assert_eq!(GomoryHu::new().max_nodes(4).get_max_nodes(), 4);
    }

    #[test]
    fn rejects_invalid_edges() {
        let err = GomoryHu::new()
            .compute_from_edges(3, [CapacitatedEdge(0, 1, -2i64)])
            .unwrap_err();
        assert!(err.is_input_error());

        let err = GomoryHu::new()
            .compute_from_edges(3, [CapacitatedEdge(0, 7, 2i64)])
            .unwrap_err();
        assert!(err.is_input_error());
    }

    #[test]
    fn overflow_is_reported() {
        let edges = [
            CapacitatedEdge(0, 1, i64::MAX),
            CapacitatedEdge(1, 2, i64::MAX),
            CapacitatedEdge(0, 2, i64::MAX),
        ];
        let err = GomoryHu::new().compute_from_edges(3, edges).unwrap_err();
        assert!(err.is_overflow());
    }

    #[test]
    fn disconnected_components() {
        let mut edges = capacitated_clique([0, 1, 2], 3i64);
        edges.extend(capacitated_path([3, 4, 5], 2i64));
        let tree = GomoryHu::new().compute_from_edges(7, edges.iter()).unwrap();

        assert_is_gomory_hu_tree(7, &edges, &tree);
        for (u, v) in [(0, 3), (2, 5), (1, 6), (4, 6)] {
            assert_eq!(tree.min_cut_value(u, v), Some(0));
        }
        assert_eq!(tree.min_cut_value(0, 2), Some(6));
        assert_eq!(tree.min_cut_value(3, 5), Some(2));
    }

    #[test]
    fn random_graphs_match_brute_force() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1234);

        for n in 1..=8 {
            for _ in 0..25 {
                let edges = random_instance(rng, n);
                let tree = GomoryHu::new().compute_from_edges(n, edges.iter()).unwrap();
                if n > 1 {
                    assert_is_gomory_hu_tree(n, &edges, &tree);
                }
            }
        }
    }

    #[test]
    fn deterministic() {
        let rng = &mut Pcg64Mcg::seed_from_u64(42);

        for _ in 0..10 {
            let n = rng.random_range(2..20);
            let edges = Gnc::new()
                .nodes(n)
                .prob(0.3)
                .capacities(0..=100i64)
                .generate(rng);

            let mut network = ResidualNetwork::try_from_edges(n, edges.iter()).unwrap();
            let first = network.gomory_hu_tree().unwrap();
            let second = network.gomory_hu_tree().unwrap();

            assert_eq!(first, second);
            assert_eq!(first.digest_sha256(), second.digest_sha256());
        }
    }

    #[test]
    fn capacities_survive_computation() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        let edges = Gnc::new()
            .nodes(12)
            .prob(0.5)
            .capacities(1..=9i64)
            .generate(rng);

        let mut network = ResidualNetwork::try_from_edges(12, edges.iter()).unwrap();
        let before = network.clone();
        network.gomory_hu_tree().unwrap();

        assert_eq!(
            network.capacitated_edges().collect_vec(),
            before.capacitated_edges().collect_vec()
        );
    }
}
