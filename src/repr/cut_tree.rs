use std::collections::VecDeque;

use super::*;

/// Root of every cut tree
pub const ROOT: Node = 0;

/// A Gomory-Hu cut tree.
///
/// The tree is stored as a parent array rooted at node [`ROOT`]: every node `u != ROOT` is
/// connected to `parent[u]` by a tree edge of weight `weight[u]`. The entries of the root are
/// placeholders and never reported as an edge.
///
/// For every pair `(u, v)` the minimum weight on the tree path between `u` and `v` equals the
/// value of a minimum `u`-`v` cut in the graph the tree was computed for, and removing that
/// edge from the tree splits the nodes into the two sides of such a cut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CutTree<C = i64> {
    parent: Vec<Node>,
    weight: Vec<C>,
}

impl<C: Capacity> CutTree<C> {
    /// Creates a cut tree from its parent and weight arrays
    pub(crate) fn from_parts(parent: Vec<Node>, weight: Vec<C>) -> Self {
        debug_assert_eq!(parent.len(), weight.len());
        Self { parent, weight }
    }

    /// Returns the parent array (`parent[ROOT] = ROOT`)
    pub fn parents(&self) -> &[Node] {
        &self.parent
    }

    /// Returns the weight array (`weight[ROOT] = 0`)
    pub fn weights(&self) -> &[C] {
        &self.weight
    }

    /// Returns the parent of `u` or `None` if `u` is the root
    pub fn parent_of(&self, u: Node) -> Option<Node> {
        (u != ROOT).then(|| self.parent[u as usize])
    }

    /// Returns the weight of the edge between `u` and its parent or `None` if `u` is the root
    pub fn weight_of(&self, u: Node) -> Option<C> {
        (u != ROOT).then(|| self.weight[u as usize])
    }

    /// Iterates over the tree edges `(u, parent[u], weight[u])` for all non-root nodes `u`
    /// in increasing order
    pub fn edges(&self) -> impl Iterator<Item = CapacitatedEdge<C>> + '_ {
        self.vertices()
            .skip(1)
            .map(|u| CapacitatedEdge(u, self.parent[u as usize], self.weight[u as usize]))
    }

    /// Iterates over `u` and all its ancestors up to and including the root
    fn ancestors(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        std::iter::successors(Some(u), move |&x| {
            (x != ROOT).then(|| self.parent[x as usize])
        })
    }

    /// Returns the tree edges on the path from `u` to `v`, ordered from `u` towards `v`.
    /// Each edge is reported as `(child, parent, weight)`.
    pub fn path_edges(&self, u: Node, v: Node) -> Vec<CapacitatedEdge<C>> {
        // position of every ancestor of u on the path u -> ROOT
        let mut position_from_u = vec![None; self.len()];
        for (i, x) in self.ancestors(u).enumerate() {
            position_from_u[x as usize] = Some(i);
        }

        let mut from_v = Vec::new();
        let mut lca = v;
        while position_from_u[lca as usize].is_none() {
            from_v.push(CapacitatedEdge(
                lca,
                self.parent[lca as usize],
                self.weight[lca as usize],
            ));
            lca = self.parent[lca as usize];
        }

        self.ancestors(u)
            .take_while(|&x| x != lca)
            .map(|x| CapacitatedEdge(x, self.parent[x as usize], self.weight[x as usize]))
            .chain(from_v.into_iter().rev())
            .collect()
    }

    /// Returns the lightest tree edge between `u` and `v` (the first one on the path from
    /// `u` in case of ties) or `None` if `u == v`
    pub fn min_cut_edge(&self, u: Node, v: Node) -> Option<CapacitatedEdge<C>> {
        self.path_edges(u, v).into_iter().min_by_key(|e| e.capacity())
    }

    /// Returns the value of a minimum `u`-`v` cut or `None` if `u == v`
    ///
    /// # Example
    /// ```
    /// use cuttree::{prelude::*, algo::*};
    ///
    /// let edges = [
    ///     CapacitatedEdge(0, 1, 5i64),
    ///     CapacitatedEdge(1, 2, 3),
    ///     CapacitatedEdge(2, 3, 7),
    /// ];
    /// let tree = GomoryHu::new().compute_from_edges(4, edges).unwrap();
    /// assert_eq!(tree.min_cut_value(0, 3), Some(3));
    /// assert_eq!(tree.min_cut_value(2, 3), Some(7));
    /// assert_eq!(tree.min_cut_value(1, 1), None);
    /// ```
    pub fn min_cut_value(&self, u: Node, v: Node) -> Option<C> {
        self.min_cut_edge(u, v).map(|e| e.capacity())
    }

    /// Returns the side containing `u` of a minimum `u`-`v` cut or `None` if `u == v`.
    ///
    /// The side is obtained by removing the lightest edge on the tree path between `u` and `v`.
    pub fn min_cut_side(&self, u: Node, v: Node) -> Option<NodeBitSet> {
        let CapacitatedEdge(child, _, _) = self.min_cut_edge(u, v)?;

        let mut subtree = self.vertex_bitset_unset();
        for x in self.vertices() {
            if self.ancestors(x).any(|a| a == child) {
                subtree.set_bit(x);
            }
        }

        if subtree.get_bit(u) {
            return Some(subtree);
        }

        let mut complement = self.vertex_bitset_unset();
        for x in self.vertices().filter(|&x| !subtree.get_bit(x)) {
            complement.set_bit(x);
        }
        Some(complement)
    }

    /// Computes the `n x n` matrix of all pairwise minimum cut values (diagonal is zero).
    ///
    /// Runs one traversal of the tree per node, ie. `O(n^2)` in total.
    pub fn all_pairs_min_cut(&self) -> Vec<Vec<C>> {
        let n = self.len();
        let mut neighbors: Vec<Vec<(Node, C)>> = vec![Vec::new(); n];
        for CapacitatedEdge(u, p, w) in self.edges() {
            neighbors[u as usize].push((p, w));
            neighbors[p as usize].push((u, w));
        }

        let mut matrix = vec![vec![C::zero(); n]; n];
        let mut visited = self.vertex_bitset_unset();
        let mut queue = VecDeque::with_capacity(n);
        for source in self.vertices() {
            visited.clear_all();
            visited.set_bit(source);
            queue.push_back((source, C::max_value()));

            while let Some((u, bottleneck)) = queue.pop_front() {
                for &(v, w) in &neighbors[u as usize] {
                    if visited.get_bit(v) {
                        continue;
                    }
                    visited.set_bit(v);
                    let value = bottleneck.min(w);
                    matrix[source as usize][v as usize] = value;
                    queue.push_back((v, value));
                }
            }
        }

        matrix
    }

    /// Returns *true* if the parent array describes a tree spanning all nodes rooted at
    /// [`ROOT`], ie. exactly `n - 1` edges, connected and acyclic.
    pub fn is_spanning_tree(&self) -> bool {
        let n = self.len();
        if n == 0 || self.parent.len() != self.weight.len() || self.parent[0] != ROOT {
            return false;
        }

        // every node must reach the root in less than n steps, otherwise it is on a cycle
        self.vertices().all(|u| {
            self.ancestors(u)
                .take(n + 1)
                .position(|x| x == ROOT)
                .is_some_and(|steps| steps < n)
        })
    }
}

impl<C> GraphNodeOrder for CutTree<C> {
    fn number_of_nodes(&self) -> NumNodes {
        self.parent.len() as NumNodes
    }
}

impl<C> GraphEdgeOrder for CutTree<C> {
    fn number_of_edges(&self) -> NumEdges {
        self.parent.len().saturating_sub(1) as NumEdges
    }
}
