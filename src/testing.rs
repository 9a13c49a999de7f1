//! Helpers shared by the unit tests of several modules.

use rand::Rng;

use crate::{gens::*, prelude::*};

/// Value of a minimum `u`-`v` cut computed by enumerating all `2^n` node subsets.
///
/// Only feasible for tiny graphs; used as an independent reference.
pub(crate) fn brute_force_min_cut(
    n: NumNodes,
    edges: &[CapacitatedEdge<i64>],
    u: Node,
    v: Node,
) -> i64 {
    assert!(n <= 16 && u != v);

    let contains = |mask: u32, x: Node| (mask >> x) & 1 == 1;

    (0u32..1 << n)
        .filter(|&mask| contains(mask, u) && !contains(mask, v))
        .map(|mask| {
            edges
                .iter()
                .filter(|e| contains(mask, e.0) != contains(mask, e.1))
                .map(|e| e.capacity())
                .sum::<i64>()
        })
        .min()
        .unwrap_or(0)
}

/// A random capacitated instance on `n` nodes.
///
/// Density and capacity range vary between calls. A few parallel edges and self-loops are
/// mixed in, as well as zero capacities.
pub(crate) fn random_instance<R: Rng>(rng: &mut R, n: NumNodes) -> Vec<CapacitatedEdge<i64>> {
    let p = rng.random_range(0.0..=1.0);
    let max_capacity = rng.random_range(1..=20i64);

    let mut edges = Gnc::new()
        .nodes(n)
        .prob(p)
        .capacities(0..=max_capacity)
        .generate(rng);

    for _ in 0..rng.random_range(0..3) {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        let c = rng.random_range(0..=max_capacity);
        edges.push(CapacitatedEdge(u, v, c));
    }

    edges
}
