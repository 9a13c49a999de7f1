use itertools::Itertools;

use super::*;

/// `G(n,p)` graph with capacities.
///
/// Every unordered pair `{u, v}` with `u < v` becomes an edge with probability `p`
/// independently of all other pairs. Capacities are drawn uniformly from an inclusive range.
///
/// # Example
/// ```
/// use cuttree::{prelude::*, gens::*};
/// use rand::SeedableRng;
///
/// let rng = &mut rand::rngs::StdRng::seed_from_u64(1);
/// let edges = Gnc::new().nodes(10).prob(1.0).capacities(1..=5i64).generate(rng);
///
/// assert_eq!(edges.len(), 45);
/// assert!(edges.iter().all(|e| (1..=5).contains(&e.capacity())));
/// ```
#[derive(Debug, Clone)]
pub struct Gnc<C> {
    n: NumNodes,
    p: f64,
    capacities: RangeInclusive<C>,
}

impl<C: Capacity> Default for Gnc<C> {
    fn default() -> Self {
        Self {
            n: 0,
            p: 0.5,
            capacities: C::one()..=C::one(),
        }
    }
}

impl<C: Capacity> Gnc<C> {
    /// Creates a new generator with `p = 0.5` and unit capacities
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p`
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&prob),
            "Probability must be between 0 and 1!"
        );
        self.p = prob;
        self
    }

    /// Updates the range capacities are drawn from
    pub fn capacities(mut self, capacities: RangeInclusive<C>) -> Self {
        assert!(
            !capacities.start().is_negative() && capacities.start() <= capacities.end(),
            "Capacity range must be non-empty and non-negative!"
        );
        self.capacities = capacities;
        self
    }
}

impl<C: Capacity> NumNodesGen for Gnc<C> {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl<C> CapacitatedGraphGenerator<C> for Gnc<C>
where
    C: Capacity + SampleUniform,
{
    fn generate<R>(&self, rng: &mut R) -> Vec<CapacitatedEdge<C>>
    where
        R: Rng,
    {
        let mut edges = Vec::new();
        for (u, v) in (0..self.n).tuple_combinations() {
            if rng.random_bool(self.p) {
                let c = rng.random_range(self.capacities.clone());
                edges.push(CapacitatedEdge(u, v, c));
            }
        }
        edges
    }
}
