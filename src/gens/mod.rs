/*!
# Graph Generators

Random and deterministic capacitated graphs, used to exercise and benchmark cut-tree
computations.

Generators follow a builder-style pattern:

1. Create a generator instance (e.g., `Gnc::new()`).
2. Set parameters using builder methods (e.g., `.nodes(n).prob(p).capacities(1..=10)`).
3. Generate edges via `generate()`.

Supported models:
- [`Gnc`]: `G(n,p)` with capacities drawn uniformly from a range,
- [`substructures`]: paths, cycles and cliques with a fixed capacity.

The [`RandomNetwork`] trait wraps the generators into constructors for
[`ResidualNetwork`].
*/

use std::ops::RangeInclusive;

use rand::{Rng, distr::uniform::SampleUniform};

use crate::{Result, prelude::*};

mod gnc;
pub mod substructures;

pub use gnc::*;
pub use substructures::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// General trait for a configurable random generator of capacitated edges.
pub trait CapacitatedGraphGenerator<C> {
    /// Generates a list of random capacitated edges.
    fn generate<R>(&self, rng: &mut R) -> Vec<CapacitatedEdge<C>>
    where
        R: Rng;
}

/// Trait for building residual networks from random models.
pub trait RandomNetwork<C>: Sized {
    /// Creates a random `G(n,p)` network with capacities drawn uniformly from `capacities`.
    ///
    /// # Errors
    /// Cannot fail for valid generator parameters; the error is the one of
    /// [`ResidualNetwork::try_from_edges`].
    fn gnc<R>(rng: &mut R, n: NumNodes, p: f64, capacities: RangeInclusive<C>) -> Result<Self>
    where
        R: Rng;
}

impl<C> RandomNetwork<C> for ResidualNetwork<C>
where
    C: Capacity + SampleUniform,
{
    fn gnc<R>(rng: &mut R, n: NumNodes, p: f64, capacities: RangeInclusive<C>) -> Result<Self>
    where
        R: Rng,
    {
        let edges = Gnc::new()
            .nodes(n)
            .prob(p)
            .capacities(capacities)
            .generate(rng);

        ResidualNetwork::try_from_edges(n, edges)
    }
}
