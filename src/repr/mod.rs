/*!
# Representations

The two data structures a cut-tree computation revolves around:

- [`ResidualNetwork`]: the dense capacity matrix of the input graph together with the flow
  matrix mutated by max-flow computations,
- [`CutTree`]: the resulting Gomory-Hu tree stored as a parent/weight array, including
  queries for pairwise minimum cuts.

[`digest`] enables computing a `Sha256`-hash for a given cut tree.
*/

use crate::{ops::*, *};

mod cut_tree;
mod residual;

pub mod digest;

pub use cut_tree::*;
pub use residual::*;
