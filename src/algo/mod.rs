/*!
# Cut Algorithms

This module provides the two algorithms a cut-tree computation is made of:
- [`EdmondsKarp`]: maximum flow / minimum cut between two nodes of a [`ResidualNetwork`],
- [`GomoryHu`]: Gusfield's algorithm computing a [`CutTree`] from `n - 1` such cuts.

Both are re-exported at the top level of this module, so you can simply do:
```rust
use cuttree::algo::*;
```
The most common entry points are also implemented as traits on the network itself
([`MaxFlowAlgo`], [`CutTreeAlgo`]).
*/

mod gomory_hu;
mod max_flow;

use crate::{Result, prelude::*};

pub use gomory_hu::*;
pub use max_flow::*;
