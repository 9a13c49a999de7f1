/*!
# Cut Tree Digests

This module provides the [`CutTreeDigest`] trait, which computes a **hash-based digest** of a
cut tree. Two runs of the tree builder on the same input must produce the same parent and
weight arrays, hence the same digest; comparing digests is a cheap way to check determinism
across runs or stored outputs.

The digest encodes:
- the number of nodes, and
- the tree edges `(u, parent[u], weight[u])` in increasing order of `u`,

before feeding them into a cryptographic hash function. Weights are widened to 128 bit so that
the digest does not depend on the capacity type.

## Example
```
use cuttree::{prelude::*, algo::*, repr::digest::CutTreeDigest};

let edges = [CapacitatedEdge(0, 1, 5i64), CapacitatedEdge(1, 2, 3)];
let a = GomoryHu::new().compute_from_edges(3, edges).unwrap();
let b = GomoryHu::new().compute_from_edges(3, edges).unwrap();

assert_eq!(a.digest_sha256(), b.digest_sha256());
assert_eq!(a.digest_sha256().len(), 64);
```
*/

use std::fmt::LowerHex;

use super::*;
use ::digest::{Digest, Output};

/// Trait for computing a **canonical hash digest** of a cut tree.
pub trait CutTreeDigest {
    /// Computes a digest of the tree using the provided hash function `D`.
    ///
    /// The result is returned as a **hexadecimal string**.
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest;

    /// Computes a **SHA-256 digest** of the tree.
    ///
    /// The returned string is exactly 64 characters long.
    fn digest_sha256(&self) -> String {
        self.digest::<sha2::Sha256>()
    }
}

impl<C: Capacity> CutTreeDigest for CutTree<C> {
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest,
    {
        let mut hasher = D::new();

        // first encode the number of nodes in the tree
        hasher.update(self.number_of_nodes().to_le_bytes());

        // then append the edges ordered by child
        for CapacitatedEdge(u, p, w) in self.edges() {
            hasher.update(u.to_le_bytes());
            hasher.update(p.to_le_bytes());
            hasher.update(w.widen().to_le_bytes());
        }

        format!("{:x}", hasher.finalize())
    }
}
