/*!
# Node Representation

We choose `Node = u32` as the dense capacity matrices of a cut-tree computation limit us to
far fewer than `2^32` nodes anyway. Using `u32` instead of `usize` halves the size of parent
and predecessor arrays and lets us manipulate node values directly.
*/

use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
///
/// Used to describe one side of a cut, e.g. the nodes still reachable from the source in the
/// residual network after a maximum flow has been computed.
pub type NodeBitSet = BitSetImpl<Node>;
