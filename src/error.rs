//! Error type shared by all fallible operations of the crate.
//!
//! There are no transient failures: every error is either a rejected input, an arithmetic
//! overflow of the capacity type, or an IO failure of a reader/writer.

use thiserror::Error;

use crate::{Node, NumNodes};

#[derive(Debug, Error)]
pub enum CutTreeError {
    #[error("node {node} is out of range for a graph with {n} nodes")]
    NodeOutOfRange { node: Node, n: NumNodes },

    #[error("negative capacity {capacity} on edge ({u},{v})")]
    NegativeCapacity { u: Node, v: Node, capacity: String },

    #[error("graph has {n} nodes, but at most {max} are allowed")]
    TooManyNodes { n: NumNodes, max: NumNodes },

    #[error("graph must contain at least one node")]
    EmptyGraph,

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("arithmetic overflow: {0}")]
    Overflow(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CutTreeError {
    /// Returns *true* if the error was caused by invalid input data
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CutTreeError::NodeOutOfRange { .. }
                | CutTreeError::NegativeCapacity { .. }
                | CutTreeError::TooManyNodes { .. }
                | CutTreeError::EmptyGraph
                | CutTreeError::MalformedInput(_)
        )
    }

    /// Returns *true* if a capacity, flow or cut value exceeded the numeric type
    pub fn is_overflow(&self) -> bool {
        matches!(self, CutTreeError::Overflow(_))
    }
}

pub type Result<T> = std::result::Result<T, CutTreeError>;
