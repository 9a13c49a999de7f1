//! # Dot
//!
//! The Dot-Format is a very extensive format used by [GraphViz](https://graphviz.org/) to allow
//! for detailed visualizations. We only draw the tree edges, labelled with their weights:
//! ```
//! use cuttree::{algo::*, io::*};
//!
//! let tree = GomoryHu::new()
//!     .compute_from_edges(3, [(0, 1, 5i64), (1, 2, 3)])
//!     .unwrap();
//!
//! let mut buffer = Vec::new();
//! DotWriter::new().try_write_tree(&tree, &mut buffer).unwrap();
//! assert_eq!(
//!     String::from_utf8(buffer).unwrap(),
//!     "graph {\nu1 -- u0 [label=5];\nu2 -- u1 [label=3];\n}\n"
//! );
//! ```
use std::io::Write;

use super::*;

/// A writer for the Dot-Format
#[derive(Debug, Clone)]
pub struct DotWriter {
    /// Increment nodes by 1 before writing
    inc_nodes: bool,
    /// Prefix of a node (default: 'u')
    prefix: String,
}

impl Default for DotWriter {
    fn default() -> Self {
        Self {
            inc_nodes: false,
            prefix: "u".to_string(),
        }
    }
}

impl DotWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// If *true*, nodes are written 1-indexed
    pub fn inc_nodes(mut self, inc_nodes: bool) -> Self {
        self.inc_nodes = inc_nodes;
        self
    }

    /// Set the prefix of a node (`u` by default)
    pub fn node_prefix<S>(mut self, prefix: S) -> Self
    where
        S: Into<String>,
    {
        self.prefix = prefix.into();
        self
    }

    /// Formats a node depending on `self.prefix, self.inc_nodes`
    fn format_node(&self, u: Node) -> String {
        let u = u + self.inc_nodes as Node;
        format!("{}{u}", self.prefix)
    }
}

impl TreeWriter for DotWriter {
    fn try_write_tree<C, W>(&self, tree: &CutTree<C>, mut writer: W) -> Result<()>
    where
        C: Capacity,
        W: Write,
    {
        writeln!(writer, "graph {{")?;
        if tree.number_of_nodes() == 1 {
            writeln!(writer, "{};", self.format_node(ROOT))?;
        }
        for CapacitatedEdge(u, p, w) in tree.edges() {
            writeln!(
                writer,
                "{} -- {} [label={w}];",
                self.format_node(u),
                self.format_node(p)
            )?;
        }
        writeln!(writer, "}}")?;

        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_dot() {
        let tree = CutTree::from_parts(vec![0, 0, 0], vec![0i64, 0, 7]);

        let mut buffer = Vec::new();
        DotWriter::new()
            .inc_nodes(true)
            .node_prefix("v")
            .try_write_tree(&tree, &mut buffer)
            .unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "graph {\nv2 -- v1 [label=0];\nv3 -- v1 [label=7];\n}\n"
        );

        let single = CutTree::<i64>::from_parts(vec![0], vec![0]);
        let mut buffer = Vec::new();
        DotWriter::new().try_write_tree(&single, &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "graph {\nu0;\n}\n");
    }
}
