/*!
# IO

Utilities for reading capacitated graphs and writing cut trees.

## Input Format

- **EdgeList**: a header line `n e` followed by `e` lines `a b c`, one capacitated undirected
  edge per line. Endpoints are 0-indexed by default; parallel edges are allowed and their
  capacities summed. See [`CapacitatedEdgeListReader`].

## Output Formats

- **EdgeList**: one line `u parent[u] weight[u]` per tree edge in increasing order of `u`,
  see [`CutTreeWriter`].
- **Dot**: The [DOT language](https://graphviz.org/doc/info/lang.html) of
  [GraphViz](https://graphviz.org/) with the weights as edge labels, see [`DotWriter`].

## Traits

To generalize over writing:
- [`TreeWriter`] is implemented by writers for a specific format.
- [`TreeWrite`] abstracts over writing using a given [`FileFormat`].
*/

pub mod dot;
pub mod edge_list;
pub mod header;

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
    str::FromStr,
};

use crate::{Result, prelude::*};

pub use dot::*;
pub use edge_list::*;
pub use header::*;

/// Identifier for an output file format.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// DOT language of GraphViz
    Dot,
    /// `u parent weight` triples
    EdgeList,
}

impl FromStr for FileFormat {
    type Err = CutTreeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "dot" => Ok(FileFormat::Dot),
            "edgelist" => Ok(FileFormat::EdgeList),
            _ => Err(input_error!(format!("Unknown FileFormat: {s}"))),
        }
    }
}

/// Trait for types that can write cut trees in a specific format.
///
/// This trait provides both a low-level method to write to any [`Write`] instance and a
/// convenience wrapper to write directly to files.
pub trait TreeWriter {
    /// Writes the given tree to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., IO errors).
    fn try_write_tree<C, W>(&self, tree: &CutTree<C>, writer: W) -> Result<()>
    where
        C: Capacity,
        W: Write;

    /// Writes the given tree to a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered writer.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_tree_file<C, P>(&self, tree: &CutTree<C>, path: P) -> Result<()>
    where
        C: Capacity,
        P: AsRef<Path>,
    {
        self.try_write_tree(tree, BufWriter::new(File::create(path)?))
    }
}

/// Trait for writing cut trees when only a [`FileFormat`] is known.
///
/// Dispatches to the default writer of each format.
pub trait TreeWrite {
    /// Writes the tree to the given writer according to the specified [`FileFormat`].
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., IO errors).
    fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write;

    /// Writes the tree to the given file according to the specified [`FileFormat`].
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_to_file<P>(&self, path: P, format: FileFormat) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_to_writer(BufWriter::new(File::create(path)?), format)
    }
}

impl<C: Capacity> TreeWrite for CutTree<C> {
    fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write,
    {
        match format {
            FileFormat::EdgeList => CutTreeWriter::default().try_write_tree(self, writer),
            FileFormat::Dot => DotWriter::default().try_write_tree(self, writer),
        }
    }
}

/// Shorthand for creating a new input error
macro_rules! input_error {
    ($info: expr) => {
        $crate::error::CutTreeError::MalformedInput(($info).into())
    };
}

/// Shorthand for returning an input error early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $info : expr) => {
        if !($cond) {
            return Err(input_error!($info));
        }
    };
}

/// Tries to parse the next value in an iterator and returns early if it fails
macro_rules! parse_next_value {
    ($iterator : expr, $name : expr) => {{
        let Some(token) = $iterator.next() else {
            return Err(input_error!(format!(
                "Premature end of line when parsing {}.",
                $name
            )));
        };

        match token.parse() {
            Ok(value) => value,
            Err(_) => {
                return Err(input_error!(format!(
                    "Invalid value `{token}` found. Cannot parse {}.",
                    $name
                )));
            }
        }
    }};
}

use input_error;
use parse_next_value;
use raise_error_unless;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_formats() {
        assert_eq!("dot".parse::<FileFormat>().unwrap(), FileFormat::Dot);
        assert_eq!("EdgeList".parse::<FileFormat>().unwrap(), FileFormat::EdgeList);
        assert!("metis".parse::<FileFormat>().unwrap_err().is_input_error());
    }

    #[test]
    fn write_by_format() {
        let tree = CutTree::from_parts(vec![0, 0, 1], vec![0i64, 5, 3]);

        let mut buffer = Vec::new();
        tree.try_write_to_writer(&mut buffer, FileFormat::EdgeList)
            .unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "1 0 5\n2 1 3\n");

        let mut buffer = Vec::new();
        tree.try_write_to_writer(&mut buffer, FileFormat::Dot).unwrap();
        assert!(String::from_utf8(buffer).unwrap().starts_with("graph {"));
    }
}
