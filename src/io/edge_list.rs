//! # EdgeList
//!
//! The input format consists of a header (`n e` by default), followed by `e` non-comment-lines
//! `a b c` representing an undirected edge `{a, b}` of capacity `c`. Endpoints are 0-indexed
//! unless the reader is configured otherwise.
//!
//! Cut trees are written as `u parent[u] weight[u]` lines, one per tree edge.

use std::{
    fs::File,
    io::{BufRead, BufReader, Lines, Write},
    path::Path,
};

use itertools::Itertools;
use log::debug;

use super::*;
use crate::algo::{DEFAULT_MAX_NODES, GomoryHu};

/// A reader for capacitated edge lists
///
/// # Example
/// ```
/// use cuttree::{prelude::*, io::*};
///
/// let input = "c a triangle\n3 3\n0 1 4\n1 2 4\n2 0 4\n";
/// let network: ResidualNetwork = CapacitatedEdgeListReader::new()
///     .try_read_network(input.as_bytes())
///     .unwrap();
///
/// assert_eq!(network.number_of_nodes(), 3);
/// assert_eq!(network.capacity(2, 0), 4);
/// ```
#[derive(Debug, Clone)]
pub struct CapacitatedEdgeListReader {
    /// HeaderFormat
    header: Header,
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
    /// Endpoints in the input start at 1
    one_indexed: bool,
    /// Largest accepted number of nodes
    max_nodes: NumNodes,
}

impl Default for CapacitatedEdgeListReader {
    fn default() -> Self {
        Self {
            header: Header::default(),
            comment_identifier: "c".to_string(),
            one_indexed: false,
            max_nodes: DEFAULT_MAX_NODES,
        }
    }
}

impl CapacitatedEdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the header format
    pub fn header_format(mut self, format: Header) -> Self {
        self.header = format;
        self
    }

    /// Updates the comment identifier; an empty identifier disables comments
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> Self {
        self.comment_identifier = c.into();
        self
    }

    /// If *true*, endpoints are expected in `1..=n` and shifted down by one
    pub fn one_indexed(mut self, one_indexed: bool) -> Self {
        self.one_indexed = one_indexed;
        self
    }

    /// Updates the largest accepted number of nodes
    pub fn max_nodes(mut self, max_nodes: NumNodes) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    /// Reads the number of nodes and all capacitated edges.
    ///
    /// # Errors
    /// Input errors for a malformed header or edge line, a missing edge line, a node count
    /// of `0` or above `max_nodes`, and for any non-comment line after the last edge.
    pub fn try_read_edges<C, R>(&self, reader: R) -> Result<(NumNodes, Vec<CapacitatedEdge<C>>)>
    where
        C: Capacity,
        R: BufRead,
    {
        let mut edges_reader = CapacitatedEdgesReader::try_new(reader, self)?;
        let n = edges_reader.number_of_nodes();

        let mut edges = Vec::new();
        while let Some(edge) = edges_reader.try_next_edge()? {
            edges.push(edge);
        }
        edges_reader.finish()?;

        debug!("Read {} edges on {n} nodes", edges.len());
        Ok((n, edges))
    }

    /// Reads the input into a [`ResidualNetwork`].
    ///
    /// # Errors
    /// See [`CapacitatedEdgeListReader::try_read_edges`] and
    /// [`ResidualNetwork::try_from_edges`].
    pub fn try_read_network<C, R>(&self, reader: R) -> Result<ResidualNetwork<C>>
    where
        C: Capacity,
        R: BufRead,
    {
        let (n, edges) = self.try_read_edges(reader)?;
        ResidualNetwork::try_from_edges(n, edges)
    }

    /// Reads the given file into a [`ResidualNetwork`].
    ///
    /// # Errors
    /// IO errors when opening the file and everything [`Self::try_read_network`] reports.
    pub fn try_read_network_file<C, P>(&self, path: P) -> Result<ResidualNetwork<C>>
    where
        C: Capacity,
        P: AsRef<Path>,
    {
        self.try_read_network(BufReader::new(File::open(path)?))
    }
}

/// Trait for creating networks from a CapacitatedEdgeListReader.
/// Used as shorthand for default reader settings
pub trait EdgeListRead: Sized {
    /// Tries to read the network from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the network from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl<C: Capacity> EdgeListRead for ResidualNetwork<C> {
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        CapacitatedEdgeListReader::default().try_read_network(reader)
    }
}

/// Streaming reader that consumes the input line by line
pub struct CapacitatedEdgesReader<'a, R> {
    /// Lines in the reader
    lines: Lines<R>,
    /// Number of nodes parsed from header
    number_of_nodes: NumNodes,
    /// Number of edges parsed from header
    number_of_edges: NumEdges,
    /// Number of edges already returned
    edges_read: NumEdges,
    /// Comment identifier
    comment_identifier: &'a str,
    /// Endpoints start at 1
    one_indexed: bool,
}

impl<'a, R: BufRead> CapacitatedEdgesReader<'a, R> {
    /// Creates a new reader and tries to parse the first non-comment-line as the header.
    ///
    /// # Errors
    /// Input errors for a missing or malformed header, `n = 0` and `n > max_nodes`.
    pub fn try_new(reader: R, settings: &'a CapacitatedEdgeListReader) -> Result<Self> {
        let mut edges_reader = Self {
            lines: reader.lines(),
            number_of_nodes: 0,
            number_of_edges: 0,
            edges_read: 0,
            comment_identifier: &settings.comment_identifier,
            one_indexed: settings.one_indexed,
        };

        let header = edges_reader
            .next_non_comment_line()?
            .ok_or_else(|| input_error!("Header not found"))?;
        let (n, m) = settings.header.parse_header(&header)?;

        GomoryHu::new()
            .max_nodes(settings.max_nodes)
            .check_number_of_nodes(n)?;

        edges_reader.number_of_nodes = n;
        edges_reader.number_of_edges = m;
        Ok(edges_reader)
    }

    /// Returns the parsed number of edges in the network
    pub fn number_of_edges(&self) -> NumEdges {
        self.number_of_edges
    }

    /// Returns the parsed number of nodes in the network
    pub fn number_of_nodes(&self) -> NumNodes {
        self.number_of_nodes
    }

    /// Returns the next edge or `None` once all announced edges were read.
    ///
    /// # Errors
    /// Input errors for malformed lines and if the input ends before all announced edges
    /// were read.
    pub fn try_next_edge<C: Capacity>(&mut self) -> Result<Option<CapacitatedEdge<C>>> {
        if self.edges_read == self.number_of_edges {
            return Ok(None);
        }

        let Some(line) = self.next_non_comment_line()? else {
            return Err(input_error!(format!(
                "Expected {} edges, but input ended after {}",
                self.number_of_edges, self.edges_read
            )));
        };

        let mut parts = line.split_whitespace();
        let u: Node = parse_next_value!(parts, "Source node");
        let v: Node = parse_next_value!(parts, "Target node");
        let c: C = parse_next_value!(parts, "Capacity");
        raise_error_unless!(
            parts.next().is_none(),
            format!("Edge line `{line}` has more than three entries")
        );

        self.edges_read += 1;

        if self.one_indexed {
            raise_error_unless!(
                u > 0 && v > 0,
                format!("Edge line `{line}` contains node 0 in 1-indexed input")
            );
            Ok(Some(CapacitatedEdge(u - 1, v - 1, c)))
        } else {
            Ok(Some(CapacitatedEdge(u, v, c)))
        }
    }

    /// Consumes the reader and ensures that only comments follow the announced edges.
    ///
    /// # Errors
    /// Input error if any other line follows.
    pub fn finish(mut self) -> Result<()> {
        raise_error_unless!(
            self.edges_read == self.number_of_edges,
            "Not all announced edges were read"
        );
        match self.next_non_comment_line()? {
            None => Ok(()),
            Some(line) => Err(input_error!(format!(
                "Trailing data after {} edges: `{line}`",
                self.number_of_edges
            ))),
        }
    }

    /// Returns the next line that is neither blank nor a comment, or propagates an error
    fn next_non_comment_line(&mut self) -> Result<Option<String>> {
        loop {
            match self.lines.next() {
                None => return Ok(None),
                Some(Err(x)) => return Err(x.into()),
                Some(Ok(line)) => {
                    let trimmed = line.trim();
                    let is_comment = !self.comment_identifier.is_empty()
                        && trimmed.starts_with(self.comment_identifier);
                    if trimmed.is_empty() || is_comment {
                        continue;
                    }
                    return Ok(Some(line));
                }
            }
        }
    }
}

/// A writer for cut trees as `u parent weight` lines
#[derive(Debug, Clone)]
pub struct CutTreeWriter {
    /// HeaderFormat (only used if `with_header`)
    header: Header,
    /// Omit tree edges of weight 0
    skip_zero_weights: bool,
    /// Start with a header line `n m` where `m` is the number of written edges
    with_header: bool,
}

impl Default for CutTreeWriter {
    fn default() -> Self {
        Self {
            header: Header::default(),
            skip_zero_weights: true,
            with_header: false,
        }
    }
}

impl CutTreeWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// If *false*, all `n - 1` tree edges are written, including those of weight 0
    pub fn skip_zero_weights(mut self, skip: bool) -> Self {
        self.skip_zero_weights = skip;
        self
    }

    /// If *true*, a header line precedes the edges
    pub fn with_header(mut self, with_header: bool) -> Self {
        self.with_header = with_header;
        self
    }

    /// Updates the header format
    pub fn header_format(mut self, format: Header) -> Self {
        self.header = format;
        self
    }
}

impl TreeWriter for CutTreeWriter {
    fn try_write_tree<C, W>(&self, tree: &CutTree<C>, mut writer: W) -> Result<()>
    where
        C: Capacity,
        W: Write,
    {
        let edges = tree
            .edges()
            .filter(|e| !self.skip_zero_weights || !e.capacity().is_zero())
            .collect_vec();

        if self.with_header {
            self.header
                .write_header(&mut writer, tree.number_of_nodes(), edges.len() as NumEdges)?;
        }

        for CapacitatedEdge(u, p, w) in edges {
            writeln!(writer, "{u} {p} {w}")?;
        }

        writer.flush()?;
        Ok(())
    }
}
