//! # Headers
//!
//! A header(-line) of a network file is a series of whitespace separated tokens defining the
//! size of the network, optionally decorated with fixed strings naming the problem.
//!
//! By default, the header is just `"{n} {e}"` where `n` is the number of nodes and `e` the
//! number of capacitated edges that follow. Pace-style headers such as `"p cut {n} {e}"` can be
//! described with the builder.

use std::io::Write;

use itertools::Itertools;
use smallvec::{SmallVec, smallvec};

use super::*;

/// Defining a single token in the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderToken {
    /// Ignore entry
    Any,
    /// Match entry to str
    Str(String),
    /// Parse number of nodes
    NumNodes,
    /// Parse number of edges
    NumEdges,
    /// Ensure that there are no more entries
    End,
    /// Ignore all further entries
    Rest,
}

impl HeaderToken {
    /// When writing a header, this is the representation for HeaderToken::Any
    fn any_string() -> String {
        "0".to_string()
    }
}

/// Defines the complete format of the header.
///
/// Use the Builder-Pattern to define the format.
/// The following accepts headers such as `p cut 5 7`:
/// ```
/// use cuttree::io::*;
///
/// let format = HeaderFormat::new()
///     .str("p").str("cut").number_of_nodes().number_of_edges().end();
/// assert_eq!(format.parse_header("p cut 5 7").unwrap(), (5, 7));
/// assert!(format.parse_header("p ds 5 7").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderFormat<
    // Set to *true* if the position for number of nodes was set
    const NODES_SET: bool = false,
    // Set to *true* if the position for number of edges was set
    const EDGES_SET: bool = false,
    // Set to *true* if `NODES_SET = true & EDGES_SET = true` and
    // the last entry matches `HeaderToken::End | HeaderToken::Rest`
    const END: bool = false,
>(SmallVec<[HeaderToken; 6]>);

/// A header is defined as a format that satisfies all prerequisites.
pub type Header = HeaderFormat<true, true, true>;

impl Default for HeaderFormat<true, true, true> {
    /// `n e` and nothing else
    fn default() -> Self {
        Self(smallvec![
            HeaderToken::NumNodes,
            HeaderToken::NumEdges,
            HeaderToken::End,
        ])
    }
}

impl Header {
    /// Creates a new HeaderFormat in the Pace-Style `p {problem} {n} {e}`
    pub fn new_problem<S: Into<String>>(problem: S) -> Self {
        Self(smallvec![
            HeaderToken::Str("p".to_string()),
            HeaderToken::Str(problem.into()),
            HeaderToken::NumNodes,
            HeaderToken::NumEdges,
            HeaderToken::End,
        ])
    }

    /// Tries to parse the header and extract the number of nodes and edges.
    ///
    /// # Errors
    /// Returns [`CutTreeError::MalformedInput`] if the line does not match the format.
    pub fn parse_header(&self, line: &str) -> Result<(NumNodes, NumEdges)> {
        let mut number_of_nodes = 0;
        let mut number_of_edges = 0;

        let mut parts = line.split_whitespace();

        for token in &self.0 {
            match token {
                HeaderToken::Any => {
                    raise_error_unless!(parts.next().is_some(), "Header is shorter than expected");
                }
                HeaderToken::Str(p) => {
                    raise_error_unless!(
                        parts.next() == Some(p.as_str()),
                        format!("Invalid header found: expected `{p}`")
                    );
                }
                HeaderToken::NumNodes => {
                    number_of_nodes = parse_next_value!(parts, "Header>Number of nodes");
                }
                HeaderToken::NumEdges => {
                    number_of_edges = parse_next_value!(parts, "Header>Number of edges");
                }
                HeaderToken::End => {
                    raise_error_unless!(parts.next().is_none(), "Header is longer than expected");
                    break;
                }
                HeaderToken::Rest => break,
            }
        }

        Ok((number_of_nodes, number_of_edges))
    }

    /// Writes the header for a network of `n` nodes and `m` edges followed by a newline.
    ///
    /// # Errors
    /// Propagates IO errors of the writer.
    pub fn write_header<W: Write>(&self, writer: &mut W, n: NumNodes, m: NumEdges) -> Result<()> {
        let header_str = self
            .0
            .iter()
            .filter_map(|token| match token {
                HeaderToken::Any => Some(HeaderToken::any_string()),
                HeaderToken::Str(s) => Some(s.to_string()),
                HeaderToken::NumNodes => Some(n.to_string()),
                HeaderToken::NumEdges => Some(m.to_string()),
                HeaderToken::End | HeaderToken::Rest => None,
            })
            .join(" ");
        writeln!(writer, "{header_str}")?;

        Ok(())
    }
}

impl HeaderFormat<false, false, false> {
    /// Creates a new empty format
    pub fn new() -> Self {
        HeaderFormat(smallvec![])
    }
}

impl<const NODES_SET: bool, const EDGES_SET: bool> HeaderFormat<NODES_SET, EDGES_SET, false> {
    /// Pushes a token that can be ignored onto the stack
    pub fn any(mut self) -> Self {
        self.0.push(HeaderToken::Any);
        self
    }

    /// Pushes a token that should match a string onto the stack
    pub fn str<S: Into<String>>(mut self, s: S) -> Self {
        self.0.push(HeaderToken::Str(s.into()));
        self
    }
}

impl<const EDGES_SET: bool> HeaderFormat<false, EDGES_SET, false> {
    /// Adds the number of nodes token onto the stack
    pub fn number_of_nodes(mut self) -> HeaderFormat<true, EDGES_SET, false> {
        self.0.push(HeaderToken::NumNodes);
        HeaderFormat(self.0)
    }
}

impl<const NODES_SET: bool> HeaderFormat<NODES_SET, false, false> {
    /// Adds the number of edges token onto the stack
    pub fn number_of_edges(mut self) -> HeaderFormat<NODES_SET, true, false> {
        self.0.push(HeaderToken::NumEdges);
        HeaderFormat(self.0)
    }
}

impl HeaderFormat<true, true, false> {
    /// Marks the header as finished ensuring that no further tokens follow
    pub fn end(mut self) -> HeaderFormat<true, true, true> {
        self.0.push(HeaderToken::End);
        HeaderFormat(self.0)
    }

    /// Marks the header as finished ignoring all further tokens
    pub fn ignore_rest(mut self) -> HeaderFormat<true, true, true> {
        self.0.push(HeaderToken::Rest);
        HeaderFormat(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_header() {
        let header = Header::default();
        assert_eq!(header.parse_header("4 5").unwrap(), (4, 5));
        assert_eq!(header.parse_header("  4\t5 ").unwrap(), (4, 5));

        assert!(header.parse_header("4").unwrap_err().is_input_error());
        assert!(header.parse_header("4 5 6").unwrap_err().is_input_error());
        assert!(header.parse_header("4 x").unwrap_err().is_input_error());
        assert!(header.parse_header("-4 5").unwrap_err().is_input_error());
    }

    #[test]
    fn custom_header() {
        let header = HeaderFormat::new()
            .any()
            .number_of_edges()
            .number_of_nodes()
            .ignore_rest();
        assert_eq!(header.parse_header("x 7 3 whatever else").unwrap(), (3, 7));
        assert!(header.parse_header("x 7").is_err());

        let header = Header::new_problem("cut");
        assert_eq!(header.parse_header("p cut 3 2").unwrap(), (3, 2));
        assert!(header.parse_header("p flow 3 2").is_err());
    }

    #[test]
    fn write_header() {
        let mut buffer = Vec::new();
        Header::new_problem("cut")
            .write_header(&mut buffer, 3, 2)
            .unwrap();
        Header::default().write_header(&mut buffer, 4, 5).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "p cut 3 2\n4 5\n");
    }
}
