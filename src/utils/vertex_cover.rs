use crate::{errors::*, prelude::*};
use itertools::Itertools;
use serde::Serialize;
use std::io::Write;

/// A set of nodes of a graph with `number_of_nodes` nodes. The insertion order is kept,
/// since the exact search reports its witness in the order in which nodes were chosen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VertexCover {
    #[serde(skip)]
    number_of_nodes: NumNodes,
    nodes: Vec<Node>,
}

impl VertexCover {
    pub fn new(number_of_nodes: NumNodes) -> Self {
        Self {
            number_of_nodes,
            nodes: Vec::new(),
        }
    }

    /// Adds a node to the cover.
    ///
    /// # Example
    /// ```
    /// use vctsp::utils::VertexCover;
    /// let mut cover = VertexCover::new(5);
    /// cover.add_node(0);
    /// assert_eq!(cover.len(), 1);
    /// ```
    pub fn add_node(&mut self, node: Node) {
        assert!(node < self.number_of_nodes);
        self.nodes.push(node);
    }

    /// Adds multiple nodes to the cover.
    pub fn add_nodes(&mut self, nodes: impl IntoIterator<Item = Node>) {
        for u in nodes {
            self.add_node(u);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the nodes in insertion order
    pub fn iter(&self) -> impl Iterator<Item = Node> + '_ {
        self.nodes.iter().copied()
    }

    pub fn contains(&self, u: Node) -> bool {
        self.nodes.contains(&u)
    }

    /// Returns the nodes in ascending order
    pub fn sorted(&self) -> Vec<Node> {
        self.nodes.iter().copied().sorted_unstable().collect()
    }

    pub fn number_of_nodes(&self) -> NumNodes {
        self.number_of_nodes
    }

    /// Returns a bitset with exactly the nodes of the cover set
    pub fn to_bitset(&self) -> BitSet {
        BitSet::new_with_bits_set(self.number_of_nodes, self.iter())
    }

    /// Returns true iff every edge of `graph` has at least one endpoint in the cover
    pub fn is_valid(&self, graph: &EdgeListGraph) -> bool {
        CoverCheck { cover: self, graph }.is_correct().is_ok()
    }

    /// Writes the cover in insertion order as `[a, b, c]`.
    ///
    /// ```
    /// use vctsp::utils::VertexCover;
    /// let mut cover = VertexCover::new(5);
    /// cover.add_nodes([2, 0]);
    /// let mut buffer: Vec<u8> = Vec::new();
    /// cover.write_list(&mut buffer).unwrap();
    /// assert_eq!(buffer, b"[2, 0]");
    /// ```
    pub fn write_list<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        write!(writer, "[{}]", self.nodes.iter().join(", "))
    }

    /// Writes the cover in ascending order as `{a, b, c}`
    pub fn write_set<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        write!(writer, "{{{}}}", self.sorted().iter().join(", "))
    }
}

/// Pairs a cover with the graph it is supposed to cover
pub struct CoverCheck<'a> {
    pub cover: &'a VertexCover,
    pub graph: &'a EdgeListGraph,
}

impl InvariantCheck<CoverError> for CoverCheck<'_> {
    fn is_correct(&self) -> Result<(), CoverError> {
        let mut in_cover = self.graph.vertex_bitset_unset();
        for u in self.cover.iter() {
            if u >= self.graph.number_of_nodes() {
                return Err(CoverError::NodeOutOfRange(u));
            }
            if in_cover.set_bit(u) {
                return Err(CoverError::Duplicate(u));
            }
        }

        if let Some(&edge) = self
            .graph
            .edges()
            .iter()
            .find(|&&Edge(u, v)| !in_cover[u] && !in_cover[v])
        {
            return Err(CoverError::UncoveredEdge(edge));
        }

        Ok(())
    }
}
