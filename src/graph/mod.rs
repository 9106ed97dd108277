pub mod adj_array;
pub mod bitset;
pub mod edge;
pub mod edge_list;
pub mod gnp;
pub mod traversal;
pub mod weighted;

pub type Node = u32;
pub type NumNodes = Node;
pub type NumEdges = u64;
pub type Weight = f64;

use std::ops::Range;

pub use adj_array::*;
pub use bitset::*;
pub use edge::*;
pub use edge_list::*;
pub use gnp::*;
pub use traversal::*;
pub use weighted::*;

/// Provides getters pertaining to the size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns a range of vertices. In contrast to self.vertices(), the range does
    /// not borrow self and hence may be used where additional mutable references of self are needed
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns true if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a bitset with one (unset) bit per node
    fn vertex_bitset_unset(&self) -> BitSet {
        BitSet::new(self.number_of_nodes())
    }
}

pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;
}

pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns a slice of neighbors of a given vertex in insertion order.
    /// ** Panics if the v >= n **
    fn neighbors_of(&self, u: Node) -> &[Node];

    /// Returns the number of neighbors of `u`, counting parallel edges
    fn degree_of(&self, u: Node) -> NumNodes {
        self.neighbors_of(u).len() as NumNodes
    }
}

pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert edges
pub trait GraphEdgeEditing: GraphNew {
    /// Adds the undirected edge *{u,v}* to the graph. Parallel edges are kept.
    /// ** Panics if u, v >= n **
    fn add_edge(&mut self, u: Node, v: Node);

    /// Adds all edges in the collection
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for edge in edges {
            let edge: Edge = edge.into();
            self.add_edge(edge.0, edge.1);
        }
    }

    /// Creates a graph with `n` nodes and the given edges
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self
    where
        Self: Sized,
    {
        let mut graph = Self::new(n);
        graph.add_edges(edges);
        graph
    }
}

/// Connectivity queries based on a breadth-first search from node 0
pub trait Connectivity: AdjacencyList {
    /// Returns true iff every node is reachable from node 0. The empty graph is connected.
    fn is_connected(&self) -> bool {
        if self.is_empty() {
            return true;
        }

        self.bfs(0).count() == self.len()
    }
}

impl<G: AdjacencyList> Connectivity for G {}
