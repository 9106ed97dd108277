use super::*;
use std::fmt;

/// Adjacency array of an undirected graph. Neighbors are kept in insertion order, which
/// fixes the child order of every traversal.
#[derive(Clone, Default)]
pub struct AdjArray {
    adj: Vec<Vec<Node>>,
    number_of_edges: NumEdges,
}

impl GraphNodeOrder for AdjArray {
    fn number_of_nodes(&self) -> NumNodes {
        self.adj.len() as NumNodes
    }
}

impl GraphEdgeOrder for AdjArray {
    fn number_of_edges(&self) -> NumEdges {
        self.number_of_edges
    }
}

impl AdjacencyList for AdjArray {
    fn neighbors_of(&self, u: Node) -> &[Node] {
        &self.adj[u as usize]
    }
}

impl GraphNew for AdjArray {
    fn new(number_of_nodes: NumNodes) -> Self {
        Self {
            adj: vec![Vec::new(); number_of_nodes as usize],
            number_of_edges: 0,
        }
    }
}

impl GraphEdgeEditing for AdjArray {
    fn add_edge(&mut self, u: Node, v: Node) {
        self.adj[u as usize].push(v);
        if u != v {
            self.adj[v as usize].push(u);
        }
        self.number_of_edges += 1;
    }
}

impl AdjArray {
    /// Creates a graph with just enough nodes to hold all endpoints of `edges`
    pub fn test_only_from(edges: impl Clone + IntoIterator<Item = impl Into<Edge>>) -> Self {
        let n = edges
            .clone()
            .into_iter()
            .map(|e| {
                let edge: Edge = e.into();
                edge.0.max(edge.1) + 1
            })
            .max()
            .unwrap_or(0);
        Self::from_edges(n, edges)
    }
}

impl fmt::Debug for AdjArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (u, neighbors) in self.adj.iter().enumerate() {
            writeln!(f, "{u}: {neighbors:?}")?;
        }
        Ok(())
    }
}

/// Adjacency array carrying the weight of each incident edge
#[derive(Clone, Debug, Default)]
pub struct WeightedAdjArray {
    adj: Vec<Vec<(Node, Weight)>>,
    neighbors: Vec<Vec<Node>>,
}

impl GraphNodeOrder for WeightedAdjArray {
    fn number_of_nodes(&self) -> NumNodes {
        self.adj.len() as NumNodes
    }
}

impl AdjacencyList for WeightedAdjArray {
    fn neighbors_of(&self, u: Node) -> &[Node] {
        &self.neighbors[u as usize]
    }
}

impl WeightedAdjArray {
    pub fn new(number_of_nodes: NumNodes) -> Self {
        Self {
            adj: vec![Vec::new(); number_of_nodes as usize],
            neighbors: vec![Vec::new(); number_of_nodes as usize],
        }
    }

    pub fn add_edge(&mut self, u: Node, v: Node, weight: Weight) {
        self.adj[u as usize].push((v, weight));
        self.neighbors[u as usize].push(v);
        if u != v {
            self.adj[v as usize].push((u, weight));
            self.neighbors[v as usize].push(u);
        }
    }

    /// Returns `(neighbor, weight)` pairs in insertion order.
    /// ** Panics if the u >= n **
    pub fn weighted_neighbors_of(&self, u: Node) -> &[(Node, Weight)] {
        &self.adj[u as usize]
    }
}
