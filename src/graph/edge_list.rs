use super::*;
use std::fmt;

/// Unweighted graph stored as a plain sequence of edges.
///
/// Edges keep their insertion order and parallel edges are preserved; both matter for the
/// exploration order of the branch-and-bound search. The filtering methods never mutate
/// `self` but return a fresh graph, so that sibling branches can share the same parent.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct EdgeListGraph {
    number_of_nodes: NumNodes,
    edges: Vec<Edge>,
}

impl GraphNodeOrder for EdgeListGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.number_of_nodes
    }
}

impl GraphEdgeOrder for EdgeListGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }
}

impl GraphNew for EdgeListGraph {
    fn new(n: NumNodes) -> Self {
        Self {
            number_of_nodes: n,
            edges: Vec::new(),
        }
    }
}

impl GraphEdgeEditing for EdgeListGraph {
    fn add_edge(&mut self, u: Node, v: Node) {
        assert!(u < self.number_of_nodes && v < self.number_of_nodes);
        self.edges.push(Edge(u, v));
    }
}

impl EdgeListGraph {
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the graph with every edge incident to `u` removed
    pub fn without_node(&self, u: Node) -> Self {
        Self {
            number_of_nodes: self.number_of_nodes,
            edges: self
                .edges
                .iter()
                .filter(|e| !e.is_incident_to(u))
                .copied()
                .collect(),
        }
    }

    /// Returns the graph with exactly the first edge removed
    pub fn without_first_edge(&self) -> Self {
        Self {
            number_of_nodes: self.number_of_nodes,
            edges: self.edges.iter().skip(1).copied().collect(),
        }
    }

    /// Builds an adjacency array (neighbors in edge order)
    pub fn to_adj_array(&self) -> AdjArray {
        AdjArray::from_edges(self.number_of_nodes, self.edges.iter())
    }
}

impl fmt::Debug for EdgeListGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={} [", self.number_of_nodes)?;
        for (i, Edge(u, v)) in self.edges.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{u}-{v}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn filtering_is_pure() {
        let graph = EdgeListGraph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);

        let without_one = graph.without_node(1);
        assert_eq!(without_one.edges(), &[Edge(2, 3), Edge(3, 0)]);
        assert_eq!(without_one.number_of_nodes(), 4);

        let without_first = graph.without_first_edge();
        assert_eq!(without_first.edges(), &[Edge(1, 2), Edge(2, 3), Edge(3, 0)]);

        assert_eq!(graph.number_of_edges(), 4);
    }

    #[test]
    fn parallel_edges_kept() {
        let graph = EdgeListGraph::from_edges(2, [(0, 1), (1, 0)]);
        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.without_node(0).number_of_edges(), 0);
        assert_eq!(format!("{graph:?}"), "n=2 [0-1, 1-0]");
    }

    #[test]
    #[should_panic]
    fn out_of_range() {
        let mut graph = EdgeListGraph::new(2);
        graph.add_edge(0, 2);
    }
}
