use super::*;

/// Undirected graph with non-negative edge weights, stored as an edge list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WeightedGraph {
    number_of_nodes: NumNodes,
    edges: Vec<WeightedEdge>,
}

impl GraphNodeOrder for WeightedGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.number_of_nodes
    }
}

impl GraphEdgeOrder for WeightedGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }
}

impl GraphNew for WeightedGraph {
    fn new(n: NumNodes) -> Self {
        Self {
            number_of_nodes: n,
            edges: Vec::new(),
        }
    }
}

impl WeightedGraph {
    /// Adds the undirected edge *{u,v}* with the given weight.
    /// ** Panics if u, v >= n or the weight is negative **
    pub fn add_edge(&mut self, u: Node, v: Node, weight: Weight) {
        assert!(u < self.number_of_nodes && v < self.number_of_nodes);
        assert!(weight >= 0.0);
        self.edges.push(WeightedEdge(u, v, weight));
    }

    pub fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) {
        for edge in edges {
            let edge: WeightedEdge = edge.into();
            self.add_edge(edge.0, edge.1, edge.2);
        }
    }

    pub fn from_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<WeightedEdge>>,
    ) -> Self {
        let mut graph = Self::new(n);
        graph.add_edges(edges);
        graph
    }

    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    /// Sum of all edge weights
    pub fn total_weight(&self) -> Weight {
        self.edges.iter().map(|e| e.weight()).sum()
    }

    /// Builds the weighted adjacency array; each edge is registered at both endpoints in
    /// edge order
    pub fn to_adj_array(&self) -> WeightedAdjArray {
        let mut adj = WeightedAdjArray::new(self.number_of_nodes);
        for &WeightedEdge(u, v, w) in &self.edges {
            adj.add_edge(u, v, w);
        }
        adj
    }

    /// Forgets the weights
    pub fn to_unweighted(&self) -> EdgeListGraph {
        EdgeListGraph::from_edges(
            self.number_of_nodes,
            self.edges.iter().map(|e| e.unweighted()),
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn build_triangle() {
        let graph = WeightedGraph::from_edges(3, [(0, 1, 1.0), (1, 2, 1.0), (0, 2, 5.0)]);
        assert_eq!(graph.number_of_nodes(), 3);
        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.total_weight(), 7.0);

        let adj = graph.to_adj_array();
        assert_eq!(adj.weighted_neighbors_of(0), &[(1, 1.0), (2, 5.0)]);
        assert_eq!(adj.weighted_neighbors_of(2), &[(1, 1.0), (0, 5.0)]);

        let unweighted = graph.to_unweighted();
        assert_eq!(unweighted.edges(), &[Edge(0, 1), Edge(1, 2), Edge(0, 2)]);
    }

    #[test]
    #[should_panic]
    fn negative_weight() {
        let mut graph = WeightedGraph::new(2);
        graph.add_edge(0, 1, -1.0);
    }
}
