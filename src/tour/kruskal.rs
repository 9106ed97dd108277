use crate::graph::*;

/// Union-find with path halving and union by size
pub struct DisjointSets {
    parent: Vec<Node>,
    size: Vec<NumNodes>,
}

impl DisjointSets {
    pub fn new(n: NumNodes) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n as usize],
        }
    }

    pub fn find(&mut self, mut u: Node) -> Node {
        while self.parent[u as usize] != u {
            let grand_parent = self.parent[self.parent[u as usize] as usize];
            self.parent[u as usize] = grand_parent;
            u = grand_parent;
        }
        u
    }

    /// Merges the sets of `u` and `v`; returns false if they already were the same
    pub fn union(&mut self, u: Node, v: Node) -> bool {
        let (mut a, mut b) = (self.find(u), self.find(v));
        if a == b {
            return false;
        }

        if self.size[a as usize] < self.size[b as usize] {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent[b as usize] = a;
        self.size[a as usize] += self.size[b as usize];
        true
    }
}

/// Computes a minimum spanning tree with Kruskal's algorithm. Returns its weight and
/// edges, or `None` if the graph is disconnected.
pub fn kruskal_mst(graph: &WeightedGraph) -> Option<(Weight, Vec<WeightedEdge>)> {
    let n = graph.number_of_nodes();
    let mut edges = graph.edges().to_vec();
    edges.sort_by(|a, b| a.weight().total_cmp(&b.weight()));

    let mut sets = DisjointSets::new(n);
    let mut mst_edges = Vec::with_capacity((n as usize).saturating_sub(1));
    for edge in edges {
        if mst_edges.len() + 1 >= n as usize {
            break;
        }
        if sets.union(edge.0, edge.1) {
            mst_edges.push(edge);
        }
    }

    (mst_edges.len() + 1 >= n as usize).then(|| (super::mst_weight(&mst_edges), mst_edges))
}
