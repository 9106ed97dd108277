use std::{cmp::Ordering, cmp::Reverse, collections::BinaryHeap};

use log::{debug, warn};

use crate::graph::*;

/// A frontier edge of Prim's algorithm. Ties in the weight are broken by the endpoints, so
/// the resulting tree is independent of the heap's internal layout.
#[derive(Clone, Copy, Debug, PartialEq)]
struct FrontierEdge {
    weight: Weight,
    from: Node,
    to: Node,
}

impl Eq for FrontierEdge {}

impl Ord for FrontierEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then(self.from.cmp(&other.from))
            .then(self.to.cmp(&other.to))
    }
}

impl PartialOrd for FrontierEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Computes a minimum spanning tree with Prim's algorithm starting at node 0.
///
/// The edges are returned in the order in which they joined the tree; each edge is oriented
/// from the tree node to the newly reached node. If the graph is disconnected, only the
/// component of node 0 is spanned and fewer than `n-1` edges are returned.
pub fn build_mst(graph: &WeightedGraph) -> Vec<WeightedEdge> {
    build_mst_from(graph, 0)
}

/// As [`build_mst`], but grows the tree from `start`
pub fn build_mst_from(graph: &WeightedGraph, start: Node) -> Vec<WeightedEdge> {
    let n = graph.number_of_nodes();
    if start >= n {
        return Vec::new();
    }

    let adj = graph.to_adj_array();
    let mut visited = graph.vertex_bitset_unset();
    let mut frontier = BinaryHeap::new();
    let mut mst_edges = Vec::with_capacity(n as usize - 1);

    let push_neighbors =
        |frontier: &mut BinaryHeap<Reverse<FrontierEdge>>, visited: &BitSet, from: Node| {
            for &(to, weight) in adj.weighted_neighbors_of(from) {
                if !visited[to] {
                    frontier.push(Reverse(FrontierEdge { weight, from, to }));
                }
            }
        };

    visited.set_bit(start);
    push_neighbors(&mut frontier, &visited, start);

    while let Some(Reverse(FrontierEdge { weight, from, to })) = frontier.pop() {
        if visited.set_bit(to) {
            continue;
        }

        mst_edges.push(WeightedEdge(from, to, weight));
        if mst_edges.len() + 1 == n as usize {
            break;
        }

        push_neighbors(&mut frontier, &visited, to);
    }

    if mst_edges.len() + 1 < n as usize {
        warn!(
            "graph is disconnected: spanning tree reaches {} of {n} nodes",
            mst_edges.len() + 1
        );
    }
    debug!(
        "Prim: {} tree edges, weight {}",
        mst_edges.len(),
        mst_weight(&mst_edges)
    );

    mst_edges
}

/// Sum of the weights of the given edges
pub fn mst_weight(edges: &[WeightedEdge]) -> Weight {
    edges.iter().map(|e| e.weight()).sum()
}
