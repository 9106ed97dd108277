use fxhash::FxHashMap;

use crate::graph::*;

use super::Tour;

/// Visits the tree spanned by `mst_edges` in preorder, starting at `start`.
///
/// Children are visited in the order in which their edges appear in `mst_edges`. Nodes that
/// are not connected to `start` are not part of the result.
pub fn preorder(mst_edges: &[WeightedEdge], start: Node) -> Tour {
    // node ids may be sparse, so the tree is built on dense ids with `start` as 0
    let mut labels = vec![start];
    let mut dense_ids: FxHashMap<Node, Node> = FxHashMap::default();
    dense_ids.insert(start, 0);

    let edges: Vec<Edge> = mst_edges
        .iter()
        .map(|e| {
            let mut dense = |u: Node| {
                *dense_ids.entry(u).or_insert_with(|| {
                    labels.push(u);
                    (labels.len() - 1) as Node
                })
            };
            Edge(dense(e.0), dense(e.1))
        })
        .collect();

    let tree = AdjArray::from_edges(labels.len() as NumNodes, edges);
    Tour::from(
        tree.preorder(0)
            .map(|u| labels[u as usize])
            .collect::<Vec<_>>(),
    )
}
