use itertools::Itertools;

use crate::{prelude::*, utils::VertexCover};

/// Largest graph [`minimum_cover`] accepts; it enumerates all node subsets by size
pub const MAX_NAIVE_NODES: NumNodes = 24;

/// Computes a minimum vertex cover by trying all subsets in increasing size.
/// Among equally small covers the lexicographically smallest one is returned.
///
/// # Panics
/// If the graph has more than [`MAX_NAIVE_NODES`] nodes.
pub fn minimum_cover(graph: &EdgeListGraph) -> VertexCover {
    assert!(graph.number_of_nodes() <= MAX_NAIVE_NODES);

    // nodes without edges never need to be selected
    let candidates = graph
        .edges()
        .iter()
        .flat_map(|&Edge(u, v)| [u, v])
        .sorted_unstable()
        .dedup()
        .collect_vec();

    for size in 0..=candidates.len() {
        for subset in candidates.iter().copied().combinations(size) {
            let in_cover =
                BitSet::new_with_bits_set(graph.number_of_nodes(), subset.iter().copied());
            if graph
                .edges()
                .iter()
                .all(|&Edge(u, v)| in_cover[u] || in_cover[v])
            {
                let mut cover = VertexCover::new(graph.number_of_nodes());
                cover.add_nodes(subset);
                return cover;
            }
        }
    }

    unreachable!("the set of all endpoints is a cover")
}
