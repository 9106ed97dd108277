use log::debug;

use crate::{prelude::*, utils::VertexCover};

/// # The matching-based 2-Approximation
///
/// 1. Scans the edges in input order
/// 2. If neither endpoint of an edge is covered yet, adds both endpoints to the cover
///
/// The edges that caused an insertion form a maximal matching; every cover needs one
/// endpoint of each of them, so the result is at most twice as large as a minimum cover.
/// Nodes are reported in ascending order.
pub fn approximate_cover(graph: &EdgeListGraph) -> VertexCover {
    let mut covered = graph.vertex_bitset_unset();
    let mut matching_size = 0;

    for &Edge(u, v) in graph.edges() {
        if covered[u] || covered[v] {
            continue;
        }

        covered.set_bit(u);
        covered.set_bit(v);
        matching_size += 1;
    }

    debug!(
        "Approximate cover: {matching_size} matching edges, {} nodes",
        covered.cardinality()
    );

    let mut cover = VertexCover::new(graph.number_of_nodes());
    cover.add_nodes(covered.iter_set_bits());
    cover
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{exact::naive::minimum_cover, testing::*};
    use itertools::Itertools;
    use glob::glob;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn path() {
        let graph = EdgeListGraph::from_edges(4, [(1, 2), (0, 1), (2, 3)]);
        assert_eq!(approximate_cover(&graph).iter().collect_vec(), [1, 2]);

        let graph = EdgeListGraph::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
        assert_eq!(approximate_cover(&graph).iter().collect_vec(), [0, 1, 2, 3]);
    }

    #[test]
    fn self_contained_edges() {
        let graph = EdgeListGraph::from_edges(3, [(0, 1), (0, 1), (1, 0)]);
        assert_eq!(approximate_cover(&graph).iter().collect_vec(), [0, 1]);

        assert!(approximate_cover(&EdgeListGraph::new(4)).is_empty());
        assert!(approximate_cover(&EdgeListGraph::new(0)).is_empty());
    }

    #[test]
    fn factor_two() {
        let rng = &mut Pcg64::seed_from_u64(0x2a);

        for graph in generate_random_graph_stream(rng, 3..16).take(200) {
            let cover = approximate_cover(&graph);
            assert!(cover.is_valid(&graph), "{graph:?} {cover:?}");
            assert_eq!(cover.len() % 2, 0);
            assert!(cover.len() <= 2 * minimum_cover(&graph).len());
        }
    }

    #[test]
    fn bundled_blocks() {
        let graphs = EdgeListGraph::try_read_blocks_file("instances/blocks/paths_and_stars.txt")
            .unwrap();
        let covers = graphs.iter().map(|g| approximate_cover(g).sorted()).collect_vec();
        assert_eq!(covers, [vec![0, 1, 2, 3], vec![0, 1], vec![0, 1]]);

        for path in glob("instances/blocks/*.txt").unwrap() {
            for graph in EdgeListGraph::try_read_blocks_file(path.unwrap()).unwrap() {
                assert!(approximate_cover(&graph).is_valid(&graph));
            }
        }
    }
}
