use std::collections::BTreeSet;

use log::info;

use super::Budget;
use crate::prelude::*;

/// Collects every cover produced by two-way branching on the first remaining edge with
/// at most `k` nodes.
///
/// A node set is recorded as soon as no edge remains, so the result contains all
/// minimal covers of size at most `k` but may also contain some non-minimal ones.
/// Each cover is returned in ascending order.
pub fn enumerate_covers(graph: &EdgeListGraph, k: Budget) -> BTreeSet<Vec<Node>> {
    let mut covers = BTreeSet::new();
    let mut chosen = Vec::new();
    enumerate_recurse(graph, k, &mut chosen, &mut covers);

    info!(
        "Enumerated {} covers of size at most {k} (n={} m={})",
        covers.len(),
        graph.number_of_nodes(),
        graph.number_of_edges()
    );

    covers
}

fn enumerate_recurse(
    graph: &EdgeListGraph,
    k: Budget,
    chosen: &mut Vec<Node>,
    covers: &mut BTreeSet<Vec<Node>>,
) {
    let Some(&Edge(u, v)) = graph.edges().first() else {
        let mut cover = chosen.clone();
        cover.sort_unstable();
        covers.insert(cover);
        return;
    };

    if k <= 0 {
        return;
    }

    for w in [u, v] {
        chosen.push(w);
        enumerate_recurse(&graph.without_node(w), k - 1, chosen, covers);
        chosen.pop();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{exact::naive::minimum_cover, testing::*};
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn four_cycle() {
        let graph = EdgeListGraph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);

        assert!(enumerate_covers(&graph, 1).is_empty());
        assert_eq!(
            enumerate_covers(&graph, 2),
            BTreeSet::from([vec![0, 2], vec![1, 3]])
        );
        assert!(enumerate_covers(&graph, 3).contains(&vec![0, 1, 2]));
    }

    #[test]
    fn no_edges() {
        let covers = enumerate_covers(&EdgeListGraph::new(3), 0);
        assert_eq!(covers, BTreeSet::from([vec![]]));
        assert_eq!(enumerate_covers(&EdgeListGraph::new(3), -2), covers);
    }

    #[test]
    fn consistent_with_search() {
        let rng = &mut Pcg64::seed_from_u64(0x5eed);

        for graph in generate_random_graph_stream(rng, 3..9).take(100) {
            let optimum = minimum_cover(&graph).len() as Budget;

            assert!(enumerate_covers(&graph, optimum - 1).is_empty());

            let covers = enumerate_covers(&graph, optimum + 1);
            assert!(covers.contains(&minimum_cover(&graph).sorted()));
            for nodes in covers {
                assert!(nodes.len() as Budget <= optimum + 1);
                let mut cover = VertexCover::new(graph.number_of_nodes());
                cover.add_nodes(nodes);
                assert!(cover.is_valid(&graph), "{graph:?} {cover:?}");
            }
        }
    }
}
