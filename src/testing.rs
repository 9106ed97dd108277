use std::ops::Range;

use itertools::Itertools;
use rand::{Rng, seq::SliceRandom};

use crate::graph::*;

/// Yields random graphs with at least one edge. The number of nodes is drawn from `nodes`;
/// edges appear in random order and orientation, so the branching order differs from the
/// node order.
pub fn generate_random_graph_stream<R: Rng>(
    rng: &mut R,
    nodes: Range<NumNodes>,
) -> impl Iterator<Item = EdgeListGraph> {
    std::iter::repeat_with(move || {
        let n = rng.gen_range(nodes.clone());
        let p = rng.gen_range(0.1..0.7);
        let gnp = EdgeListGraph::random_gnp(rng, n, p);

        let mut edges = gnp
            .edges()
            .iter()
            .map(|&e| if rng.gen_bool(0.5) { e.reverse() } else { e })
            .collect_vec();
        edges.shuffle(rng);

        EdgeListGraph::from_edges(n, edges)
    })
    .filter(|graph| graph.number_of_edges() > 0)
}
