//! MST-based 2-approximation for the metric travelling salesperson problem.
//!
//! The tour is the preorder of a minimum spanning tree grown by Prim's algorithm from
//! node 0. Shortcutting the doubled tree yields a closed walk of weight at most twice the
//! tree's weight, hence at most twice the optimum, provided the weights satisfy the
//! triangle inequality. For other weights the result still is a valid tour.

pub mod kruskal;
pub mod preorder;
pub mod prim;

pub use kruskal::kruskal_mst;
pub use preorder::preorder;
pub use prim::*;

use fxhash::FxHashMap;
use itertools::Itertools;
use log::info;
use serde::Serialize;
use std::io::Write;

use crate::{errors::*, graph::*};

/// An ordered sequence of nodes, closed implicitly by returning to the first node
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Tour {
    nodes: Vec<Node>,
}

impl From<Vec<Node>> for Tour {
    fn from(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }
}

impl Tour {
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the edges of the closed cycle including the one back to the first node.
    /// Tours with less than two nodes have no edges.
    pub fn cycle_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let closing = (self.nodes.len() >= 2)
            .then(|| Edge(self.nodes[self.nodes.len() - 1], self.nodes[0]));
        self.nodes
            .iter()
            .tuple_windows()
            .map(|(&u, &v)| Edge(u, v))
            .chain(closing)
    }

    /// Computes the weight of the closed cycle. Returns `None` if two consecutive nodes
    /// are not adjacent in `graph`. For parallel edges the cheapest one is used.
    pub fn cost(&self, graph: &WeightedGraph) -> Option<Weight> {
        let mut weights: FxHashMap<Edge, Weight> = FxHashMap::default();
        for e in graph.edges() {
            let w = weights.entry(e.unweighted().normalized()).or_insert(e.weight());
            *w = w.min(e.weight());
        }

        self.cycle_edges()
            .map(|e| weights.get(&e.normalized()).copied())
            .sum()
    }

    /// Writes the tour as `[a, b, c]`
    pub fn write_list<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        write!(writer, "[{}]", self.nodes.iter().join(", "))
    }
}

/// Pairs a tour with the number of nodes it has to visit
pub struct TourCheck<'a> {
    pub tour: &'a Tour,
    pub number_of_nodes: NumNodes,
}

impl InvariantCheck<TourError> for TourCheck<'_> {
    fn is_correct(&self) -> Result<(), TourError> {
        let mut seen = BitSet::new(self.number_of_nodes);
        for &u in self.tour.nodes() {
            if u >= self.number_of_nodes {
                return Err(TourError::NodeOutOfRange(u));
            }
            if seen.set_bit(u) {
                return Err(TourError::Duplicate(u));
            }
        }

        if self.tour.len() != self.number_of_nodes as usize {
            return Err(TourError::WrongLength {
                expected: self.number_of_nodes as usize,
                actual: self.tour.len(),
            });
        }

        Ok(())
    }
}

/// Computes a tour by building the MST from node 0 and visiting it in preorder from node 0.
/// The graph should be connected, otherwise only the component of node 0 is visited.
pub fn tsp_approximation(graph: &WeightedGraph) -> Tour {
    tsp_approximation_with_mst(graph).0
}

/// Like [`tsp_approximation`], but also returns the spanning tree the tour was derived from
pub fn tsp_approximation_with_mst(graph: &WeightedGraph) -> (Tour, Vec<WeightedEdge>) {
    if graph.is_empty() {
        return (Tour::default(), Vec::new());
    }

    let mst_edges = build_mst(graph);
    let tour = preorder(&mst_edges, 0);

    info!(
        "TSP approximation: n={} m={} mst weight={} tour length={}",
        graph.number_of_nodes(),
        graph.number_of_edges(),
        mst_weight(&mst_edges),
        tour.len()
    );

    (tour, mst_edges)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::io::GraphBlockReader;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64;

    #[test]
    fn triangle() {
        let graph = WeightedGraph::from_edges(3, [(0, 1, 1.0), (1, 2, 1.0), (0, 2, 5.0)]);
        let tour = tsp_approximation(&graph);
        assert_eq!(tour.nodes(), &[0, 1, 2]);
        assert_eq!(tour.cost(&graph), Some(7.0));
    }

    #[test]
    fn bundled_blocks() {
        let graphs =
            WeightedGraph::try_read_blocks_file("instances/tsp/triangle_and_k4.txt").unwrap();
        assert_eq!(graphs.len(), 2);

        let tours = graphs.iter().map(tsp_approximation).collect_vec();
        assert_eq!(tours[0].nodes(), &[0, 1, 2]);
        assert_eq!(tours[1].nodes(), &[0, 1, 2, 3]);
        assert_eq!(tours[1].cost(&graphs[1]), Some(6.0));
    }

    #[test]
    fn returns_tree_of_the_tour() {
        let rng = &mut Pcg64::seed_from_u64(0x7ee);
        for _ in 0..30 {
            let n = rng.gen_range(1..30);
            let graph = random_connected_weighted_graph(rng, n, 0.3, 50);
            let (tour, mst) = tsp_approximation_with_mst(&graph);
            assert_eq!(mst, build_mst(&graph));
            assert_eq!(tour, preorder(&mst, 0));
            assert_eq!(tour, tsp_approximation(&graph));
        }

        let (tour, mst) = tsp_approximation_with_mst(&WeightedGraph::new(0));
        assert!(tour.is_empty() && mst.is_empty());
    }

    #[test]
    fn cycle_edges() {
        let tour = Tour::from(vec![2, 0, 1]);
        assert_eq!(
            tour.cycle_edges().collect_vec(),
            [Edge(2, 0), Edge(0, 1), Edge(1, 2)]
        );
        assert_eq!(Tour::from(vec![4]).cycle_edges().count(), 0);
        assert_eq!(Tour::default().cycle_edges().count(), 0);
    }

    #[test]
    fn cost_requires_edges() {
        let graph = WeightedGraph::from_edges(3, [(0, 1, 1.0), (1, 2, 1.0)]);
        assert_eq!(Tour::from(vec![0, 1, 2]).cost(&graph), None);
        assert_eq!(Tour::from(vec![0, 1]).cost(&graph), Some(2.0));
    }

    #[test]
    fn invariant_check() {
        let check = |nodes: Vec<Node>, n| {
            TourCheck {
                tour: &Tour::from(nodes),
                number_of_nodes: n,
            }
            .is_correct()
        };

        assert_eq!(check(vec![0, 2, 1], 3), Ok(()));
        assert_eq!(check(vec![0, 2, 0], 3), Err(TourError::Duplicate(0)));
        assert_eq!(check(vec![0, 3], 3), Err(TourError::NodeOutOfRange(3)));
        assert_eq!(
            check(vec![0, 1], 3),
            Err(TourError::WrongLength {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn trivial_graphs() {
        assert!(tsp_approximation(&WeightedGraph::new(0)).is_empty());
        assert_eq!(tsp_approximation(&WeightedGraph::new(1)).nodes(), &[0]);
    }

    #[test]
    fn visits_each_node_once() {
        let rng = &mut Pcg64::seed_from_u64(0xdead);
        for _ in 0..100 {
            let n = rng.gen_range(1..50);
            let graph = random_connected_weighted_graph(rng, n, 0.2, 100);
            let tour = tsp_approximation(&graph);
            assert_eq!(
                TourCheck {
                    tour: &tour,
                    number_of_nodes: n
                }
                .is_correct(),
                Ok(())
            );
            assert_eq!(tour.nodes()[0], 0);
        }
    }

    /// Exact optimum by enumerating all tours starting at node 0
    fn optimal_tour_cost(graph: &WeightedGraph) -> Weight {
        let n = graph.number_of_nodes();
        (1..n)
            .permutations((n - 1) as usize)
            .filter_map(|rest| {
                let mut nodes = vec![0];
                nodes.extend(rest);
                Tour::from(nodes).cost(graph)
            })
            .min_by(|a, b| a.total_cmp(b))
            .unwrap()
    }

    #[test]
    fn metric_approximation_guarantee() {
        let rng = &mut Pcg64::seed_from_u64(0xbeef);
        for _ in 0..50 {
            let n = rng.gen_range(3..8);
            let graph = random_euclidean_graph(rng, n);
            let mst = build_mst(&graph);
            let tour = tsp_approximation(&graph);

            let cost = tour.cost(&graph).unwrap();
            assert!(cost <= 2.0 * mst_weight(&mst) + 1e-9);
            assert!(cost <= 2.0 * optimal_tour_cost(&graph) + 1e-9);
            assert!(mst_weight(&mst) <= optimal_tour_cost(&graph) + 1e-9);
        }
    }
}
