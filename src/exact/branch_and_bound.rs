use log::{debug, info};

use crate::{prelude::*, utils::VertexCover};

/// Budget of the search. Signed, since branches may overdraw it before the base case
/// rejects them.
pub type Budget = i64;

/// The three ways to cover the first remaining edge `(u, v)`, tried in this order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Branch {
    /// Take `u`; every edge incident to `u` is covered
    First,
    /// Take `v`; every edge incident to `v` is covered
    Second,
    /// Take both `u` and `v`; only the selected edge is dropped from the instance
    Both,
}

impl Branch {
    const ORDER: [Branch; 3] = [Branch::First, Branch::Second, Branch::Both];

    fn cost(self) -> Budget {
        match self {
            Branch::First | Branch::Second => 1,
            Branch::Both => 2,
        }
    }

    /// Returns the remaining instance after committing to the branch
    fn reduce(self, graph: &EdgeListGraph, Edge(u, v): Edge) -> EdgeListGraph {
        match self {
            Branch::First => graph.without_node(u),
            Branch::Second => graph.without_node(v),
            Branch::Both => graph.without_first_edge(),
        }
    }

    /// Pushes the chosen nodes in reverse order (the witness is reversed at the end)
    fn push_chosen(self, Edge(u, v): Edge, witness: &mut Vec<Node>) {
        match self {
            Branch::First => witness.push(u),
            Branch::Second => witness.push(v),
            Branch::Both => {
                witness.push(v);
                witness.push(u);
            }
        }
    }
}

/// Decides whether `graph` has a vertex cover of at most `k` nodes.
///
/// The search always branches on the first remaining edge and tries the branches in the
/// fixed order: first endpoint, second endpoint, both endpoints. The first feasible branch
/// is reported, so the witness is not necessarily minimum. It lists nodes in the order in
/// which they were chosen. Running time is exponential in `k`.
///
/// # Example
/// ```
/// use vctsp::prelude::*;
/// let cycle = EdgeListGraph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
/// assert_eq!(find_cover(&cycle, 2).unwrap().iter().collect::<Vec<_>>(), vec![0, 2]);
/// assert!(find_cover(&cycle, 1).is_none());
/// ```
pub fn find_cover(graph: &EdgeListGraph, k: Budget) -> Option<VertexCover> {
    let mut search = CoverSearch::default();
    let result = search.run(graph, k);

    info!(
        "Branch and bound: n={} m={} k={k} feasible={} search nodes={}",
        graph.number_of_nodes(),
        graph.number_of_edges(),
        result.is_some(),
        search.search_nodes
    );

    result
}

/// Returns the smallest `k` for which [`find_cover`] succeeds together with its witness
pub fn smallest_feasible_budget(graph: &EdgeListGraph) -> (Budget, VertexCover) {
    for k in 0..=(graph.number_of_nodes() as Budget) {
        if let Some(cover) = CoverSearch::default().run(graph, k) {
            debug!("smallest feasible budget: {k}");
            return (k, cover);
        }
    }

    // each level of the first branch removes at least one node
    unreachable!("a graph always has a cover of size n")
}

#[derive(Default)]
struct CoverSearch {
    search_nodes: u64,
}

impl CoverSearch {
    fn run(&mut self, graph: &EdgeListGraph, k: Budget) -> Option<VertexCover> {
        let mut witness = Vec::new();
        if !self.recurse(graph, k, &mut witness) {
            return None;
        }

        let mut cover = VertexCover::new(graph.number_of_nodes());
        cover.add_nodes(witness.into_iter().rev());
        Some(cover)
    }

    fn recurse(&mut self, graph: &EdgeListGraph, k: Budget, witness: &mut Vec<Node>) -> bool {
        self.search_nodes += 1;

        if k < 0 {
            return false;
        }

        let Some(&edge) = graph.edges().first() else {
            return true;
        };

        for branch in Branch::ORDER {
            let remaining = branch.reduce(graph, edge);
            if self.recurse(&remaining, k - branch.cost(), witness) {
                branch.push_chosen(edge, witness);
                return true;
            }
        }

        false
    }
}
