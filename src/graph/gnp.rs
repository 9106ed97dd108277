use crate::graph::*;
use rand::Rng;
use rand::seq::SliceRandom;
use rand_distr::Geometric;

pub trait GnpGenerator: Sized {
    /// Generates a Gilbert (also, wrongly, known as Erdos-Reyni) graph
    /// The `G(n,p)` contains n nodes and each of the `n(n-1)/2` edges exists
    /// independently with probability `p`.
    fn random_gnp<R: Rng>(rng: &mut R, n: Node, p: f64) -> Self;
}

impl<G> GnpGenerator for G
where
    G: GraphNew + GraphEdgeEditing,
{
    fn random_gnp<R: Rng>(rng: &mut R, n: Node, p: f64) -> Self {
        let mut result = Self::new(n);

        for x in BernoulliSamplingRange::new(rng, 0, (n as i64) * (n as i64), p) {
            let u = x / (n as i64);
            let v = x % (n as i64);
            if u < v {
                result.add_edge(u as Node, v as Node);
            }
        }

        result
    }
}

/// Places `n` points uniformly in the unit square and returns the complete graph with
/// euclidean distances as weights. The weights therefore satisfy the triangle inequality.
pub fn random_euclidean_graph<R: Rng>(rng: &mut R, n: Node) -> WeightedGraph {
    let points: Vec<(f64, f64)> = (0..n)
        .map(|_| (rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)))
        .collect();

    let mut graph = WeightedGraph::new(n);
    for u in 0..n {
        for v in (u + 1)..n {
            let (x1, y1) = points[u as usize];
            let (x2, y2) = points[v as usize];
            graph.add_edge(u, v, (x1 - x2).hypot(y1 - y2));
        }
    }
    graph
}

/// Returns a connected graph: a random spanning tree (random attachment over a shuffled
/// node order) plus `G(n,p)` edges. Weights are drawn uniformly from `1..=max_weight`.
pub fn random_connected_weighted_graph<R: Rng>(
    rng: &mut R,
    n: Node,
    p: f64,
    max_weight: u32,
) -> WeightedGraph {
    let mut order: Vec<Node> = (0..n).collect();
    order.shuffle(rng);

    let mut edges = Vec::new();
    for i in 1..order.len() {
        let parent = order[rng.gen_range(0..i)];
        edges.push(Edge(parent, order[i]));
    }
    edges.extend(EdgeListGraph::random_gnp(rng, n, p).edges().iter().copied());

    let mut graph = WeightedGraph::new(n);
    for Edge(u, v) in edges {
        graph.add_edge(u, v, rng.gen_range(1..=max_weight) as Weight);
    }
    graph
}

/// Provides an iterator similarly to Range, but
/// includes each element i.i.d. with probability of p
pub struct BernoulliSamplingRange<'a, R: Rng> {
    current: i64,
    end: i64,
    distr: Option<Geometric>,
    rng: &'a mut R,
}

impl<'a, R: Rng> BernoulliSamplingRange<'a, R> {
    pub fn new(rng: &'a mut R, begin: i64, end: i64, prob: f64) -> Self {
        debug_assert!(begin <= end);
        debug_assert!((0.0..=1.0).contains(&prob));
        Self {
            rng,
            current: begin - 1,
            end,
            // with p = 0 no element is ever included
            distr: Geometric::new(prob).ok().filter(|_| prob > 0.0),
        }
    }

    fn try_advance(&mut self) {
        if self.current >= self.end {
            return;
        }

        let Some(distr) = self.distr.as_ref() else {
            self.current = self.end;
            return;
        };

        let skip = self.rng.sample(distr);
        if skip > i64::MAX as u64 {
            self.current = self.end;
        } else {
            self.current += 1;
            self.current = match self.current.checked_add(skip as i64) {
                Some(x) => x,
                None => self.end,
            }
        }
    }
}

impl<R: Rng> Iterator for BernoulliSamplingRange<'_, R> {
    type Item = i64;
    fn next(&mut self) -> Option<Self::Item> {
        self.try_advance();

        if self.current >= self.end {
            None
        } else {
            Some(self.current)
        }
    }
}
