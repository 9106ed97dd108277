use super::*;
use std::collections::VecDeque;

pub trait TraversalState {
    fn visited(&self) -> &BitSet;

    fn did_visit_node(&self, u: Node) -> bool {
        self.visited()[u]
    }
}

////////////////////////////////////////////////////////////////////////////////////////// BFS
/// Breadth-first search; nodes are marked visited when they enter the queue.
pub struct BreadthFirstSearch<'a, G: AdjacencyList> {
    graph: &'a G,
    visited: BitSet,
    queue: VecDeque<Node>,
}

impl<'a, G: AdjacencyList> TraversalState for BreadthFirstSearch<'a, G> {
    fn visited(&self) -> &BitSet {
        &self.visited
    }
}

impl<'a, G: AdjacencyList> BreadthFirstSearch<'a, G> {
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = graph.vertex_bitset_unset();
        visited.set_bit(start);
        Self {
            graph,
            visited,
            queue: VecDeque::from(vec![start]),
        }
    }
}

impl<'a, G: AdjacencyList> Iterator for BreadthFirstSearch<'a, G> {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;
        for &v in self.graph.neighbors_of(u) {
            if !self.visited.set_bit(v) {
                self.queue.push_back(v);
            }
        }
        Some(u)
    }
}

//////////////////////////////////////////////////////////////////////////////////// Preorder DFS
/// Depth-first search emitting each node the first time it is reached, i.e. in preorder.
///
/// Children are explored in the order of the adjacency list. In contrast to a stack search
/// that marks nodes when they are pushed, the order coincides with the one of the recursive
/// formulation:
///
/// ```
/// use vctsp::graph::*;
/// use itertools::Itertools;
/// let tree = AdjArray::test_only_from([(0, 1), (1, 2), (1, 3)]);
/// assert_eq!(tree.preorder(0).collect_vec(), vec![0, 1, 2, 3]);
/// ```
pub struct PreorderSearch<'a, G: AdjacencyList> {
    graph: &'a G,
    visited: BitSet,
    // (node, index of the next neighbor to inspect)
    stack: Vec<(Node, usize)>,
    pending: Option<Node>,
}

impl<'a, G: AdjacencyList> TraversalState for PreorderSearch<'a, G> {
    fn visited(&self) -> &BitSet {
        &self.visited
    }
}

impl<'a, G: AdjacencyList> PreorderSearch<'a, G> {
    pub fn new(graph: &'a G, start: Node) -> Self {
        Self {
            graph,
            visited: graph.vertex_bitset_unset(),
            stack: Vec::with_capacity(graph.len()),
            pending: Some(start),
        }
    }

    fn enter(&mut self, u: Node) -> Node {
        self.visited.set_bit(u);
        self.stack.push((u, 0));
        u
    }
}

impl<'a, G: AdjacencyList> Iterator for PreorderSearch<'a, G> {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.pending.take() {
            return Some(self.enter(start));
        }

        let graph = self.graph;
        while let Some((u, idx)) = self.stack.last_mut() {
            let neighbors = graph.neighbors_of(*u);
            match neighbors[*idx..].iter().position(|&v| !self.visited[v]) {
                Some(offset) => {
                    let v = neighbors[*idx + offset];
                    *idx += offset + 1;
                    return Some(self.enter(v));
                }
                None => {
                    self.stack.pop();
                }
            }
        }

        None
    }
}

//////////////////////////////////////////////////////////////////////////////////////// Convenience
pub trait Traversal: AdjacencyList {
    fn bfs(&self, start: Node) -> BreadthFirstSearch<'_, Self> {
        BreadthFirstSearch::new(self, start)
    }

    fn preorder(&self, start: Node) -> PreorderSearch<'_, Self> {
        PreorderSearch::new(self, start)
    }
}

impl<G: AdjacencyList> Traversal for G {}
