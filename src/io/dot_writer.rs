use std::io::Write;

use crate::{prelude::*, utils::VertexCover};

/// produces a minimalistic DOT representation of a solution
pub trait DotWriter {
    fn try_write_dot<W: Write>(&self, writer: W) -> Result<(), std::io::Error>;
}

/// A graph whose cover nodes are drawn filled
pub struct CoverDrawing<'a> {
    pub graph: &'a EdgeListGraph,
    pub cover: &'a VertexCover,
}

/// A weighted graph with the tour edges drawn bold; edges not used by the tour are dotted
pub struct TourDrawing<'a> {
    pub graph: &'a WeightedGraph,
    pub tour: &'a Tour,
}

impl DotWriter for CoverDrawing<'_> {
    fn try_write_dot<W: Write>(&self, mut writer: W) -> Result<(), std::io::Error> {
        write!(writer, "graph G {{ ")?;
        for u in self.cover.iter() {
            write!(writer, "v{u}[style=filled]; ")?;
        }
        for Edge(u, v) in self.graph.edges() {
            write!(writer, "v{u}--v{v}; ")?;
        }
        write!(writer, r"}}")
    }
}

impl DotWriter for TourDrawing<'_> {
    fn try_write_dot<W: Write>(&self, mut writer: W) -> Result<(), std::io::Error> {
        let mut tour_edges: Vec<Edge> = self.tour.cycle_edges().map(|e| e.normalized()).collect();
        tour_edges.sort_unstable();

        write!(writer, "graph G {{ ")?;
        for &WeightedEdge(u, v, w) in self.graph.edges() {
            let style = if tour_edges.binary_search(&Edge(u, v).normalized()).is_ok() {
                "bold"
            } else {
                "dotted"
            };
            write!(writer, "v{u}--v{v}[label=\"{w}\",style={style}]; ")?;
        }
        write!(writer, r"}}")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn cover() {
        let graph = EdgeListGraph::from_edges(3, [(0, 1), (1, 2)]);
        let mut cover = VertexCover::new(3);
        cover.add_node(1);

        let mut buffer: Vec<u8> = Vec::new();
        CoverDrawing {
            graph: &graph,
            cover: &cover,
        }
        .try_write_dot(&mut buffer)
        .unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "graph G { v1[style=filled]; v0--v1; v1--v2; }"
        );
    }

    #[test]
    fn tour() {
        let graph = WeightedGraph::from_edges(3, [(0, 1, 1.0), (1, 2, 1.0), (0, 2, 5.0)]);
        let tour = Tour::from(vec![0, 2, 1]);

        let mut buffer: Vec<u8> = Vec::new();
        TourDrawing {
            graph: &graph,
            tour: &tour,
        }
        .try_write_dot(&mut buffer)
        .unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.starts_with("graph G { "));
        assert_eq!(output.matches("style=bold").count(), 3);

        let path = Tour::from(vec![0, 1]);
        let mut buffer: Vec<u8> = Vec::new();
        TourDrawing {
            graph: &graph,
            tour: &path,
        }
        .try_write_dot(&mut buffer)
        .unwrap();
        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output.matches("style=bold").count(), 1);
        assert_eq!(output.matches("style=dotted").count(), 2);
    }
}
