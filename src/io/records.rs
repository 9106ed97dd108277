use std::io::Write;

use log::warn;

use super::Result;
use crate::{errors::ReadError, graph::*};

/// A single edge line of an input file
pub trait EdgeRecord: EdgeOps + Copy {
    /// Number of whitespace separated fields of a well-formed line
    const FIELDS: usize;

    /// Parses the fields of a line, which has exactly `FIELDS` entries
    fn parse_fields(line: usize, fields: &[&str]) -> Result<Self>;

    /// Returns a reason if the record must not be part of a graph with `n` nodes
    fn reject_reason(&self, n: NumNodes) -> Option<String> {
        let (u, v) = self.endpoints();
        if u >= n || v >= n {
            Some(format!("endpoint out of range (n = {n})"))
        } else if u == v {
            Some("self-loop".into())
        } else {
            None
        }
    }

    fn write_record<W: Write>(&self, writer: W) -> std::io::Result<()>;
}

/// Graphs that are built from (and can be written as) a sequence of records
pub trait EdgeRecordGraph: GraphNodeOrder + Sized {
    type Record: EdgeRecord;

    fn from_records(n: NumNodes, records: impl IntoIterator<Item = Self::Record>) -> Self;

    fn records(&self) -> &[Self::Record];
}

macro_rules! parse_field {
    ($fields : expr, $idx : expr, $line : expr, $name : expr) => {
        $fields[$idx].parse().map_err(|_| {
            ReadError::parse(
                $line,
                format!("Invalid value {:?}. Cannot parse {}.", $fields[$idx], $name),
            )
        })?
    };
}

impl EdgeRecord for Edge {
    const FIELDS: usize = 2;

    fn parse_fields(line: usize, fields: &[&str]) -> Result<Self> {
        Ok(Edge(
            parse_field!(fields, 0, line, "source node"),
            parse_field!(fields, 1, line, "target node"),
        ))
    }

    fn write_record<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        writeln!(writer, "{} {}", self.0, self.1)
    }
}

impl EdgeRecord for WeightedEdge {
    const FIELDS: usize = 3;

    fn parse_fields(line: usize, fields: &[&str]) -> Result<Self> {
        Ok(WeightedEdge(
            parse_field!(fields, 0, line, "source node"),
            parse_field!(fields, 1, line, "target node"),
            parse_field!(fields, 2, line, "weight"),
        ))
    }

    fn reject_reason(&self, n: NumNodes) -> Option<String> {
        if !(self.weight() >= 0.0 && self.weight().is_finite()) {
            return Some(format!("weight {} is not a non-negative number", self.weight()));
        }
        self.unweighted().reject_reason(n)
    }

    fn write_record<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        writeln!(writer, "{} {} {}", self.0, self.1, self.2)
    }
}

impl EdgeRecordGraph for EdgeListGraph {
    type Record = Edge;

    fn from_records(n: NumNodes, records: impl IntoIterator<Item = Edge>) -> Self {
        <Self as GraphEdgeEditing>::from_edges(n, records)
    }

    fn records(&self) -> &[Edge] {
        self.edges()
    }
}

impl EdgeRecordGraph for WeightedGraph {
    type Record = WeightedEdge;

    fn from_records(n: NumNodes, records: impl IntoIterator<Item = WeightedEdge>) -> Self {
        WeightedGraph::from_edges(n, records)
    }

    fn records(&self) -> &[WeightedEdge] {
        self.edges()
    }
}

/// Parses the `n m` line opening a graph
pub(super) fn parse_header(line: usize, text: &str) -> Result<(NumNodes, NumEdges)> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() != 2 {
        return Err(ReadError::parse(
            line,
            format!(
                "Invalid header {text:?}; expected number of nodes and number of edges"
            ),
        ));
    }

    Ok((
        parse_field!(fields, 0, line, "number of nodes"),
        parse_field!(fields, 1, line, "number of edges"),
    ))
}

/// Parses an edge line. Lines with a wrong number of fields or edges that cannot be part
/// of the graph are skipped with a warning; unparsable numbers are an error.
pub(super) fn parse_record<E: EdgeRecord>(
    line: usize,
    text: &str,
    number_of_nodes: NumNodes,
) -> Result<Option<E>> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() != E::FIELDS {
        warn!("line {line}: skipping line with incorrect format: {text:?}");
        return Ok(None);
    }

    let record = E::parse_fields(line, &fields)?;
    if let Some(reason) = record.reject_reason(number_of_nodes) {
        warn!("line {line}: skipping edge {text:?}: {reason}");
        return Ok(None);
    }

    Ok(Some(record))
}
