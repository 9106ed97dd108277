use std::{
    fs::File,
    io::{BufRead, BufReader, Lines},
    marker::PhantomData,
    path::Path,
};

use log::debug;

use super::{
    Result,
    records::{EdgeRecord, EdgeRecordGraph, parse_header, parse_record},
};
use crate::{errors::ReadError, graph::*};

/// Reads a single graph: a header line `n m` followed by edge lines; blank lines
/// are ignored.
pub trait GraphEdgeListReader: Sized {
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self>;
}

/// Reads a sequence of graphs separated by blank lines, each in the format of
/// [`GraphEdgeListReader`].
pub trait GraphBlockReader: Sized {
    fn try_read_blocks<R: BufRead>(reader: R) -> Result<Vec<Self>>;
    fn try_read_blocks_file<P: AsRef<Path>>(path: P) -> Result<Vec<Self>>;
}

impl<G: EdgeRecordGraph> GraphEdgeListReader for G {
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        let edge_reader = EdgeListReader::<R, G::Record>::try_new(reader)?;
        let n = edge_reader.number_of_nodes();
        let records = edge_reader.collect::<Result<Vec<_>>>()?;
        Ok(G::from_records(n, records))
    }

    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = File::open(path)?;
        Self::try_read_edge_list(BufReader::new(reader))
    }
}

impl<G: EdgeRecordGraph> GraphBlockReader for G {
    fn try_read_blocks<R: BufRead>(reader: R) -> Result<Vec<Self>> {
        BlockReader::<R, G>::new(reader).collect()
    }

    fn try_read_blocks_file<P: AsRef<Path>>(path: P) -> Result<Vec<Self>> {
        let reader = File::open(path)?;
        Self::try_read_blocks(BufReader::new(reader))
    }
}

/// Lines annotated with their 1-based line number
struct NumberedLines<R> {
    lines: Lines<R>,
    line_no: usize,
}

impl<R: BufRead> NumberedLines<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
        }
    }

    fn next_line(&mut self) -> Result<Option<(usize, String)>> {
        match self.lines.next() {
            None => Ok(None),
            Some(Err(e)) => Err(ReadError::Io(e)),
            Some(Ok(line)) => {
                self.line_no += 1;
                Ok(Some((self.line_no, line)))
            }
        }
    }

    fn next_non_blank_line(&mut self) -> Result<Option<(usize, String)>> {
        loop {
            match self.next_line()? {
                Some((_, line)) if line.trim().is_empty() => continue,
                x => return Ok(x),
            }
        }
    }
}

/// Iterator over the edge records of a single graph
pub struct EdgeListReader<R, E> {
    lines: NumberedLines<R>,
    number_of_nodes: NumNodes,
    number_of_edges: NumEdges,
    _record: PhantomData<E>,
}

impl<R: BufRead, E: EdgeRecord> EdgeListReader<R, E> {
    pub fn try_new(reader: R) -> Result<Self> {
        let mut lines = NumberedLines::new(reader);
        let Some((line, header)) = lines.next_non_blank_line()? else {
            return Err(ReadError::parse(lines.line_no, "No header found"));
        };
        let (number_of_nodes, number_of_edges) = parse_header(line, &header)?;

        Ok(Self {
            lines,
            number_of_nodes,
            number_of_edges,
            _record: PhantomData,
        })
    }

    /// Number of edges announced by the header; the actual number may differ
    pub fn number_of_edges(&self) -> NumEdges {
        self.number_of_edges
    }

    pub fn number_of_nodes(&self) -> NumNodes {
        self.number_of_nodes
    }
}

impl<R: BufRead, E: EdgeRecord> Iterator for EdgeListReader<R, E> {
    type Item = Result<E>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (line, text) = match self.lines.next_non_blank_line() {
                Ok(Some(x)) => x,
                Ok(None) => return None,
                Err(e) => return Some(Err(e)),
            };

            match parse_record::<E>(line, &text, self.number_of_nodes) {
                Ok(Some(record)) => return Some(Ok(record)),
                Ok(None) => continue,
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

/// Iterator over the graphs of a blank-line separated input. The last graph does not
/// need to be followed by a blank line. Stops after the first error.
pub struct BlockReader<R, G> {
    lines: NumberedLines<R>,
    failed: bool,
    _graph: PhantomData<G>,
}

impl<R: BufRead, G: EdgeRecordGraph> BlockReader<R, G> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: NumberedLines::new(reader),
            failed: false,
            _graph: PhantomData,
        }
    }

    fn read_block(&mut self) -> Result<Option<G>> {
        let Some((header_line, header)) = self.lines.next_non_blank_line()? else {
            return Ok(None);
        };
        let (n, m) = parse_header(header_line, &header)?;

        // `m` is only compared against, never trusted for allocation
        let mut records = Vec::new();
        while let Some((line, text)) = self.lines.next_line()? {
            if text.trim().is_empty() {
                break;
            }
            if let Some(record) = parse_record::<G::Record>(line, &text, n)? {
                records.push(record);
            }
        }

        if records.len() as NumEdges != m {
            debug!(
                "line {header_line}: header announces {m} edges, block has {} valid edge lines",
                records.len()
            );
        }

        Ok(Some(G::from_records(n, records)))
    }
}

impl<R: BufRead, G: EdgeRecordGraph> Iterator for BlockReader<R, G> {
    type Item = Result<G>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let result = self.read_block();
        self.failed = result.is_err();
        result.transpose()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use glob::glob;
    use itertools::Itertools;
    use std::io::Write;

    #[test]
    fn test_success() {
        const DEMO_FILE: &str = "4 4\n0 1\n\n1 2\n2 3\n3 0\n";
        let edge_reader =
            EdgeListReader::<_, Edge>::try_new(std::io::BufReader::new(DEMO_FILE.as_bytes()))
                .unwrap();

        assert_eq!(edge_reader.number_of_nodes(), 4);
        assert_eq!(edge_reader.number_of_edges(), 4);

        let edges: Vec<_> = edge_reader.map(|e| e.unwrap()).collect();
        assert_eq!(edges, vec![Edge(0, 1), Edge(1, 2), Edge(2, 3), Edge(3, 0)]);
    }

    #[test]
    fn skips_malformed_lines() {
        let graph =
            EdgeListGraph::try_read_edge_list("3 3\n0 1\n0 1 2\n1 2\n5 0\n".as_bytes()).unwrap();
        assert_eq!(graph.number_of_nodes(), 3);
        assert_eq!(graph.edges(), &[Edge(0, 1), Edge(1, 2)]);
    }

    #[test]
    fn header_errors_are_fatal() {
        assert!(matches!(
            EdgeListGraph::try_read_edge_list("".as_bytes()),
            Err(ReadError::Parse { .. })
        ));
        assert!(matches!(
            EdgeListGraph::try_read_edge_list("four 2\n0 1\n".as_bytes()),
            Err(ReadError::Parse { line: 1, .. })
        ));
        assert!(matches!(
            EdgeListGraph::try_read_edge_list("3 1\n0 x\n".as_bytes()),
            Err(ReadError::Parse { line: 2, .. })
        ));
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            EdgeListGraph::try_read_edge_list_file("this/file/does/not/exist.txt"),
            Err(ReadError::Io(_))
        ));
    }

    #[test]
    fn weighted_blocks() {
        const DEMO_FILE: &str = "3 3\n0 1 1\n1 2 1\n0 2 5\n\n\n2 1\n0 1\n0 1 4\n\n1 0";
        let graphs = WeightedGraph::try_read_blocks(DEMO_FILE.as_bytes()).unwrap();

        assert_eq!(graphs.len(), 3);
        assert_eq!(
            graphs[0].edges(),
            &[
                WeightedEdge(0, 1, 1.0),
                WeightedEdge(1, 2, 1.0),
                WeightedEdge(0, 2, 5.0)
            ]
        );
        assert_eq!(graphs[1].number_of_nodes(), 2);
        assert_eq!(graphs[1].edges(), &[WeightedEdge(0, 1, 4.0)]);
        assert_eq!(graphs[2].number_of_nodes(), 1);
        assert_eq!(graphs[2].number_of_edges(), 0);
    }

    #[test]
    fn unweighted_blocks() {
        const DEMO_FILE: &str = "\n3 2\n0 1\n1 2\n\n4 2\n0 1\n2 3\n";
        let graphs = EdgeListGraph::try_read_blocks(DEMO_FILE.as_bytes()).unwrap();
        assert_eq!(
            graphs.iter().map(|g| g.edges().to_vec()).collect_vec(),
            vec![
                vec![Edge(0, 1), Edge(1, 2)],
                vec![Edge(0, 1), Edge(2, 3)]
            ]
        );
    }

    #[test]
    fn huge_edge_count_in_header() {
        let graphs =
            EdgeListGraph::try_read_blocks("2 18446744073709551615\n0 1\n".as_bytes()).unwrap();
        assert_eq!(graphs.len(), 1);
        assert_eq!(graphs[0].edges(), &[Edge(0, 1)]);

        let graphs =
            WeightedGraph::try_read_blocks("2 10000000000000\n0 1 2.5\n\n1 0\n".as_bytes())
                .unwrap();
        assert_eq!(graphs.len(), 2);
        assert_eq!(graphs[0].edges(), &[WeightedEdge(0, 1, 2.5)]);

        let graph =
            EdgeListGraph::try_read_edge_list("3 18446744073709551615\n1 2\n".as_bytes()).unwrap();
        assert_eq!(graph.edges(), &[Edge(1, 2)]);

        assert!(matches!(
            EdgeListGraph::try_read_blocks("2 18446744073709551616\n0 1\n".as_bytes()),
            Err(ReadError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn block_error_stops_iteration() {
        const DEMO_FILE: &str = "2 1\n0 1\n\nbroken\n0 1\n\n2 1\n0 1\n";
        let mut reader = BlockReader::<_, EdgeListGraph>::new(DEMO_FILE.as_bytes());
        assert!(reader.next().unwrap().is_ok());
        assert!(matches!(
            reader.next(),
            Some(Err(ReadError::Parse { line: 4, .. }))
        ));
        assert!(reader.next().is_none());
    }

    #[test]
    fn read_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "3 3\n0 1 2\n1 2 3\n0 2 4\n").unwrap();
        file.flush().unwrap();

        let graphs = WeightedGraph::try_read_blocks_file(file.path()).unwrap();
        assert_eq!(graphs.len(), 1);
        assert_eq!(graphs[0].total_weight(), 9.0);
    }

    #[test]
    fn read_bundled_instances() {
        let files = glob("instances/cover/*.txt")
            .expect("Failed to glob")
            .map(|r| r.expect("Failed to access globbed path"))
            .collect_vec();
        assert!(!files.is_empty());

        for file in files {
            let graph = EdgeListGraph::try_read_edge_list_file(&file).unwrap();
            assert!(graph.edges().iter().all(|e| !e.is_loop()));
        }

        let files = glob("instances/tsp/*.txt")
            .expect("Failed to glob")
            .map(|r| r.expect("Failed to access globbed path"))
            .collect_vec();
        assert!(!files.is_empty());

        for file in files {
            let graphs = WeightedGraph::try_read_blocks_file(&file).unwrap();
            assert!(!graphs.is_empty());
        }
    }
}
