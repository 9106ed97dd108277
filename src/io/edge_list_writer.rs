use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use super::records::{EdgeRecord, EdgeRecordGraph};

/// Writes graphs in the `n m` + edge lines format understood by the readers
pub trait EdgeListWriter {
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<(), std::io::Error>;
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<(), std::io::Error>;
}

impl<G: EdgeRecordGraph> EdgeListWriter for G {
    fn try_write_edge_list<W: Write>(&self, mut writer: W) -> Result<(), std::io::Error> {
        writeln!(
            writer,
            "{} {}",
            self.number_of_nodes(),
            self.records().len()
        )?;

        for record in self.records() {
            record.write_record(&mut writer)?;
        }

        Ok(())
    }

    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<(), std::io::Error> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_edge_list(writer)
    }
}

/// Writes several graphs separated by blank lines
pub fn try_write_blocks<G: EdgeRecordGraph, W: Write>(
    graphs: &[G],
    mut writer: W,
) -> Result<(), std::io::Error> {
    for (i, graph) in graphs.iter().enumerate() {
        if i > 0 {
            writeln!(writer)?;
        }
        graph.try_write_edge_list(&mut writer)?;
    }
    writer.flush()
}
