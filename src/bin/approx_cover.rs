use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use anyhow::Context;
use log::LevelFilter;
use structopt::StructOpt;
use vctsp::{log::build_logger_for_verbosity, prelude::*};

/// Computes a 2-approximate vertex cover for every graph of the input
#[derive(StructOpt)]
#[structopt(name = "approx_cover")]
struct Opts {
    /// Blocks of `n m` + `u v` lines separated by blank lines; stdin if omitted
    #[structopt(parse(from_os_str))]
    input: Option<PathBuf>,

    /// Print one JSON object per graph
    #[structopt(long)]
    json: bool,

    /// Write Graphviz drawings of all covers to this file
    #[structopt(long, parse(from_os_str))]
    dot: Option<PathBuf>,

    /// Verbose mode (-v, -vv, -vvv)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

fn load_graphs(path: &Option<PathBuf>) -> anyhow::Result<Vec<EdgeListGraph>> {
    if let Some(path) = path {
        EdgeListGraph::try_read_blocks_file(path)
            .with_context(|| format!("cannot load {}", path.display()))
    } else {
        let stdin = std::io::stdin().lock();
        Ok(EdgeListGraph::try_read_blocks(stdin)?)
    }
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::from_args();
    build_logger_for_verbosity(LevelFilter::Warn, opts.verbose);

    let graphs = load_graphs(&opts.input)?;
    let covers: Vec<_> = graphs.iter().map(approximate_cover).collect();

    let mut out = std::io::stdout().lock();
    for cover in &covers {
        if opts.json {
            serde_json::to_writer(&mut out, cover)?;
        } else {
            write!(out, "Vertex Cover: ")?;
            cover.write_set(&mut out)?;
        }
        writeln!(out)?;
    }

    if let Some(path) = &opts.dot {
        let mut writer = BufWriter::new(
            File::create(path).with_context(|| format!("cannot create {}", path.display()))?,
        );
        for (graph, cover) in graphs.iter().zip(&covers) {
            CoverDrawing { graph, cover }.try_write_dot(&mut writer)?;
            writeln!(writer)?;
        }
    }

    Ok(())
}
