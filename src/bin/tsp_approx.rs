use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use anyhow::Context;
use log::{LevelFilter, warn};
use serde::Serialize;
use structopt::StructOpt;
use vctsp::{log::build_logger_for_verbosity, prelude::*};

/// Computes an MST-based TSP tour for every weighted graph of the input
#[derive(StructOpt)]
#[structopt(name = "tsp_approx")]
struct Opts {
    /// Blocks of `n m` + `u v w` lines separated by blank lines; stdin if omitted
    #[structopt(parse(from_os_str))]
    input: Option<PathBuf>,

    /// Also print the cost of the closed tour and the weight of the spanning tree
    #[structopt(long)]
    cost: bool,

    /// Print one JSON object per graph
    #[structopt(long)]
    json: bool,

    /// Write Graphviz drawings of all tours to this file
    #[structopt(long, parse(from_os_str))]
    dot: Option<PathBuf>,

    /// Verbose mode (-v, -vv, -vvv)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

#[derive(Serialize)]
struct TourReport<'a> {
    tour: &'a [Node],
    cost: Option<Weight>,
    mst_weight: Weight,
}

fn load_graphs(path: &Option<PathBuf>) -> anyhow::Result<Vec<WeightedGraph>> {
    if let Some(path) = path {
        WeightedGraph::try_read_blocks_file(path)
            .with_context(|| format!("cannot load {}", path.display()))
    } else {
        let stdin = std::io::stdin().lock();
        Ok(WeightedGraph::try_read_blocks(stdin)?)
    }
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::from_args();
    build_logger_for_verbosity(LevelFilter::Warn, opts.verbose);

    let graphs = load_graphs(&opts.input)?;
    let solutions: Vec<_> = graphs.iter().map(tsp_approximation_with_mst).collect();

    let mut out = std::io::stdout().lock();
    for (graph, (tour, mst)) in graphs.iter().zip(&solutions) {
        let cost = tour.cost(graph);
        if cost.is_none() && !tour.is_empty() {
            warn!("tour {:?} uses a pair of nodes without an edge", tour.nodes());
        }

        if opts.json {
            let report = TourReport {
                tour: tour.nodes(),
                cost,
                mst_weight: mst_weight(mst),
            };
            serde_json::to_writer(&mut out, &report)?;
            writeln!(out)?;
            continue;
        }

        write!(out, "TSP Tour: ")?;
        tour.write_list(&mut out)?;
        writeln!(out)?;

        if opts.cost {
            match cost {
                Some(cost) => writeln!(out, "Tour Cost: {cost}")?,
                None => writeln!(out, "Tour Cost: undefined")?,
            }
            writeln!(out, "MST Weight: {}", mst_weight(mst))?;
        }
    }

    if let Some(path) = &opts.dot {
        let mut writer = BufWriter::new(
            File::create(path).with_context(|| format!("cannot create {}", path.display()))?,
        );
        for (graph, (tour, _)) in graphs.iter().zip(&solutions) {
            TourDrawing { graph, tour }.try_write_dot(&mut writer)?;
            writeln!(writer)?;
        }
    }

    Ok(())
}
