use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use anyhow::Context;
use log::{LevelFilter, info};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use structopt::StructOpt;
use vctsp::{log::build_logger_for_verbosity, prelude::*};

#[derive(StructOpt)]
enum Kind {
    /// Unweighted `G(n,p)` graphs
    Cover {
        /// Edge probability
        #[structopt(short, long, default_value = "0.3")]
        p: f64,
    },

    /// Complete graphs with euclidean distances between random points in the unit square
    Metric,

    /// Connected graphs (random tree + `G(n,p)`) with integer weights
    Connected {
        /// Edge probability of the edges added to the tree
        #[structopt(short, long, default_value = "0.2")]
        p: f64,

        #[structopt(short = "w", long, default_value = "100")]
        max_weight: u32,
    },
}

/// Writes random instances as blank line separated blocks
#[derive(StructOpt)]
#[structopt(name = "random_instances")]
struct Opts {
    #[structopt(subcommand)]
    kind: Kind,

    /// Smallest number of nodes
    #[structopt(long, default_value = "5")]
    min_nodes: NumNodes,

    /// Largest number of nodes
    #[structopt(long, default_value = "20")]
    max_nodes: NumNodes,

    /// Number of graphs to write
    #[structopt(short, long, default_value = "10")]
    blocks: usize,

    #[structopt(short, long, default_value = "1")]
    seed: u64,

    /// Output file; stdout if omitted
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,

    /// Verbose mode (-v, -vv, -vvv)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

fn write_blocks<G: EdgeRecordGraph>(graphs: &[G], output: &Option<PathBuf>) -> anyhow::Result<()> {
    if let Some(path) = output {
        let file =
            File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
        try_write_blocks(graphs, BufWriter::new(file))?;
    } else {
        try_write_blocks(graphs, std::io::stdout().lock())?;
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::from_args();
    build_logger_for_verbosity(LevelFilter::Warn, opts.verbose);

    anyhow::ensure!(
        opts.min_nodes <= opts.max_nodes,
        "--min-nodes must not exceed --max-nodes"
    );

    let rng = &mut Pcg64::seed_from_u64(opts.seed);
    let mut sizes = Vec::with_capacity(opts.blocks);
    for _ in 0..opts.blocks {
        sizes.push(rng.gen_range(opts.min_nodes..=opts.max_nodes));
    }

    match opts.kind {
        Kind::Cover { p } => {
            anyhow::ensure!((0.0..=1.0).contains(&p), "p must be in [0, 1]");
            let graphs: Vec<EdgeListGraph> = sizes
                .iter()
                .map(|&n| EdgeListGraph::random_gnp(rng, n, p))
                .collect();
            write_blocks(&graphs, &opts.output)?;
        }
        Kind::Metric => {
            let graphs: Vec<_> = sizes
                .iter()
                .map(|&n| random_euclidean_graph(rng, n))
                .collect();
            write_blocks(&graphs, &opts.output)?;
        }
        Kind::Connected { p, max_weight } => {
            anyhow::ensure!((0.0..=1.0).contains(&p), "p must be in [0, 1]");
            anyhow::ensure!(max_weight > 0, "max weight must be positive");
            let graphs: Vec<_> = sizes
                .iter()
                .map(|&n| random_connected_weighted_graph(rng, n, p, max_weight))
                .collect();
            write_blocks(&graphs, &opts.output)?;
        }
    }

    info!("wrote {} instances", opts.blocks);
    std::io::stdout().flush()?;

    Ok(())
}
