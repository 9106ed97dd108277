use std::{io::Write, path::PathBuf};

use anyhow::Context;
use itertools::Itertools;
use log::LevelFilter;
use structopt::StructOpt;
use vctsp::{exact::Budget, log::build_logger_for_verbosity, prelude::*};

/// Lists every vertex cover of at most `k` nodes found by branching on the first edge
#[derive(StructOpt)]
#[structopt(
    name = "enumerate_covers",
    setting = structopt::clap::AppSettings::AllowNegativeNumbers
)]
struct Opts {
    /// Graph file: a line `n m` followed by one `u v` line per edge
    #[structopt(parse(from_os_str))]
    graph_file: PathBuf,

    /// Largest admissible cover size
    k: Budget,

    /// Print the covers as a JSON array
    #[structopt(long)]
    json: bool,

    /// Verbose mode (-v, -vv, -vvv)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::from_args();
    build_logger_for_verbosity(LevelFilter::Warn, opts.verbose);

    let graph = EdgeListGraph::try_read_edge_list_file(&opts.graph_file)
        .with_context(|| format!("cannot load {}", opts.graph_file.display()))?;

    let covers = enumerate_covers(&graph, opts.k);

    let mut out = std::io::stdout().lock();
    if opts.json {
        serde_json::to_writer(&mut out, &covers)?;
        writeln!(out)?;
    } else if covers.is_empty() {
        writeln!(out, "No vertex cover found of size at most {}", opts.k)?;
    } else {
        writeln!(out, "All possible vertex covers of size at most {}:", opts.k)?;
        for cover in &covers {
            writeln!(out, "[{}]", cover.iter().join(", "))?;
        }
    }

    Ok(())
}
