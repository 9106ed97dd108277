use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use anyhow::Context;
use log::LevelFilter;
use serde::Serialize;
use structopt::StructOpt;
use vctsp::{exact::Budget, log::build_logger_for_verbosity, prelude::*};

/// Decides whether a graph has a vertex cover of at most `k` nodes
#[derive(StructOpt)]
#[structopt(
    name = "vertex_cover",
    setting = structopt::clap::AppSettings::AllowNegativeNumbers
)]
struct Opts {
    /// Graph file: a line `n m` followed by one `u v` line per edge
    #[structopt(parse(from_os_str))]
    graph_file: PathBuf,

    /// Largest admissible cover size; negative values are infeasible
    k: Budget,

    /// Print the result as JSON
    #[structopt(long)]
    json: bool,

    /// Write a Graphviz drawing of the cover to this file
    #[structopt(long, parse(from_os_str))]
    dot: Option<PathBuf>,

    /// Verbose mode (-v, -vv, -vvv)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

#[derive(Serialize)]
struct Decision<'a> {
    k: Budget,
    feasible: bool,
    cover: Option<&'a VertexCover>,
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::from_args();
    build_logger_for_verbosity(LevelFilter::Warn, opts.verbose);

    let graph = EdgeListGraph::try_read_edge_list_file(&opts.graph_file)
        .with_context(|| format!("cannot load {}", opts.graph_file.display()))?;

    let cover = find_cover(&graph, opts.k);

    let mut out = std::io::stdout().lock();
    if opts.json {
        let decision = Decision {
            k: opts.k,
            feasible: cover.is_some(),
            cover: cover.as_ref(),
        };
        serde_json::to_writer(&mut out, &decision)?;
        writeln!(out)?;
    } else if let Some(cover) = &cover {
        writeln!(out, "Yes")?;
        write!(out, "Vertex Cover: ")?;
        cover.write_list(&mut out)?;
        writeln!(out)?;
    } else {
        writeln!(out, "No")?;
    }

    if let (Some(path), Some(cover)) = (&opts.dot, &cover) {
        let mut writer = BufWriter::new(
            File::create(path).with_context(|| format!("cannot create {}", path.display()))?,
        );
        CoverDrawing {
            graph: &graph,
            cover,
        }
        .try_write_dot(&mut writer)?;
        writeln!(writer)?;
    }

    Ok(())
}
