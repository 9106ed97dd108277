use std::{io::Write, time::Instant};

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Installs a logger printing `[LEVEL elapsed-ms] message` to stderr. `level` is the
/// default filter; `RUST_LOG` takes precedence if set.
///
/// Calling the function more than once is harmless; only the first logger is installed.
pub fn build_logger_for_level(level: LevelFilter) {
    let start = Instant::now();

    let _ = Builder::from_env(Env::default().default_filter_or(level.as_str()))
        .format(move |buf, record| {
            writeln!(
                buf,
                "[{:<5} {:>8}ms] {}",
                record.level(),
                start.elapsed().as_millis(),
                record.args()
            )
        })
        .try_init();
}

/// As [`build_logger_for_level`], raising `default_level` by one step per `verbosity`
pub fn build_logger_for_verbosity(default_level: LevelFilter, verbosity: usize) {
    let levels = LevelFilter::iter().collect::<Vec<_>>();
    let index = levels
        .iter()
        .position(|&l| l == default_level)
        .map_or(levels.len() - 1, |i| (i + verbosity).min(levels.len() - 1));

    build_logger_for_level(levels[index]);
}
