pub mod errors;
pub mod exact;
pub mod graph;
pub mod heuristic;
pub mod io;
pub mod log;
pub mod tour;
pub mod utils;

pub mod prelude {
    pub use super::errors::InvariantCheck;
    pub use super::exact::*;
    pub use super::graph::*;
    pub use super::heuristic::*;
    pub use super::io::*;
    pub use super::tour::*;
    pub use super::utils::*;
}

#[cfg(test)]
mod testing;
