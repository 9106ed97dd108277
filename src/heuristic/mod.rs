//! Polynomial-time vertex cover heuristics.

pub mod approx_cover;

pub use approx_cover::approximate_cover;
