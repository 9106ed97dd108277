//! Exact vertex cover: the bounded search, an enumeration of all covers found by branching,
//! and a brute force solver for small graphs.

pub mod branch_and_bound;
pub mod enumerate;
pub mod naive;

pub use branch_and_bound::*;
pub use enumerate::enumerate_covers;
