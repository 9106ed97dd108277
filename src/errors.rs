use std::error::Error;
use thiserror::Error;

use crate::graph::{Edge, Node};

/// Trait for checking invariants in datastructures
pub trait InvariantCheck<E: Error> {
    fn is_correct(&self) -> Result<(), E>;
}

/// Failures while turning text into graphs
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("cannot read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
}

impl ReadError {
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        ReadError::Parse {
            line,
            message: message.into(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoverError {
    #[error("edge {0:?} has no endpoint in the cover")]
    UncoveredEdge(Edge),

    #[error("node {0} is not a node of the graph")]
    NodeOutOfRange(Node),

    #[error("node {0} appears more than once")]
    Duplicate(Node),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TourError {
    #[error("tour visits {actual} nodes, but the graph has {expected}")]
    WrongLength { expected: usize, actual: usize },

    #[error("node {0} is visited more than once")]
    Duplicate(Node),

    #[error("node {0} is not a node of the graph")]
    NodeOutOfRange(Node),
}
