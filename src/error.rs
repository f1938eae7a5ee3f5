//! Error type shared by the fallible operations of the collection.
//!
//! Most algorithms here cannot fail on well-formed input. The few that can
//! (reshaping, fixed-capacity containers, modular inverses, graph algorithms
//! that reject cycles) report through [`AlgoError`].

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgoError {
    #[error("cannot reshape {len} elements into {rows}x{cols}")]
    ShapeMismatch { rows: usize, cols: usize, len: usize },

    #[error("container is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    #[error("{value} has no inverse modulo {modulus}")]
    NotInvertible { value: i64, modulus: i64 },

    #[error("graph contains a negative-weight cycle")]
    NegativeCycle,

    #[error("graph contains a cycle")]
    CycleDetected,

    #[error("vertex {vertex} is out of range for a graph of order {order}")]
    VertexOutOfRange { vertex: usize, order: usize },

    #[error("invalid expression: {0}")]
    InvalidExpression(String),
}

pub type Result<T> = std::result::Result<T, AlgoError>;
