//! Error type for the fallible, runtime-checked corners of the crate.
//!
//! Most misuse (bad lane indices in const generics, unsupported arities,
//! integer division) is a compile error. What remains are indices and byte
//! buffers that only exist at runtime.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TupleError {
    #[error("lane index {index} is out of range for a tuple of {arity} lanes")]
    LaneOutOfRange { index: usize, arity: usize },

    #[error("shuffle position {position} selects lane {index}, but the tuple has {arity} lanes")]
    ShuffleOutOfRange {
        position: usize,
        index: usize,
        arity: usize,
    },

    #[error("expected {expected} bytes for the tuple data, got {actual}")]
    ByteLength { expected: usize, actual: usize },

    #[error("unknown register width `{0}` (expected scalar, b16, b32 or b64)")]
    UnknownWidth(String),
}

pub type Result<T> = std::result::Result<T, TupleError>;
