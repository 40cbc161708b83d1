//! Construction errors for stateful transducers.

use thiserror::Error;

/// Invalid parameters passed to a transducer constructor.
///
/// Parameters are checked when the transducer is built, never in the
/// middle of a reduction.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Window length must be at least 1 (got {length})")]
    InvalidWindowLength { length: usize },

    #[error("Partition size must be at least 1 (got {size})")]
    InvalidPartitionSize { size: usize },

    #[error("take_nth step must be at least 1 (got {step})")]
    InvalidTakeNthStep { step: usize },
}
