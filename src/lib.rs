//! Foldline: composable transducers and reducers
//!
//! Foldline separates *what happens to each value* from *where values come
//! from* and *where they end up*. A transformation is written once as a
//! transducer and can then be driven over any source into any sink.
//!
//! # Core Concepts
//!
//! - **Reducer**: an accumulation process with `initial`, `step` and
//!   `complete`, see [`Reducer`]
//! - **Step**: the `Continue`/`Stop` result of a step; `Stop` ends the
//!   reduction without reading the rest of the source
//! - **Transducer**: wraps a downstream reducer into one that does one more
//!   stage of work, see [`Transducer`]
//! - **Driver**: the loop that pulls from a source and pushes through the
//!   chain, see [`transduce`] and [`reduce`]
//!
//! Transducers are immutable and reusable. All per-run state lives in the
//! reducers they build, so one pipeline can be applied any number of times,
//! including from several threads at once.
//!
//! # Example
//!
//! ```rust
//! use foldline::compose::TransducerExt;
//! use foldline::reducers::Append;
//! use foldline::transducers::{filter, map, partition, take};
//!
//! let xform = filter(|n: &u32| n % 3 != 0)
//!     .then(map(|n: u32| n * 10))
//!     .then(take(5))
//!     .then(partition(2)?);
//!
//! let groups = foldline::transduce(1.., &xform, Append::new());
//! assert_eq!(groups, vec![vec![10, 20], vec![40, 50], vec![70]]);
//! # Ok::<(), foldline::BuildError>(())
//! ```

pub mod compose;
pub mod core;
pub mod driver;
pub mod reducers;
pub mod transducers;

// Re-export commonly used types
pub use crate::compose::{compose, compose_all, identity, Pipeline, TransducerExt};
pub use crate::core::{boxed_reducer, BoxedReducer, Reducer, Step, Transducer};
pub use driver::{
    reduce, reduce_with, transduce, transduce_with, try_reduce, try_transduce, Transducible,
};
pub use transducers::BuildError;
