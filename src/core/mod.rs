//! Core reduction types.
//!
//! This module contains the contracts everything else is built on:
//! - `Step`, the explicit continue/stop result of feeding one value
//! - the `Reducer` trait, which owns all per-reduction state
//! - the `Transducer` trait, which builds reducers and owns none
//!
//! Transducers are pure values. State only comes into existence when a
//! transducer is applied, and it dies with the reducer after `complete`.

mod reducer;
mod step;
mod transducer;

pub use reducer::{BoxedReducer, Reducer};
pub use step::Step;
pub use transducer::{boxed_reducer, Boxed, Stage, Transducer};
