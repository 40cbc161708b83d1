//! Terminal reducers.
//!
//! A terminal reducer sits at the end of a chain and owns the final
//! accumulation strategy. None of them delegate anywhere, and none of them
//! ever stop a reduction on their own.

mod collect;
mod fold;
mod join;

pub use collect::{Append, Count, Last};
pub use fold::{fold, Fold};
pub use join::Join;
