//! The result of feeding one value to a reducer.
//!
//! A reduction ends either because the source ran dry or because some
//! reducer in the chain asked to stop. `Step` makes that second case an
//! explicit variant instead of a wrapper object that has to be remembered
//! and unwrapped at runtime.

use serde::{Deserialize, Serialize};

/// Outcome of a single reducer step.
///
/// `Continue` hands the accumulator back to the driver for the next value.
/// `Stop` hands back the final accumulator and tells the driver not to pull
/// any further values from the source.
///
/// # Example
///
/// ```rust
/// use foldline::core::Step;
///
/// let done = Step::reduced(42);
/// assert!(done.is_stop());
/// assert_eq!(done.into_inner(), 42);
///
/// let more = Step::Continue(1);
/// assert!(!more.is_stop());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step<A> {
    /// Keep reducing with this accumulator.
    Continue(A),

    /// Halt; this accumulator is final.
    Stop(A),
}

impl<A> Step<A> {
    /// Wrap an accumulator as the final value of a reduction.
    pub fn reduced(acc: A) -> Self {
        Step::Stop(acc)
    }

    /// Whether this step asks the driver to halt.
    pub fn is_stop(&self) -> bool {
        matches!(self, Step::Stop(_))
    }

    /// Unwrap the accumulator regardless of variant.
    pub fn into_inner(self) -> A {
        match self {
            Step::Continue(acc) | Step::Stop(acc) => acc,
        }
    }

    /// Borrow the accumulator regardless of variant.
    pub fn as_inner(&self) -> &A {
        match self {
            Step::Continue(acc) | Step::Stop(acc) => acc,
        }
    }

    /// Transform the accumulator, keeping the variant.
    pub fn map<B, F>(self, f: F) -> Step<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Step::Continue(acc) => Step::Continue(f(acc)),
            Step::Stop(acc) => Step::Stop(f(acc)),
        }
    }

    /// Force the `Stop` variant, keeping the accumulator.
    ///
    /// Used by stages that decide to halt after delegating a value.
    pub fn stop(self) -> Self {
        Step::Stop(self.into_inner())
    }
}
