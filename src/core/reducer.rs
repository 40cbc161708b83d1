//! The `Reducer` trait: the stateful unit that executes one reduction.

use super::step::Step;

/// Consumes values one at a time, threading an accumulator through.
///
/// A reducer lives for exactly one reduction. The driver obtains a starting
/// accumulator (from the caller or [`initial`](Reducer::initial)), calls
/// [`begin`](Reducer::begin) once, then [`step`](Reducer::step) once per
/// source value until the source is exhausted or a step returns
/// [`Step::Stop`], and finally [`complete`](Reducer::complete) exactly once.
///
/// Reducers built by a transducer delegate to the reducer they wrap. A
/// delegating reducer that receives `Stop` from its delegate must return
/// `Stop` itself, and its `complete` must end by completing the delegate.
///
/// # Example
///
/// ```rust
/// use foldline::core::{Reducer, Step};
///
/// /// Sums values until the total passes a limit.
/// struct SumUntil(i64);
///
/// impl Reducer<i64> for SumUntil {
///     type Acc = i64;
///     type Output = i64;
///
///     fn initial(&self) -> i64 {
///         0
///     }
///
///     fn step(&mut self, acc: i64, value: i64) -> Step<i64> {
///         let total = acc + value;
///         if total > self.0 {
///             Step::Stop(total)
///         } else {
///             Step::Continue(total)
///         }
///     }
///
///     fn complete(&mut self, acc: i64) -> i64 {
///         acc
///     }
/// }
///
/// let total = foldline::reduce(1..=100, SumUntil(10));
/// assert_eq!(total, 15);
/// ```
pub trait Reducer<T> {
    /// Accumulator threaded through every step.
    type Acc;

    /// Public result produced by [`complete`](Reducer::complete).
    type Output;

    /// Produce a fresh starting accumulator.
    ///
    /// Called by the driver only when the caller did not supply one. Must
    /// build a new value each time; never hand out shared mutable state.
    fn initial(&self) -> Self::Acc;

    /// Pre-flight check, invoked once before the first value is pulled.
    ///
    /// Returning `Stop` ends the reduction without touching the source.
    fn begin(&mut self, acc: Self::Acc) -> Step<Self::Acc> {
        Step::Continue(acc)
    }

    /// Fold one value into the accumulator.
    fn step(&mut self, acc: Self::Acc, value: T) -> Step<Self::Acc>;

    /// Flush pending state and convert the accumulator into the result.
    fn complete(&mut self, acc: Self::Acc) -> Self::Output;
}

/// Type-erased reducer with a fixed value, accumulator and output type.
pub type BoxedReducer<'a, T, A, O> = Box<dyn Reducer<T, Acc = A, Output = O> + 'a>;

impl<T, R> Reducer<T> for Box<R>
where
    R: Reducer<T> + ?Sized,
{
    type Acc = R::Acc;
    type Output = R::Output;

    fn initial(&self) -> Self::Acc {
        (**self).initial()
    }

    fn begin(&mut self, acc: Self::Acc) -> Step<Self::Acc> {
        (**self).begin(acc)
    }

    fn step(&mut self, acc: Self::Acc, value: T) -> Step<Self::Acc> {
        (**self).step(acc, value)
    }

    fn complete(&mut self, acc: Self::Acc) -> Self::Output {
        (**self).complete(acc)
    }
}
