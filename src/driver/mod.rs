//! Drivers that run a reducer chain over a source.
//!
//! The driver is the only place values are pulled. It pulls one value,
//! pushes it through the chain, and inspects the returned [`Step`]. A
//! `Stop` ends the loop immediately, so the rest of the source is never
//! touched. Whatever ended the loop, `complete` runs exactly once.
//!
//! A source is anything implementing `IntoIterator`; it is consumed
//! front-to-back, once.

mod ext;

pub use ext::Transducible;

use crate::core::{Reducer, Step, Transducer};
use tracing::{debug, trace};

/// Reduce `source` with `reducer`, starting from `reducer.initial()`.
///
/// # Example
///
/// ```rust
/// use foldline::reducers::fold;
///
/// let longest = foldline::reduce(vec!["ab", "abcd", "a"], fold(0, |acc: usize, s: &str| acc.max(s.len())));
/// assert_eq!(longest, 4);
/// ```
pub fn reduce<I, R>(source: I, reducer: R) -> R::Output
where
    I: IntoIterator,
    R: Reducer<I::Item>,
{
    let initial = reducer.initial();
    reduce_with(source, reducer, initial)
}

/// Reduce `source` with `reducer`, starting from an explicit accumulator.
pub fn reduce_with<I, R>(source: I, mut reducer: R, initial: R::Acc) -> R::Output
where
    I: IntoIterator,
    R: Reducer<I::Item>,
{
    trace!("reduction started");

    let mut acc = match reducer.begin(initial) {
        Step::Continue(acc) => acc,
        Step::Stop(acc) => {
            debug!(pulled = 0usize, "reduction stopped before reading the source");
            return reducer.complete(acc);
        }
    };

    let mut pulled = 0usize;
    for value in source {
        pulled += 1;
        match reducer.step(acc, value) {
            Step::Continue(next) => acc = next,
            Step::Stop(last) => {
                debug!(pulled, "reduction stopped early");
                return reducer.complete(last);
            }
        }
    }

    trace!(pulled, "source exhausted");
    reducer.complete(acc)
}

/// Apply `xform` to `reducer` and reduce `source` through the result.
///
/// # Example
///
/// ```rust
/// use foldline::compose::compose;
/// use foldline::reducers::Append;
/// use foldline::transducers::{filter, map};
///
/// let xform = compose(filter(|x: &i32| x % 2 == 1), map(|x: i32| x * 100));
/// let out = foldline::transduce(1..=5, &xform, Append::new());
/// assert_eq!(out, vec![100, 300, 500]);
/// ```
pub fn transduce<I, X, R>(
    source: I,
    xform: &X,
    reducer: R,
) -> <X::Reducer as Reducer<I::Item>>::Output
where
    I: IntoIterator,
    X: Transducer<R> + ?Sized,
    X::Reducer: Reducer<I::Item>,
{
    reduce(source, xform.apply(reducer))
}

/// Like [`transduce`] but with an explicit starting accumulator.
pub fn transduce_with<I, X, R>(
    source: I,
    xform: &X,
    reducer: R,
    initial: <X::Reducer as Reducer<I::Item>>::Acc,
) -> <X::Reducer as Reducer<I::Item>>::Output
where
    I: IntoIterator,
    X: Transducer<R> + ?Sized,
    X::Reducer: Reducer<I::Item>,
{
    reduce_with(source, xform.apply(reducer), initial)
}

/// Reduce a fallible source.
///
/// The first `Err` aborts the reduction and is returned as-is; `complete`
/// is not called in that case, so no partial result escapes.
pub fn try_reduce<I, T, E, R>(source: I, mut reducer: R) -> Result<R::Output, E>
where
    I: IntoIterator<Item = Result<T, E>>,
    R: Reducer<T>,
{
    trace!("fallible reduction started");

    let initial = reducer.initial();
    let mut acc = match reducer.begin(initial) {
        Step::Continue(acc) => acc,
        Step::Stop(acc) => {
            debug!(pulled = 0usize, "reduction stopped before reading the source");
            return Ok(reducer.complete(acc));
        }
    };

    let mut pulled = 0usize;
    for item in source {
        pulled += 1;
        let value = match item {
            Ok(value) => value,
            Err(err) => {
                debug!(pulled, "reduction aborted by source error");
                return Err(err);
            }
        };
        match reducer.step(acc, value) {
            Step::Continue(next) => acc = next,
            Step::Stop(last) => {
                debug!(pulled, "reduction stopped early");
                return Ok(reducer.complete(last));
            }
        }
    }

    trace!(pulled, "source exhausted");
    Ok(reducer.complete(acc))
}

/// Transduce a fallible source; see [`try_reduce`].
pub fn try_transduce<I, T, E, X, R>(
    source: I,
    xform: &X,
    reducer: R,
) -> Result<<X::Reducer as Reducer<T>>::Output, E>
where
    I: IntoIterator<Item = Result<T, E>>,
    X: Transducer<R> + ?Sized,
    X::Reducer: Reducer<T>,
{
    try_reduce(source, xform.apply(reducer))
}
