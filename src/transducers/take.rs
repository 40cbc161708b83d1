//! Stages that end a reduction early: `take`, `take_while`, plus
//! `take_nth`, which only thins the input.

use super::error::BuildError;
use crate::core::{Reducer, Step, Transducer};
use std::sync::Arc;
use tracing::debug;

/// Passes on the first `n` values, then stops the reduction.
///
/// The stop is signalled together with the `n`th value, so the driver never
/// pulls value `n + 1`. With `n == 0` the reduction stops before the source
/// is read at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Take {
    n: usize,
}

/// Build a [`Take`] stage.
///
/// # Example
///
/// ```rust
/// use foldline::driver::Transducible;
/// use foldline::transducers::take;
///
/// assert_eq!((1..).transduce_to_vec(&take(3)), vec![1, 2, 3]);
/// ```
pub fn take(n: usize) -> Take {
    Take { n }
}

impl<R> Transducer<R> for Take {
    type Reducer = TakeReducer<R>;

    fn apply(&self, next: R) -> TakeReducer<R> {
        TakeReducer {
            next,
            remaining: self.n,
        }
    }
}

/// Reducer built by [`Take`]; counts down the values still allowed.
pub struct TakeReducer<R> {
    next: R,
    remaining: usize,
}

impl<T, R> Reducer<T> for TakeReducer<R>
where
    R: Reducer<T>,
{
    type Acc = R::Acc;
    type Output = R::Output;

    delegate!(initial, complete);

    fn begin(&mut self, acc: R::Acc) -> Step<R::Acc> {
        if self.remaining == 0 {
            Step::Stop(acc)
        } else {
            self.next.begin(acc)
        }
    }

    fn step(&mut self, acc: R::Acc, value: T) -> Step<R::Acc> {
        if self.remaining == 0 {
            return Step::Stop(acc);
        }
        self.remaining -= 1;
        let step = self.next.step(acc, value);
        if self.remaining == 0 {
            step.stop()
        } else {
            step
        }
    }
}

/// Passes on values while the predicate holds; the first failing value is
/// dropped and stops the reduction.
pub struct TakeWhile<P> {
    pred: Arc<P>,
}

/// Build a [`TakeWhile`] stage.
pub fn take_while<T, P>(pred: P) -> TakeWhile<P>
where
    P: Fn(&T) -> bool,
{
    TakeWhile {
        pred: Arc::new(pred),
    }
}

impl<P> Clone for TakeWhile<P> {
    fn clone(&self) -> Self {
        Self {
            pred: Arc::clone(&self.pred),
        }
    }
}

impl<R, P> Transducer<R> for TakeWhile<P> {
    type Reducer = TakeWhileReducer<R, P>;

    fn apply(&self, next: R) -> Self::Reducer {
        TakeWhileReducer {
            next,
            pred: Arc::clone(&self.pred),
        }
    }
}

/// Reducer built by [`TakeWhile`].
pub struct TakeWhileReducer<R, P> {
    next: R,
    pred: Arc<P>,
}

impl<T, R, P> Reducer<T> for TakeWhileReducer<R, P>
where
    P: Fn(&T) -> bool,
    R: Reducer<T>,
{
    type Acc = R::Acc;
    type Output = R::Output;

    delegate!(initial, begin, complete);

    fn step(&mut self, acc: R::Acc, value: T) -> Step<R::Acc> {
        if (self.pred)(&value) {
            self.next.step(acc, value)
        } else {
            Step::Stop(acc)
        }
    }
}

/// Passes on every `step`th value, starting with the first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TakeNth {
    step: usize,
}

/// Build a [`TakeNth`] stage. `step` must be at least 1.
///
/// # Example
///
/// ```rust
/// use foldline::driver::Transducible;
/// use foldline::transducers::take_nth;
///
/// let xform = take_nth(3).unwrap();
/// assert_eq!((0..10).transduce_to_vec(&xform), vec![0, 3, 6, 9]);
/// assert!(take_nth(0).is_err());
/// ```
pub fn take_nth(step: usize) -> Result<TakeNth, BuildError> {
    if step == 0 {
        debug!(step, "rejected take_nth step");
        return Err(BuildError::InvalidTakeNthStep { step });
    }
    Ok(TakeNth { step })
}

impl<R> Transducer<R> for TakeNth {
    type Reducer = TakeNthReducer<R>;

    fn apply(&self, next: R) -> TakeNthReducer<R> {
        TakeNthReducer {
            next,
            step: self.step,
            phase: 0,
        }
    }
}

/// Reducer built by [`TakeNth`].
pub struct TakeNthReducer<R> {
    next: R,
    step: usize,
    // position modulo `step`
    phase: usize,
}

impl<T, R> Reducer<T> for TakeNthReducer<R>
where
    R: Reducer<T>,
{
    type Acc = R::Acc;
    type Output = R::Output;

    delegate!(initial, begin, complete);

    fn step(&mut self, acc: R::Acc, value: T) -> Step<R::Acc> {
        let emit = self.phase == 0;
        self.phase = (self.phase + 1) % self.step;
        if emit {
            self.next.step(acc, value)
        } else {
            Step::Continue(acc)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::{reduce, transduce};
    use crate::reducers::Append;
    use std::cell::Cell;

    #[test]
    fn take_two_of_four() {
        assert_eq!(transduce(vec![1, 2, 3, 4], &take(2), Append::new()), vec![1, 2]);
    }

    #[test]
    fn take_more_than_available() {
        assert_eq!(transduce(vec![1, 2], &take(5), Append::new()), vec![1, 2]);
    }

    #[test]
    fn take_signals_stop_with_last_value() {
        let mut reducer = take(1).apply(Append::new());
        let acc = Reducer::<i32>::initial(&reducer);
        let step = Reducer::<i32>::step(&mut reducer, acc, 9);
        assert_eq!(step, Step::Stop(vec![9]));
    }

    #[test]
    fn take_zero_never_steps_delegate() {
        let stepped = Cell::new(false);
        let sink = crate::reducers::fold((), |_, _x: i32| stepped.set(true));
        reduce(vec![1, 2, 3], take(0).apply(sink));
        assert!(!stepped.get());
    }

    #[test]
    fn take_while_drops_first_failure() {
        let out = transduce(
            vec![1, 2, 10, 3],
            &take_while(|x: &i32| *x < 5),
            Append::new(),
        );
        assert_eq!(out, vec![1, 2]);
    }

    #[test]
    fn take_while_stops_pulling() {
        let pulled = Cell::new(0);
        let source = (1..=100).inspect(|_| pulled.set(pulled.get() + 1));
        let _ = transduce(source, &take_while(|x: &i32| *x < 3), Append::new());
        assert_eq!(pulled.get(), 3);
    }

    #[test]
    fn take_nth_starts_with_first() {
        let xform = take_nth(2).unwrap();
        assert_eq!(transduce(1..=5, &xform, Append::new()), vec![1, 3, 5]);
    }

    #[test]
    fn take_nth_one_is_identity() {
        let xform = take_nth(1).unwrap();
        assert_eq!(transduce(1..=3, &xform, Append::new()), vec![1, 2, 3]);
    }

    #[test]
    fn take_nth_rejects_zero() {
        assert_eq!(take_nth(0), Err(BuildError::InvalidTakeNthStep { step: 0 }));
    }

    #[test]
    fn take_is_reusable() {
        let xform = take(2);
        assert_eq!(transduce(1..=9, &xform, Append::new()), vec![1, 2]);
        assert_eq!(transduce(5..=9, &xform, Append::new()), vec![5, 6]);
    }

    #[test]
    fn exhausted_take_never_delegates_again() {
        let mut reducer = take(1).apply(Append::new());
        let acc = Reducer::<i32>::initial(&reducer);
        let acc = Reducer::<i32>::step(&mut reducer, acc, 1).into_inner();
        let step = Reducer::<i32>::step(&mut reducer, acc, 2);
        assert_eq!(step, Step::Stop(vec![1]));
    }
}
