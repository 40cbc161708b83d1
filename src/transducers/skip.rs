//! Stages that discard a prefix: `drop` and `drop_while`.

use crate::core::{Reducer, Step, Transducer};
use std::sync::Arc;

/// Discards the first `n` values and passes on the rest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DropFirst {
    n: usize,
}

/// Build a [`DropFirst`] stage.
///
/// # Example
///
/// ```rust
/// use foldline::driver::Transducible;
/// use foldline::transducers::drop;
///
/// assert_eq!(vec![1, 2, 3, 4].transduce_to_vec(&drop(2)), vec![3, 4]);
/// ```
pub fn drop(n: usize) -> DropFirst {
    DropFirst { n }
}

impl<R> Transducer<R> for DropFirst {
    type Reducer = DropFirstReducer<R>;

    fn apply(&self, next: R) -> DropFirstReducer<R> {
        DropFirstReducer {
            next,
            remaining: self.n,
        }
    }
}

/// Reducer built by [`DropFirst`].
pub struct DropFirstReducer<R> {
    next: R,
    remaining: usize,
}

impl<T, R> Reducer<T> for DropFirstReducer<R>
where
    R: Reducer<T>,
{
    type Acc = R::Acc;
    type Output = R::Output;

    delegate!(initial, begin, complete);

    fn step(&mut self, acc: R::Acc, value: T) -> Step<R::Acc> {
        if self.remaining > 0 {
            self.remaining -= 1;
            Step::Continue(acc)
        } else {
            self.next.step(acc, value)
        }
    }
}

/// Discards values while the predicate holds. From the first failing value
/// on, everything is passed on and the predicate is not called again.
pub struct DropWhile<P> {
    pred: Arc<P>,
}

/// Build a [`DropWhile`] stage.
pub fn drop_while<T, P>(pred: P) -> DropWhile<P>
where
    P: Fn(&T) -> bool,
{
    DropWhile {
        pred: Arc::new(pred),
    }
}

impl<P> Clone for DropWhile<P> {
    fn clone(&self) -> Self {
        Self {
            pred: Arc::clone(&self.pred),
        }
    }
}

impl<R, P> Transducer<R> for DropWhile<P> {
    type Reducer = DropWhileReducer<R, P>;

    fn apply(&self, next: R) -> Self::Reducer {
        DropWhileReducer {
            next,
            pred: Arc::clone(&self.pred),
            dropping: true,
        }
    }
}

/// Reducer built by [`DropWhile`].
pub struct DropWhileReducer<R, P> {
    next: R,
    pred: Arc<P>,
    dropping: bool,
}

impl<T, R, P> Reducer<T> for DropWhileReducer<R, P>
where
    P: Fn(&T) -> bool,
    R: Reducer<T>,
{
    type Acc = R::Acc;
    type Output = R::Output;

    delegate!(initial, begin, complete);

    fn step(&mut self, acc: R::Acc, value: T) -> Step<R::Acc> {
        if self.dropping {
            if (self.pred)(&value) {
                return Step::Continue(acc);
            }
            self.dropping = false;
        }
        self.next.step(acc, value)
    }
}
