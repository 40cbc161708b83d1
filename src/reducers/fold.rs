//! Closure-backed reducer.

use crate::core::{Reducer, Step};

/// Folds values with a plain two-argument function.
///
/// This is the closest thing to a bare `(acc, value) -> acc` reducer: the
/// seed is cloned for every reduction that asks for an initial value, and
/// completion returns the accumulator unchanged.
///
/// # Example
///
/// ```rust
/// use foldline::reducers::fold;
///
/// let sum = foldline::reduce(1..=4, fold(0, |acc, x: i32| acc + x));
/// assert_eq!(sum, 10);
/// ```
#[derive(Clone, Debug)]
pub struct Fold<A, F> {
    seed: A,
    f: F,
}

/// Build a [`Fold`] reducer from a seed and a step function.
pub fn fold<T, A, F>(seed: A, f: F) -> Fold<A, F>
where
    A: Clone,
    F: FnMut(A, T) -> A,
{
    Fold { seed, f }
}

impl<T, A, F> Reducer<T> for Fold<A, F>
where
    A: Clone,
    F: FnMut(A, T) -> A,
{
    type Acc = A;
    type Output = A;

    fn initial(&self) -> A {
        self.seed.clone()
    }

    fn step(&mut self, acc: A, value: T) -> Step<A> {
        Step::Continue((self.f)(acc, value))
    }

    fn complete(&mut self, acc: A) -> A {
        acc
    }
}
