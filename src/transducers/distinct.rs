//! Duplicate suppression: `unique` (global) and `dedupe` (consecutive).

use crate::core::{Reducer, Step, Transducer};
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

/// Drops any value equal to one already seen in this reduction.
///
/// Memory grows with the number of distinct values.
pub struct Unique<T> {
    _value: PhantomData<fn(T)>,
}

/// Build a [`Unique`] stage.
///
/// # Example
///
/// ```rust
/// use foldline::driver::Transducible;
/// use foldline::transducers::unique;
///
/// assert_eq!(vec![1, 1, 2, 2, 1].transduce_to_vec(&unique()), vec![1, 2]);
/// ```
pub fn unique<T>() -> Unique<T>
where
    T: Hash + Eq + Clone,
{
    Unique {
        _value: PhantomData,
    }
}

impl<T> Clone for Unique<T> {
    fn clone(&self) -> Self {
        Self {
            _value: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Unique<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Unique")
    }
}

impl<R, T> Transducer<R> for Unique<T> {
    type Reducer = UniqueReducer<R, T>;

    fn apply(&self, next: R) -> UniqueReducer<R, T> {
        UniqueReducer {
            next,
            seen: HashSet::new(),
        }
    }
}

/// Reducer built by [`Unique`]; remembers every value it has passed on.
pub struct UniqueReducer<R, T> {
    next: R,
    seen: HashSet<T>,
}

impl<T, R> Reducer<T> for UniqueReducer<R, T>
where
    T: Hash + Eq + Clone,
    R: Reducer<T>,
{
    type Acc = R::Acc;
    type Output = R::Output;

    delegate!(initial, begin, complete);

    fn step(&mut self, acc: R::Acc, value: T) -> Step<R::Acc> {
        if self.seen.contains(&value) {
            return Step::Continue(acc);
        }
        self.seen.insert(value.clone());
        self.next.step(acc, value)
    }
}

/// Drops a value when it equals the value emitted just before it.
pub struct Dedupe<T> {
    _value: PhantomData<fn(T)>,
}

/// Build a [`Dedupe`] stage.
///
/// # Example
///
/// ```rust
/// use foldline::driver::Transducible;
/// use foldline::transducers::dedupe;
///
/// assert_eq!(vec![1, 1, 2, 2, 1].transduce_to_vec(&dedupe()), vec![1, 2, 1]);
/// ```
pub fn dedupe<T>() -> Dedupe<T>
where
    T: PartialEq + Clone,
{
    Dedupe {
        _value: PhantomData,
    }
}

impl<T> Clone for Dedupe<T> {
    fn clone(&self) -> Self {
        Self {
            _value: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Dedupe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Dedupe")
    }
}

impl<R, T> Transducer<R> for Dedupe<T> {
    type Reducer = DedupeReducer<R, T>;

    fn apply(&self, next: R) -> DedupeReducer<R, T> {
        DedupeReducer { next, last: None }
    }
}

/// Reducer built by [`Dedupe`]; remembers the last value it passed on.
pub struct DedupeReducer<R, T> {
    next: R,
    last: Option<T>,
}

impl<T, R> Reducer<T> for DedupeReducer<R, T>
where
    T: PartialEq + Clone,
    R: Reducer<T>,
{
    type Acc = R::Acc;
    type Output = R::Output;

    delegate!(initial, begin, complete);

    fn step(&mut self, acc: R::Acc, value: T) -> Step<R::Acc> {
        if self.last.as_ref() == Some(&value) {
            return Step::Continue(acc);
        }
        self.last = Some(value.clone());
        self.next.step(acc, value)
    }
}
