//! Flattening: `cat` and `mapcat`.

use super::map::{map, Map};
use crate::compose::{compose, Compose};
use crate::core::{Reducer, Step, Transducer};
use serde::{Deserialize, Serialize};

/// Splices each value's elements into the output, one level deep.
///
/// Any `IntoIterator` value works: a `Vec` contributes its elements, an
/// `Option` contributes zero or one. For inputs that mix single values and
/// sequences, use [`Nested`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Cat;

/// Build a [`Cat`] stage.
///
/// # Example
///
/// ```rust
/// use foldline::driver::Transducible;
/// use foldline::transducers::{cat, Nested};
///
/// let out = vec![Nested::One(1), Nested::Many(vec![2, 3]), Nested::One(4)]
///     .transduce_to_vec(&cat());
/// assert_eq!(out, vec![1, 2, 3, 4]);
/// ```
pub fn cat() -> Cat {
    Cat
}

/// `map(f)` followed by `cat()`.
///
/// # Example
///
/// ```rust
/// use foldline::driver::Transducible;
/// use foldline::transducers::mapcat;
///
/// let split = mapcat(|s: &str| s.split(' ').map(String::from).collect::<Vec<_>>());
/// let out = vec!["a b", "c"].transduce_to_vec(&split);
/// assert_eq!(out, vec!["a", "b", "c"]);
/// ```
pub fn mapcat<T, U, F>(f: F) -> Compose<Map<F>, Cat>
where
    F: Fn(T) -> U,
    U: IntoIterator,
{
    compose(map(f), cat())
}

impl<R> Transducer<R> for Cat {
    type Reducer = CatReducer<R>;

    fn apply(&self, next: R) -> CatReducer<R> {
        CatReducer { next }
    }
}

/// Reducer built by [`Cat`].
pub struct CatReducer<R> {
    next: R,
}

impl<V, R> Reducer<V> for CatReducer<R>
where
    V: IntoIterator,
    R: Reducer<V::Item>,
{
    type Acc = R::Acc;
    type Output = R::Output;

    delegate!(initial, begin, complete);

    fn step(&mut self, mut acc: R::Acc, value: V) -> Step<R::Acc> {
        for item in value {
            match self.next.step(acc, item) {
                Step::Continue(next) => acc = next,
                stop @ Step::Stop(_) => return stop,
            }
        }
        Step::Continue(acc)
    }
}

/// A value that is either a single element or a sequence of them.
///
/// Iterating a `Nested` yields the element itself or each element of the
/// sequence, which is exactly what [`cat`] needs to pass singles through
/// unchanged and splice sequences.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Nested<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> From<Vec<T>> for Nested<T> {
    fn from(values: Vec<T>) -> Self {
        Nested::Many(values)
    }
}

impl<T> IntoIterator for Nested<T> {
    type Item = T;
    type IntoIter = NestedIter<T>;

    fn into_iter(self) -> NestedIter<T> {
        match self {
            Nested::One(value) => NestedIter::One(Some(value)),
            Nested::Many(values) => NestedIter::Many(values.into_iter()),
        }
    }
}

/// Iterator over the elements of a [`Nested`].
#[derive(Debug)]
pub enum NestedIter<T> {
    One(Option<T>),
    Many(std::vec::IntoIter<T>),
}

impl<T> Iterator for NestedIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match self {
            NestedIter::One(slot) => slot.take(),
            NestedIter::Many(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            NestedIter::One(slot) => {
                let n = usize::from(slot.is_some());
                (n, Some(n))
            }
            NestedIter::Many(iter) => iter.size_hint(),
        }
    }
}
