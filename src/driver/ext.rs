//! Method-call sugar over the free-standing drivers.

use crate::core::{Reducer, Transducer};
use crate::reducers::Append;

/// Drive any `IntoIterator` through a transducer with method syntax.
///
/// # Example
///
/// ```rust
/// use foldline::driver::Transducible;
/// use foldline::transducers::{dedupe, map};
/// use foldline::compose::TransducerExt;
///
/// let xform = dedupe().then(map(|c: char| c.to_ascii_uppercase()));
/// let out: Vec<char> = "aabbba".chars().transduce_to_vec(&xform);
/// assert_eq!(out, vec!['A', 'B', 'A']);
/// ```
pub trait Transducible: IntoIterator + Sized {
    /// Transduce into an arbitrary terminal reducer.
    fn transduce<X, R>(self, xform: &X, reducer: R) -> <X::Reducer as Reducer<Self::Item>>::Output
    where
        X: Transducer<R> + ?Sized,
        X::Reducer: Reducer<Self::Item>,
    {
        super::transduce(self, xform, reducer)
    }

    /// Transduce and collect every emitted value into a new `Vec`.
    fn transduce_to_vec<X, U>(self, xform: &X) -> Vec<U>
    where
        X: Transducer<Append> + ?Sized,
        X::Reducer: Reducer<Self::Item, Output = Vec<U>>,
    {
        super::transduce(self, xform, Append::new())
    }
}

impl<I: IntoIterator> Transducible for I {}
