//! Combining transducers.
//!
//! Composition reads in data order: in `compose(f, g)` every value passes
//! through `f` first and `g` second. At the reducer level this means `g`
//! wraps the terminal reducer and `f` wraps the result, so `f` ends up
//! outermost and sees each value first.
//!
//! Three ways to chain stages, all with the same ordering:
//!
//! - [`compose`] / [`TransducerExt::then`] for two statically known stages
//! - the [`compose!`](crate::compose!) macro for any number of them
//! - [`Pipeline`] / [`compose_all`] for a list assembled at runtime

mod macros;
mod pipeline;

pub use pipeline::{compose_all, Pipeline};

use crate::core::{Boxed, Transducer};

/// The transducer that changes nothing: it returns the downstream reducer
/// as-is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Identity;

/// Build an [`Identity`] stage.
pub fn identity() -> Identity {
    Identity
}

impl<R> Transducer<R> for Identity {
    type Reducer = R;

    fn apply(&self, next: R) -> R {
        next
    }
}

/// Two stages run back to back; `first` sees each value before `second`.
#[derive(Clone, Copy, Debug)]
pub struct Compose<F, G> {
    first: F,
    second: G,
}

impl<F, G> Compose<F, G> {
    /// Chain `first` before `second`.
    pub fn new(first: F, second: G) -> Self {
        Self { first, second }
    }

    /// The stage that sees values first.
    pub fn first(&self) -> &F {
        &self.first
    }

    /// The stage that sees values second.
    pub fn second(&self) -> &G {
        &self.second
    }
}

impl<R, F, G> Transducer<R> for Compose<F, G>
where
    G: Transducer<R>,
    F: Transducer<G::Reducer>,
{
    type Reducer = F::Reducer;

    fn apply(&self, next: R) -> F::Reducer {
        self.first.apply(self.second.apply(next))
    }
}

/// Chain `f` and `g` so that values pass through `f` before `g`.
///
/// # Example
///
/// ```rust
/// use foldline::compose::compose;
/// use foldline::reducers::Append;
/// use foldline::transducers::map;
///
/// let xform = compose(map(|x: i32| x + 1), map(|x: i32| x * 2));
/// assert_eq!(foldline::transduce(vec![1, 2, 3], &xform, Append::new()), vec![4, 6, 8]);
/// ```
pub fn compose<F, G>(f: F, g: G) -> Compose<F, G> {
    Compose::new(f, g)
}

/// Fluent combinators available on every transducer.
pub trait TransducerExt: Sized {
    /// `self` first, then `next`. Same as [`compose(self, next)`](compose).
    fn then<G>(self, next: G) -> Compose<Self, G> {
        Compose::new(self, next)
    }

    /// Erase the reducer this stage builds so it fits in a [`Pipeline`].
    fn boxed(self) -> Boxed<Self> {
        Boxed::new(self)
    }
}

impl<X> TransducerExt for X {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::transduce;
    use crate::reducers::Append;
    use crate::transducers::{filter, map, partition, take};

    #[test]
    fn left_stage_sees_values_first() {
        let xform = compose(map(|x: i32| x + 1), map(|x: i32| x * 2));
        assert_eq!(transduce(vec![1, 2, 3], &xform, Append::new()), vec![4, 6, 8]);

        let reversed = compose(map(|x: i32| x * 2), map(|x: i32| x + 1));
        assert_eq!(transduce(vec![1, 2, 3], &reversed, Append::new()), vec![3, 5, 7]);
    }

    #[test]
    fn identity_on_either_side() {
        let double = map(|x: i32| x * 2);
        let expected = transduce(1..=4, &double, Append::new());
        assert_eq!(transduce(1..=4, &compose(identity(), double.clone()), Append::new()), expected);
        assert_eq!(transduce(1..=4, &compose(double.clone(), identity()), Append::new()), expected);
    }

    #[test]
    fn grouping_does_not_matter() {
        let a = map(|x: i32| x + 3);
        let b = filter(|x: &i32| x % 2 == 0);
        let c = map(|x: i32| x * 10);

        let left = compose(compose(a.clone(), b.clone()), c.clone());
        let right = compose(a, compose(b, c));
        assert_eq!(
            transduce(0..10, &left, Append::new()),
            transduce(0..10, &right, Append::new())
        );
    }

    #[test]
    fn then_matches_compose() {
        let chained = take(4).then(partition(2).unwrap());
        assert_eq!(transduce(1..=9, &chained, Append::new()), vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn macro_chains_many_stages() {
        let xform = crate::compose!(
            filter(|x: &i32| *x > 0),
            map(|x: i32| x * 3),
            take(2),
        );
        assert_eq!(transduce(vec![-1, 1, 2, 3], &xform, Append::new()), vec![3, 6]);
    }

    #[test]
    fn empty_macro_is_identity() {
        let xform = crate::compose!();
        assert_eq!(transduce(vec!['x'], &xform, Append::new()), vec!['x']);
    }
}
