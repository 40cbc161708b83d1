//! Predicate stages: `filter` and its complement `remove`.

use crate::core::{Reducer, Step, Transducer};
use std::sync::Arc;

/// Passes on values for which the predicate holds.
pub struct Filter<P> {
    pred: Arc<P>,
}

/// Build a [`Filter`] stage.
///
/// # Example
///
/// ```rust
/// use foldline::driver::Transducible;
/// use foldline::transducers::filter;
///
/// let out = vec![1, 10, 15, 20].transduce_to_vec(&filter(|x: &i32| (10..=15).contains(x)));
/// assert_eq!(out, vec![10, 15]);
/// ```
pub fn filter<T, P>(pred: P) -> Filter<P>
where
    P: Fn(&T) -> bool,
{
    Filter {
        pred: Arc::new(pred),
    }
}

/// Drops values for which the predicate holds.
///
/// Defined as `filter` over the negated predicate, so the two can never
/// disagree about a value.
pub fn remove<T, P>(pred: P) -> Filter<impl Fn(&T) -> bool>
where
    P: Fn(&T) -> bool,
{
    filter(move |value: &T| !pred(value))
}

impl<P> Clone for Filter<P> {
    fn clone(&self) -> Self {
        Self {
            pred: Arc::clone(&self.pred),
        }
    }
}

impl<R, P> Transducer<R> for Filter<P> {
    type Reducer = FilterReducer<R, P>;

    fn apply(&self, next: R) -> Self::Reducer {
        FilterReducer {
            next,
            pred: Arc::clone(&self.pred),
        }
    }
}

/// Reducer built by [`Filter`].
pub struct FilterReducer<R, P> {
    next: R,
    pred: Arc<P>,
}

impl<T, R, P> Reducer<T> for FilterReducer<R, P>
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
            Step::Continue(acc)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::transduce;
    use crate::reducers::Append;

    #[test]
    fn filter_keeps_matching_values() {
        let out = transduce(1..=6, &filter(|x: &i32| x % 3 == 0), Append::new());
        assert_eq!(out, vec![3, 6]);
    }

    #[test]
    fn remove_drops_matching_values() {
        let out = transduce(1..=6, &remove(|x: &i32| x % 3 == 0), Append::new());
        assert_eq!(out, vec![1, 2, 4, 5]);
    }

    #[test]
    fn filter_and_remove_partition_the_input() {
        let is_upper = |c: &char| c.is_uppercase();
        let kept = transduce("aBcDe".chars(), &filter(is_upper), Append::new());
        let removed = transduce("aBcDe".chars(), &remove(is_upper), Append::new());
        assert_eq!(kept.len() + removed.len(), 5);
        assert_eq!(kept, vec!['B', 'D']);
        assert_eq!(removed, vec!['a', 'c', 'e']);
    }
}
