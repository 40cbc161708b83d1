//! Collecting reducers: append, last value, count.

use crate::core::{Reducer, Step};

/// Appends every value to a `Vec`.
///
/// The accumulator is a growable buffer owned by the reduction; `complete`
/// hands it over by value, so the caller's result never aliases any
/// intermediate state.
///
/// # Example
///
/// ```rust
/// use foldline::reducers::Append;
/// use foldline::transducers::map;
///
/// let out = foldline::transduce(1..=3, &map(|x: i32| x * x), Append::new());
/// assert_eq!(out, vec![1, 4, 9]);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Append;

impl Append {
    pub fn new() -> Self {
        Append
    }
}

impl<T> Reducer<T> for Append {
    type Acc = Vec<T>;
    type Output = Vec<T>;

    fn initial(&self) -> Vec<T> {
        Vec::new()
    }

    fn step(&mut self, mut acc: Vec<T>, value: T) -> Step<Vec<T>> {
        acc.push(value);
        Step::Continue(acc)
    }

    fn complete(&mut self, acc: Vec<T>) -> Vec<T> {
        acc
    }
}

/// Keeps only the most recent value; `None` for an empty reduction.
#[derive(Clone, Copy, Debug, Default)]
pub struct Last;

impl Last {
    pub fn new() -> Self {
        Last
    }
}

impl<T> Reducer<T> for Last {
    type Acc = Option<T>;
    type Output = Option<T>;

    fn initial(&self) -> Option<T> {
        None
    }

    fn step(&mut self, _acc: Option<T>, value: T) -> Step<Option<T>> {
        Step::Continue(Some(value))
    }

    fn complete(&mut self, acc: Option<T>) -> Option<T> {
        acc
    }
}

/// Counts the values that reach it.
#[derive(Clone, Copy, Debug, Default)]
pub struct Count;

impl Count {
    pub fn new() -> Self {
        Count
    }
}

impl<T> Reducer<T> for Count {
    type Acc = usize;
    type Output = usize;

    fn initial(&self) -> usize {
        0
    }

    fn step(&mut self, acc: usize, _value: T) -> Step<usize> {
        Step::Continue(acc + 1)
    }

    fn complete(&mut self, acc: usize) -> usize {
        acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::{reduce, reduce_with};

    #[test]
    fn append_collects_in_order() {
        assert_eq!(reduce(vec!['a', 'b', 'c'], Append::new()), vec!['a', 'b', 'c']);
    }

    #[test]
    fn append_extends_supplied_initial() {
        let out = reduce_with(vec![3, 4], Append::new(), vec![1, 2]);
        assert_eq!(out, vec![1, 2, 3, 4]);
    }

    #[test]
    fn append_initial_is_not_shared() {
        let first = reduce(vec![1], Append::new());
        let second: Vec<i32> = reduce(Vec::<i32>::new(), Append::new());
        assert_eq!(first, vec![1]);
        assert!(second.is_empty());
    }

    #[test]
    fn last_keeps_final_value() {
        assert_eq!(reduce(vec![5, 6, 7], Last::new()), Some(7));
        assert_eq!(reduce(Vec::<u8>::new(), Last::new()), None);
    }

    #[test]
    fn count_counts_values() {
        assert_eq!(reduce("hello".chars(), Count::new()), 5);
    }
}
