//! Grouping stages. Both buffer values and flush whatever is left over
//! when the reduction completes, before completing downstream.

use super::error::BuildError;
use crate::core::{Reducer, Step, Transducer};
use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::sync::Arc;
use tracing::debug;

/// Groups values into `Vec`s of `size`; a shorter final group is emitted
/// at completion.
pub struct Partition<T> {
    size: usize,
    _value: PhantomData<fn(T)>,
}

/// Build a [`Partition`] stage. `size` must be at least 1.
///
/// # Example
///
/// ```rust
/// use foldline::driver::Transducible;
/// use foldline::transducers::partition;
///
/// let out = (1..=5).transduce_to_vec(&partition(2).unwrap());
/// assert_eq!(out, vec![vec![1, 2], vec![3, 4], vec![5]]);
/// ```
pub fn partition<T>(size: usize) -> Result<Partition<T>, BuildError> {
    if size == 0 {
        debug!(size, "rejected partition size");
        return Err(BuildError::InvalidPartitionSize { size });
    }
    Ok(Partition {
        size,
        _value: PhantomData,
    })
}

impl<T> Partition<T> {
    /// Number of values per emitted group.
    pub fn size(&self) -> usize {
        self.size
    }
}

impl<T> Clone for Partition<T> {
    fn clone(&self) -> Self {
        Self {
            size: self.size,
            _value: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Partition<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Partition").field("size", &self.size).finish()
    }
}

impl<R, T> Transducer<R> for Partition<T> {
    type Reducer = PartitionReducer<R, T>;

    fn apply(&self, next: R) -> PartitionReducer<R, T> {
        PartitionReducer {
            next,
            size: self.size,
            buffer: Vec::new(),
        }
    }
}

/// Reducer built by [`Partition`]; holds the group being filled.
pub struct PartitionReducer<R, T> {
    next: R,
    size: usize,
    buffer: Vec<T>,
}

impl<T, R> Reducer<T> for PartitionReducer<R, T>
where
    R: Reducer<Vec<T>>,
{
    type Acc = R::Acc;
    type Output = R::Output;

    delegate!(initial, begin);

    fn step(&mut self, acc: R::Acc, value: T) -> Step<R::Acc> {
        self.buffer.push(value);
        if self.buffer.len() < self.size {
            return Step::Continue(acc);
        }
        let group = mem::take(&mut self.buffer);
        self.next.step(acc, group)
    }

    fn complete(&mut self, acc: R::Acc) -> R::Output {
        let acc = flush(&mut self.next, &mut self.buffer, acc);
        self.next.complete(acc)
    }
}

/// Groups runs of consecutive values whose key is equal.
///
/// A group is emitted as soon as a value with a different key arrives; the
/// last group is emitted at completion.
pub struct PartitionBy<F, T, K> {
    f: Arc<F>,
    _types: PhantomData<fn(T) -> K>,
}

/// Build a [`PartitionBy`] stage.
///
/// # Example
///
/// ```rust
/// use foldline::driver::Transducible;
/// use foldline::transducers::partition_by;
///
/// let runs = vec![1, 3, 2, 4, 5].transduce_to_vec(&partition_by(|x: &i32| x % 2));
/// assert_eq!(runs, vec![vec![1, 3], vec![2, 4], vec![5]]);
/// ```
pub fn partition_by<T, K, F>(f: F) -> PartitionBy<F, T, K>
where
    F: Fn(&T) -> K,
    K: PartialEq,
{
    PartitionBy {
        f: Arc::new(f),
        _types: PhantomData,
    }
}

impl<F, T, K> Clone for PartitionBy<F, T, K> {
    fn clone(&self) -> Self {
        Self {
            f: Arc::clone(&self.f),
            _types: PhantomData,
        }
    }
}

impl<R, F, T, K> Transducer<R> for PartitionBy<F, T, K> {
    type Reducer = PartitionByReducer<R, F, T, K>;

    fn apply(&self, next: R) -> Self::Reducer {
        PartitionByReducer {
            next,
            f: Arc::clone(&self.f),
            buffer: Vec::new(),
            key: None,
        }
    }
}

/// Reducer built by [`PartitionBy`]; holds the current run and its key.
pub struct PartitionByReducer<R, F, T, K> {
    next: R,
    f: Arc<F>,
    buffer: Vec<T>,
    // key of the values currently in `buffer`
    key: Option<K>,
}

impl<T, K, R, F> Reducer<T> for PartitionByReducer<R, F, T, K>
where
    F: Fn(&T) -> K,
    K: PartialEq,
    R: Reducer<Vec<T>>,
{
    type Acc = R::Acc;
    type Output = R::Output;

    delegate!(initial, begin);

    fn step(&mut self, acc: R::Acc, value: T) -> Step<R::Acc> {
        let key = (self.f)(&value);
        let same_run = self.key.as_ref().map_or(true, |current| *current == key);
        self.key = Some(key);

        if same_run || self.buffer.is_empty() {
            self.buffer.push(value);
            return Step::Continue(acc);
        }

        let group = mem::take(&mut self.buffer);
        match self.next.step(acc, group) {
            Step::Continue(acc) => {
                self.buffer.push(value);
                Step::Continue(acc)
            }
            // downstream is done; the new value starts no group
            stop @ Step::Stop(_) => stop,
        }
    }

    fn complete(&mut self, acc: R::Acc) -> R::Output {
        let acc = flush(&mut self.next, &mut self.buffer, acc);
        self.next.complete(acc)
    }
}

fn flush<T, R>(next: &mut R, buffer: &mut Vec<T>, acc: R::Acc) -> R::Acc
where
    R: Reducer<Vec<T>>,
{
    if buffer.is_empty() {
        return acc;
    }
    next.step(acc, mem::take(buffer)).into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::compose;
    use crate::driver::transduce;
    use crate::reducers::{Append, Count};
    use crate::transducers::take;
    use std::cell::Cell;

    #[test]
    fn partial_group_flushed_on_complete() {
        let out = transduce(1..=5, &partition(2).unwrap(), Append::new());
        assert_eq!(out, vec![vec![1, 2], vec![3, 4], vec![5]]);
    }

    #[test]
    fn exact_multiple_has_no_trailing_group() {
        let out = transduce(1..=4, &partition(2).unwrap(), Append::new());
        assert_eq!(out, vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn zero_size_is_rejected() {
        let err = partition::<u8>(0).unwrap_err();
        assert_eq!(err, BuildError::InvalidPartitionSize { size: 0 });
    }

    #[test]
    fn empty_source_flushes_nothing() {
        let groups = transduce(Vec::<i32>::new(), &partition(3).unwrap(), Count::new());
        assert_eq!(groups, 0);
    }

    #[test]
    fn upstream_stop_still_flushes_partial_group() {
        let xform = compose(take(3), partition(2).unwrap());
        let out = transduce(1..=10, &xform, Append::new());
        assert_eq!(out, vec![vec![1, 2], vec![3]]);
    }

    #[test]
    fn partition_by_groups_runs() {
        let words = vec!["apple", "avocado", "banana", "blueberry", "cherry", "apricot"];
        let xform = partition_by(|w: &&str| w.chars().next());
        let out = transduce(words, &xform, Append::new());
        assert_eq!(
            out,
            vec![
                vec!["apple", "avocado"],
                vec!["banana", "blueberry"],
                vec!["cherry"],
                vec!["apricot"],
            ]
        );
    }

    #[test]
    fn partition_by_single_run() {
        let out = transduce(vec![2, 4, 6], &partition_by(|x: &i32| x % 2), Append::new());
        assert_eq!(out, vec![vec![2, 4, 6]]);
    }

    #[test]
    fn downstream_stop_drops_the_new_run() {
        let xform = compose(partition_by(|x: &i32| *x > 2), take(1));
        let out = transduce(vec![1, 2, 3, 4], &xform, Append::new());
        assert_eq!(out, vec![vec![1, 2]]);
    }

    #[test]
    fn huge_size_groups_everything_without_preallocating() {
        let out = transduce(vec![1u64, 2, 3], &partition(usize::MAX).unwrap(), Append::new());
        assert_eq!(out, vec![vec![1, 2, 3]]);
    }

    #[test]
    fn downstream_stop_on_a_full_group_ends_the_run() {
        let pulled = Cell::new(0);
        let source = vec![1, 2, 3].into_iter().inspect(|_| pulled.set(pulled.get() + 1));
        let xform = compose(partition(2).unwrap(), take(1));

        let out = transduce(source, &xform, Append::new());

        assert_eq!(out, vec![vec![1, 2]]);
        assert_eq!(pulled.get(), 2);
    }

    #[test]
    fn flush_reaches_an_unexhausted_take() {
        let xform = compose(partition(2).unwrap(), take(5));
        let out = transduce(vec![1, 2, 3], &xform, Append::new());
        assert_eq!(out, vec![vec![1, 2], vec![3]]);
    }

    #[test]
    fn oversized_take_upstream_keeps_partial_group() {
        let xform = compose(take(10), partition(2).unwrap());
        let out = transduce(1..=5, &xform, Append::new());
        assert_eq!(out, vec![vec![1, 2], vec![3, 4], vec![5]]);
    }
}
