//! Value-mapping stages: `map`, `keep`, `keep_indexed`, `filter_map`.

use crate::core::{Reducer, Step, Transducer};
use std::marker::PhantomData;
use std::sync::Arc;

/// Replaces each value with `f(value)`.
pub struct Map<F> {
    f: Arc<F>,
}

/// Build a [`Map`] stage.
///
/// # Example
///
/// ```rust
/// use foldline::driver::Transducible;
/// use foldline::transducers::map;
///
/// let out = vec![1, 2, 3].transduce_to_vec(&map(|x: i32| x.to_string()));
/// assert_eq!(out, vec!["1", "2", "3"]);
/// ```
pub fn map<T, U, F>(f: F) -> Map<F>
where
    F: Fn(T) -> U,
{
    Map { f: Arc::new(f) }
}

impl<F> Clone for Map<F> {
    fn clone(&self) -> Self {
        Self {
            f: Arc::clone(&self.f),
        }
    }
}

impl<R, F> Transducer<R> for Map<F> {
    type Reducer = MapReducer<R, F>;

    fn apply(&self, next: R) -> MapReducer<R, F> {
        MapReducer {
            next,
            f: Arc::clone(&self.f),
        }
    }
}

/// Reducer built by [`Map`].
pub struct MapReducer<R, F> {
    next: R,
    f: Arc<F>,
}

impl<T, U, R, F> Reducer<T> for MapReducer<R, F>
where
    F: Fn(T) -> U,
    R: Reducer<U>,
{
    type Acc = R::Acc;
    type Output = R::Output;

    delegate!(initial, begin, complete);

    fn step(&mut self, acc: R::Acc, value: T) -> Step<R::Acc> {
        self.next.step(acc, (self.f)(value))
    }
}

/// Passes on the original value when `f` returns `Some`.
///
/// What `f` returns is only inspected, never emitted. Use [`filter_map`]
/// to emit the mapped value instead.
pub struct Keep<F, U> {
    f: Arc<F>,
    _out: PhantomData<fn() -> U>,
}

/// Build a [`Keep`] stage.
///
/// # Example
///
/// ```rust
/// use foldline::driver::Transducible;
/// use foldline::transducers::keep;
///
/// let words = vec!["10", "ten", "7"];
/// let numeric = words.transduce_to_vec(&keep(|s: &&str| s.parse::<u32>().ok()));
/// assert_eq!(numeric, vec!["10", "7"]);
/// ```
pub fn keep<T, U, F>(f: F) -> Keep<F, U>
where
    F: Fn(&T) -> Option<U>,
{
    Keep {
        f: Arc::new(f),
        _out: PhantomData,
    }
}

impl<F, U> Clone for Keep<F, U> {
    fn clone(&self) -> Self {
        Self {
            f: Arc::clone(&self.f),
            _out: PhantomData,
        }
    }
}

impl<R, F, U> Transducer<R> for Keep<F, U> {
    type Reducer = KeepReducer<R, F, U>;

    fn apply(&self, next: R) -> Self::Reducer {
        KeepReducer {
            next,
            f: Arc::clone(&self.f),
            _out: PhantomData,
        }
    }
}

/// Reducer built by [`Keep`].
pub struct KeepReducer<R, F, U> {
    next: R,
    f: Arc<F>,
    _out: PhantomData<fn() -> U>,
}

impl<T, U, R, F> Reducer<T> for KeepReducer<R, F, U>
where
    F: Fn(&T) -> Option<U>,
    R: Reducer<T>,
{
    type Acc = R::Acc;
    type Output = R::Output;

    delegate!(initial, begin, complete);

    fn step(&mut self, acc: R::Acc, value: T) -> Step<R::Acc> {
        if (self.f)(&value).is_some() {
            self.next.step(acc, value)
        } else {
            Step::Continue(acc)
        }
    }
}

/// Like [`Keep`], but `f` also receives the zero-based position of the
/// value among those this stage has seen.
pub struct KeepIndexed<F, U> {
    f: Arc<F>,
    _out: PhantomData<fn() -> U>,
}

/// Build a [`KeepIndexed`] stage.
pub fn keep_indexed<T, U, F>(f: F) -> KeepIndexed<F, U>
where
    F: Fn(usize, &T) -> Option<U>,
{
    KeepIndexed {
        f: Arc::new(f),
        _out: PhantomData,
    }
}

impl<F, U> Clone for KeepIndexed<F, U> {
    fn clone(&self) -> Self {
        Self {
            f: Arc::clone(&self.f),
            _out: PhantomData,
        }
    }
}

impl<R, F, U> Transducer<R> for KeepIndexed<F, U> {
    type Reducer = KeepIndexedReducer<R, F, U>;

    fn apply(&self, next: R) -> Self::Reducer {
        KeepIndexedReducer {
            next,
            f: Arc::clone(&self.f),
            index: 0,
            _out: PhantomData,
        }
    }
}

/// Reducer built by [`KeepIndexed`]; counts the values it has seen.
pub struct KeepIndexedReducer<R, F, U> {
    next: R,
    f: Arc<F>,
    index: usize,
    _out: PhantomData<fn() -> U>,
}

impl<T, U, R, F> Reducer<T> for KeepIndexedReducer<R, F, U>
where
    F: Fn(usize, &T) -> Option<U>,
    R: Reducer<T>,
{
    type Acc = R::Acc;
    type Output = R::Output;

    delegate!(initial, begin, complete);

    fn step(&mut self, acc: R::Acc, value: T) -> Step<R::Acc> {
        let index = self.index;
        self.index += 1;
        if (self.f)(index, &value).is_some() {
            self.next.step(acc, value)
        } else {
            Step::Continue(acc)
        }
    }
}

/// Emits `u` for every value where `f(value)` is `Some(u)`; drops the rest.
pub struct FilterMap<F> {
    f: Arc<F>,
}

/// Build a [`FilterMap`] stage.
pub fn filter_map<T, U, F>(f: F) -> FilterMap<F>
where
    F: Fn(T) -> Option<U>,
{
    FilterMap { f: Arc::new(f) }
}

impl<F> Clone for FilterMap<F> {
    fn clone(&self) -> Self {
        Self {
            f: Arc::clone(&self.f),
        }
    }
}

impl<R, F> Transducer<R> for FilterMap<F> {
    type Reducer = FilterMapReducer<R, F>;

    fn apply(&self, next: R) -> Self::Reducer {
        FilterMapReducer {
            next,
            f: Arc::clone(&self.f),
        }
    }
}

/// Reducer built by [`FilterMap`].
pub struct FilterMapReducer<R, F> {
    next: R,
    f: Arc<F>,
}

impl<T, U, R, F> Reducer<T> for FilterMapReducer<R, F>
where
    F: Fn(T) -> Option<U>,
    R: Reducer<U>,
{
    type Acc = R::Acc;
    type Output = R::Output;

    delegate!(initial, begin, complete);

    fn step(&mut self, acc: R::Acc, value: T) -> Step<R::Acc> {
        match (self.f)(value) {
            Some(mapped) => self.next.step(acc, mapped),
            None => Step::Continue(acc),
        }
    }
}
