//! Sliding windows: `windowed`.

use super::error::BuildError;
use crate::core::{Reducer, Step, Transducer};
use std::collections::VecDeque;
use std::fmt;
use std::marker::PhantomData;
use tracing::debug;

/// Emits, for every incoming value, the last `length` values as a `Vec`.
///
/// Until `length` values have arrived the window is padded by repeating the
/// first value, so a full-length window comes out of the very first step.
/// Each emitted `Vec` is a fresh copy that shares nothing with the buffer.
pub struct Windowed<T> {
    length: usize,
    _value: PhantomData<fn(T)>,
}

/// Build a [`Windowed`] stage. `length` must be at least 1.
///
/// # Example
///
/// ```rust
/// use foldline::driver::Transducible;
/// use foldline::transducers::windowed;
///
/// let out = vec![1, 2, 3].transduce_to_vec(&windowed(2).unwrap());
/// assert_eq!(out, vec![vec![1, 1], vec![1, 2], vec![2, 3]]);
/// ```
pub fn windowed<T: Clone>(length: usize) -> Result<Windowed<T>, BuildError> {
    if length == 0 {
        debug!(length, "rejected window length");
        return Err(BuildError::InvalidWindowLength { length });
    }
    Ok(Windowed {
        length,
        _value: PhantomData,
    })
}

impl<T> Windowed<T> {
    /// Number of values in every emitted window.
    pub fn length(&self) -> usize {
        self.length
    }
}

impl<T> Clone for Windowed<T> {
    fn clone(&self) -> Self {
        Self {
            length: self.length,
            _value: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Windowed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Windowed")
            .field("length", &self.length)
            .finish()
    }
}

impl<R, T> Transducer<R> for Windowed<T> {
    type Reducer = WindowedReducer<R, T>;

    fn apply(&self, next: R) -> WindowedReducer<R, T> {
        WindowedReducer {
            next,
            length: self.length,
            window: VecDeque::new(),
        }
    }
}

/// Reducer built by [`Windowed`]; owns the sliding buffer.
pub struct WindowedReducer<R, T> {
    next: R,
    length: usize,
    window: VecDeque<T>,
}

impl<T, R> Reducer<T> for WindowedReducer<R, T>
where
    T: Clone,
    R: Reducer<Vec<T>>,
{
    type Acc = R::Acc;
    type Output = R::Output;

    delegate!(initial, begin, complete);

    fn step(&mut self, acc: R::Acc, value: T) -> Step<R::Acc> {
        if self.window.is_empty() {
            self.window.extend(std::iter::repeat(value).take(self.length));
        } else {
            self.window.pop_front();
            self.window.push_back(value);
        }
        let snapshot: Vec<T> = self.window.iter().cloned().collect();
        self.next.step(acc, snapshot)
    }
}
