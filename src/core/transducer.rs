//! The `Transducer` trait: one unapplied pipeline stage.

use super::reducer::{BoxedReducer, Reducer};
use std::sync::Arc;

/// Turns a downstream reducer into a reducer that performs one more stage
/// of work before delegating to it.
///
/// A transducer is immutable and reusable. [`apply`](Transducer::apply)
/// takes `&self`, so the same transducer can build any number of reducers,
/// even from several threads at once, and each reducer it builds owns its
/// own counters and buffers. Functions supplied by the caller are shared
/// between applications behind an `Arc`; nothing mutable is.
///
/// The trait is parameterised by the downstream reducer type `R`, the way
/// a middleware layer is parameterised by the service it wraps. This keeps
/// fully composed pipelines statically dispatched.
///
/// # Example
///
/// ```rust
/// use foldline::core::{Reducer, Step, Transducer};
/// use foldline::reducers::Append;
///
/// /// Emits every value twice.
/// struct Twice;
///
/// struct TwiceReducer<R>(R);
///
/// impl<R> Transducer<R> for Twice {
///     type Reducer = TwiceReducer<R>;
///
///     fn apply(&self, next: R) -> TwiceReducer<R> {
///         TwiceReducer(next)
///     }
/// }
///
/// impl<T: Clone, R: Reducer<T>> Reducer<T> for TwiceReducer<R> {
///     type Acc = R::Acc;
///     type Output = R::Output;
///
///     fn initial(&self) -> R::Acc {
///         self.0.initial()
///     }
///
///     fn begin(&mut self, acc: R::Acc) -> Step<R::Acc> {
///         self.0.begin(acc)
///     }
///
///     fn step(&mut self, acc: R::Acc, value: T) -> Step<R::Acc> {
///         match self.0.step(acc, value.clone()) {
///             Step::Continue(acc) => self.0.step(acc, value),
///             stop => stop,
///         }
///     }
///
///     fn complete(&mut self, acc: R::Acc) -> R::Output {
///         self.0.complete(acc)
///     }
/// }
///
/// let doubled = foldline::transduce(vec![1, 2], &Twice, Append::new());
/// assert_eq!(doubled, vec![1, 1, 2, 2]);
/// ```
pub trait Transducer<R> {
    /// Reducer produced by wrapping `R`.
    type Reducer;

    /// Build a fresh reducer that delegates to `next`.
    fn apply(&self, next: R) -> Self::Reducer;
}

impl<R, X> Transducer<R> for &X
where
    X: Transducer<R> + ?Sized,
{
    type Reducer = X::Reducer;

    fn apply(&self, next: R) -> Self::Reducer {
        (**self).apply(next)
    }
}

impl<R, X> Transducer<R> for Box<X>
where
    X: Transducer<R> + ?Sized,
{
    type Reducer = X::Reducer;

    fn apply(&self, next: R) -> Self::Reducer {
        (**self).apply(next)
    }
}

impl<R, X> Transducer<R> for Arc<X>
where
    X: Transducer<R> + ?Sized,
{
    type Reducer = X::Reducer;

    fn apply(&self, next: R) -> Self::Reducer {
        (**self).apply(next)
    }
}

/// A shape-preserving stage usable in a runtime-built [`Pipeline`].
///
/// [`Pipeline`]: crate::compose::Pipeline
pub type Stage<R> = Box<dyn Transducer<R, Reducer = R> + Send + Sync>;

/// Adapter that erases the reducer a transducer builds.
///
/// Produced by [`TransducerExt::boxed`](crate::compose::TransducerExt::boxed).
/// The boxed form is what lets differently-typed stages share one
/// [`Stage`] list.
#[derive(Clone, Debug)]
pub struct Boxed<X> {
    inner: X,
}

impl<X> Boxed<X> {
    /// Wrap `inner` so the reducers it builds are boxed.
    pub fn new(inner: X) -> Self {
        Self { inner }
    }

    /// Unwrap the underlying transducer.
    pub fn into_inner(self) -> X {
        self.inner
    }
}

impl<'a, X, T, A, O> Transducer<BoxedReducer<'a, T, A, O>> for Boxed<X>
where
    X: Transducer<BoxedReducer<'a, T, A, O>>,
    X::Reducer: Reducer<T, Acc = A, Output = O> + 'a,
{
    type Reducer = BoxedReducer<'a, T, A, O>;

    fn apply(&self, next: BoxedReducer<'a, T, A, O>) -> Self::Reducer {
        Box::new(self.inner.apply(next))
    }
}

/// Erase a concrete reducer into a [`BoxedReducer`].
pub fn boxed_reducer<'a, T, R>(reducer: R) -> BoxedReducer<'a, T, R::Acc, R::Output>
where
    R: Reducer<T> + 'a,
{
    Box::new(reducer)
}
