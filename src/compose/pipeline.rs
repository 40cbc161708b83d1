//! Pipelines assembled at runtime.

use crate::core::{Stage, Transducer};
use std::fmt;

/// An ordered list of type-erased stages that acts as one transducer.
///
/// Every stage must keep the value type, so a pipeline is built over a
/// boxed reducer (see [`BoxedReducer`](crate::core::BoxedReducer)) and
/// each stage is erased with [`TransducerExt::boxed`](super::TransducerExt::boxed).
/// The first stage added sees each value first. An empty pipeline is the
/// identity.
///
/// # Example
///
/// ```rust
/// use foldline::compose::{Pipeline, TransducerExt};
/// use foldline::core::{boxed_reducer, BoxedReducer, Transducer};
/// use foldline::reducers::Append;
/// use foldline::transducers::{filter, map};
///
/// type Sink = BoxedReducer<'static, i32, Vec<i32>, Vec<i32>>;
///
/// let evens_only = true;
/// let mut pipeline: Pipeline<Sink> = Pipeline::new();
/// pipeline.push(map(|x: i32| x + 1).boxed());
/// if evens_only {
///     pipeline.push(filter(|x: &i32| x % 2 == 0).boxed());
/// }
///
/// let out = foldline::reduce(1..=5, pipeline.apply(boxed_reducer(Append::new())));
/// assert_eq!(out, vec![2, 4, 6]);
/// ```
pub struct Pipeline<R> {
    stages: Vec<Stage<R>>,
}

impl<R> Pipeline<R> {
    /// An empty pipeline, which behaves as the identity.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Append a stage, builder style.
    pub fn then<X>(mut self, stage: X) -> Self
    where
        X: Transducer<R, Reducer = R> + Send + Sync + 'static,
    {
        self.push(stage);
        self
    }

    /// Append a stage in place.
    pub fn push<X>(&mut self, stage: X)
    where
        X: Transducer<R, Reducer = R> + Send + Sync + 'static,
    {
        self.stages.push(Box::new(stage));
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether the pipeline has no stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl<R> Default for Pipeline<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for Pipeline<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stages.len())
            .finish()
    }
}

impl<R> Transducer<R> for Pipeline<R> {
    type Reducer = R;

    fn apply(&self, next: R) -> R {
        self.stages
            .iter()
            .rev()
            .fold(next, |reducer, stage| stage.apply(reducer))
    }
}

/// Collect stages into a [`Pipeline`]; the first stage sees values first.
pub fn compose_all<R, I>(stages: I) -> Pipeline<R>
where
    I: IntoIterator<Item = Stage<R>>,
{
    Pipeline {
        stages: stages.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::TransducerExt;
    use crate::core::{boxed_reducer, BoxedReducer};
    use crate::driver::reduce;
    use crate::reducers::Append;
    use crate::transducers::{dedupe, map, take};

    type Sink = BoxedReducer<'static, i32, Vec<i32>, Vec<i32>>;

    fn run(pipeline: &Pipeline<Sink>, source: Vec<i32>) -> Vec<i32> {
        reduce(source, pipeline.apply(boxed_reducer(Append::new())))
    }

    #[test]
    fn empty_pipeline_is_identity() {
        let pipeline: Pipeline<Sink> = Pipeline::new();
        assert!(pipeline.is_empty());
        assert_eq!(run(&pipeline, vec![3, 1, 2]), vec![3, 1, 2]);
    }

    #[test]
    fn stages_run_in_insertion_order() {
        let pipeline: Pipeline<Sink> = Pipeline::new()
            .then(map(|x: i32| x + 1).boxed())
            .then(map(|x: i32| x * 2).boxed());
        assert_eq!(pipeline.len(), 2);
        assert_eq!(run(&pipeline, vec![1, 2, 3]), vec![4, 6, 8]);
    }

    #[test]
    fn compose_all_from_a_list() {
        let stages: Vec<Stage<Sink>> = vec![
            Box::new(dedupe::<i32>().boxed()),
            Box::new(take(2).boxed()),
        ];
        let pipeline = compose_all(stages);
        assert_eq!(run(&pipeline, vec![5, 5, 6, 7]), vec![5, 6]);
    }

    #[test]
    fn pipeline_is_reusable() {
        let pipeline: Pipeline<Sink> = Pipeline::new().then(take(1).boxed());
        assert_eq!(run(&pipeline, vec![1, 2]), vec![1]);
        assert_eq!(run(&pipeline, vec![9, 8]), vec![9]);
    }
}
