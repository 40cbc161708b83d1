//! Integration tests for driving pipelines end to end.

use foldline::compose::{compose, Pipeline, TransducerExt};
use foldline::core::{boxed_reducer, BoxedReducer, Reducer, Step, Transducer};
use foldline::reducers::{fold, Append, Join};
use foldline::transducers::{
    cat, keep_indexed, map, partition_by, replace_with_default, take, windowed, Nested,
};
use foldline::{transduce, try_transduce, Transducible};
use std::cell::Cell;
use std::collections::HashMap;
use std::sync::Arc;
use std::thread;

/// Collects values and counts how many times `complete` ran.
struct Probe<'a> {
    completed: &'a Cell<usize>,
}

impl Reducer<i32> for Probe<'_> {
    type Acc = Vec<i32>;
    type Output = Vec<i32>;

    fn initial(&self) -> Vec<i32> {
        Vec::new()
    }

    fn step(&mut self, mut acc: Vec<i32>, value: i32) -> Step<Vec<i32>> {
        acc.push(value);
        Step::Continue(acc)
    }

    fn complete(&mut self, acc: Vec<i32>) -> Vec<i32> {
        self.completed.set(self.completed.get() + 1);
        acc
    }
}

#[test]
fn take_zero_never_pulls() {
    let pulled = Cell::new(0);
    let completed = Cell::new(0);
    let source = (0..).inspect(|_| pulled.set(pulled.get() + 1));

    let out = transduce(source, &take(0), Probe { completed: &completed });

    assert!(out.is_empty());
    assert_eq!(pulled.get(), 0);
    assert_eq!(completed.get(), 1);
}

#[test]
fn take_two_halts_before_third_value() {
    let pulled = Cell::new(0);
    let completed = Cell::new(0);
    let source = vec![1, 2, 3, 4]
        .into_iter()
        .inspect(|_| pulled.set(pulled.get() + 1));

    let out = transduce(source, &take(2), Probe { completed: &completed });

    assert_eq!(out, vec![1, 2]);
    assert_eq!(pulled.get(), 2);
    assert_eq!(completed.get(), 1);
}

#[test]
fn completion_flushes_buffered_group_once() {
    let completed = Cell::new(0);
    let sink = Probe { completed: &completed };
    let xform = compose(
        partition_by(|x: &i32| *x / 10),
        map(|group: Vec<i32>| group.iter().sum::<i32>()),
    );

    let out = transduce(vec![1, 2, 11, 12, 13, 25], &xform, sink);

    assert_eq!(out, vec![3, 36, 25]);
    assert_eq!(completed.get(), 1);
}

#[test]
fn mixed_nesting_flattens_one_level() {
    let source = vec![
        Nested::One("a"),
        Nested::Many(vec!["b", "c"]),
        Nested::One("d"),
    ];
    let joined = source.transduce(&cat(), Join::with_separator(","));
    assert_eq!(joined, "a,b,c,d");
}

#[test]
fn replace_and_index_compose() {
    let table = HashMap::from([("red", "stop"), ("green", "go")]);
    let xform = replace_with_default(table, "wait")
        .then(keep_indexed(|i: usize, _: &&str| (i % 2 == 0).then_some(())));
    let out = vec!["red", "amber", "green", "blue"].transduce_to_vec(&xform);
    assert_eq!(out, vec!["stop", "go"]);
}

#[test]
fn fallible_source_aborts_on_first_error() {
    let lines = vec!["1", "2", "x", "4"];
    let parsed = lines.into_iter().map(|s| s.parse::<i32>());
    let result = try_transduce(parsed, &map(|n: i32| n * 2), Append::new());
    assert!(result.is_err());
}

#[test]
fn one_transducer_many_threads() {
    let xform = Arc::new(map(|x: u64| x * x).then(take(100)).then(triples()));

    let handles: Vec<_> = (0..4u64)
        .map(|offset| {
            let xform = Arc::clone(&xform);
            thread::spawn(move || transduce(offset.., &*xform, Append::new()))
        })
        .collect();

    let results: Vec<Vec<Vec<u64>>> = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .collect();

    for (offset, windows) in results.iter().enumerate() {
        let offset = offset as u64;
        assert_eq!(windows.len(), 100);
        assert_eq!(windows[0], vec![offset * offset; 3]);
        let last = offset + 99;
        assert_eq!(windows[99][2], last * last);
    }
}

fn triples() -> foldline::transducers::Windowed<u64> {
    windowed(3).unwrap()
}

#[test]
fn runtime_pipeline_shared_across_threads() {
    type Sink = BoxedReducer<'static, i32, i32, i32>;

    let pipeline: Arc<Pipeline<Sink>> = Arc::new(
        Pipeline::new()
            .then(map(|x: i32| x - 1).boxed())
            .then(take(3).boxed()),
    );

    let handles: Vec<_> = (0..3)
        .map(|_| {
            let pipeline = Arc::clone(&pipeline);
            thread::spawn(move || {
                let sink = boxed_reducer(fold(0, |acc: i32, x: i32| acc + x));
                foldline::reduce(1..=10, pipeline.apply(sink))
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 3);
    }
}
