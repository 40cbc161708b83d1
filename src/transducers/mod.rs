//! The transducer catalog.
//!
//! Stateless stages (`map`, `filter`, `remove`, `keep`, `filter_map`,
//! `replace`, `cat`, `mapcat`) carry nothing between steps. Stateful stages
//! (`take`, `take_while`, `take_nth`, `drop`, `drop_while`, `keep_indexed`,
//! `unique`, `dedupe`, `windowed`, `partition`, `partition_by`) keep their
//! counters and buffers inside the reducer they build, so every application
//! starts from scratch.
//!
//! Constructors whose parameters can be invalid return
//! `Result<_, BuildError>`.

/// Expands to reducer methods that forward straight to `self.next`.
macro_rules! delegate {
    (initial) => {
        fn initial(&self) -> Self::Acc {
            self.next.initial()
        }
    };
    (begin) => {
        fn begin(&mut self, acc: Self::Acc) -> $crate::core::Step<Self::Acc> {
            self.next.begin(acc)
        }
    };
    (complete) => {
        fn complete(&mut self, acc: Self::Acc) -> Self::Output {
            self.next.complete(acc)
        }
    };
    ($($hook:ident),+) => {
        $(delegate!($hook);)+
    };
}

mod cat;
mod distinct;
mod error;
mod filter;
mod map;
mod partition;
mod replace;
mod skip;
mod take;
mod window;

pub use cat::{cat, mapcat, Cat, CatReducer, Nested, NestedIter};
pub use distinct::{dedupe, unique, Dedupe, DedupeReducer, Unique, UniqueReducer};
pub use error::BuildError;
pub use filter::{filter, remove, Filter, FilterReducer};
pub use map::{
    filter_map, keep, keep_indexed, map, FilterMap, FilterMapReducer, Keep, KeepIndexed,
    KeepIndexedReducer, KeepReducer, Map, MapReducer,
};
pub use partition::{
    partition, partition_by, Partition, PartitionBy, PartitionByReducer, PartitionReducer,
};
pub use replace::{replace, replace_with_default, Replace, ReplaceReducer};
pub use skip::{drop, drop_while, DropFirst, DropFirstReducer, DropWhile, DropWhileReducer};
pub use take::{
    take, take_nth, take_while, Take, TakeNth, TakeNthReducer, TakeReducer, TakeWhile,
    TakeWhileReducer,
};
pub use window::{windowed, Windowed, WindowedReducer};
