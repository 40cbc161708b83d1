/// Compose any number of transducers, first argument first in data order.
///
/// `compose!()` is [`identity`](crate::compose::identity), `compose!(a)` is
/// `a`, and `compose!(a, b, c)` is `compose(a, compose(b, c))`.
///
/// # Example
///
/// ```rust
/// use foldline::compose;
/// use foldline::driver::Transducible;
/// use foldline::transducers::{dedupe, map, take};
///
/// let xform = compose!(dedupe(), map(|x: u32| x * 2), take(3));
/// assert_eq!(vec![1, 1, 2, 3, 3, 4].transduce_to_vec(&xform), vec![2, 4, 6]);
/// ```
#[macro_export]
macro_rules! compose {
    () => {
        $crate::compose::identity()
    };
    ($only:expr $(,)?) => {
        $only
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::compose::compose($first, $crate::compose!($($rest),+))
    };
}
