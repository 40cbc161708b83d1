//! Table-driven substitution.

use crate::core::{Reducer, Step, Transducer};
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

struct Replacements<T> {
    table: HashMap<T, T>,
    default: Option<T>,
}

/// Swaps values found as keys in a table for their mapped value.
///
/// Values missing from the table become the default when one was given,
/// and otherwise pass through unchanged.
pub struct Replace<T> {
    replacements: Arc<Replacements<T>>,
}

/// Build a [`Replace`] stage that leaves unknown values alone.
///
/// # Example
///
/// ```rust
/// use foldline::driver::Transducible;
/// use foldline::transducers::replace;
/// use std::collections::HashMap;
///
/// let table = HashMap::from([("a", "1")]);
/// let out = vec!["a", "b", "c"].transduce_to_vec(&replace(table));
/// assert_eq!(out, vec!["1", "b", "c"]);
/// ```
pub fn replace<T>(table: HashMap<T, T>) -> Replace<T>
where
    T: Hash + Eq + Clone,
{
    Replace {
        replacements: Arc::new(Replacements {
            table,
            default: None,
        }),
    }
}

/// Build a [`Replace`] stage that maps unknown values to `default`.
///
/// # Example
///
/// ```rust
/// use foldline::driver::Transducible;
/// use foldline::transducers::replace_with_default;
/// use std::collections::HashMap;
///
/// let table = HashMap::from([("a", "1")]);
/// let out = vec!["a", "b", "c"].transduce_to_vec(&replace_with_default(table, "0"));
/// assert_eq!(out, vec!["1", "0", "0"]);
/// ```
pub fn replace_with_default<T>(table: HashMap<T, T>, default: T) -> Replace<T>
where
    T: Hash + Eq + Clone,
{
    Replace {
        replacements: Arc::new(Replacements {
            table,
            default: Some(default),
        }),
    }
}

impl<T> Clone for Replace<T> {
    fn clone(&self) -> Self {
        Self {
            replacements: Arc::clone(&self.replacements),
        }
    }
}

impl<R, T> Transducer<R> for Replace<T> {
    type Reducer = ReplaceReducer<R, T>;

    fn apply(&self, next: R) -> Self::Reducer {
        ReplaceReducer {
            next,
            replacements: Arc::clone(&self.replacements),
        }
    }
}

/// Reducer built by [`Replace`].
pub struct ReplaceReducer<R, T> {
    next: R,
    replacements: Arc<Replacements<T>>,
}

impl<T, R> Reducer<T> for ReplaceReducer<R, T>
where
    T: Hash + Eq + Clone,
    R: Reducer<T>,
{
    type Acc = R::Acc;
    type Output = R::Output;

    delegate!(initial, begin, complete);

    fn step(&mut self, acc: R::Acc, value: T) -> Step<R::Acc> {
        let out = match self.replacements.table.get(&value) {
            Some(replacement) => replacement.clone(),
            None => match &self.replacements.default {
                Some(default) => default.clone(),
                None => value,
            },
        };
        self.next.step(acc, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::transduce;
    use crate::reducers::Append;

    #[test]
    fn replaces_known_keys_only() {
        let table = HashMap::from([(1, 100), (3, 300)]);
        let out = transduce(1..=4, &replace(table), Append::new());
        assert_eq!(out, vec![100, 2, 300, 4]);
    }

    #[test]
    fn default_applies_to_unknown_keys() {
        let table = HashMap::from([(String::from("a"), String::from("1"))]);
        let source = vec!["a", "b", "c"].into_iter().map(String::from);
        let out = transduce(
            source,
            &replace_with_default(table, String::from("0")),
            Append::new(),
        );
        assert_eq!(out, vec!["1", "0", "0"]);
    }

    #[test]
    fn empty_table_without_default_is_identity() {
        let out = transduce(vec![5, 6], &replace(HashMap::new()), Append::new());
        assert_eq!(out, vec![5, 6]);
    }
}
