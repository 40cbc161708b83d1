//! String-joining reducer.

use crate::core::{Reducer, Step};

/// Concatenates string values, optionally separated.
///
/// The accumulator is a `String`. A supplied initial string is treated as a
/// prefix: the separator is only placed between values, never before the
/// first one.
///
/// # Example
///
/// ```rust
/// use foldline::reducers::Join;
///
/// let csv = foldline::reduce(vec!["a", "b", "c"], Join::with_separator(","));
/// assert_eq!(csv, "a,b,c");
///
/// let glued = foldline::reduce(vec!["a", "b"], Join::new());
/// assert_eq!(glued, "ab");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Join {
    separator: Option<String>,
    joined_any: bool,
}

impl Join {
    /// Join with no separator.
    pub fn new() -> Self {
        Self {
            separator: None,
            joined_any: false,
        }
    }

    /// Join with `separator` between consecutive values.
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            separator: Some(separator.into()),
            joined_any: false,
        }
    }
}

impl<T> Reducer<T> for Join
where
    T: AsRef<str>,
{
    type Acc = String;
    type Output = String;

    fn initial(&self) -> String {
        String::new()
    }

    fn step(&mut self, mut acc: String, value: T) -> Step<String> {
        if self.joined_any {
            if let Some(sep) = &self.separator {
                acc.push_str(sep);
            }
        }
        acc.push_str(value.as_ref());
        self.joined_any = true;
        Step::Continue(acc)
    }

    fn complete(&mut self, acc: String) -> String {
        self.joined_any = false;
        acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::{reduce, reduce_with};

    #[test]
    fn separator_only_between_values() {
        let out = reduce(vec!["x"], Join::with_separator(", "));
        assert_eq!(out, "x");
    }

    #[test]
    fn empty_first_value_still_separated() {
        let out = reduce(vec!["", "a"], Join::with_separator("-"));
        assert_eq!(out, "-a");
    }

    #[test]
    fn initial_string_is_a_prefix() {
        let out = reduce_with(
            vec![String::from("b"), String::from("c")],
            Join::with_separator("/"),
            String::from("a:"),
        );
        assert_eq!(out, "a:b/c");
    }

    #[test]
    fn empty_source_yields_empty_string() {
        assert_eq!(reduce(Vec::<&str>::new(), Join::with_separator(",")), "");
    }
}
