//! Word Windows
//!
//! This example counts word bigrams in a block of text.
//!
//! Key concepts:
//! - Splitting lines into words with `mapcat`
//! - Sliding windows with `windowed`
//! - Folding into a custom accumulator
//! - Reusing one pipeline for several inputs
//!
//! Run with: cargo run --example word_windows

use foldline::compose::TransducerExt;
use foldline::reducers::fold;
use foldline::transducers::{drop, filter, map, mapcat, windowed};
use foldline::BuildError;
use std::collections::HashMap;

const TEXT: &str = "\
the quick brown fox jumps over the lazy dog
the quick red fox naps
over the lazy dog the quick brown fox runs";

fn main() -> Result<(), BuildError> {
    println!("=== Word Windows ===\n");

    // Lines in, lowercase words out, then every adjacent pair. The first
    // window is the padded [w, w] pair, so it is dropped.
    let bigrams = mapcat(|line: &str| {
        line.split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
    })
    .then(filter(|word: &String| word.len() > 1))
    .then(windowed(2)?)
    .then(drop(1))
    .then(map(|pair: Vec<String>| pair.join(" ")));

    let counts = foldline::transduce(
        TEXT.lines(),
        &bigrams,
        fold(HashMap::new(), |mut counts: HashMap<String, usize>, pair: String| {
            *counts.entry(pair).or_default() += 1;
            counts
        }),
    );

    let mut ranked: Vec<_> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    println!("Top bigrams:");
    for (pair, count) in ranked.iter().take(5) {
        println!("  {count:>2}  {pair}");
    }

    // The same pipeline again; its window starts empty.
    let single = foldline::transduce(
        ["hello big world"],
        &bigrams,
        foldline::reducers::Append::new(),
    );
    println!("\nSingle line: {single:?}");

    Ok(())
}
