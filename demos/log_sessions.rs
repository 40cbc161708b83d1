//! Log Sessions
//!
//! This example groups a request log into per-user sessions.
//!
//! Key concepts:
//! - Fallible sources with `try_transduce`
//! - Grouping consecutive records with `partition_by`
//! - Early termination with `take`
//! - A pipeline assembled at runtime from optional stages
//!
//! Run with: cargo run --example log_sessions

use foldline::compose::{Pipeline, TransducerExt};
use foldline::core::{boxed_reducer, BoxedReducer, Transducer};
use foldline::reducers::Append;
use foldline::transducers::{dedupe, filter, map, partition_by, take};
use serde::Serialize;
use thiserror::Error;

const LOG: &str = "\
alice GET /home
alice GET /home
alice POST /cart
bob GET /home
bob GET /search
carol GET /home
carol GET /home
alice GET /checkout
dave GET /home";

#[derive(Debug, Clone, PartialEq, Eq)]
struct Request {
    user: String,
    method: String,
    path: String,
}

#[derive(Debug, Error)]
#[error("malformed log line {line}")]
struct ParseError {
    line: usize,
}

#[derive(Debug, Serialize)]
struct Session {
    user: String,
    requests: usize,
    paths: Vec<String>,
}

fn parse(line_no: usize, line: &str) -> Result<Request, ParseError> {
    let mut parts = line.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(user), Some(method), Some(path)) => Ok(Request {
            user: user.to_string(),
            method: method.to_string(),
            path: path.to_string(),
        }),
        _ => Err(ParseError { line: line_no + 1 }),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Log Sessions ===\n");

    // Reloads of the same page are collapsed before grouping.
    let sessions = dedupe()
        .then(partition_by(|r: &Request| r.user.clone()))
        .then(map(|group: Vec<Request>| Session {
            user: group[0].user.clone(),
            requests: group.len(),
            paths: group.into_iter().map(|r| r.path).collect(),
        }))
        .then(take(3));

    let records = LOG.lines().enumerate().map(|(i, line)| parse(i, line));
    let first_three = foldline::try_transduce(records, &sessions, Append::new())?;

    println!("First three sessions:");
    for session in &first_three {
        println!("  {}", serde_json::to_string(session)?);
    }

    // A malformed line aborts the run with its error.
    let broken = "alice GET /home\nbob\ncarol GET /home";
    let records = broken.lines().enumerate().map(|(i, line)| parse(i, line));
    match foldline::try_transduce(records, &sessions, Append::new()) {
        Ok(_) => println!("\nunexpected success"),
        Err(err) => println!("\nBroken log: {err}"),
    }

    // Stages chosen at runtime share one boxed pipeline type.
    type Sink = BoxedReducer<'static, Request, Vec<Request>, Vec<Request>>;
    let only_reads = true;

    let mut pipeline: Pipeline<Sink> = Pipeline::new();
    if only_reads {
        pipeline.push(filter(|r: &Request| r.method == "GET").boxed());
    }
    pipeline.push(dedupe::<Request>().boxed());

    let records = LOG
        .lines()
        .enumerate()
        .map(|(i, line)| parse(i, line))
        .collect::<Result<Vec<_>, _>>()?;
    let reads = foldline::reduce(records, pipeline.apply(boxed_reducer(Append::new())));

    println!("\n{} stage(s), {} requests kept", pipeline.len(), reads.len());

    Ok(())
}
