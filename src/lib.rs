//! # turtle-logo
//!
//! turtle-logo is a scanner, parser and tree-walking interpreter for a small
//! turtle-graphics dialect of Logo, written in Rust.
//! Scripts move a cursor around a canvas with `forward`, `right`, `jump` and
//! friends, using variables, loops, conditionals and recursive procedures.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::sync::Arc;

use crate::{
    ast::{Token, Tree},
    error::{LogoError, ParseError},
    interpreter::{
        control::RunControl,
        evaluator::core::{Interpreter, RunOutcome},
    },
    turtle::Actuator,
};

/// Defines the structure of parsed code.
///
/// This module declares `Token`, the unit the scanner produces, and the
/// generic `Tree` the parser assembles tokens into. A program is a
/// `Tree<Token>` whose node values name commands, operators and operands.
///
/// # Responsibilities
/// - Defines token kinds and text-based token equality.
/// - Provides an owned n-ary tree with structural equality.
/// - Reads and writes the compact `a(b c)` tree description.
pub mod ast;
/// Provides unified error types for scanning, parsing and running.
///
/// This module defines all errors that can be raised while turning source
/// into a tree, while mutating trees, or while running a program. Every error
/// carries enough detail to be shown to the script's author as is.
///
/// # Responsibilities
/// - Defines error enums for each failure mode (scanner, parser, tree,
///   runtime).
/// - Attaches line numbers and parser stack snapshots where available.
/// - Unifies everything under `LogoError` for the entry points.
pub mod error;
/// Orchestrates scanning, parsing and evaluation.
///
/// This module ties together the scanner, the parser, the evaluator and the
/// run control that lets another thread pause or stop a program.
///
/// # Responsibilities
/// - Coordinates all core components: scanner, parser and evaluator.
/// - Provides run control and background sessions.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Canvas size and pacing defaults.
pub mod settings;
/// The actuator interface and its reference implementation.
///
/// The interpreter sends every movement, pen and color command through the
/// `Actuator` trait. `Turtle` implements it on top of a shared `Canvas` that
/// records a replayable drawing log.
pub mod turtle;
/// General utilities for numeric conversion and logging.
///
/// # Responsibilities
/// - Convert evaluated `f64` values to repeat counts and color components
///   without silent loss.
/// - Install the opt-in `tracing` subscriber.
pub mod util;

/// Parses `source` into a program tree.
///
/// # Errors
/// Returns the first lexical or syntax error.
///
/// # Examples
/// ```
/// use turtle_logo::parse;
///
/// let tree = parse("red\nforward -a + b\n").unwrap();
/// assert_eq!(tree.to_string(), "program(block(color(255 0 0) forward(+(-(a) b))) list)");
///
/// let err = parse("forward 10").unwrap_err();
/// assert!(err.to_string().starts_with("Error on line 1:"));
/// ```
pub fn parse(source: &str) -> Result<Tree<Token>, ParseError> {
    interpreter::parser::core::parse(source)
}

/// Parses and runs `source` on the current thread.
///
/// The program drives `actuator` and is paced and cancelled through
/// `control`. The run ends early, without an error, once `control` is
/// stopped.
///
/// # Errors
/// Returns a parse error if the script is malformed, or the first runtime
/// error raised while running it.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use turtle_logo::{
///     interpreter::{control::RunControl, evaluator::core::RunOutcome},
///     run,
///     turtle::{Canvas, Turtle},
/// };
///
/// let canvas = Arc::new(Canvas::new(600, 600));
/// let control = Arc::new(RunControl::default());
///
/// let source = "do square 50\ndef square side {\nrepeat 4 {\nforward side\nright 90\n}\n}\n";
/// let outcome = run(source, Turtle::new(Arc::clone(&canvas)), &control);
/// assert_eq!(outcome.unwrap(), RunOutcome::Completed);
/// assert_eq!(canvas.commands().len(), 4);
///
/// // 'x' is not defined
/// let source = "forward x\n";
/// assert!(run(source, Turtle::new(Arc::clone(&canvas)), &control).is_err());
/// ```
#[tracing::instrument(level = "debug", skip_all)]
pub fn run<A: Actuator>(source: &str,
                        actuator: A,
                        control: &Arc<RunControl>)
                        -> Result<RunOutcome, LogoError> {
    let program = parse(source)?;
    let mut interpreter = Interpreter::new(actuator, Arc::clone(control));
    Ok(interpreter.run(&program)?)
}
