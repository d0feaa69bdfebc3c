/// Numeric conversion helpers.
///
/// This module provides checked conversions from the interpreter's `f64`
/// values to the integer types commands need: repeat counts must be
/// integral, and color components must lie within `0..=255`.
///
/// All functions return a `Result`, which is `Ok` if the conversion is valid,
/// or a runtime error describing why it is not.
pub mod num;

/// Opt-in diagnostic logging.
pub mod logging;

/// Stack growth for the recursive parts of parsing, evaluation and tree
/// handling.
pub mod stack;
