/// Core evaluation logic and interpreter state.
///
/// Contains the `Interpreter`, its variable frames and procedure registry,
/// the command dispatcher and the run outcome.
pub mod core;

/// Statement execution.
///
/// Carries out moves, pen and color changes, jumps, assignments and the
/// `repeat`, `while` and `if` control structures.
pub mod statement;

/// Binary operator evaluation.
///
/// Evaluates additive and multiplicative nodes layer by layer, and compares
/// expressions for conditions.
pub mod binary;

/// Sign and primary evaluation.
///
/// Resolves signs, numbers, variables and the `getX`/`getY` position
/// queries.
pub mod unary;

/// Procedure registration and calls.
pub mod function;

/// Utility functions for evaluation.
///
/// Provides node shape checks shared by the other evaluation modules.
pub mod utils;
