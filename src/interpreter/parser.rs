/// The parser instance, its keyword tables and the program entry point.
///
/// Owns the scanner and the assembly stack every other parser module pushes
/// onto and combines.
pub mod core;

/// Additive, multiplicative and comparison rules.
///
/// Implements the left-associative folds for `+ - * /` and the
/// `<expression> <comparator> <expression>` condition.
pub mod binary;

/// Signed and unsigned factors.
///
/// Handles a leading `+`/`-` sign and the primaries it may precede: names,
/// numbers, `getX`, `getY` and parenthesized expressions.
pub mod unary;

/// Blocks and procedure definitions.
pub mod block;

/// Statement rules.
///
/// Recognizes every command form: moves, colors, pen and home commands,
/// `jump`, `set`, `repeat`, `while`, `if` and `do`.
pub mod statement;

/// Token matching and tree assembly helpers shared by all rules.
pub mod utils;
