/// Lexical tokens.
///
/// Declares `Token` and `TokenKind`, the atomic units produced by the scanner
/// and stored as node values in the abstract syntax tree.
pub mod token;
/// Generic ordered n-ary trees.
///
/// Declares `Tree<V>`, the owned tree structure the parser assembles and the
/// interpreter walks. An AST is a `Tree<Token>`: every node carries the token
/// that names its operator, keyword or operand, and its children are the
/// operands or substatements in source order.
///
/// # Responsibilities
/// - Owns node values and child subtrees exclusively.
/// - Provides structural equality for comparing parse results.
/// - Renders and reads the compact `a(b c(d))` description form.
pub mod tree;

pub use token::{Token, TokenKind};
pub use tree::Tree;
