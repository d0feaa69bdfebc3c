use crate::{
    ast::{Token, Tree},
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

/// Returns the children of `node`, checking that there are exactly `N`.
///
/// # Errors
/// `MalformedNode` naming the node's text when the count differs.
///
/// # Example
/// ```
/// use turtle_logo::{
///     ast::{Token, Tree},
///     interpreter::evaluator::utils::expect_children,
/// };
///
/// let node = Tree::with_children(Token::keyword("jump"),
///                                [Tree::new(Token::number("1")), Tree::new(Token::number("2"))]);
/// let [x, y] = expect_children::<2>(&node).unwrap();
/// assert_eq!((x.value().text(), y.value().text()), ("1", "2"));
///
/// assert!(expect_children::<1>(&node).is_err());
/// ```
pub fn expect_children<const N: usize>(node: &Tree<Token>) -> EvalResult<[&Tree<Token>; N]> {
    let children: Vec<&Tree<Token>> = node.children().collect();
    <[&Tree<Token>; N]>::try_from(children).map_err(|found| malformed(node, N.to_string(), found.len()))
}

/// Builds the error for a node with `found` children where `expected` were
/// required.
pub fn malformed(node: &Tree<Token>, expected: impl Into<String>, found: usize) -> RuntimeError {
    RuntimeError::MalformedNode { command: node.value().text().to_string(),
                                  expected: expected.into(),
                                  found }
}

/// Whether `node` is a two-operand node for one of `operators`.
pub fn is_binary(node: &Tree<Token>, operators: &[&str]) -> bool {
    node.child_count() == 2 && operators.contains(&node.value().text())
}

/// Whether `node` is a single-operand sign node.
pub fn is_sign(node: &Tree<Token>) -> bool {
    node.child_count() == 1 && matches!(node.value().text(), "+" | "-")
}

/// Whether the text of `node` is one of `operators`, whatever its shape.
pub fn is_operator(node: &Tree<Token>, operators: &[&str]) -> bool {
    operators.contains(&node.value().text())
}

pub const ADD_OPERATORS: [&str; 2] = ["+", "-"];
pub const MULTIPLY_OPERATORS: [&str; 2] = ["*", "/"];
