use crate::{
    ast::{Token, TokenKind, Tree},
    error::RuntimeError,
    interpreter::evaluator::{
        core::{EvalResult, Interpreter},
        utils::{ADD_OPERATORS, MULTIPLY_OPERATORS, expect_children, is_binary, is_operator, is_sign, malformed},
    },
    turtle::Actuator,
};

impl<A: Actuator> Interpreter<A> {
    /// Evaluates a factor: a single-child `+`/`-` sign node applied to a
    /// primary, or a bare primary.
    pub(super) fn eval_factor(&mut self, node: &Tree<Token>) -> EvalResult<f64> {
        if !is_sign(node) {
            return self.eval_unsigned_factor(node);
        }
        let [operand] = expect_children::<1>(node)?;
        let value = self.eval_unsigned_factor(operand)?;
        Ok(if node.value().text() == "-" { -value } else { value })
    }

    /// Evaluates a primary.
    ///
    /// `getX` and `getY` read the actuator's position, names read variables
    /// and numbers are read as `f64`. A well-formed arithmetic node, which
    /// the parser only leaves here for a parenthesized expression, is
    /// evaluated as a whole expression.
    ///
    /// # Errors
    /// - `UndefinedVariable` for a name that is neither local nor global.
    /// - `Type` for a number the float parser rejects.
    /// - `MalformedNode` for an operator node with the wrong child count.
    /// - `UnsupportedOperation` for any other node.
    pub(super) fn eval_unsigned_factor(&mut self, node: &Tree<Token>) -> EvalResult<f64> {
        let token = node.value();
        match (token.kind(), token.text()) {
            (_, "getX") => return Ok(self.actuator.current_x()),
            (_, "getY") => return Ok(self.actuator.current_y()),
            (TokenKind::Name, name) => return self.fetch(name),
            (TokenKind::Number, text) => {
                return token.number_value()
                            .ok_or_else(|| RuntimeError::Type { details: format!("'{text}' is not a readable number") });
            },
            _ => {},
        }

        if is_sign(node) || is_binary(node, &ADD_OPERATORS) || is_binary(node, &MULTIPLY_OPERATORS) {
            return self.eval_expression(node);
        }
        if is_operator(node, &ADD_OPERATORS) {
            return Err(malformed(node, "1 or 2", node.child_count()));
        }
        if is_operator(node, &MULTIPLY_OPERATORS) {
            return Err(malformed(node, "2", node.child_count()));
        }
        Err(RuntimeError::UnsupportedOperation { operation: token.text().to_string() })
    }

    /// Reads `name` from the current frame, else from the global frame.
    ///
    /// # Errors
    /// `UndefinedVariable` if neither frame defines it.
    pub(super) fn fetch(&self, name: &str) -> EvalResult<f64> {
        self.variable(name)
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string() })
    }
}
