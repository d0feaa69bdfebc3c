use crate::{
    ast::{Token, Tree},
    error::RuntimeError,
    interpreter::evaluator::{
        core::{EvalResult, Interpreter},
        utils::{ADD_OPERATORS, MULTIPLY_OPERATORS, expect_children, is_binary},
    },
    turtle::Actuator,
    util::stack::ensure_sufficient_stack,
};

impl<A: Actuator> Interpreter<A> {
    /// Evaluates an expression node.
    ///
    /// The evaluator follows the parser's layering so that each node is
    /// read at the level that produced it. A two-child `+`/`-` node is an
    /// addition or subtraction: its left operand is another expression when
    /// it is itself a two-child `+`/`-` node, and a term otherwise; its right
    /// operand is an unsigned term. Anything else is a term.
    ///
    /// Division by zero yields an infinity or NaN.
    ///
    /// # Example
    /// ```
    /// use std::sync::Arc;
    ///
    /// use turtle_logo::{
    ///     interpreter::{control::RunControl, evaluator::core::Interpreter, parser::core::Parser},
    ///     turtle::{Canvas, Turtle},
    /// };
    ///
    /// let mut parser = Parser::new("12 * 5 - 3 * 4 / 6 + 8");
    /// parser.parse_expression().unwrap();
    /// let expression = parser.pop().unwrap();
    ///
    /// let turtle = Turtle::new(Arc::new(Canvas::new(100, 100)));
    /// let mut interpreter = Interpreter::new(turtle, Arc::new(RunControl::default()));
    /// assert_eq!(interpreter.eval_expression(&expression), Ok(66.0));
    /// ```
    pub fn eval_expression(&mut self, node: &Tree<Token>) -> EvalResult<f64> {
        ensure_sufficient_stack(|| self.eval_chain(node, &ADD_OPERATORS, Self::eval_term, Self::eval_unsigned_term))
    }

    /// Evaluates a term, whose leftmost factor may be signed.
    pub(super) fn eval_term(&mut self, node: &Tree<Token>) -> EvalResult<f64> {
        self.eval_chain(node, &MULTIPLY_OPERATORS, Self::eval_factor, Self::eval_factor)
    }

    /// Evaluates the right operand of an addition or subtraction.
    pub(super) fn eval_unsigned_term(&mut self, node: &Tree<Token>) -> EvalResult<f64> {
        if !is_binary(node, &MULTIPLY_OPERATORS) {
            return self.eval_term(node);
        }
        self.eval_chain(node, &MULTIPLY_OPERATORS, Self::eval_unsigned_factor, Self::eval_factor)
    }

    /// Folds a left-leaning run of `operators` nodes.
    ///
    /// The leftmost operand is read with `first` and every right operand with
    /// `operand`. The spine is walked with a loop, so chains of any length
    /// evaluate without deepening the call stack.
    fn eval_chain(&mut self,
                  node: &Tree<Token>,
                  operators: &[&str],
                  first: fn(&mut Self, &Tree<Token>) -> EvalResult<f64>,
                  operand: fn(&mut Self, &Tree<Token>) -> EvalResult<f64>)
                  -> EvalResult<f64> {
        let mut pending = Vec::new();
        let mut left = node;
        while is_binary(left, operators) {
            let [inner, right] = expect_children::<2>(left)?;
            pending.push((left.value().text(), right));
            left = inner;
        }

        let mut value = first(self, left)?;
        for (operator, right) in pending.into_iter().rev() {
            let right = operand(self, right)?;
            value = apply(operator, value, right);
        }
        Ok(value)
    }

    /// Evaluates `comparator(left right)`.
    ///
    /// # Errors
    /// `UnsupportedOperation` if the comparator is not one of `<`, `=` or
    /// `>`.
    #[allow(clippy::float_cmp)]
    pub fn eval_condition(&mut self, node: &Tree<Token>) -> EvalResult<bool> {
        let [left, right] = expect_children::<2>(node)?;
        let left = self.eval_expression(left)?;
        let right = self.eval_expression(right)?;

        match node.value().text() {
            ">" => Ok(left > right),
            "<" => Ok(left < right),
            "=" => Ok(left == right),
            other => Err(RuntimeError::UnsupportedOperation { operation: other.to_string() }),
        }
    }
}

fn apply(operator: &str, left: f64, right: f64) -> f64 {
    match operator {
        "+" => left + right,
        "-" => left - right,
        "*" => left * right,
        _ => left / right,
    }
}
