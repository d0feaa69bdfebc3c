use crate::{
    ast::{Token, TokenKind, Tree},
    error::RuntimeError,
    interpreter::evaluator::{
        core::{EvalResult, Interpreter},
        utils::{expect_children, malformed},
    },
    turtle::Actuator,
    util::num::{f64_to_color_checked, f64_to_count_checked},
};

impl<A: Actuator> Interpreter<A> {
    /// Executes `forward`, `right`, `left` or `face` with its single
    /// operand.
    ///
    /// `face` turns to an absolute heading measured counterclockwise from
    /// east.
    pub(super) fn eval_move(&mut self, node: &Tree<Token>) -> EvalResult<()> {
        let [operand] = expect_children::<1>(node)?;
        let value = self.eval_expression(operand)?;
        tracing::trace!(command = node.value().text(), value, "move");

        match node.value().text() {
            "forward" => self.act(|actuator| actuator.forward(value)),
            "right" => self.act(|actuator| actuator.turn_right(value)),
            "left" => self.act(|actuator| actuator.turn_left(value)),
            "face" => self.act(|actuator| actuator.set_heading(value)),
            other => {
                return Err(RuntimeError::UnsupportedOperation { operation: other.to_string() });
            },
        }
        Ok(())
    }

    /// Executes `color(red green blue)`.
    ///
    /// All three components are evaluated before any is checked. Fractional
    /// components are truncated.
    ///
    /// # Errors
    /// `Range` if a component lies outside `0..=255`.
    pub(super) fn eval_color(&mut self, node: &Tree<Token>) -> EvalResult<()> {
        let [red, green, blue] = expect_children::<3>(node)?;
        let red = self.eval_expression(red)?;
        let green = self.eval_expression(green)?;
        let blue = self.eval_expression(blue)?;

        let (red, green, blue) = (f64_to_color_checked(red)?,
                                  f64_to_color_checked(green)?,
                                  f64_to_color_checked(blue)?);
        tracing::trace!(red, green, blue, "color");
        self.act(|actuator| actuator.set_color(red, green, blue));
        Ok(())
    }

    /// Executes `jump(x y)`.
    pub(super) fn eval_jump(&mut self, node: &Tree<Token>) -> EvalResult<()> {
        let [x, y] = expect_children::<2>(node)?;
        let x = self.eval_expression(x)?;
        let y = self.eval_expression(y)?;
        tracing::trace!(x, y, "jump");
        self.act(|actuator| actuator.jump_to(x, y));
        Ok(())
    }

    /// Executes `set(name value)`.
    ///
    /// The value is evaluated before the target frame is chosen.
    pub(super) fn eval_set(&mut self, node: &Tree<Token>) -> EvalResult<()> {
        let [target, value] = expect_children::<2>(node)?;
        if target.value().kind() != TokenKind::Name {
            return Err(RuntimeError::Type { details: format!("cannot assign to '{}'", target.value()) });
        }
        let value = self.eval_expression(value)?;
        self.store(target.value().text(), value);
        Ok(())
    }

    /// Stores `value` into the current frame if it defines `name`, else into
    /// the global frame if that defines it, else as a new name in the
    /// current frame.
    pub(super) fn store(&mut self, name: &str, value: f64) {
        if let Some(slot) = self.frames.last_mut().and_then(|frame| frame.get_mut(name)) {
            *slot = value;
            return;
        }
        if let Some(slot) = self.frames.first_mut().and_then(|frame| frame.get_mut(name)) {
            *slot = value;
            return;
        }
        if let Some(frame) = self.frames.last_mut() {
            frame.insert(name.to_string(), value);
        }
    }

    /// Executes `repeat(count block)`.
    ///
    /// A count of zero or less runs the block zero times.
    ///
    /// # Errors
    /// `Type` if the count is not an integer.
    pub(super) fn eval_repeat(&mut self, node: &Tree<Token>) -> EvalResult<()> {
        let [count, body] = expect_children::<2>(node)?;
        let count = f64_to_count_checked(self.eval_expression(count)?)?;

        for _ in 0..count {
            if !self.control.is_running() {
                break;
            }
            self.interpret(body)?;
        }
        Ok(())
    }

    /// Executes `while(condition block)`, re-evaluating the condition before
    /// every pass.
    pub(super) fn eval_while(&mut self, node: &Tree<Token>) -> EvalResult<()> {
        let [condition, body] = expect_children::<2>(node)?;
        while self.control.is_running() && self.eval_condition(condition)? {
            self.interpret(body)?;
        }
        Ok(())
    }

    /// Executes `if(condition then)` or `if(condition then otherwise)`.
    pub(super) fn eval_if(&mut self, node: &Tree<Token>) -> EvalResult<()> {
        let (condition, then_branch, else_branch) = match node.children().as_slice() {
            [condition, then_branch] => (condition, then_branch, None),
            [condition, then_branch, else_branch] => (condition, then_branch, Some(else_branch)),
            children => return Err(malformed(node, "2 or 3", children.len())),
        };

        if self.eval_condition(condition)? {
            self.interpret(then_branch)
        } else if let Some(else_branch) = else_branch {
            self.interpret(else_branch)
        } else {
            Ok(())
        }
    }
}
