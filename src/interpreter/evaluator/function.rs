use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{Token, Tree},
    error::RuntimeError,
    interpreter::evaluator::{
        core::{EvalResult, Interpreter},
        utils::expect_children,
    },
    turtle::Actuator,
};

/// The deepest chain of procedure calls a program may build.
pub const MAX_CALL_DEPTH: usize = 5_000;

/// A procedure registered from a `def(header(name list(...)) block(...))`
/// node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Procedure {
    /// Parameter names in declaration order.
    pub parameters: Vec<String>,
    /// The procedure's block.
    pub body:       Tree<Token>,
}

impl Procedure {
    /// Reads a procedure definition node.
    ///
    /// Returns the procedure's name together with the procedure.
    ///
    /// # Errors
    /// `MalformedNode` if the node does not have the `def`, `header` and
    /// parameter `list` shape.
    pub fn from_definition(definition: &Tree<Token>) -> EvalResult<(String, Self)> {
        let [header, body] = expect_children::<2>(definition)?;
        let [name, parameters] = expect_children::<2>(header)?;
        let parameters = parameters.children()
                                   .map(|parameter| parameter.value().text().to_string())
                                   .collect();

        Ok((name.value().text().to_string(), Self { parameters,
                                                    body: body.clone() }))
    }
}

impl<A: Actuator> Interpreter<A> {
    /// Registers every definition under `definitions`, replacing any earlier
    /// definition of the same name.
    ///
    /// All procedures are known before the main block starts, so a procedure
    /// may call one defined after it, including itself.
    pub(super) fn register_procedures(&mut self, definitions: &Tree<Token>) -> EvalResult<()> {
        for definition in definitions.children() {
            let (name, procedure) = Procedure::from_definition(definition)?;
            tracing::debug!(procedure = %name, parameters = procedure.parameters.len(), "registered procedure");
            self.procedures.insert(name, Rc::new(procedure));
        }
        Ok(())
    }

    /// Executes `do(name list(argument...))`.
    ///
    /// Every argument is evaluated in the caller's scope before the callee's
    /// frame is pushed. The frame is popped when the body returns, whether or
    /// not it succeeded.
    ///
    /// # Errors
    /// - `UndefinedProcedure` if no procedure is called `name`.
    /// - `ArityMismatch` if the argument and parameter counts differ.
    /// - `RecursionLimit` if [`MAX_CALL_DEPTH`] calls are already active.
    /// - Any error raised by an argument or by the body.
    pub(super) fn call_procedure(&mut self, node: &Tree<Token>) -> EvalResult<()> {
        let [name, arguments] = expect_children::<2>(node)?;
        let name = name.value().text();
        let procedure = self.procedures
                            .get(name)
                            .map(Rc::clone)
                            .ok_or_else(|| RuntimeError::UndefinedProcedure { name: name.to_string() })?;

        if procedure.parameters.len() != arguments.child_count() {
            return Err(RuntimeError::ArityMismatch { name:     name.to_string(),
                                                     expected: procedure.parameters.len(),
                                                     found:    arguments.child_count(), });
        }

        let mut frame = HashMap::with_capacity(procedure.parameters.len());
        for (parameter, argument) in procedure.parameters.iter().zip(arguments.children()) {
            let value = self.eval_expression(argument)?;
            frame.insert(parameter.clone(), value);
        }

        // the global frame is not a call
        if self.frames.len() > MAX_CALL_DEPTH {
            tracing::debug!(procedure = name, depth = MAX_CALL_DEPTH, "call depth exceeded");
            return Err(RuntimeError::RecursionLimit { name:  name.to_string(),
                                                      depth: MAX_CALL_DEPTH, });
        }

        tracing::trace!(procedure = name, depth = self.frames.len(), "call");
        self.frames.push(frame);
        let result = self.interpret(&procedure.body);
        self.frames.pop();
        result
    }
}
