use std::{collections::HashMap, rc::Rc, sync::Arc};

use crate::{
    ast::{Token, Tree},
    error::RuntimeError,
    interpreter::{
        control::RunControl,
        evaluator::{function::Procedure, utils::expect_children},
    },
    turtle::Actuator,
    util::stack::ensure_sufficient_stack,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How a run that raised no error ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every statement was executed.
    Completed,
    /// The run control was stopped before the program finished.
    Stopped,
}

/// A tree-walking interpreter driving an [`Actuator`].
///
/// Holds the runtime state of one program: a stack of variable frames whose
/// bottom entry is the global frame, and the procedures the program defines.
/// [`run`](Self::run) resets this state, so one interpreter can run several
/// programs in turn.
///
/// ## Scoping
///
/// A name is looked up in the current frame first and in the global frame
/// second; frames of callers in between are never visible. `set` updates the
/// current frame if it defines the name, otherwise the global frame if that
/// defines it, and otherwise creates the name in the current frame.
///
/// ## Cancellation
///
/// Before every node the interpreter checks its [`RunControl`]. Once the run
/// is stopped every remaining node is skipped, loops exit, and `run` reports
/// [`RunOutcome::Stopped`]. After every actuator call it waits on
/// [`RunControl::pace`].
///
/// # Example
/// ```
/// use std::sync::Arc;
///
/// use turtle_logo::{
///     interpreter::{
///         control::RunControl,
///         evaluator::core::{Interpreter, RunOutcome},
///         parser::core::parse,
///     },
///     turtle::{Canvas, Turtle},
/// };
///
/// let program = parse("set side 40\nrepeat 4 {\nforward side\nright 90\n}\n").unwrap();
/// let canvas = Arc::new(Canvas::new(600, 600));
/// let mut interpreter = Interpreter::new(Turtle::new(Arc::clone(&canvas)),
///                                        Arc::new(RunControl::default()));
///
/// assert_eq!(interpreter.run(&program), Ok(RunOutcome::Completed));
/// assert_eq!(interpreter.variable("side"), Some(40.0));
/// assert_eq!(canvas.commands().len(), 4);
/// ```
pub struct Interpreter<A: Actuator> {
    pub(super) actuator:   A,
    pub(super) control:    Arc<RunControl>,
    /// Variable frames; the first entry is the global frame and is never
    /// popped.
    pub(super) frames:     Vec<HashMap<String, f64>>,
    /// Procedures of the running program, by name.
    pub(super) procedures: HashMap<String, Rc<Procedure>>,
}

impl<A: Actuator> Interpreter<A> {
    /// Creates an interpreter with only an empty global frame.
    pub fn new(actuator: A, control: Arc<RunControl>) -> Self {
        Self { actuator,
               control,
               frames: vec![HashMap::new()],
               procedures: HashMap::new() }
    }

    /// Sends the actuator home and forgets every variable and procedure.
    pub fn initialize(&mut self) {
        self.actuator.home();
        self.frames.clear();
        self.frames.push(HashMap::new());
        self.procedures.clear();
    }

    /// Initializes, then interprets `program`.
    ///
    /// # Errors
    /// The first runtime error raised; the remaining statements are not run.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run(&mut self, program: &Tree<Token>) -> EvalResult<RunOutcome> {
        self.initialize();
        self.interpret(program)?;

        let outcome = if self.control.is_running() {
            RunOutcome::Completed
        } else {
            RunOutcome::Stopped
        };
        tracing::debug!(?outcome, "run finished");
        Ok(outcome)
    }

    /// Executes one node of a program tree.
    ///
    /// Dispatches on the node's text:
    /// - `program` registers every procedure, then runs the main block.
    /// - `block` runs its children in order.
    /// - `forward`, `right`, `left`, `face`, `penup`, `pendown`, `home`,
    ///   `jump` and `color` drive the actuator.
    /// - `set`, `repeat`, `while`, `if` and `do` are handled by the statement
    ///   and procedure modules.
    ///
    /// Does nothing once the run control is stopped.
    ///
    /// # Errors
    /// `UnsupportedOperation` for any other node text, `MalformedNode` for a
    /// node with the wrong number of children, and every error raised while
    /// evaluating operands or running nested statements.
    pub fn interpret(&mut self, node: &Tree<Token>) -> EvalResult<()> {
        if !self.control.is_running() {
            return Ok(());
        }

        ensure_sufficient_stack(|| {
            match node.value().text() {
                "program" => {
                    let [commands, procedures] = expect_children::<2>(node)?;
                    self.register_procedures(procedures)?;
                    self.interpret(commands)
                },
                "block" => {
                    for child in node.children() {
                        self.interpret(child)?;
                    }
                    Ok(())
                },
                "forward" | "right" | "left" | "face" => self.eval_move(node),
                "penup" => {
                    expect_children::<0>(node)?;
                    self.act(A::pen_up);
                    Ok(())
                },
                "pendown" => {
                    expect_children::<0>(node)?;
                    self.act(A::pen_down);
                    Ok(())
                },
                "home" => {
                    expect_children::<0>(node)?;
                    self.act(A::home);
                    Ok(())
                },
                "color" => self.eval_color(node),
                "jump" => self.eval_jump(node),
                "set" => self.eval_set(node),
                "repeat" => self.eval_repeat(node),
                "while" => self.eval_while(node),
                "if" => self.eval_if(node),
                "do" => self.call_procedure(node),
                other => Err(RuntimeError::UnsupportedOperation { operation: other.to_string() }),
            }
        })
    }

    /// Applies one actuator primitive, then waits on the run control.
    pub(super) fn act(&mut self, action: impl FnOnce(&mut A)) {
        action(&mut self.actuator);
        self.control.pace();
    }

    /// The value of `name` in the current frame, else in the global frame.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<f64> {
        self.frames
            .last()
            .and_then(|frame| frame.get(name))
            .or_else(|| self.frames.first().and_then(|frame| frame.get(name)))
            .copied()
    }

    /// The value of the global variable `name`.
    #[must_use]
    pub fn global(&self, name: &str) -> Option<f64> {
        self.frames.first().and_then(|frame| frame.get(name)).copied()
    }

    /// The number of frames, including the global frame.
    #[must_use]
    pub fn frame_depth(&self) -> usize {
        self.frames.len()
    }

    /// Whether the running program defines a procedure called `name`.
    #[must_use]
    pub fn has_procedure(&self, name: &str) -> bool {
        self.procedures.contains_key(name)
    }

    pub const fn actuator(&self) -> &A {
        &self.actuator
    }

    pub const fn control(&self) -> &Arc<RunControl> {
        &self.control
    }

    /// Consumes the interpreter and returns its actuator.
    pub fn into_actuator(self) -> A {
        self.actuator
    }
}
