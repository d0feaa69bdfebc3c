use std::{
    any::Any,
    sync::Arc,
    thread::{self, JoinHandle},
};

use crate::{
    ast::{Token, Tree},
    error::LogoError,
    interpreter::{
        control::RunControl,
        evaluator::core::{Interpreter, RunOutcome},
    },
    turtle::Actuator,
};

/// A program running on its own thread.
///
/// The spawning thread keeps the shared [`RunControl`] to pause, resume,
/// slow down or stop the run, and collects the outcome with
/// [`join`](Self::join). The interpreter and its frames live entirely on the
/// worker thread.
///
/// # Example
/// ```
/// use std::sync::Arc;
///
/// use turtle_logo::{
///     interpreter::{
///         control::RunControl, evaluator::core::RunOutcome, parser::core::parse,
///         session::Session,
///     },
///     turtle::{Canvas, Turtle},
/// };
///
/// let program = parse("forward 10\nright 90\nforward 10\n").unwrap();
/// let canvas = Arc::new(Canvas::new(100, 100));
/// let session = Session::spawn(program,
///                              Turtle::new(Arc::clone(&canvas)),
///                              Arc::new(RunControl::default()));
///
/// assert_eq!(session.join().unwrap(), RunOutcome::Completed);
/// assert_eq!(canvas.commands().len(), 2);
/// ```
#[derive(Debug)]
pub struct Session {
    control: Arc<RunControl>,
    handle:  JoinHandle<Result<RunOutcome, LogoError>>,
}

impl Session {
    /// Marks `control` as running and starts interpreting `program` on a new
    /// thread.
    pub fn spawn<A>(program: Tree<Token>, actuator: A, control: Arc<RunControl>) -> Self
        where A: Actuator + Send + 'static
    {
        control.start();
        let worker_control = Arc::clone(&control);
        let handle = thread::spawn(move || {
            let mut interpreter = Interpreter::new(actuator, worker_control);
            interpreter.run(&program).map_err(LogoError::from)
        });
        Self { control, handle }
    }

    /// The control shared with the worker thread.
    #[must_use]
    pub const fn control(&self) -> &Arc<RunControl> {
        &self.control
    }

    /// Whether the worker thread has finished.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the run to end and returns its outcome.
    ///
    /// # Errors
    /// The runtime error that ended the run, or `WorkerPanicked` if the
    /// worker thread panicked.
    pub fn join(self) -> Result<RunOutcome, LogoError> {
        self.handle
            .join()
            .map_err(|payload| LogoError::WorkerPanicked(panic_message(payload.as_ref())))?
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload.downcast_ref::<&str>()
           .map(ToString::to_string)
           .or_else(|| payload.downcast_ref::<String>().cloned())
           .unwrap_or_else(|| "unknown panic".to_string())
}
