/// The actuator trait the interpreter drives.
pub mod actuator;
/// The shared drawing log.
///
/// Holds the replayable list of line and color commands together with the
/// cursor pose, behind a single lock shared by the interpreter and any
/// renderer.
pub mod canvas;
/// The reference cursor that writes into a canvas.
pub mod cursor;

pub use actuator::Actuator;
pub use canvas::{Canvas, CursorPose, DrawCommand, Point};
pub use cursor::Turtle;
